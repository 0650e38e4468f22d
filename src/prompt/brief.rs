//! Campaign brief: the structured input describing a campaign's core message.

use serde::{Deserialize, Serialize};

use crate::utilities::errors::CopyError;

/// Hook plus supporting details. Either side may be blank, but not both.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignBrief {
    /// The campaign hook: the angle the copy leads with.
    #[serde(default)]
    pub hook: String,
    /// Product / offer details, or a pasted intelligence brief.
    #[serde(default)]
    pub details: String,
}

impl CampaignBrief {
    pub fn new(hook: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            hook: hook.into(),
            details: details.into(),
        }
    }

    /// Fill blank details from a staged insight (the briefing hand-off);
    /// explicitly supplied details always win.
    pub fn with_default_details(mut self, staged: Option<&str>) -> Self {
        if self.details.trim().is_empty() {
            if let Some(details) = staged {
                self.details = details.to_string();
            }
        }
        self
    }

    /// Reject a brief with nothing to write from.
    pub fn validate(&self) -> Result<(), CopyError> {
        if self.hook.trim().is_empty() && self.details.trim().is_empty() {
            return Err(CopyError::validation(
                "campaign brief needs a hook or details",
            ));
        }
        Ok(())
    }
}
