//! Structural section skeletons per copy type.

use serde::{Deserialize, Serialize};

/// What kind of asset is being written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CopyType {
    Email,
    SalesPage,
}

impl CopyType {
    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            CopyType::Email => "Email",
            CopyType::SalesPage => "Sales Page",
        }
    }

    /// Section skeleton the copy must follow, as prompt text.
    pub fn structure(&self) -> &'static str {
        match self {
            CopyType::Email => {
                "Structure the email as:\n\
                 1. Subject line (under 60 characters)\n\
                 2. Preview text (one sentence)\n\
                 3. Greeting\n\
                 4. Body building on the hook\n\
                 5. A single clear call to action\n\
                 6. Sign-off"
            }
            CopyType::SalesPage => {
                "Structure the sales page as:\n\
                 1. Headline\n\
                 2. Lead that dramatizes the hook\n\
                 3. The problem the reader faces\n\
                 4. The solution, with proof\n\
                 5. The offer and what it includes\n\
                 6. Call to action\n\
                 7. P.S. restating the strongest point"
            }
        }
    }
}

impl std::fmt::Display for CopyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
