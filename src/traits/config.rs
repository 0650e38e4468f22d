//! Trait rule table: thresholds and writing directives per trait.
//!
//! Loaded once from the embedded JSON resource and immutable thereafter.
//! Hosts may supply their own table through [`TraitConfig::from_json`].

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::traits::scores::TraitName;
use crate::utilities::errors::CopyError;

/// Embedded default rule table.
const EMBEDDED_RULES_JSON: &str = include_str!("trait_rules.json");

/// Thresholds and directives for one trait.
///
/// Thresholds are inclusive bounds on the 1-10 scale; `low_threshold` must
/// stay strictly below `high_threshold`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitRule {
    /// Scores at or above this emit `high_rule`.
    pub high_threshold: u8,
    /// Scores at or below this emit `low_rule`.
    pub low_threshold: u8,
    /// Directive for high-intensity scores.
    pub high_rule: String,
    /// Optional directive for the middle band; nothing is emitted when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mid_rule: Option<String>,
    /// Directive for low-intensity scores.
    pub low_rule: String,
}

/// The full rule table, keyed by trait wire name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TraitConfig {
    rules: HashMap<String, TraitRule>,
}

impl TraitConfig {
    /// Decode a rule table from JSON, validating every threshold pair.
    pub fn from_json(json: &str) -> Result<Self, CopyError> {
        let config: TraitConfig = serde_json::from_str(json)
            .map_err(|e| CopyError::configuration(format!("trait rule table: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// The embedded default table, decoded once per process.
    pub fn embedded() -> &'static TraitConfig {
        static EMBEDDED: OnceLock<TraitConfig> = OnceLock::new();
        EMBEDDED.get_or_init(|| {
            TraitConfig::from_json(EMBEDDED_RULES_JSON)
                .expect("embedded trait rule table is valid")
        })
    }

    /// Look up the rule for a trait. Absent traits are a soft miss: the
    /// derive pass skips them without error.
    pub fn rule(&self, trait_name: TraitName) -> Option<&TraitRule> {
        self.rules.get(trait_name.key())
    }

    /// Number of configured traits.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    fn validate(&self) -> Result<(), CopyError> {
        for (name, rule) in &self.rules {
            if rule.low_threshold >= rule.high_threshold {
                return Err(CopyError::configuration(format!(
                    "trait '{}': low_threshold {} must be below high_threshold {}",
                    name, rule.low_threshold, rule.high_threshold
                )));
            }
        }
        Ok(())
    }
}
