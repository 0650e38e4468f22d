//! Length constraints for generated copy.

use serde::{Deserialize, Serialize};

/// A word-count window. `max` of `None` means open-ended above `min`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordRange {
    pub min: u32,
    pub max: Option<u32>,
}

impl WordRange {
    /// Render the constraint sentence for the prompt.
    pub fn directive(&self) -> String {
        match self.max {
            Some(max) => format!("Write between {} and {} words.", self.min, max),
            None => format!("Write at least {} words.", self.min),
        }
    }
}

/// Caller-facing length options. The named tiers carry a tolerance above
/// their advertised upper bound so the model is not penalized for running a
/// sentence long.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LengthChoice {
    /// 100-200 words advertised.
    Short,
    /// 200-500 words advertised.
    Medium,
    /// 500-1500 words advertised.
    Long,
    /// 1500-3000 words advertised.
    ExtraLong,
    /// Open-ended minimum.
    AtLeast(u32),
}

impl LengthChoice {
    /// The enforced word window for this choice.
    pub fn word_range(&self) -> WordRange {
        match self {
            LengthChoice::Short => WordRange { min: 100, max: Some(220) },
            LengthChoice::Medium => WordRange { min: 200, max: Some(550) },
            LengthChoice::Long => WordRange { min: 500, max: Some(1600) },
            LengthChoice::ExtraLong => WordRange { min: 1500, max: Some(3200) },
            LengthChoice::AtLeast(min) => WordRange { min: *min, max: None },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_tiers_carry_tolerance() {
        assert_eq!(LengthChoice::Short.word_range(), WordRange { min: 100, max: Some(220) });
        assert_eq!(LengthChoice::ExtraLong.word_range(), WordRange { min: 1500, max: Some(3200) });
    }

    #[test]
    fn test_directive_rendering() {
        assert_eq!(
            LengthChoice::Medium.word_range().directive(),
            "Write between 200 and 550 words."
        );
        assert_eq!(
            LengthChoice::AtLeast(800).word_range().directive(),
            "Write at least 800 words."
        );
    }
}
