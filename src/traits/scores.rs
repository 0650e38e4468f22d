//! Trait names and per-request score vectors.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Scores live on an inclusive 1-10 integer scale.
pub const MIN_SCORE: u8 = 1;
pub const MAX_SCORE: u8 = 10;

/// The fixed set of rhetorical dimensions, in canonical enumeration order.
///
/// Every derive operation iterates traits in this order, so directive output
/// is stable across runs. Serialized names keep the rule-table spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TraitName {
    Urgency,
    #[serde(rename = "Data_Richness")]
    DataRichness,
    #[serde(rename = "Social_Proof")]
    SocialProof,
    #[serde(rename = "Comparative_Framing")]
    ComparativeFraming,
    Imagery,
    #[serde(rename = "Conversational_Tone")]
    ConversationalTone,
    #[serde(rename = "FOMO")]
    Fomo,
    Repetition,
}

impl TraitName {
    /// All traits in canonical order.
    pub const ALL: [TraitName; 8] = [
        TraitName::Urgency,
        TraitName::DataRichness,
        TraitName::SocialProof,
        TraitName::ComparativeFraming,
        TraitName::Imagery,
        TraitName::ConversationalTone,
        TraitName::Fomo,
        TraitName::Repetition,
    ];

    /// Rule-table key for this trait.
    pub fn key(&self) -> &'static str {
        match self {
            TraitName::Urgency => "Urgency",
            TraitName::DataRichness => "Data_Richness",
            TraitName::SocialProof => "Social_Proof",
            TraitName::ComparativeFraming => "Comparative_Framing",
            TraitName::Imagery => "Imagery",
            TraitName::ConversationalTone => "Conversational_Tone",
            TraitName::Fomo => "FOMO",
            TraitName::Repetition => "Repetition",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            TraitName::Urgency => "Urgency",
            TraitName::DataRichness => "Data Richness",
            TraitName::SocialProof => "Social Proof",
            TraitName::ComparativeFraming => "Comparative Framing",
            TraitName::Imagery => "Imagery",
            TraitName::ConversationalTone => "Conversational Tone",
            TraitName::Fomo => "FOMO",
            TraitName::Repetition => "Repetition",
        }
    }
}

impl std::fmt::Display for TraitName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Per-request trait intensity vector. Created from user input, ephemeral.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitScores {
    scores: HashMap<TraitName, u8>,
}

impl Default for TraitScores {
    /// The portal's slider defaults.
    fn default() -> Self {
        let mut scores = Self::empty();
        scores.set(TraitName::Urgency, 8);
        scores.set(TraitName::DataRichness, 7);
        scores.set(TraitName::SocialProof, 6);
        scores.set(TraitName::ComparativeFraming, 6);
        scores.set(TraitName::Imagery, 7);
        scores.set(TraitName::ConversationalTone, 8);
        scores.set(TraitName::Fomo, 7);
        scores.set(TraitName::Repetition, 5);
        scores
    }
}

impl TraitScores {
    /// An empty score vector; traits without a score contribute nothing.
    pub fn empty() -> Self {
        Self {
            scores: HashMap::new(),
        }
    }

    /// Set a trait's score, clamped into the 1-10 scale.
    pub fn set(&mut self, trait_name: TraitName, score: u8) -> &mut Self {
        self.scores
            .insert(trait_name, score.clamp(MIN_SCORE, MAX_SCORE));
        self
    }

    /// Get a trait's score, if present.
    pub fn get(&self, trait_name: TraitName) -> Option<u8> {
        self.scores.get(&trait_name).copied()
    }

    /// Number of traits with a score.
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Whether no trait has a score.
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}
