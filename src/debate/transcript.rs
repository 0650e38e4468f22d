//! Debate transcripts.

use serde::{Deserialize, Serialize};

/// One participant utterance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebateTurn {
    pub speaker: String,
    pub utterance: String,
}

/// The two participant turns of a debate, in speaking order: skeptic first,
/// believer second. Built once per run and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebateTranscript {
    turns: [DebateTurn; 2],
}

impl DebateTranscript {
    pub fn new(skeptic: DebateTurn, believer: DebateTurn) -> Self {
        Self {
            turns: [skeptic, believer],
        }
    }

    /// The turns, in order.
    pub fn turns(&self) -> &[DebateTurn] {
        &self.turns
    }

    /// Render for the moderator prompt: one `name: utterance` line per turn.
    pub fn to_prompt_text(&self) -> String {
        self.turns
            .iter()
            .map(|t| format!("{}: {}", t.speaker, t.utterance))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl std::fmt::Display for DebateTranscript {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_prompt_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_text_format() {
        let transcript = DebateTranscript::new(
            DebateTurn {
                speaker: "Margaret".to_string(),
                utterance: "I doubt it.".to_string(),
            },
            DebateTurn {
                speaker: "Dev".to_string(),
                utterance: "I like it.".to_string(),
            },
        );
        assert_eq!(transcript.to_prompt_text(), "Margaret: I doubt it.\nDev: I like it.");
        assert_eq!(transcript.turns().len(), 2);
    }
}
