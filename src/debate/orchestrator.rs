//! The debate state machine.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::debate::transcript::{DebateTranscript, DebateTurn};
use crate::llm::{ChatMessage, LanguageModel, ProviderChain};
use crate::moderation::{moderator_prompt, ModeratorAnalysis};
use crate::persona::{Persona, PersonaCore, PersonaStore};
use crate::utilities::errors::CopyError;

/// Stance suffix appended to the skeptic's persona directive.
pub const SKEPTIC_STANCE: &str = "STANCE: Skeptical. Look for flaws.";
/// Stance suffix appended to the believer's persona directive.
pub const BELIEVER_STANCE: &str = "STANCE: Optimistic. Look for opportunity.";

/// Debate progression. Transitions are forward-only; a run that reaches
/// `Complete` cannot be restarted in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DebateStage {
    Idle,
    SkepticTurn,
    BelieverTurn,
    ModeratorTurn,
    Complete,
}

impl std::fmt::Display for DebateStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DebateStage::Idle => "idle",
            DebateStage::SkepticTurn => "skeptic_turn",
            DebateStage::BelieverTurn => "believer_turn",
            DebateStage::ModeratorTurn => "moderator_turn",
            DebateStage::Complete => "complete",
        };
        write!(f, "{}", name)
    }
}

/// Terminal output of a debate run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebateOutcome {
    pub transcript: DebateTranscript,
    /// Moderator output, verbatim.
    pub raw_analysis: String,
    /// Parsed verdict, or the raw-text fallback.
    pub analysis: ModeratorAnalysis,
}

/// Build a persona's in-character system directive.
pub fn persona_system_prompt(core: &PersonaCore) -> String {
    format!(
        "You are {}, {} years old, {}.\n\
         Bio: {}\n\
         Values: {}\n\
         Concerns: {}\n\
         Respond in character. Be specific. Keep answers under 140 words.",
        core.name,
        core.age,
        core.occupation,
        core.narrative,
        core.values.join(", "),
        core.concerns.join(", "),
    )
}

/// Runs one skeptic → believer → moderator sequence.
///
/// Consumed by [`DebateOrchestrator::run`]; start a fresh instance for each
/// debate.
pub struct DebateOrchestrator<'a> {
    store: &'a PersonaStore,
    participants: Arc<dyn LanguageModel>,
    analysis: ProviderChain,
    temperature: Option<f64>,
    stage: DebateStage,
}

impl<'a> DebateOrchestrator<'a> {
    /// `participants` speaks for both personas; `analysis` is the ordered
    /// moderator chain (preferred analysis model first, primary model as
    /// fallback).
    pub fn new(
        store: &'a PersonaStore,
        participants: Arc<dyn LanguageModel>,
        analysis: ProviderChain,
    ) -> Self {
        Self {
            store,
            participants,
            analysis,
            temperature: Some(crate::llm::DEFAULT_TEMPERATURE),
            stage: DebateStage::Idle,
        }
    }

    /// Override the participant sampling temperature.
    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Current stage.
    pub fn stage(&self) -> DebateStage {
        self.stage
    }

    /// Run the debate. Validates inputs before any remote call; a transport
    /// failure in a participant turn aborts the run, while moderator
    /// fallback is handled inside the analysis chain.
    pub fn run(
        mut self,
        creative: &str,
        skeptic_uid: &str,
        believer_uid: &str,
    ) -> Result<DebateOutcome, CopyError> {
        if creative.trim().is_empty() {
            return Err(CopyError::validation("creative text is empty"));
        }
        let skeptic = self.resolve(skeptic_uid)?.clone();
        let believer = self.resolve(believer_uid)?.clone();

        self.advance(DebateStage::SkepticTurn);
        let skeptic_system =
            format!("{}\n{}", persona_system_prompt(&skeptic.core), SKEPTIC_STANCE);
        let msg_1 = self.participants.call(
            &[
                ChatMessage::system(skeptic_system),
                ChatMessage::user(format!("Review this creative:\n{}", creative)),
            ],
            self.temperature,
        )?;

        self.advance(DebateStage::BelieverTurn);
        let believer_system =
            format!("{}\n{}", persona_system_prompt(&believer.core), BELIEVER_STANCE);
        let msg_2 = self.participants.call(
            &[
                ChatMessage::system(believer_system),
                ChatMessage::user(format!(
                    "Review this creative:\n{}\n\nThe Skeptic said: {}\nRespond to them.",
                    creative, msg_1
                )),
            ],
            self.temperature,
        )?;

        let transcript = DebateTranscript::new(
            DebateTurn {
                speaker: skeptic.core.name.clone(),
                utterance: msg_1,
            },
            DebateTurn {
                speaker: believer.core.name.clone(),
                utterance: msg_2,
            },
        );

        self.advance(DebateStage::ModeratorTurn);
        let prompt = moderator_prompt(&transcript.to_prompt_text(), creative);
        let raw_analysis = self.analysis.call(&[ChatMessage::user(prompt)], None)?;

        self.advance(DebateStage::Complete);
        let analysis = ModeratorAnalysis::from_raw(&raw_analysis);
        Ok(DebateOutcome {
            transcript,
            raw_analysis,
            analysis,
        })
    }

    fn resolve(&self, uid: &str) -> Result<&Persona, CopyError> {
        self.store
            .get(uid)
            .ok_or_else(|| CopyError::validation(format!("unknown persona uid '{}'", uid)))
    }

    fn advance(&mut self, next: DebateStage) {
        log::info!("debate stage: {} -> {}", self.stage, next);
        self.stage = next;
    }
}
