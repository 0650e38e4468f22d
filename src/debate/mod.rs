//! Debate simulator.
//!
//! A fixed three-turn focus-group simulation: a skeptic persona reads the
//! creative, a believer persona answers the skeptic, and a moderator
//! distills the exchange into a structured verdict. Turns are strictly
//! sequential; each later prompt depends on the prior turn's output.

pub mod orchestrator;
pub mod transcript;

pub use orchestrator::{
    persona_system_prompt, DebateOrchestrator, DebateOutcome, DebateStage, BELIEVER_STANCE,
    SKEPTIC_STANCE,
};
pub use transcript::{DebateTranscript, DebateTurn};
