//! # Copysmith
//!
//! A trait-conditioned marketing copy engine paired with a synthetic
//! focus-group debate simulator.
//!
//! The pipeline runs in three stages: a briefing flow condenses market
//! signals into campaign briefs, the prompt compiler turns a brief plus a
//! trait intensity vector into a deterministic generation prompt, and the
//! debate orchestrator stress-tests the generated creative against two
//! persona agents before a moderator distills a structured verdict.
//!
//! Page rendering, scraping, credential handling, and storage backends are
//! collaborators supplied by the host; the crate consumes them through the
//! traits in [`llm`] and [`briefing`].

pub mod briefing;
pub mod debate;
pub mod generation;
pub mod llm;
pub mod moderation;
pub mod persona;
pub mod prompt;
pub mod session;
pub mod traits;
pub mod utilities;

pub use briefing::{parse_briefs, BriefingOutcome, BriefingService, RunMetadataStore};
pub use debate::{DebateOrchestrator, DebateOutcome, DebateStage, DebateTranscript};
pub use generation::{CopyGenerator, GeneratedCopy};
pub use llm::{ChatMessage, LanguageModel, ProviderChain, TransportError};
pub use moderation::{ModeratorAnalysis, ModeratorVerdict};
pub use persona::{Persona, PersonaStore};
pub use prompt::{CompiledPrompt, CopyType, LengthChoice, Market, PromptCompiler};
pub use session::{SessionId, SessionStore};
pub use traits::{TraitConfig, TraitName, TraitScores};
pub use utilities::errors::CopyError;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
