//! Prompt compiler.
//!
//! Assembles a deterministic `{system, user}` prompt pair from a campaign
//! brief, a trait score vector, a structural template, a length constraint,
//! and market locale rules. System-level content (voice, locale, compliance,
//! disclaimer) is built separately from per-campaign content so compliance
//! text is never subject to per-request override.

pub mod brief;
pub mod compiler;
pub mod length;
pub mod locale;
pub mod system;
pub mod templates;

pub use brief::CampaignBrief;
pub use compiler::{CompiledPrompt, PromptCompiler};
pub use length::{LengthChoice, WordRange};
pub use locale::Market;
pub use templates::CopyType;
