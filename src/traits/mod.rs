//! Trait rule engine.
//!
//! A "trait" is a named rhetorical dimension (Urgency, Imagery, ...) scored
//! 1-10 per generation request. The engine maps a score vector to two
//! distinct prompt inputs: hard writing directives (consumed verbatim as
//! mandatory constraints) and few-shot exemplar lines (illustrative tone).
//! The two lists feed different prompt sections and are never merged.

pub mod config;
pub mod rules;
pub mod scores;

pub use config::{TraitConfig, TraitRule};
pub use rules::{derive_directives, derive_examples};
pub use scores::{TraitName, TraitScores};
