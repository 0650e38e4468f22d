//! Error taxonomy for the copy pipeline.
//!
//! Every fallible core operation returns one of these variants; the host
//! renders them. Core code never panics on a failure path.

use thiserror::Error;

use crate::llm::TransportError;

/// Top-level error type for pipeline operations.
#[derive(Debug, Error)]
pub enum CopyError {
    /// A required static resource is missing or malformed (trait rule table,
    /// persona catalog). Halts the affected flow; no partial result is shown.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Input rejected before any remote call (empty creative text, empty
    /// brief, unresolved persona uid).
    #[error("validation error: {0}")]
    Validation(String),

    /// A model call failed at the wire.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Structured output could not be decoded. Non-fatal for moderation,
    /// which degrades to a raw-text view instead of surfacing this.
    #[error("parse error: {0}")]
    Parse(String),
}

impl CopyError {
    /// Build a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Build a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}
