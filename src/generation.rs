//! Copy generation service.
//!
//! A stateless wrapper around a single model round-trip. Failure is
//! surfaced as the rendered result text so the caller always has something
//! to show, and a previously generated draft is never clobbered by a failed
//! attempt.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::llm::{ChatMessage, LanguageModel, TransportError, DEFAULT_TEMPERATURE};
use crate::prompt::CompiledPrompt;
use crate::session::{SessionId, SessionStore};

/// A successful generation result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedCopy {
    pub text: String,
    /// Model that produced the text.
    pub model: String,
    pub generated_at: DateTime<Utc>,
}

/// Generates copy from compiled prompts.
#[derive(Clone)]
pub struct CopyGenerator {
    model: Arc<dyn LanguageModel>,
    temperature: Option<f64>,
}

impl CopyGenerator {
    pub fn new(model: Arc<dyn LanguageModel>) -> Self {
        Self {
            model,
            temperature: Some(DEFAULT_TEMPERATURE),
        }
    }

    /// Override the sampling temperature.
    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// One round-trip, no retries.
    pub fn generate(&self, prompt: &CompiledPrompt) -> Result<GeneratedCopy, TransportError> {
        log::debug!("generating copy via {}", self.model.model_name());
        let text = self.model.call(
            &[
                ChatMessage::system(prompt.system.clone()),
                ChatMessage::user(prompt.user.clone()),
            ],
            self.temperature,
        )?;
        Ok(GeneratedCopy {
            text,
            model: self.model.model_name().to_string(),
            generated_at: Utc::now(),
        })
    }

    /// Generate and store the draft in the session. On success the session's
    /// draft is replaced and the text returned; on failure the error is
    /// returned as renderable text and the prior draft stays in place.
    pub fn generate_for_session(
        &self,
        prompt: &CompiledPrompt,
        sessions: &SessionStore,
        session: SessionId,
    ) -> String {
        match self.generate(prompt) {
            Ok(copy) => {
                let text = copy.text.clone();
                sessions.update(session, |state| {
                    state.generated_copy = Some(copy);
                });
                text
            }
            Err(e) => {
                log::warn!("copy generation failed: {}", e);
                format!("Error: {}", e)
            }
        }
    }
}
