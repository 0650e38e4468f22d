//! The external generation primitive.
//!
//! Everything the pipeline asks of a hosted model goes through the
//! [`LanguageModel`] trait: copy generation, persona debate turns, and
//! moderation. Providers live under [`providers`]; orchestration code is
//! strictly sequential and uses the blocking [`LanguageModel::call`]
//! surface, with [`LanguageModel::acall`] available for async hosts.

pub mod providers;

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default model for copy generation.
pub const DEFAULT_GENERATION_MODEL: &str = "gpt-4-turbo";
/// Default model for persona debate turns.
pub const DEFAULT_PERSONA_MODEL: &str = "gpt-4o";
/// Default model for moderator analysis.
pub const DEFAULT_ANALYSIS_MODEL: &str = "gemini-1.5-pro";
/// Default sampling temperature.
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

/// Message role in a chat exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// A single chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Wire-level failure from a model call.
#[derive(Debug, Error)]
pub enum TransportError {
    /// No credential available for the provider.
    #[error("API key missing for provider '{provider}'")]
    MissingApiKey { provider: String },

    /// The HTTP request itself failed (network, TLS, timeout).
    #[error("transport failure: {0}")]
    Http(String),

    /// The API answered with a non-success status.
    #[error("API error ({status}): {body}")]
    Api { status: u16, body: String },

    /// The response body did not carry the expected shape.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// A provider chain was built with no providers.
    #[error("provider chain is empty")]
    NoProviders,

    /// Every provider in a chain failed; carries the last failure.
    #[error("all providers failed; last error: {0}")]
    Exhausted(String),
}

/// A hosted language model.
///
/// `call` is the blocking surface the sequential pipeline uses; `acall` is
/// the async equivalent. Implementations that are natively async override
/// `acall` and wrap it in `call`; in-process fakes implement `call` and let
/// the default `acall` delegate.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Model identifier, for logging and result records.
    fn model_name(&self) -> &str;

    /// Issue a single blocking chat completion.
    fn call(
        &self,
        messages: &[ChatMessage],
        temperature: Option<f64>,
    ) -> Result<String, TransportError>;

    /// Async chat completion; defaults to the blocking implementation.
    async fn acall(
        &self,
        messages: &[ChatMessage],
        temperature: Option<f64>,
    ) -> Result<String, TransportError> {
        self.call(messages, temperature)
    }
}

/// Ordered fallback policy over providers: first success wins, every
/// failure is logged, exhaustion is a typed error rather than a swallowed
/// exception.
#[derive(Clone)]
pub struct ProviderChain {
    providers: Vec<Arc<dyn LanguageModel>>,
}

impl ProviderChain {
    pub fn new(providers: Vec<Arc<dyn LanguageModel>>) -> Self {
        Self { providers }
    }

    /// A chain of one.
    pub fn single(provider: Arc<dyn LanguageModel>) -> Self {
        Self::new(vec![provider])
    }

    /// Number of providers in the chain.
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Whether the chain has no providers.
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Try each provider in order, returning the first success.
    pub fn call(
        &self,
        messages: &[ChatMessage],
        temperature: Option<f64>,
    ) -> Result<String, TransportError> {
        if self.providers.is_empty() {
            return Err(TransportError::NoProviders);
        }
        let mut last_error: Option<TransportError> = None;
        for provider in &self.providers {
            match provider.call(messages, temperature) {
                Ok(text) => return Ok(text),
                Err(e) => {
                    log::warn!(
                        "provider '{}' failed, trying next: {}",
                        provider.model_name(),
                        e
                    );
                    last_error = Some(e);
                }
            }
        }
        // providers is non-empty, so last_error is set
        Err(TransportError::Exhausted(
            last_error.map(|e| e.to_string()).unwrap_or_default(),
        ))
    }
}

impl std::fmt::Debug for ProviderChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.providers.iter().map(|p| p.model_name()).collect();
        f.debug_struct("ProviderChain").field("providers", &names).finish()
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Scripted model: pops canned replies in order; errors once exhausted.
    pub struct ScriptedModel {
        pub name: String,
        replies: parking_lot::Mutex<Vec<Result<String, String>>>,
        pub calls: AtomicUsize,
        pub seen: parking_lot::Mutex<Vec<Vec<ChatMessage>>>,
    }

    impl ScriptedModel {
        pub fn new(name: &str, replies: Vec<Result<String, String>>) -> Self {
            Self {
                name: name.to_string(),
                replies: parking_lot::Mutex::new(replies),
                calls: AtomicUsize::new(0),
                seen: parking_lot::Mutex::new(Vec::new()),
            }
        }

        pub fn always(name: &str, reply: &str) -> Self {
            Self::new(name, vec![Ok(reply.to_string()); 32])
        }

        pub fn failing(name: &str) -> Self {
            Self::new(name, Vec::new())
        }
    }

    impl LanguageModel for ScriptedModel {
        fn model_name(&self) -> &str {
            &self.name
        }

        fn call(
            &self,
            messages: &[ChatMessage],
            _temperature: Option<f64>,
        ) -> Result<String, TransportError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.seen.lock().push(messages.to_vec());
            let mut replies = self.replies.lock();
            if replies.is_empty() {
                return Err(TransportError::Http(format!("{}: scripted failure", self.name)));
            }
            replies
                .remove(0)
                .map_err(|m| TransportError::Api { status: 500, body: m })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::ScriptedModel;
    use super::*;
    use std::sync::atomic::Ordering;

    #[test]
    fn test_chain_first_success_wins() {
        let first = Arc::new(ScriptedModel::always("first", "from first"));
        let second = Arc::new(ScriptedModel::always("second", "from second"));
        let chain = ProviderChain::new(vec![
            first.clone() as Arc<dyn LanguageModel>,
            second.clone(),
        ]);

        let reply = chain.call(&[ChatMessage::user("hi")], None).unwrap();
        assert_eq!(reply, "from first");
        assert_eq!(second.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_chain_falls_back_in_order() {
        let first = Arc::new(ScriptedModel::failing("first"));
        let second = Arc::new(ScriptedModel::always("second", "rescued"));
        let chain = ProviderChain::new(vec![
            first.clone() as Arc<dyn LanguageModel>,
            second,
        ]);

        let reply = chain.call(&[ChatMessage::user("hi")], None).unwrap();
        assert_eq!(reply, "rescued");
        assert_eq!(first.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_chain_exhaustion_is_typed() {
        let chain = ProviderChain::new(vec![
            Arc::new(ScriptedModel::failing("a")) as Arc<dyn LanguageModel>,
            Arc::new(ScriptedModel::failing("b")),
        ]);
        let err = chain.call(&[ChatMessage::user("hi")], None).unwrap_err();
        assert!(matches!(err, TransportError::Exhausted(_)));
        assert!(err.to_string().contains("b: scripted failure"));
    }

    #[test]
    fn test_empty_chain_rejected() {
        let chain = ProviderChain::new(Vec::new());
        let err = chain.call(&[ChatMessage::user("hi")], None).unwrap_err();
        assert!(matches!(err, TransportError::NoProviders));
    }

    #[tokio::test]
    async fn test_default_acall_delegates_to_call() {
        let model = ScriptedModel::always("m", "pong");
        let reply = model.acall(&[ChatMessage::user("ping")], None).await.unwrap();
        assert_eq!(reply, "pong");
    }
}
