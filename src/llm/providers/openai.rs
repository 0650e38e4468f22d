//! OpenAI-compatible chat completions provider.
//!
//! The primary generation endpoint. One request per call, no retries:
//! failures surface immediately as [`TransportError`] values for the caller
//! to render.

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::llm::{ChatMessage, LanguageModel, TransportError};

/// Chat-completions client for OpenAI and compatible gateways.
#[derive(Debug, Clone)]
pub struct OpenAiCompletion {
    /// Model identifier (e.g. "gpt-4-turbo", "gpt-4o").
    pub model: String,
    /// API key; falls back to `OPENAI_API_KEY`.
    pub api_key: Option<String>,
    /// Custom base URL for compatible gateways.
    pub base_url: Option<String>,
    /// Request timeout in seconds.
    pub timeout_secs: f64,
}

impl OpenAiCompletion {
    pub fn new(model: impl Into<String>, api_key: Option<String>, base_url: Option<String>) -> Self {
        let api_key = api_key.or_else(|| std::env::var("OPENAI_API_KEY").ok());
        Self {
            model: model.into(),
            api_key,
            base_url,
            timeout_secs: 120.0,
        }
    }

    /// Endpoint base, defaulting to the public API.
    pub fn api_base_url(&self) -> String {
        self.base_url
            .clone()
            .unwrap_or_else(|| "https://api.openai.com/v1".to_string())
    }

    fn build_request_body(&self, messages: &[ChatMessage], temperature: Option<f64>) -> Value {
        let mut body = json!({
            "model": self.model,
            "messages": messages,
        });
        if let Some(temp) = temperature {
            body["temperature"] = json!(temp);
        }
        body
    }

    fn parse_response(&self, response: &Value) -> Result<String, TransportError> {
        response
            .get("choices")
            .and_then(|c| c.get(0))
            .and_then(|c| c.get("message"))
            .and_then(|m| m.get("content"))
            .and_then(|c| c.as_str())
            .map(|s| s.trim().to_string())
            .ok_or_else(|| {
                TransportError::MalformedResponse("no choices[0].message.content".to_string())
            })
    }
}

#[async_trait]
impl LanguageModel for OpenAiCompletion {
    fn model_name(&self) -> &str {
        &self.model
    }

    fn call(
        &self,
        messages: &[ChatMessage],
        temperature: Option<f64>,
    ) -> Result<String, TransportError> {
        let rt = tokio::runtime::Runtime::new()
            .map_err(|e| TransportError::Http(format!("runtime: {}", e)))?;
        rt.block_on(self.acall(messages, temperature))
    }

    async fn acall(
        &self,
        messages: &[ChatMessage],
        temperature: Option<f64>,
    ) -> Result<String, TransportError> {
        log::debug!(
            "OpenAiCompletion.acall: model={}, {} messages",
            self.model,
            messages.len()
        );

        let api_key = self.api_key.as_ref().ok_or_else(|| TransportError::MissingApiKey {
            provider: "openai".to_string(),
        })?;

        let endpoint = format!("{}/chat/completions", self.api_base_url());
        let body = self.build_request_body(messages, temperature);

        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs_f64(self.timeout_secs))
            .build()
            .map_err(|e| TransportError::Http(e.to_string()))?;

        let response = client
            .post(&endpoint)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", api_key))
            .json(&body)
            .send()
            .await
            .map_err(|e| TransportError::Http(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| TransportError::Http(e.to_string()))?;

        if !status.is_success() {
            return Err(TransportError::Api {
                status: status.as_u16(),
                body: text.chars().take(500).collect(),
            });
        }

        let parsed: Value = serde_json::from_str(&text)
            .map_err(|e| TransportError::MalformedResponse(e.to_string()))?;
        self.parse_response(&parsed)
    }
}
