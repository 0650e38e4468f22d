//! Gemini `generateContent` provider.
//!
//! The preferred analysis model for moderation. Chat messages are flattened
//! into a single text part: the moderation flow sends one prompt, and the
//! endpoint needs no role structure for that.

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::llm::{ChatMessage, LanguageModel, TransportError};

/// REST client for the Generative Language API.
#[derive(Debug, Clone)]
pub struct GeminiCompletion {
    /// Model identifier (e.g. "gemini-1.5-pro").
    pub model: String,
    /// API key; falls back to `GOOGLE_API_KEY`.
    pub api_key: Option<String>,
    /// Custom base URL, mostly for tests.
    pub base_url: Option<String>,
    /// Request timeout in seconds.
    pub timeout_secs: f64,
}

impl GeminiCompletion {
    pub fn new(model: impl Into<String>, api_key: Option<String>) -> Self {
        let api_key = api_key.or_else(|| std::env::var("GOOGLE_API_KEY").ok());
        Self {
            model: model.into(),
            api_key,
            base_url: None,
            timeout_secs: 120.0,
        }
    }

    /// Endpoint base, defaulting to the public API.
    pub fn api_base_url(&self) -> String {
        self.base_url
            .clone()
            .unwrap_or_else(|| "https://generativelanguage.googleapis.com/v1beta".to_string())
    }

    /// Collapse a message list into one prompt text, preserving order.
    fn flatten_messages(messages: &[ChatMessage]) -> String {
        messages
            .iter()
            .map(|m| m.content.as_str())
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    fn build_request_body(&self, messages: &[ChatMessage], temperature: Option<f64>) -> Value {
        let mut body = json!({
            "contents": [{"parts": [{"text": Self::flatten_messages(messages)}]}],
        });
        if let Some(temp) = temperature {
            body["generationConfig"] = json!({"temperature": temp});
        }
        body
    }

    fn parse_response(&self, response: &Value) -> Result<String, TransportError> {
        response
            .get("candidates")
            .and_then(|c| c.get(0))
            .and_then(|c| c.get("content"))
            .and_then(|c| c.get("parts"))
            .and_then(|p| p.get(0))
            .and_then(|p| p.get("text"))
            .and_then(|t| t.as_str())
            .map(|s| s.trim().to_string())
            .ok_or_else(|| {
                TransportError::MalformedResponse(
                    "no candidates[0].content.parts[0].text".to_string(),
                )
            })
    }
}

#[async_trait]
impl LanguageModel for GeminiCompletion {
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
            "GeminiCompletion.acall: model={}, {} messages",
            self.model,
            messages.len()
        );

        let api_key = self.api_key.as_ref().ok_or_else(|| TransportError::MissingApiKey {
            provider: "gemini".to_string(),
        })?;

        let endpoint = format!(
            "{}/models/{}:generateContent?key={}",
            self.api_base_url(),
            self.model,
            api_key
        );
        let body = self.build_request_body(messages, temperature);

        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs_f64(self.timeout_secs))
            .build()
            .map_err(|e| TransportError::Http(e.to_string()))?;

        let response = client
            .post(&endpoint)
            .header("Content-Type", "application/json")
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flatten_preserves_order() {
        let messages = vec![ChatMessage::system("a"), ChatMessage::user("b")];
        assert_eq!(GeminiCompletion::flatten_messages(&messages), "a\n\nb");
    }

    #[test]
    fn test_request_body_shape() {
        let provider = GeminiCompletion::new("gemini-1.5-pro", Some("k".into()));
        let body = provider.build_request_body(&[ChatMessage::user("analyze")], Some(0.4));
        assert_eq!(body["contents"][0]["parts"][0]["text"], "analyze");
        assert_eq!(body["generationConfig"]["temperature"], 0.4);
    }

    #[test]
    fn test_parse_response_extracts_text() {
        let provider = GeminiCompletion::new("gemini-1.5-pro", Some("k".into()));
        let response = serde_json::json!({
            "candidates": [{"content": {"parts": [{"text": "verdict"}]}}]
        });
        assert_eq!(provider.parse_response(&response).unwrap(), "verdict");
    }

    #[test]
    fn test_parse_response_rejects_missing_candidates() {
        let provider = GeminiCompletion::new("gemini-1.5-pro", Some("k".into()));
        assert!(provider.parse_response(&serde_json::json!({})).is_err());
    }
}
