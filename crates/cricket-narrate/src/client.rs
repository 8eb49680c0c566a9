//! Blocking chat-completions client.

use std::time::Duration;

use cricket_core::MatchInfo;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::prompt::build_prompt;

/// Default endpoint: OpenRouter's OpenAI-compatible completions API.
pub const DEFAULT_API_URL: &str = "https://openrouter.ai/api/v1/chat/completions";

/// Default model for commentary generation.
pub const DEFAULT_MODEL: &str = "mistralai/mistral-7b-instruct";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings for the commentary endpoint.
#[derive(Debug, Clone)]
pub struct NarratorConfig {
    /// Chat completions endpoint URL.
    pub api_url: String,
    /// Bearer token for the endpoint.
    pub api_key: String,
    /// Model identifier to request.
    pub model: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl NarratorConfig {
    /// Config for the default endpoint and model with the given key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            timeout: REQUEST_TIMEOUT,
        }
    }
}

/// Errors raised while generating commentary.
#[derive(Debug, Error)]
pub enum NarrateError {
    /// The HTTP request could not be built or sent.
    #[error("commentary request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The endpoint answered with a non-success status.
    #[error("commentary API returned status {status}: {message}")]
    Api { status: u16, message: String },
    /// The endpoint answered but carried no completion text.
    #[error("commentary response contained no completion content")]
    EmptyCompletion,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f64,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl ChatResponse {
    /// Content of the first choice, if any non-empty text came back.
    fn into_content(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
    }
}

/// Generates match commentary through a chat completions endpoint.
pub struct Narrator {
    client: reqwest::blocking::Client,
    config: NarratorConfig,
}

impl Narrator {
    /// Creates a narrator for the given endpoint configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: NarratorConfig) -> Result<Self, NarrateError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self { client, config })
    }

    /// Requests free-text commentary for the given match metadata.
    ///
    /// Sends a single user message built by [`build_prompt`] with a low
    /// temperature (0.2) and a 1500-token ceiling, and extracts the first
    /// choice's message content.
    ///
    /// # Errors
    ///
    /// Returns [`NarrateError`] on transport failure, a non-success HTTP
    /// status, or a response with no usable completion text.
    pub fn generate(&self, info: &MatchInfo) -> Result<String, NarrateError> {
        let prompt = build_prompt(info);
        let request = ChatRequest {
            model: &self.config.model,
            messages: vec![ChatMessage {
                role: "user",
                content: &prompt,
            }],
            temperature: 0.2,
            max_tokens: 1500,
        };

        tracing::debug!(model = %self.config.model, url = %self.config.api_url, "requesting match commentary");

        let response = self
            .client
            .post(&self.config.api_url)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "commentary API rejected the request");
            return Err(NarrateError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: ChatResponse = response.json()?;
        body.into_content().ok_or(NarrateError::EmptyCompletion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_has_the_expected_shape() {
        let prompt = "hello".to_string();
        let request = ChatRequest {
            model: DEFAULT_MODEL,
            messages: vec![ChatMessage {
                role: "user",
                content: &prompt,
            }],
            temperature: 0.2,
            max_tokens: 1500,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], DEFAULT_MODEL);
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"], "hello");
        assert_eq!(json["temperature"], 0.2);
        assert_eq!(json["max_tokens"], 1500);
    }

    #[test]
    fn response_content_is_extracted_from_first_choice() {
        let body = r#"{"choices":[{"message":{"content":"a tight finish"}},{"message":{"content":"ignored"}}]}"#;
        let response: ChatResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.into_content().as_deref(), Some("a tight finish"));
    }

    #[test]
    fn empty_choices_yield_no_content() {
        let response: ChatResponse = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        assert!(response.into_content().is_none());

        let response: ChatResponse = serde_json::from_str("{}").unwrap();
        assert!(response.into_content().is_none());
    }

    #[test]
    fn blank_completion_counts_as_empty() {
        let body = r#"{"choices":[{"message":{"content":"   "}}]}"#;
        let response: ChatResponse = serde_json::from_str(body).unwrap();
        assert!(response.into_content().is_none());
    }

    #[test]
    fn config_defaults() {
        let config = NarratorConfig::new("key");
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.timeout, Duration::from_secs(30));
    }
}
