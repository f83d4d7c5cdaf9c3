//! OpenAI-compatible `chat/completions` client.
//!
//! Wraps the provider's HTTP API using [`reqwest`]. A single request is made
//! per completion with a bounded timeout; an indefinite hang on the outbound
//! call would otherwise stall the whole chat request.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::provider::{CompletionError, CompletionProvider};

/// Default completions endpoint base URL.
const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default model identifier.
const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Default bound on generated reply length, in tokens.
const DEFAULT_MAX_TOKENS: u32 = 500;

/// Default sampling temperature. Moderate and non-zero: varied but
/// controlled suggestions.
const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the completion client.
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    /// API key sent as a bearer token.
    pub api_key: String,
    /// Base URL of the OpenAI-compatible API.
    pub base_url: String,
    /// Model identifier.
    pub model: String,
    /// Upper bound on generated reply length, in tokens.
    pub max_tokens: u32,
    /// Sampling temperature.
    pub temperature: f32,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl OpenAiConfig {
    /// Load completion-provider configuration from environment variables.
    ///
    /// | Env Var             | Required | Default                     |
    /// |---------------------|----------|-----------------------------|
    /// | `OPENAI_API_KEY`    | **yes**  | --                          |
    /// | `OPENAI_BASE_URL`   | no       | `https://api.openai.com/v1` |
    /// | `OPENAI_MODEL`      | no       | `gpt-4o-mini`               |
    /// | `CHAT_MAX_TOKENS`   | no       | `500`                       |
    /// | `CHAT_TEMPERATURE`  | no       | `0.7`                       |
    /// | `CHAT_TIMEOUT_SECS` | no       | `30`                        |
    ///
    /// # Panics
    ///
    /// Panics if `OPENAI_API_KEY` is not set or a numeric override does not
    /// parse. Misconfiguration should fail at startup, not per request.
    pub fn from_env() -> Self {
        let api_key =
            std::env::var("OPENAI_API_KEY").expect("OPENAI_API_KEY must be set in the environment");

        let base_url =
            std::env::var("OPENAI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());

        let model = std::env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.into());

        let max_tokens: u32 = std::env::var("CHAT_MAX_TOKENS")
            .unwrap_or_else(|_| DEFAULT_MAX_TOKENS.to_string())
            .parse()
            .expect("CHAT_MAX_TOKENS must be a valid u32");

        let temperature: f32 = std::env::var("CHAT_TEMPERATURE")
            .unwrap_or_else(|_| DEFAULT_TEMPERATURE.to_string())
            .parse()
            .expect("CHAT_TEMPERATURE must be a valid f32");

        let timeout_secs: u64 = std::env::var("CHAT_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_TIMEOUT_SECS.to_string())
            .parse()
            .expect("CHAT_TIMEOUT_SECS must be a valid u64");

        Self {
            api_key,
            base_url,
            model,
            max_tokens,
            temperature,
            timeout_secs,
        }
    }
}

/// HTTP client for an OpenAI-compatible completions API.
pub struct OpenAiClient {
    client: reqwest::Client,
    config: OpenAiConfig,
}

/// Response returned by the `chat/completions` endpoint.
#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
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

impl OpenAiClient {
    /// Create a new client. The request timeout is baked into the
    /// underlying [`reqwest::Client`] so every call is bounded.
    pub fn new(config: OpenAiConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to build HTTP client");
        Self { client, config }
    }

    /// Model identifier this client sends with every request.
    pub fn model(&self) -> &str {
        &self.config.model
    }
}

#[async_trait]
impl CompletionProvider for OpenAiClient {
    async fn complete(
        &self,
        system_instruction: &str,
        user_message: &str,
    ) -> Result<String, CompletionError> {
        tracing::debug!(model = %self.config.model, "Requesting chat completion");

        let body = serde_json::json!({
            "model": self.config.model,
            "messages": [
                { "role": "system", "content": system_instruction },
                { "role": "user", "content": user_message },
            ],
            "temperature": self.config.temperature,
            "max_tokens": self.config.max_tokens,
        });

        let response = self
            .client
            .post(format!("{}/chat/completions", self.config.base_url))
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| CompletionError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CompletionError::Provider {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| CompletionError::Malformed(e.to_string()))?;

        extract_reply(parsed)
    }
}

/// Pull the first generated reply's text out of a completion response.
fn extract_reply(response: ChatCompletionResponse) -> Result<String, CompletionError> {
    let reply = response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| CompletionError::Malformed("response contained no reply".into()))?;

    if reply.is_empty() {
        return Err(CompletionError::Malformed("response reply was empty".into()));
    }
    Ok(reply)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> ChatCompletionResponse {
        serde_json::from_str(json).expect("fixture must parse")
    }

    #[test]
    fn extracts_first_choice_text() {
        let response = parse(
            r#"{"choices":[{"message":{"role":"assistant","content":"Zkus knížku."}},
                           {"message":{"role":"assistant","content":"ignored"}}]}"#,
        );

        let reply = extract_reply(response).expect("reply must be extracted");
        assert_eq!(reply, "Zkus knížku.");
    }

    #[test]
    fn empty_choices_is_malformed() {
        let response = parse(r#"{"choices":[]}"#);
        let err = extract_reply(response).expect_err("no choices must fail");
        assert!(matches!(err, CompletionError::Malformed(_)));
    }

    #[test]
    fn null_content_is_malformed() {
        let response = parse(r#"{"choices":[{"message":{"role":"assistant","content":null}}]}"#);
        let err = extract_reply(response).expect_err("null content must fail");
        assert!(matches!(err, CompletionError::Malformed(_)));
    }

    #[test]
    fn empty_content_is_malformed() {
        let response = parse(r#"{"choices":[{"message":{"role":"assistant","content":""}}]}"#);
        let err = extract_reply(response).expect_err("empty content must fail");
        assert!(matches!(err, CompletionError::Malformed(_)));
    }
}
