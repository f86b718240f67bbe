//! Claude API client module
//!
//! Encapsulates the outbound call to the Anthropic Messages API for
//! generating assistant replies.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};
use tracing::{error, info};

use crate::core::models::ChatMessage;
use crate::errors::ApiError;

const MESSAGES_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";

pub const DEFAULT_MODEL: &str = "claude-sonnet-4-5";
pub const MAX_TOKENS: u32 = 1024;

/// Seam between the chat handler and the completion provider. Test suites
/// substitute a mock backend here.
#[async_trait]
pub trait Completions: Send + Sync {
    /// Forward the conversation and return the first text segment of the
    /// completion, or an empty string when the provider returned no content.
    async fn complete(
        &self,
        system_prompt: &str,
        messages: &[ChatMessage],
    ) -> Result<String, ApiError>;
}

/// Completion client backed by the Anthropic Messages API.
pub struct AnthropicClient {
    api_key: String,
    model_name: String,
}

impl AnthropicClient {
    #[must_use]
    pub fn new(api_key: String, model_override: Option<String>) -> Self {
        Self {
            api_key,
            model_name: model_override.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        }
    }
}

#[async_trait]
impl Completions for AnthropicClient {
    async fn complete(
        &self,
        system_prompt: &str,
        messages: &[ChatMessage],
    ) -> Result<String, ApiError> {
        info!("Requesting completion with {} messages", messages.len());

        // Role/content pairs only, passed through verbatim. One attempt,
        // no retry; the client default timeout bounds the call.
        let request_body = json!({
            "model": self.model_name,
            "max_tokens": MAX_TOKENS,
            "system": system_prompt,
            "messages": messages,
        });

        let client = Client::new();
        let response = client
            .post(MESSAGES_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| ApiError::Transport(format!("Claude API request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let error_body: Value = response.json().await.unwrap_or_else(|_| json!({}));
            let message = error_body
                .get("error")
                .and_then(|e| e.get("message"))
                .and_then(|m| m.as_str())
                .map_or_else(
                    || format!("Claude API error {}", status.as_u16()),
                    ToString::to_string,
                );
            error!(status = status.as_u16(), "Claude API returned an error: {message}");
            return Err(ApiError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        let data: Value = response
            .json()
            .await
            .map_err(|e| ApiError::Transport(format!("Failed to read Claude response: {e}")))?;

        let text = data
            .get("content")
            .and_then(|c| c.get(0))
            .and_then(|c| c.get("text"))
            .and_then(|t| t.as_str())
            .unwrap_or("")
            .to_string();

        Ok(text)
    }
}
