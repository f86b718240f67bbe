use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};
use tracing::info;

use crate::errors::ApiError;

/// Seam between the notification handler and the messaging provider.
/// Tests substitute a spy here to assert on (or count) deliveries.
#[async_trait]
pub trait Messenger: Send + Sync {
    /// Deliver `text` to the chat/channel `chat_id` and return the
    /// provider's response body unchanged.
    async fn send_message(&self, chat_id: &str, text: &str) -> Result<Value, ApiError>;
}

/// Messaging client backed by the Telegram Bot API.
pub struct TelegramClient {
    bot_token: String,
}

impl TelegramClient {
    #[must_use]
    pub fn new(bot_token: String) -> Self {
        Self { bot_token }
    }
}

#[async_trait]
impl Messenger for TelegramClient {
    async fn send_message(&self, chat_id: &str, text: &str) -> Result<Value, ApiError> {
        info!(chat_id, "Sending Telegram notification");

        let url = format!("https://api.telegram.org/bot{}/sendMessage", self.bot_token);
        let response = Client::new()
            .post(&url)
            .json(&json!({
                "chat_id": chat_id,
                "text": text,
                "parse_mode": "Markdown",
            }))
            .send()
            .await
            .map_err(|e| ApiError::Transport(format!("Telegram API request failed: {e}")))?;

        // Pass-through: Telegram reports failures inside its JSON body
        // ({"ok":false,...}); the caller relays it as-is.
        let body: Value = response
            .json()
            .await
            .map_err(|e| ApiError::Transport(format!("Failed to read Telegram response: {e}")))?;

        Ok(body)
    }
}
