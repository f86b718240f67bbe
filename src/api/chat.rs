//! Chat completion proxy - `/api/chat`.
//!
//! Forwards the customer conversation plus system prompt to the completion
//! provider with the server-held API key and relays only the reply text.

use serde_json::{Value, json};
use tracing::error;

use super::{helpers, parsing};
use crate::ai::Completions;
use crate::core::models::ChatMessage;
use crate::errors::ApiError;

/// Handle a chat proxy request.
///
/// `completions` is `None` when no completion credential is configured,
/// which is a server configuration error for this endpoint.
pub async fn handle(body: &Value, completions: Option<&dyn Completions>) -> Value {
    let Some(client) = completions else {
        error!("Chat request rejected: completion credential is not configured");
        return helpers::err_response(
            500,
            &ApiError::Config("API key missing.".to_string()).to_string(),
        );
    };

    let messages_value = body.get("messages").filter(|m| m.is_array());
    let system_prompt = parsing::str_field(body, "systemPrompt");

    let (Some(messages_value), Some(system_prompt)) = (messages_value, system_prompt) else {
        return helpers::err_response(400, "Missing required fields: messages, systemPrompt");
    };

    let messages: Vec<ChatMessage> = match serde_json::from_value(messages_value.clone()) {
        Ok(m) => m,
        Err(e) => {
            error!("Malformed messages array: {e}");
            return helpers::err_response(400, "Missing required fields: messages, systemPrompt");
        }
    };

    match client.complete(system_prompt, &messages).await {
        Ok(text) => helpers::ok_json(&json!({ "text": text })),
        Err(ApiError::Upstream { status, message }) => {
            // Provider said no: relay its status and message.
            helpers::err_response(status, &message)
        }
        Err(e) => {
            // Transport failures stay server-side; the client gets a
            // generic message.
            error!("Chat API error: {e}");
            helpers::err_response(500, "Internal server error")
        }
    }
}
