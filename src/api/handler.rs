//! API Lambda handler - thin router that delegates to specialized handlers.
//!
//! This module handles:
//! - CORS preflight and method enforcement
//! - Path routing to the chat, telegram and verify-admin endpoints
//! - Construction of the real provider clients from configuration

use super::{chat, helpers, notify, parsing, verify};
use crate::ai::{AnthropicClient, Completions};
use crate::core::config::AppConfig;
use crate::errors::ApiError;
use crate::messaging::{Messenger, TelegramClient};
use lambda_runtime::{Error, LambdaEvent};
use serde::Serialize;
use serde_json::Value;
use tracing::{error, info};
use uuid::Uuid;

pub use self::function_handler as handler;

/// Lambda handler for the API entrypoint.
///
/// Resolves configuration, builds the provider clients it is entitled to
/// (each credential is optional) and routes the request.
#[tracing::instrument(level = "info", skip(event))]
pub async fn function_handler(event: LambdaEvent<Value>) -> Result<impl Serialize, Error> {
    let config = AppConfig::from_env();
    let request_id = Uuid::new_v4().to_string();
    info!(%request_id, "API Lambda received request");

    let completions = config
        .anthropic_api_key
        .as_ref()
        .map(|key| AnthropicClient::new(key.clone(), config.claude_model.clone()));
    let messenger = config
        .telegram_bot_token
        .as_ref()
        .map(|token| TelegramClient::new(token.clone()));

    Ok(route_request(
        &config,
        &event.payload,
        completions.as_ref().map(|c| c as &dyn Completions),
        messenger.as_ref().map(|m| m as &dyn Messenger),
    )
    .await)
}

/// Route a request payload to the endpoint handler it addresses.
///
/// Separated from `function_handler` so tests can pass a constructed
/// `AppConfig` and mock providers instead of reading the environment.
pub async fn route_request(
    config: &AppConfig,
    payload: &Value,
    completions: Option<&dyn Completions>,
    messenger: Option<&dyn Messenger>,
) -> Value {
    // ========================================================================
    // Method enforcement (shared by all endpoints)
    // ========================================================================

    let method = parsing::get_method(payload).unwrap_or("POST");

    if method.eq_ignore_ascii_case("OPTIONS") {
        return helpers::ok_preflight();
    }

    if !method.eq_ignore_ascii_case("POST") {
        return helpers::err_response(405, &ApiError::MethodNotAllowed.to_string());
    }

    // ========================================================================
    // Body (all POST endpoints take JSON)
    // ========================================================================

    let body = match parsing::extract_json_body(payload) {
        Ok(b) => b,
        Err(e) => {
            error!("Request body rejected: {e}");
            return helpers::err_response(e.status_code(), &e.to_string());
        }
    };

    // ========================================================================
    // Path routing
    // ========================================================================

    let path = parsing::get_path(payload).unwrap_or("");
    info!(raw_path = %path, "Request path");

    // Optional features are gated on configured credentials, not on which
    // clients happen to be wired in.
    if path.ends_with("/api/chat") {
        let completions = if config.anthropic_api_key.is_some() {
            completions
        } else {
            None
        };
        return chat::handle(&body, completions).await;
    }

    if path.ends_with("/api/telegram") {
        let messenger = if config.telegram_bot_token.is_some() {
            messenger
        } else {
            None
        };
        return notify::handle(&body, messenger).await;
    }

    if path.ends_with("/api/verify-admin") {
        return verify::handle(&body, config.admin_password.as_deref()).await;
    }

    error!(raw_path = %path, "No endpoint matches path");
    helpers::err_response(404, "Not Found")
}
