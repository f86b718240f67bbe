//! Order notification proxy - `/api/telegram`.
//!
//! Formats a placed order into a Telegram message and delivers it with the
//! server-held bot token. Delivery is best-effort: a missing token degrades
//! to a successful no-op, and failures never escalate into order failures
//! for the caller.

use serde_json::{Value, json};
use tracing::{error, warn};

use super::{helpers, parsing};
use crate::core::models::Order;
use crate::messaging::{Messenger, format};

/// Handle a notification request.
///
/// `messenger` is `None` when no messaging credential is configured; the
/// notification is then skipped without error.
pub async fn handle(body: &Value, messenger: Option<&dyn Messenger>) -> Value {
    let Some(messenger) = messenger else {
        // Telegram is optional - don't fail order placement over it.
        warn!("TELEGRAM_BOT_TOKEN not set, skipping notification");
        return helpers::ok_json(&json!({ "ok": true, "skipped": true }));
    };

    let order_value = body.get("order").filter(|o| !o.is_null());
    let chat_id = parsing::str_field(body, "chatId");

    let (Some(order_value), Some(chat_id)) = (order_value, chat_id) else {
        return helpers::err_response(400, "Missing order or chatId");
    };

    let order: Order = match serde_json::from_value(order_value.clone()) {
        Ok(o) => o,
        Err(e) => {
            error!("Malformed order payload: {e}");
            return helpers::err_response(400, "Missing order or chatId");
        }
    };

    let message = format::format_order_message(&order, &format::order_timestamp());

    match messenger.send_message(chat_id, &message).await {
        // Provider response body is passed through as-is.
        Ok(provider_body) => helpers::ok_json(&provider_body),
        Err(e) => {
            error!("Telegram API error: {e}");
            helpers::err_response(500, "Failed to send Telegram notification")
        }
    }
}
