//! Common helper functions for API handlers.
//!
//! Response builders shared across endpoints. Every response, including
//! errors and the preflight answer, carries the permissive CORS headers the
//! browser client needs for cross-origin POSTs.

use serde_json::{Value, json};

use crate::errors::ApiError;

fn cors_headers() -> Value {
    json!({
        "Access-Control-Allow-Origin": "*",
        "Access-Control-Allow-Methods": "POST, OPTIONS",
        "Access-Control-Allow-Headers": "Content-Type",
        "Content-Type": "application/json",
    })
}

/// Returns a bare 200 with an empty body, answering a CORS preflight.
#[must_use]
pub fn ok_preflight() -> Value {
    json!({
        "statusCode": 200,
        "headers": cors_headers(),
        "body": "",
    })
}

/// Returns a 200 OK response with the given JSON body.
#[must_use]
pub fn ok_json(body: &Value) -> Value {
    json!({
        "statusCode": 200,
        "headers": cors_headers(),
        "body": body.to_string(),
    })
}

/// Returns an error response with the given status code and message.
#[must_use]
pub fn err_response(status_code: u16, message: &str) -> Value {
    json!({
        "statusCode": status_code,
        "headers": cors_headers(),
        "body": json!({ "error": message }).to_string(),
    })
}

/// Returns the 401 body for a failed admin password check.
#[must_use]
pub fn auth_failed() -> Value {
    json!({
        "statusCode": 401,
        "headers": cors_headers(),
        "body": json!({ "ok": false, "error": ApiError::AuthFailed.to_string() }).to_string(),
    })
}
