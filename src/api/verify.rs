//! Admin password verification - `/api/verify-admin`.
//!
//! Compares the submitted password against the server-held secret without
//! leaking where the inputs differ, and slows down repeated wrong guesses
//! with a fixed delay on the failure path.

use std::time::Duration;

use serde_json::{Value, json};
use tracing::warn;

use super::{helpers, parsing};
use crate::errors::ApiError;

/// Fixed delay before answering a failed password check.
pub const AUTH_FIXED_DELAY_MS: u64 = 300;

/// Handle an admin password check.
///
/// Validation failures (missing secret, missing field) answer immediately;
/// only an actually-compared-and-failed attempt incurs the delay.
pub async fn handle(body: &Value, admin_password: Option<&str>) -> Value {
    let Some(stored) = admin_password else {
        return helpers::err_response(
            500,
            &ApiError::Config("Admin password not set.".to_string()).to_string(),
        );
    };

    let Some(submitted) = parsing::str_field(body, "password") else {
        return helpers::err_response(400, "Missing password field");
    };

    if passwords_match(submitted.as_bytes(), stored.as_bytes()) {
        return helpers::ok_json(&json!({ "ok": true }));
    }

    warn!("Admin password check failed");
    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;
    helpers::auth_failed()
}

/// Whether `submitted` equals `stored`.
///
/// The length gate returns early (secret length is not treated as
/// confidential); equal-length inputs go through the constant-time
/// comparator so wall-clock time does not depend on content.
#[must_use]
pub fn passwords_match(submitted: &[u8], stored: &[u8]) -> bool {
    submitted.len() == stored.len() && constant_time_eq(submitted, stored)
}

/// Content-independent equality for equal-length byte slices.
///
/// Accumulates XOR differences over every byte instead of short-circuiting
/// on the first mismatch.
#[must_use]
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    debug_assert_eq!(a.len(), b.len());

    let mut diff: u8 = 0;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    diff == 0
}
