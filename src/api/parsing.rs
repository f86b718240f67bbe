use serde_json::Value;

use crate::errors::ApiError;

/// HTTP method of the invocation, covering both the function-URL payload
/// shape (`requestContext.http.method`) and the REST shape (`httpMethod`).
pub fn get_method(payload: &Value) -> Option<&str> {
    v_str(payload, &["requestContext", "http", "method"])
        .or_else(|| v_str(payload, &["httpMethod"]))
}

/// Request path, covering both `rawPath` and `path` payload shapes.
pub fn get_path(payload: &Value) -> Option<&str> {
    v_str(payload, &["rawPath"]).or_else(|| v_str(payload, &["path"]))
}

/// Parse the request body (a JSON string in the Lambda payload) into a
/// JSON value.
///
/// # Errors
///
/// Returns a `Validation` error when the body is missing, not a string, or
/// not valid JSON.
pub fn extract_json_body(payload: &Value) -> Result<Value, ApiError> {
    let body = payload
        .get("body")
        .ok_or_else(|| ApiError::Validation("Missing body".to_string()))?;

    let body_str = body
        .as_str()
        .ok_or_else(|| ApiError::Validation("Invalid body format".to_string()))?;

    Ok(serde_json::from_str(body_str)?)
}

pub fn v_path<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut cur = root;
    for key in path {
        cur = cur.get(*key)?;
    }
    Some(cur)
}

pub fn v_str<'a>(root: &'a Value, path: &[&str]) -> Option<&'a str> {
    v_path(root, path).and_then(|v| v.as_str())
}

/// Non-empty string field of a JSON object. Empty strings count as missing,
/// matching the truthiness checks the frontend relies on.
pub fn str_field<'a>(body: &'a Value, name: &str) -> Option<&'a str> {
    body.get(name).and_then(|v| v.as_str()).filter(|s| !s.is_empty())
}
