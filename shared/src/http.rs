//! # Request/Response Interception Rules
//!
//! Transport-independent rules applied to every API call:
//!
//! - outgoing: attach `Authorization: Bearer <token>` when a session token is
//!   stored, and declare a JSON content type only for JSON bodies
//! - incoming: detect authentication failures (401, or a 422 validation error
//!   about the `authorization` header) so the caller can drop the session
//! - errors: pull the backend's `detail` message out of an error body
//!
//! The browser crate wires these into its `gloo-net` wrapper.

use serde_json::Value;

use crate::error::ApiError;

pub const AUTHORIZATION: &str = "Authorization";
pub const CONTENT_TYPE: &str = "Content-Type";
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Kind of body an outgoing request carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    None,
    Json,
    /// `multipart/form-data`; the browser supplies the boundary itself.
    Multipart,
}

/// `Bearer <token>` for a non-empty token.
pub fn authorization_value(token: Option<&str>) -> Option<String> {
    token
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|t| format!("Bearer {}", t))
}

/// Headers to set on an outgoing request.
///
/// ```rust
/// use shared::http::{request_headers, BodyKind};
///
/// let headers = request_headers(Some("abc"), BodyKind::Json);
/// assert_eq!(headers, vec![
///     ("Authorization", "Bearer abc".to_string()),
///     ("Content-Type", "application/json".to_string()),
/// ]);
///
/// assert!(request_headers(None, BodyKind::Multipart).is_empty());
/// ```
pub fn request_headers(token: Option<&str>, body: BodyKind) -> Vec<(&'static str, String)> {
    let mut headers = Vec::with_capacity(2);
    if let Some(value) = authorization_value(token) {
        headers.push((AUTHORIZATION, value));
    }
    if body == BodyKind::Json {
        headers.push((CONTENT_TYPE, JSON_CONTENT_TYPE.to_string()));
    }
    headers
}

/// Whether a response means the stored session is no longer usable.
///
/// 401 always counts. 422 only counts when the validation detail points at
/// the `authorization` header (token missing or malformed); other 422s are
/// ordinary form errors.
pub fn is_auth_failure(status: u16, body: &str) -> bool {
    match status {
        401 => true,
        422 => serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|v| v.get("detail").and_then(Value::as_array).cloned())
            .map(|items| items.iter().any(mentions_authorization))
            .unwrap_or(false),
        _ => false,
    }
}

fn mentions_authorization(item: &Value) -> bool {
    item.get("loc")
        .and_then(Value::as_array)
        .map(|loc| {
            loc.iter()
                .filter_map(Value::as_str)
                .any(|part| part.eq_ignore_ascii_case("authorization"))
        })
        .unwrap_or(false)
}

/// Human-readable `detail` from an error body.
///
/// A string detail is returned as is; a validation array yields its `msg`
/// entries joined with `; `.
pub fn error_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Array(items) => {
            let msgs: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            if msgs.is_empty() {
                None
            } else {
                Some(msgs.join("; "))
            }
        }
        _ => None,
    }
}

/// Map a non-success response to an [`ApiError`].
pub fn classify_failure(status: u16, body: &str) -> ApiError {
    if is_auth_failure(status, body) {
        ApiError::Unauthorized
    } else {
        ApiError::Status {
            status,
            detail: error_detail(body),
        }
    }
}

/// Join the API base URL and an endpoint path without doubling slashes.
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const AUTH_422: &str = r#"{"detail":[{"loc":["header","authorization"],"msg":"field required","type":"value_error.missing"}]}"#;
    const FORM_422: &str = r#"{"detail":[{"loc":["body","price"],"msg":"value is not a valid float","type":"type_error.float"}]}"#;

    #[test]
    fn test_authorization_value() {
        assert_eq!(authorization_value(Some("tok")), Some("Bearer tok".to_string()));
        assert_eq!(authorization_value(Some("  ")), None);
        assert_eq!(authorization_value(None), None);
    }

    #[test]
    fn test_request_headers_without_token() {
        let headers = request_headers(None, BodyKind::Json);
        assert_eq!(headers, vec![(CONTENT_TYPE, JSON_CONTENT_TYPE.to_string())]);
        assert!(request_headers(None, BodyKind::None).is_empty());
    }

    #[test]
    fn test_multipart_keeps_authorization_only() {
        let headers = request_headers(Some("tok"), BodyKind::Multipart);
        assert_eq!(headers, vec![(AUTHORIZATION, "Bearer tok".to_string())]);
    }

    #[test]
    fn test_is_auth_failure() {
        assert!(is_auth_failure(401, ""));
        assert!(is_auth_failure(422, AUTH_422));
        assert!(!is_auth_failure(422, FORM_422));
        assert!(!is_auth_failure(422, "not json"));
        assert!(!is_auth_failure(403, ""));
        assert!(!is_auth_failure(500, AUTH_422));
    }

    #[test]
    fn test_error_detail() {
        assert_eq!(error_detail(r#"{"detail":"Vehicle not found"}"#), Some("Vehicle not found".to_string()));
        assert_eq!(error_detail(FORM_422), Some("value is not a valid float".to_string()));
        assert_eq!(error_detail(r#"{"error":"x"}"#), None);
        assert_eq!(error_detail("<html>"), None);
    }

    #[test]
    fn test_classify_failure() {
        assert_eq!(classify_failure(401, ""), ApiError::Unauthorized);
        assert_eq!(
            classify_failure(404, r#"{"detail":"Vehicle not found"}"#),
            ApiError::Status { status: 404, detail: Some("Vehicle not found".to_string()) }
        );
    }

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("https://api.test/", "/vehicles/"), "https://api.test/vehicles/");
        assert_eq!(join_url("https://api.test", "vehicles/7"), "https://api.test/vehicles/7");
    }
}
