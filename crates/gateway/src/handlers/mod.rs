//! HTTP handlers for the Edge Admin Gateway.
//!
//! One module per resource. DNS handlers proxy the Cloudflare REST API;
//! workers, traffic and deploy are deliberate stubs with no backing store.

pub mod dashboard;
pub mod deploy;
pub mod dns;
pub mod health;
pub mod traffic;
pub mod workers;

use axum::http::{header, HeaderValue};
use axum::response::{IntoResponse, Response};

use crate::error::AppError;

/// Presence-check request parameters, failing with a 400 that names every
/// absent field. The second tuple element is whether the field was supplied
/// (present and non-empty).
pub(crate) fn check_required(fields: &[(&str, bool)]) -> Result<(), AppError> {
    let missing: Vec<&str> = fields
        .iter()
        .filter(|(_, present)| !present)
        .map(|(name, _)| *name)
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(AppError::missing(&missing))
    }
}

/// Parse a JSON request body.
pub(crate) fn parse_json_body(bytes: &[u8]) -> Result<serde_json::Value, AppError> {
    serde_json::from_slice(bytes).map_err(|e| AppError::BadRequest(format!("Invalid JSON body: {e}")))
}

/// Extract a non-empty string field from a JSON object body.
pub(crate) fn str_field<'a>(body: &'a serde_json::Value, key: &str) -> Option<&'a str> {
    body.get(key)
        .and_then(serde_json::Value::as_str)
        .filter(|s| !s.is_empty())
}

/// Forward an upstream JSON body verbatim with status 200.
pub(crate) fn json_passthrough(body: Vec<u8>) -> Response {
    (
        [(header::CONTENT_TYPE, HeaderValue::from_static("application/json"))],
        body,
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_check_required_passes_when_all_present() {
        assert!(check_required(&[("zoneId", true), ("apiKey", true)]).is_ok());
    }

    #[test]
    fn test_check_required_names_missing_fields() {
        let err = check_required(&[("zoneId", true), ("cfId", false), ("apiKey", false)])
            .unwrap_err();
        assert_eq!(err.to_string(), "Missing required parameters: cfId, apiKey");
    }

    #[test]
    fn test_str_field_rejects_empty_and_non_string() {
        let body = json!({"a": "x", "b": "", "c": 7});
        assert_eq!(str_field(&body, "a"), Some("x"));
        assert_eq!(str_field(&body, "b"), None);
        assert_eq!(str_field(&body, "c"), None);
        assert_eq!(str_field(&body, "d"), None);
    }
}
