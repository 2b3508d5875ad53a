//! Caller-visible error payload construction.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::Value;

/// Structured payload returned on every failure.
///
/// The (message-key, params, status) triple the feed error taxonomy
/// maps into; `params` carries message substitutions when a key takes
/// any.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorPayload {
    /// Localization key identifying the failure.
    pub message_key: String,
    /// Substitution parameters for the message.
    pub params: Vec<Value>,
    /// HTTP status code associated with the failure.
    pub http_code: u16,
}

/// Build the outbound representation of a failure.
///
/// Pure function from (status, key) to the wire response; no handler
/// constructs error bodies by hand.
pub fn error_response(status: StatusCode, message_key: &str) -> Response {
    let payload = ErrorPayload {
        message_key: message_key.to_string(),
        params: Vec::new(),
        http_code: status.as_u16(),
    };
    (status, Json(payload)).into_response()
}
