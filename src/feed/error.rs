//! Error taxonomy for the feed endpoints.
//!
//! Every failure a handler can produce maps to a uniform
//! (message-key, params, HTTP-status) triple so the caller-visible
//! contract stays machine-checkable. Status codes are fixed per kind,
//! except upstream failures which forward the status the upstream
//! reported.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::http::response::error_response;

/// Message key for permission failures.
pub const MSG_ACCESS_DENIED: &str = "securityapi-rest-access-denied";
/// Message key for malformed IP literals.
pub const MSG_INVALID_IP: &str = "securityapi-invalid-ip";
/// Message key for an unconfigured upstream base URL.
pub const MSG_INVALID_URL: &str = "securityapi-invalid-url";
/// Message key for upstream failures.
pub const MSG_REST_ERROR: &str = "securityapi-rest-error";

/// Failures terminating a feed request.
#[derive(Debug, Error)]
pub enum FeedError {
    /// Caller lacks the required right.
    #[error("access denied for {caller}")]
    AccessDenied { caller: String, registered: bool },

    /// Path parameter is not an IPv4 or IPv6 literal.
    #[error("invalid ip literal: {0:?}")]
    InvalidIp(String),

    /// Upstream base URL absent from configuration. Carries the config
    /// key that was empty; an operator error, not a caller error.
    #[error("no base URL configured at {0}")]
    MisconfiguredUpstream(&'static str),

    /// Outbound call failed or returned a non-OK result.
    #[error("upstream request failed with status {status}: {detail}")]
    Upstream { status: u16, detail: String },
}

impl FeedError {
    /// Localization key identifying this failure to the caller.
    pub fn message_key(&self) -> &'static str {
        match self {
            FeedError::AccessDenied { .. } => MSG_ACCESS_DENIED,
            FeedError::InvalidIp(_) => MSG_INVALID_IP,
            FeedError::MisconfiguredUpstream(_) => MSG_INVALID_URL,
            FeedError::Upstream { .. } => MSG_REST_ERROR,
        }
    }

    /// HTTP status reported to the caller.
    pub fn status(&self) -> StatusCode {
        match self {
            FeedError::AccessDenied {
                registered: true, ..
            } => StatusCode::FORBIDDEN,
            FeedError::AccessDenied {
                registered: false, ..
            } => StatusCode::UNAUTHORIZED,
            FeedError::InvalidIp(_) | FeedError::MisconfiguredUpstream(_) => {
                StatusCode::BAD_REQUEST
            }
            // Forwarded from the upstream failure; the client already
            // substituted 502 when the upstream reported nothing usable.
            FeedError::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
        }
    }
}

impl IntoResponse for FeedError {
    fn into_response(self) -> Response {
        error_response(self.status(), self.message_key())
    }
}
