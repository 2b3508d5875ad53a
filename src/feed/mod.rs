//! Feed relay endpoints.
//!
//! # Data Flow
//! ```text
//! GET /feed/v1/ip/{ip}   → ip.rs
//! GET /feed/v1/all       → all.rs
//!     → permission gate (security::rights)
//!     → input validation (ip.rs only)
//!     → base URL from config
//!     → client.rs (one outbound GET, no retries)
//!     → upstream JSON body relayed verbatim, status 200
//! ```
//!
//! # Design Decisions
//! - Each guard short-circuits; exactly one outcome terminates a
//!   request
//! - Failures are uniform (message-key, params, status) triples, never
//!   ad hoc strings (error.rs)
//! - The upstream body is relayed without schema validation; any
//!   well-formed JSON value passes through unchanged

pub mod all;
pub mod client;
pub mod error;
pub mod ip;

pub use client::FeedClient;
pub use error::FeedError;

use crate::security::identity::CallerIdentity;
use crate::security::rights::RightsChecker;

/// Right required by the per-IP endpoint.
pub const RIGHT_FEED: &str = "securityapi-feed";
/// Right required by the all-feed endpoint.
pub const RIGHT_IPOID_FEED: &str = "securityapi-ipoid-feed";

/// First pipeline guard: the caller must hold `right`.
pub(crate) fn require_right(
    rights: &dyn RightsChecker,
    caller: &CallerIdentity,
    right: &str,
) -> Result<(), FeedError> {
    if rights.user_has_right(caller, right) {
        Ok(())
    } else {
        tracing::warn!(caller = %caller.name, right, "Access denied");
        Err(FeedError::AccessDenied {
            caller: caller.name.clone(),
            registered: caller.registered,
        })
    }
}

/// Read a configured base URL, treating empty the same as absent.
pub(crate) fn base_url<'a>(
    value: Option<&'a str>,
    key: &'static str,
) -> Result<&'a str, FeedError> {
    match value {
        Some(url) if !url.is_empty() => Ok(url),
        _ => Err(FeedError::MisconfiguredUpstream(key)),
    }
}

/// Parse the upstream body, relaying any well-formed JSON value.
///
/// A 2xx body that is not JSON counts as an upstream failure and maps
/// to 502.
pub(crate) fn relay_body(body: &[u8]) -> Result<serde_json::Value, FeedError> {
    serde_json::from_slice(body).map_err(|e| FeedError::Upstream {
        status: 502,
        detail: format!("upstream body is not valid JSON: {e}"),
    })
}
