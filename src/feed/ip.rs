//! Per-IP feed endpoint.

use std::net::IpAddr;

use axum::extract::{Path, State};
use axum::{Extension, Json};
use serde_json::Value;

use crate::feed::error::FeedError;
use crate::feed::{base_url, relay_body, require_right, RIGHT_FEED};
use crate::http::server::AppState;
use crate::security::identity::CallerIdentity;

/// `GET /feed/v1/ip/{ip}` — relay upstream intelligence for a single
/// address.
pub async fn ip_feed(
    State(state): State<AppState>,
    Extension(caller): Extension<CallerIdentity>,
    Path(ip): Path<String>,
) -> Result<Json<Value>, FeedError> {
    require_right(state.rights.as_ref(), &caller, RIGHT_FEED)?;
    validate_ip(&ip)?;

    let base = base_url(
        state.config.upstream.security_api_url.as_deref(),
        "upstream.security_api_url",
    )?;
    let url = format!("{base}/feed/v1/ip/{ip}");

    tracing::debug!(caller = %caller.name, ip = %ip, "Fetching ip feed");
    let body = match state.client.execute_get(&url).await {
        Ok(body) => body,
        Err(e) => {
            tracing::error!(url = %url, error = %e, "Upstream ip feed request failed");
            return Err(e);
        }
    };

    Ok(Json(relay_body(&body)?))
}

/// Accept exactly the IPv4/IPv6 literal grammar. No DNS resolution,
/// no CIDR ranges.
fn validate_ip(raw: &str) -> Result<(), FeedError> {
    raw.parse::<IpAddr>()
        .map(|_| ())
        .map_err(|_| FeedError::InvalidIp(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_ip_literals() {
        for ip in ["1.1.1.1", "255.255.255.255", "::1", "2001:db8::ff00:42:8329"] {
            assert!(validate_ip(ip).is_ok(), "{ip} should be accepted");
        }
    }

    #[test]
    fn test_invalid_ip_literals() {
        for raw in [
            "a.s.d.f",
            "1.1.1",
            "1.1.1.256",
            "1.1.1.1/24",
            "example.com",
            "2001:db8::g",
            "",
            " 1.1.1.1",
        ] {
            let err = validate_ip(raw).unwrap_err();
            assert!(
                matches!(err, FeedError::InvalidIp(_)),
                "{raw:?} should be rejected"
            );
        }
    }
}
