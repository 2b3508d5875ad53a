//! Outbound HTTP client for the upstream feed services.

use std::time::Duration;

use axum::body::Bytes;

use crate::feed::error::FeedError;

/// Thin wrapper over [`reqwest::Client`] issuing the outbound feed GETs.
///
/// One request in, at most one request out: no retries, no caching.
/// Timeout enforcement is delegated entirely to the underlying client.
#[derive(Clone)]
pub struct FeedClient {
    http: reqwest::Client,
}

impl FeedClient {
    /// Build a client with the configured request timeout.
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http })
    }

    /// Issue a GET and return the body on a 2xx result.
    ///
    /// Transport failures and non-2xx statuses both surface as
    /// [`FeedError::Upstream`]. The carried status is the one the
    /// upstream reported; a failure that produced none (refused
    /// connection, timeout) carries 502.
    pub async fn execute_get(&self, url: &str) -> Result<Bytes, FeedError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Upstream {
                status: status.as_u16(),
                detail: format!("upstream returned {status}"),
            });
        }

        response.bytes().await.map_err(transport_error)
    }
}

fn transport_error(err: reqwest::Error) -> FeedError {
    FeedError::Upstream {
        status: err.status().map(|s| s.as_u16()).unwrap_or(502),
        detail: err.to_string(),
    }
}
