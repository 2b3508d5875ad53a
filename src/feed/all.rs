//! Full-feed endpoint.

use axum::extract::State;
use axum::{Extension, Json};
use serde_json::Value;

use crate::feed::error::FeedError;
use crate::feed::{base_url, relay_body, require_right, RIGHT_IPOID_FEED};
use crate::http::server::AppState;
use crate::security::identity::CallerIdentity;

/// `GET /feed/v1/all` — relay the complete ipoid feed.
///
/// Same pipeline as the per-IP endpoint minus the input-validation
/// stage: distinct right, distinct config key, fixed upstream path.
pub async fn all_feed(
    State(state): State<AppState>,
    Extension(caller): Extension<CallerIdentity>,
) -> Result<Json<Value>, FeedError> {
    require_right(state.rights.as_ref(), &caller, RIGHT_IPOID_FEED)?;

    let base = base_url(
        state.config.upstream.security_api_ipoid_url.as_deref(),
        "upstream.security_api_ipoid_url",
    )?;
    let url = format!("{base}/feed/v1/all");

    tracing::debug!(caller = %caller.name, "Fetching all feed");
    let body = match state.client.execute_get(&url).await {
        Ok(body) => body,
        Err(e) => {
            tracing::error!(url = %url, error = %e, "Upstream all feed request failed");
            return Err(e);
        }
    };

    Ok(Json(relay_body(&body)?))
}
