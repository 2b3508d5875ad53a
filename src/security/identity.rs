//! Caller identity resolution.
//!
//! The identity is resolved exactly once per inbound request, by
//! middleware, and attached to the request extensions. Handlers
//! receive it as a parameter instead of reaching for any global
//! request state.

use axum::{
    body::Body,
    extract::State,
    http::{header, Request},
    middleware::Next,
    response::Response,
};

use crate::http::server::AppState;

/// The principal an inbound request is made on behalf of.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerIdentity {
    /// Principal name; `"anonymous"` for unauthenticated callers.
    pub name: String,
    /// Whether the caller presented a recognized credential.
    pub registered: bool,
}

impl CallerIdentity {
    /// The identity assigned to callers without a recognized credential.
    pub fn anonymous() -> Self {
        Self {
            name: "anonymous".to_string(),
            registered: false,
        }
    }

    /// A registered principal resolved from a credential.
    pub fn registered(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            registered: true,
        }
    }
}

/// Resolve the caller once and attach it to the request extensions.
///
/// A bearer token matching a configured principal yields that
/// registered identity; anything else is the anonymous caller.
pub async fn resolve_identity(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let caller = bearer_token(&request)
        .and_then(|token| state.rights.identity_for_token(token))
        .unwrap_or_else(CallerIdentity::anonymous);

    tracing::debug!(
        caller = %caller.name,
        registered = caller.registered,
        "Caller resolved"
    );

    request.extensions_mut().insert(caller);
    next.run(request).await
}

fn bearer_token(request: &Request<Body>) -> Option<&str> {
    request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
}
