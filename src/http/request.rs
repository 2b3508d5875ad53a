//! Request identification.
//!
//! # Responsibilities
//! - Ensure every request carries an `x-request-id`
//! - Generate a UUID v4 when the client supplied none
//! - Echo the ID on the response for correlation

use axum::{
    body::Body,
    http::{HeaderValue, Request},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

/// Header carrying the request correlation ID.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Middleware attaching the request ID as early as possible so every
/// log line for a request can be correlated.
pub async fn request_id_middleware(mut request: Request<Body>, next: Next) -> Response {
    let id = request
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    match HeaderValue::from_str(&id) {
        Ok(value) => {
            request.headers_mut().insert(X_REQUEST_ID, value.clone());
            let mut response = next.run(request).await;
            response.headers_mut().insert(X_REQUEST_ID, value);
            response
        }
        // Client sent an unrepresentable ID; pass through untouched.
        Err(_) => next.run(request).await,
    }
}
