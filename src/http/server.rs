//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the feed handlers
//! - Wire up middleware (request ID, tracing, identity resolution)
//! - Bind server to listener
//! - Serve with graceful shutdown

use std::sync::Arc;

use axum::{middleware, routing::get, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::trace::TraceLayer;

use crate::config::GatewayConfig;
use crate::feed::all::all_feed;
use crate::feed::ip::ip_feed;
use crate::feed::FeedClient;
use crate::http::request::request_id_middleware;
use crate::security::identity::resolve_identity;
use crate::security::rights::TokenRights;

/// Application state injected into handlers.
///
/// Requests share it read-only; nothing here mutates between calls.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<GatewayConfig>,
    pub rights: Arc<TokenRights>,
    pub client: FeedClient,
}

/// HTTP server for the feed gateway.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: GatewayConfig, client: FeedClient) -> Self {
        let rights = Arc::new(TokenRights::from_config(&config.auth));

        let state = AppState {
            config: Arc::new(config),
            rights,
            client,
        };

        let router = Self::build_router(state);
        Self { router }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/feed/v1/ip/{ip}", get(ip_feed))
            .route("/feed/v1/all", get(all_feed))
            .layer(middleware::from_fn_with_state(
                state.clone(),
                resolve_identity,
            ))
            .with_state(state)
            .layer(middleware::from_fn(request_id_middleware))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server until the shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
