//! securityapi-gateway
//!
//! A small HTTP gateway fronting the security-api and ipoid feed
//! services. Every inbound request runs the same pipeline:
//!
//! ```text
//!     Client Request
//!     ────────────────▶ permission gate (security)
//!                           │
//!                           ▼
//!                       input validation (feed::ip only)
//!                           │
//!                           ▼
//!                       upstream GET (feed::client)
//!                           │
//!     Client Response       ▼
//!     ◀──────────────── JSON body relayed verbatim
//! ```
//!
//! Failures short-circuit into a structured (message-key, status)
//! error payload; nothing is retried and no state is shared between
//! requests.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tokio::net::TcpListener;

use securityapi_gateway::config::loader::load_config;
use securityapi_gateway::config::GatewayConfig;
use securityapi_gateway::feed::FeedClient;
use securityapi_gateway::observability::logging::init_logging;
use securityapi_gateway::{HttpServer, Shutdown};

#[derive(Parser, Debug)]
#[command(
    name = "securityapi-gateway",
    version,
    about = "HTTP gateway for the security-api and ipoid feeds"
)]
struct Cli {
    /// Path to the TOML configuration file. Defaults apply when omitted.
    #[arg(long, short)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => GatewayConfig::default(),
    };

    init_logging(&config.observability);

    tracing::info!(
        bind_address = %config.listener.bind_address,
        security_api_url = config.upstream.security_api_url.as_deref().unwrap_or("<unset>"),
        security_api_ipoid_url = config.upstream.security_api_ipoid_url.as_deref().unwrap_or("<unset>"),
        principals = config.auth.principals.len(),
        "Configuration loaded"
    );

    let client = FeedClient::new(Duration::from_secs(config.upstream.request_timeout_secs))?;

    let listener = TcpListener::bind(&config.listener.bind_address).await?;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move { shutdown.listen_for_ctrl_c().await });

    let server = HttpServer::new(config, client);
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
