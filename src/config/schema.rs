//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the
//! gateway. All types derive Serde traits for deserialization from
//! config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the feed gateway.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct GatewayConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Upstream feed service endpoints.
    pub upstream: UpstreamConfig,

    /// Caller credentials and the rights they grant.
    pub auth: AuthConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Upstream feed service configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Base URL of the security-api feed service, queried by the
    /// per-IP endpoint. Requests fail with `securityapi-invalid-url`
    /// while unset.
    pub security_api_url: Option<String>,

    /// Base URL of the ipoid feed service, queried by the all-feed
    /// endpoint.
    pub security_api_ipoid_url: Option<String>,

    /// Outbound request timeout in seconds, enforced by the HTTP
    /// client.
    pub request_timeout_secs: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            security_api_url: None,
            security_api_ipoid_url: None,
            request_timeout_secs: 30,
        }
    }
}

/// Caller authentication and rights configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AuthConfig {
    /// Rights granted to callers without a recognized credential.
    pub anonymous_rights: Vec<String>,

    /// Registered principals, matched by bearer token.
    pub principals: Vec<PrincipalConfig>,
}

/// A registered caller and the rights it holds.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PrincipalConfig {
    /// Principal name, used in logs and rights lookups.
    pub name: String,

    /// Bearer token presented in the Authorization header.
    pub token: String,

    /// Named rights granted to this principal.
    #[serde(default)]
    pub rights: Vec<String>,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GatewayConfig::default();
        assert!(config.upstream.security_api_url.is_none());
        assert!(config.upstream.security_api_ipoid_url.is_none());
        assert_eq!(config.upstream.request_timeout_secs, 30);
        assert!(config.auth.anonymous_rights.is_empty());
        assert!(config.auth.principals.is_empty());
    }

    #[test]
    fn test_minimal_toml_parses() {
        let config: GatewayConfig = toml::from_str(
            r#"
            [upstream]
            security_api_url = "https://feed.example"

            [[auth.principals]]
            name = "reader"
            token = "secret"
            rights = ["securityapi-feed"]
            "#,
        )
        .unwrap();

        assert_eq!(
            config.upstream.security_api_url.as_deref(),
            Some("https://feed.example")
        );
        assert!(config.upstream.security_api_ipoid_url.is_none());
        assert_eq!(config.auth.principals.len(), 1);
        assert_eq!(config.auth.principals[0].rights, vec!["securityapi-feed"]);
        // Untouched sections fall back to defaults.
        assert_eq!(config.listener.bind_address, "0.0.0.0:8080");
    }
}
