//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the bind address and upstream URLs actually parse
//! - Detect duplicate or empty principal entries
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: GatewayConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;
use std::net::SocketAddr;

use url::Url;

use crate::config::schema::GatewayConfig;

/// A single semantic violation found in a config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending field.
    pub field: String,
    /// Description of the violation.
    pub message: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a configuration, collecting every violation.
pub fn validate_config(config: &GatewayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::new(
            "listener.bind_address",
            format!("not a socket address: {:?}", config.listener.bind_address),
        ));
    }

    check_base_url(
        &mut errors,
        "upstream.security_api_url",
        config.upstream.security_api_url.as_deref(),
    );
    check_base_url(
        &mut errors,
        "upstream.security_api_ipoid_url",
        config.upstream.security_api_ipoid_url.as_deref(),
    );

    if config.upstream.request_timeout_secs == 0 {
        errors.push(ValidationError::new(
            "upstream.request_timeout_secs",
            "must be greater than zero",
        ));
    }

    let mut seen_names = HashSet::new();
    let mut seen_tokens = HashSet::new();
    for (i, principal) in config.auth.principals.iter().enumerate() {
        let field = format!("auth.principals[{i}]");
        if principal.name.is_empty() {
            errors.push(ValidationError::new(&field, "name must not be empty"));
        }
        if principal.token.is_empty() {
            errors.push(ValidationError::new(&field, "token must not be empty"));
        }
        if !seen_names.insert(principal.name.as_str()) {
            errors.push(ValidationError::new(
                &field,
                format!("duplicate principal name {:?}", principal.name),
            ));
        }
        if !seen_tokens.insert(principal.token.as_str()) {
            errors.push(ValidationError::new(&field, "duplicate token"));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// A base URL may be absent (the request path reports that as
/// `securityapi-invalid-url`), but a present, non-empty one must parse.
fn check_base_url(errors: &mut Vec<ValidationError>, field: &str, value: Option<&str>) {
    let Some(raw) = value else { return };
    if raw.is_empty() {
        return;
    }
    if Url::parse(raw).is_err() {
        errors.push(ValidationError::new(
            field,
            format!("not a valid URL: {raw:?}"),
        ));
    }
}
