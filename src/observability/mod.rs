//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via tracing; the request ID attached in
//!   http::request flows through all log lines
//! - Log filter comes from config, overridable with RUST_LOG
//! - No metrics endpoint; logging is the only observability surface

pub mod logging;
