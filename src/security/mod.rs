//! Caller identity and rights subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request:
//!     → identity.rs (bearer token → CallerIdentity, once per request)
//!     → request extensions (identity travels with the request)
//!     → rights.rs (named-right decisions consumed by the feed handlers)
//! ```
//!
//! # Design Decisions
//! - Identity is resolved once per request and passed explicitly;
//!   there is no ambient "current request" context
//! - Unknown or absent credentials resolve to the anonymous caller,
//!   never to an outright rejection; rights decide what a caller may do
//! - Rights checking sits behind a trait so tests can substitute
//!   deciders

pub mod identity;
pub mod rights;

pub use identity::CallerIdentity;
pub use rights::{RightsChecker, TokenRights};
