//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Load config → Validate → Init logging → Build client/state → Serve
//!
//! Shutdown (shutdown.rs):
//!     Ctrl+C → broadcast → server drains in-flight requests → Exit
//! ```

pub mod shutdown;

pub use shutdown::Shutdown;
