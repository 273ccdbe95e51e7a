//! Logging facilities for Tactile.
//!
//! Tactile uses the `tracing` crate for instrumentation. Nothing is printed
//! unless the application installs a subscriber:
//!
//! ```ignore
//! use tracing_subscriber::EnvFilter;
//!
//! tracing_subscriber::fmt()
//!     .with_env_filter(EnvFilter::new("tactile=debug,tactile_core=trace"))
//!     .init();
//! ```
//!
//! Every event is emitted under one of the [`targets`], so a subsystem can be
//! enabled on its own.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Signal/slot system target.
    pub const SIGNAL: &str = "tactile_core::signal";
    /// Thread affinity checks.
    pub const THREAD: &str = "tactile_core::thread_check";
    /// Control wrapper and side table.
    pub const CONTROL: &str = "tactile::control";
    /// Per-control signal stores.
    pub const STORE: &str = "tactile::control::store";
    /// Native event dispatch into signals.
    pub const BRIDGE: &str = "tactile::control::bridge";
}
