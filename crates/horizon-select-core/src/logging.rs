//! Tracing integration for Horizon Select.
//!
//! All crates in the workspace log through the `tracing` crate. Install a
//! subscriber in the host application to see the output:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("horizon_select=debug")
//!     .init();
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core primitives target.
    pub const CORE: &str = "horizon_select_core";
    /// Signal emission target.
    pub const SIGNAL: &str = "horizon_select_core::signal";
    /// Selection adapter target.
    pub const ADAPTER: &str = "horizon_select::adapter";
    /// Configuration loading target.
    pub const CONFIG: &str = "horizon_select::config";
}
