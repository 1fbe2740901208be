//! # Telemetry
//!
//! Tracing subscriber initialization. The filter defaults to `info` and is
//! overridable through `RUST_LOG`.

use tracing_subscriber::EnvFilter;

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Installs a human-readable subscriber. Safe to call more than once; later
/// calls are no-ops.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .try_init();
}

/// Installs a JSON subscriber for structured log transport.
pub fn init_json() {
    let _ = tracing_subscriber::fmt()
        .json()
        .with_env_filter(env_filter())
        .try_init();
}
