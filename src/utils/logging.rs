//! Tracing bootstrap for hosts embedding the crate.
//!
//! The library itself only emits `tracing` events. A host that wants them
//! on a console calls [`init`] once at startup; a host with its own
//! subscriber skips this module entirely.

use tracing_subscriber::EnvFilter;

/// Installs a console subscriber filtered by `RUST_LOG`, falling back to
/// `default_directive` (for example `"emuhub=info"`) when the variable is
/// unset. Invalid directives in the fallback are ignored rather than fatal.
///
/// Repeat calls are no-ops, so parallel tests can each call this safely.
pub fn init(default_directive: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
