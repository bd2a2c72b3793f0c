//! Tracing initialization for embedding hosts.

use tracing_subscriber::{fmt, EnvFilter};

/// Installs a formatted tracing subscriber honoring `RUST_LOG`.
///
/// Defaults to `info` for this crate when no filter is set. Safe to call
/// more than once: subsequent calls are no-ops.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("frontdesk=info"));
    let _ = fmt().with_env_filter(filter).try_init();
}
