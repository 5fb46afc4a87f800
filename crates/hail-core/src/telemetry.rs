//! Tracing subscriber setup for binaries and tests that want output.

use tracing_subscriber::EnvFilter;

/// Install the global fmt subscriber, filtered by `RUST_LOG`
/// (default `info`). Safe to call more than once; later calls are no-ops.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
