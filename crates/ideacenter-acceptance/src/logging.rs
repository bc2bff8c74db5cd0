//! Logging setup for scenario runs
//!
//! Output goes through the test writer so `cargo test` captures it per test.
//! The level defaults to `info` and follows `RUST_LOG` when set.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

/// Install the global subscriber; later calls are no-ops
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // Another test in the same binary may have installed it already
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}
