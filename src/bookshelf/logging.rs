//! Tracing/logging initialization.
//!
//! Logs go to stderr so they never mix with rendered shelves on stdout.
//! The filter comes from `BOOKSHELF_LOG`, then `RUST_LOG`, then the level
//! passed in by the caller (config or `--verbose`).

use tracing_subscriber::EnvFilter;

pub const LOG_ENV_VAR: &str = "BOOKSHELF_LOG";

fn filter_from_env(fallback_level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(fallback_level))
}

/// Initialize tracing for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init(fallback_level: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter_from_env(fallback_level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}
