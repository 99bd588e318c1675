//! Tracing setup.
//!
//! Events go to stderr so they never interleave with menu prompts on stdout.

use std::io;

use tracing_subscriber::EnvFilter;

/// Picks `RUST_LOG` when set, otherwise `fallback`.
pub fn env_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new(crate::constants::DEFAULT_LOG_FILTER))
}

/// Installs the global subscriber. If one is already installed it stays in
/// place and the failure is reported on stderr.
pub fn init(fallback_filter: &str) {
    let result = tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(env_filter(fallback_filter))
        .with_target(false)
        .try_init();

    if let Err(e) = result {
        eprintln!("Failed to initialize logging: {}", e);
    }
}
