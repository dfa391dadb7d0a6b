//! Setup and initialization functions for CLI
//!
//! Logging and the async runtime used for the statistics batch.

use anyhow::{Context, Result};

/// Map `-v` occurrences to a default log filter.
pub fn log_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Initialise `env_logger` once. `RUST_LOG` takes precedence over `-v`.
pub fn init_logging(verbosity: u8) {
    let env = env_logger::Env::default().default_filter_or(log_filter(verbosity));
    if let Err(e) = env_logger::Builder::from_env(env).try_init() {
        // Already initialised - this is fine, just ignore
        eprintln!("Note: logger already configured: {}", e);
    }
}

/// Multi-threaded runtime for the concurrent statistics fetch.
pub fn build_runtime() -> Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")
}
