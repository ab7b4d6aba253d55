//! Tracing subscriber configuration for hosts embedding the middleware.
//!
//! Log levels follow these conventions:
//! - ERROR: Routing failed after the inner transfer committed
//! - WARN: Packets rejected before the inner transfer
//! - INFO: Received packets, routes taken, burns deposited
//! - DEBUG: Parsed directives, burn requests
//! - TRACE: Memos that are not routing metadata

use tracing_subscriber::EnvFilter;

use crate::config::LoggingSection;

/// Filter from `RUST_LOG`, falling back to `default_level`.
pub fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Initialize the tracing subscriber with human-readable output.
pub fn init(default_level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_level))
        .init();
}

/// Initialize the tracing subscriber with JSON output.
pub fn init_json(default_level: &str) {
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(env_filter(default_level))
        .init();
}

/// Initialize from the `[logging]` config section.
pub fn init_from_config(section: &LoggingSection) {
    if section.json {
        init_json(&section.level);
    } else {
        init(&section.level);
    }
}

/// Initialize the tracing subscriber for tests.
///
/// Uses `try_init` to avoid panicking if called multiple times.
pub fn init_for_tests() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter("debug"))
        .with_test_writer()
        .try_init();
}
