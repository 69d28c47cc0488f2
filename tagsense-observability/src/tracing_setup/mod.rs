//! Tracing setup: structured JSON logging and event helpers.

pub mod events;

use tracing_subscriber::EnvFilter;

/// Environment variable read by [`init_tracing`].
pub const LOG_ENV: &str = "TAGSENSE_LOG";

/// Install the JSON subscriber, filtered by `TAGSENSE_LOG` (default `info`).
///
/// Returns `false` when a global subscriber was already installed.
pub fn init_tracing() -> bool {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .json()
        .try_init()
        .is_ok()
}

/// Install the JSON subscriber with a custom filter string (for tests or embedding).
pub fn init_tracing_with_filter(filter: &str) -> bool {
    let filter = EnvFilter::new(filter);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .json()
        .try_init()
        .is_ok()
}
