//! Logging init: structured events to stderr, filtered by `RUST_LOG`

use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or unparsable
const DEFAULT_FILTER: &str = "warn";

/// Install the global tracing subscriber
///
/// Stdout is reserved for the success line, so events always go to stderr.
pub fn init_logging() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
}
