//! Diagnostic logging setup.
//!
//! Logs go to stderr so stdout stays clean for command output.

use std::io;

use tracing_subscriber::EnvFilter;

/// Environment variable holding a log filter, e.g. `PAGESCAN_LOG=debug`.
pub const LOG_ENV: &str = "PAGESCAN_LOG";

/// Filter used when neither `-v` nor [`LOG_ENV`] is given.
const DEFAULT_FILTER: &str = "warn";

/// Installs the global subscriber.
///
/// `-v` selects `info` and `-vv` or more selects `debug`; otherwise the filter
/// comes from [`LOG_ENV`], falling back to warnings only.
pub fn init(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
        1 => EnvFilter::new("info"),
        _ => EnvFilter::new("debug"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
