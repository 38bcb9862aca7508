//! Diagnostic logging setup.
//!
//! Diagnostics go to stderr through `tracing-subscriber`, never to the
//! rendered output. The filter comes from `LOGTINT_LOG` when set (same syntax
//! as `RUST_LOG`), otherwise from the `-v` count.

use tracing_subscriber::EnvFilter;

use crate::AppError;

/// Environment variable holding an explicit filter directive.
pub const LOG_ENV: &str = "LOGTINT_LOG";

/// Default filter directive for a given `-v` count.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Installs the global subscriber. Call once, before processing starts.
pub fn init(verbosity: u8) -> Result<(), AppError> {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))
}
