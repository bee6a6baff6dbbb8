//! Logging initialisation for the `seqgraphs` binary.
//!
//! Diagnostics go to `stderr` so the report on `stdout` stays clean. The level is controlled via
//! `RUST_LOG` and defaults to `warn`.

use thiserror::Error;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "warn";

/// Errors raised while initialising structured logging.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// Failed to install the global tracing subscriber.
    #[error("failed to install tracing subscriber: {source}")]
    InstallFailed {
        /// Error raised by `tracing_subscriber`.
        #[source]
        source: tracing_subscriber::util::TryInitError,
    },
}

/// Installs the global `tracing` subscriber.
///
/// # Errors
/// Returns [`LoggingError`] if a global subscriber is already installed.
pub fn init_logging() -> Result<(), LoggingError> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .map_err(|source| LoggingError::InstallFailed { source })
}
