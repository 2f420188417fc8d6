//! Log subscriber installation.

use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Errors raised while installing the log subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The configured filter directive does not parse.
    #[error("invalid log filter '{directive}': {reason}")]
    InvalidFilter {
        /// Rejected directive.
        directive: String,
        /// Parser message.
        reason: String,
    },

    /// A global subscriber is already installed.
    #[error("log subscriber already installed: {0}")]
    AlreadyInstalled(String),
}

/// Builds the filter: `RUST_LOG` when set and valid, otherwise
/// `default_directive`.
///
/// # Errors
///
/// Returns [`TelemetryError::InvalidFilter`] when `RUST_LOG` is unusable and
/// `default_directive` does not parse either.
pub fn env_filter(default_directive: &str) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_from_default_env().or_else(|_| {
        EnvFilter::try_new(default_directive).map_err(|error| TelemetryError::InvalidFilter {
            directive: default_directive.to_owned(),
            reason: error.to_string(),
        })
    })
}

/// Installs a formatting subscriber that writes to standard error.
///
/// Standard output is left to the relay's JSON lines.
///
/// # Errors
///
/// Returns [`TelemetryError`] when the filter is invalid or a subscriber is
/// already installed.
pub fn init_tracing(default_directive: &str) -> Result<(), TelemetryError> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_directive)?)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|error| TelemetryError::AlreadyInstalled(error.to_string()))
}
