use super::config::LogLevel;
use std::io::IsTerminal;
use std::sync::OnceLock;
use thiserror::Error;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InitializationError {
    #[error("Logging system initialization failed: {details}")]
    LoggingInitFailed { details: String },
}

/// Filter directive for the given level. Diagnostics from this crate and its
/// dependencies share the same level.
pub fn build_filter_string(level: LogLevel) -> String {
    level.as_str().to_string()
}

fn install_subscriber(level: LogLevel) -> Result<(), InitializationError> {
    let filter_string = build_filter_string(level);

    let env_filter =
        EnvFilter::try_new(&filter_string).map_err(|e| InitializationError::LoggingInitFailed {
            details: format!("Failed to create EnvFilter with '{filter_string}': {e}"),
        })?;

    // stdout carries labels only.
    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .with_ansi(std::io::stderr().is_terminal())
            .compact(),
    );

    tracing::subscriber::set_global_default(subscriber).map_err(|e| {
        InitializationError::LoggingInitFailed {
            details: format!("Failed to set global tracing subscriber: {e}"),
        }
    })
}

/// Installs the global subscriber once per process. Later calls return the
/// outcome of the first one, whatever level they ask for.
pub fn setup_logging(level: LogLevel) -> Result<(), InitializationError> {
    static INIT: OnceLock<Result<(), InitializationError>> = OnceLock::new();

    INIT.get_or_init(|| install_subscriber(level)).clone()
}
