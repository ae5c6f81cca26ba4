//! Tracing subscriber setup driven by [`LoggingConfig`]

use crate::config::{ConfigError, LoggingConfig};
use tracing_subscriber::EnvFilter;

/// Build the filter for a logging configuration. `RUST_LOG` wins when set.
pub fn env_filter(config: &LoggingConfig) -> Result<EnvFilter, ConfigError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(config.level.to_lowercase())
            .map_err(|e| ConfigError::Invalid(format!("log level {}: {}", config.level, e))),
    }
}

/// Install a global fmt subscriber.
///
/// Fails instead of panicking if a global subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<(), ConfigError> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config)?)
        .with_target(config.with_target)
        .try_init()
        .map_err(|e| ConfigError::Logging(e.to_string()))
}
