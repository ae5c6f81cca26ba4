//! Configuration validator for memory-accessor
//!
//! Validates configuration values to ensure they are within acceptable ranges.

use super::loader::{Config, ConfigError, LoggingConfig, MemoryConfig, PointerConfig};

/// Deepest pointer chain a configuration may allow
pub const MAX_CHAIN_DEPTH_CEILING: usize = 4096;

/// Read sizes above this are accepted but logged
const LARGE_READ_WARNING: usize = 100 * 1024 * 1024;

/// Log levels accepted by the logging configuration
pub const VALID_LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Configuration validator
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates the entire configuration
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        Self::validate_memory(&config.memory)?;
        Self::validate_pointer(&config.pointer)?;
        Self::validate_logging(&config.logging)?;
        Ok(())
    }

    /// Validates memory configuration
    fn validate_memory(memory: &MemoryConfig) -> Result<(), ConfigError> {
        if memory.max_read_size == 0 {
            return Err(ConfigError::Invalid(
                "Maximum read size must be greater than 0".to_string(),
            ));
        }

        if memory.max_read_size > u32::MAX as usize {
            return Err(ConfigError::Invalid(format!(
                "Maximum read size cannot exceed {} bytes",
                u32::MAX
            )));
        }

        if memory.max_read_size > LARGE_READ_WARNING {
            tracing::warn!(
                max_read_size = memory.max_read_size,
                "maximum read size exceeds 100MB"
            );
        }

        Ok(())
    }

    /// Validates pointer-chain configuration
    fn validate_pointer(pointer: &PointerConfig) -> Result<(), ConfigError> {
        if pointer.max_chain_depth == 0 {
            return Err(ConfigError::Invalid(
                "Maximum chain depth must be at least 1".to_string(),
            ));
        }

        if pointer.max_chain_depth > MAX_CHAIN_DEPTH_CEILING {
            return Err(ConfigError::Invalid(format!(
                "Maximum chain depth cannot exceed {}",
                MAX_CHAIN_DEPTH_CEILING
            )));
        }

        Ok(())
    }

    /// Validates logging configuration
    fn validate_logging(logging: &LoggingConfig) -> Result<(), ConfigError> {
        if !VALID_LOG_LEVELS.contains(&logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::Invalid(format!(
                "Invalid log level: {}. Must be one of: {:?}",
                logging.level, VALID_LOG_LEVELS
            )));
        }

        Ok(())
    }
}

/// Validates a configuration
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    ConfigValidator::validate(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_zero_read_size() {
        let mut config = Config::default();
        config.memory.max_read_size = 0;
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("Maximum read size"));
    }

    #[test]
    fn test_read_size_above_u32() {
        let mut config = Config::default();
        config.memory.max_read_size = u32::MAX as usize + 1;
        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_large_read_size_only_warns() {
        let mut config = Config::default();
        config.memory.max_read_size = 200 * 1024 * 1024;
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_chain_depth_bounds() {
        let mut config = Config::default();
        config.pointer.max_chain_depth = 0;
        assert!(validate_config(&config).is_err());

        config.pointer.max_chain_depth = MAX_CHAIN_DEPTH_CEILING + 1;
        assert!(validate_config(&config).is_err());

        config.pointer.max_chain_depth = MAX_CHAIN_DEPTH_CEILING;
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_log_levels() {
        let mut config = Config::default();
        for level in ["trace", "DEBUG", "Info", "warn", "error", "off"] {
            config.logging.level = level.to_string();
            assert!(validate_config(&config).is_ok(), "level {} rejected", level);
        }

        config.logging.level = "verbose".to_string();
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("Invalid log level: verbose"));
    }
}
