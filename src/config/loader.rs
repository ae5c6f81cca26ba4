//! Configuration loader for memory-accessor
//!
//! Handles loading configuration from TOML files and merging with defaults.

use super::defaults::default_config;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name looked up by [`load_config`]
pub const DEFAULT_CONFIG_FILE: &str = "memory-accessor.toml";

/// Configuration error type
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Logging initialization failed: {0}")]
    Logging(String),
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_memory")]
    pub memory: MemoryConfig,

    #[serde(default = "default_pointer")]
    pub pointer: PointerConfig,

    #[serde(default = "default_logging")]
    pub logging: LoggingConfig,
}

/// Typed read/write configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryConfig {
    #[serde(default = "default_max_read_size")]
    pub max_read_size: usize,
}

/// Pointer-chain configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointerConfig {
    #[serde(default = "default_max_chain_depth")]
    pub max_chain_depth: usize,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_with_target")]
    pub with_target: bool,
}

/// Configuration loader
pub struct ConfigLoader {
    config_path: PathBuf,
}

impl ConfigLoader {
    /// Creates a new configuration loader
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        ConfigLoader {
            config_path: path.as_ref().to_path_buf(),
        }
    }

    /// Loads configuration from file
    pub fn load(&self) -> Result<Config, ConfigError> {
        if !self.config_path.exists() {
            return Err(ConfigError::FileNotFound(
                self.config_path.display().to_string(),
            ));
        }

        let contents = fs::read_to_string(&self.config_path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Loads configuration or returns defaults if the file is missing or unreadable
    pub fn load_or_default(&self) -> Config {
        match self.load() {
            Ok(config) => config,
            Err(ConfigError::FileNotFound(_)) => Config::default(),
            Err(err) => {
                tracing::warn!(
                    path = %self.config_path.display(),
                    error = %err,
                    "falling back to default configuration"
                );
                Config::default()
            }
        }
    }

    /// Saves configuration to file
    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        let contents = toml::to_string_pretty(config)?;
        fs::write(&self.config_path, contents)?;
        Ok(())
    }
}

/// Loads configuration from the default location, falling back to defaults
pub fn load_config() -> Result<Config, ConfigError> {
    let loader = ConfigLoader::new(DEFAULT_CONFIG_FILE);
    let config = loader.load_or_default();
    super::validate_config(&config)?;
    Ok(config)
}

// Default functions for serde
fn default_memory() -> MemoryConfig {
    MemoryConfig {
        max_read_size: default_max_read_size(),
    }
}

fn default_pointer() -> PointerConfig {
    PointerConfig {
        max_chain_depth: default_max_chain_depth(),
    }
}

fn default_logging() -> LoggingConfig {
    let defaults = default_config();
    LoggingConfig {
        level: defaults.logging.level,
        with_target: defaults.logging.with_target,
    }
}

// Individual field defaults
fn default_max_read_size() -> usize {
    default_config().memory.max_read_size
}

fn default_max_chain_depth() -> usize {
    default_config().pointer.max_chain_depth
}

fn default_log_level() -> String {
    default_config().logging.level
}

fn default_with_target() -> bool {
    default_config().logging.with_target
}

impl Default for Config {
    fn default() -> Self {
        Config {
            memory: default_memory(),
            pointer: default_pointer(),
            logging: default_logging(),
        }
    }
}
