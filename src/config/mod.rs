//! Configuration module for memory-accessor
//!
//! Provides configuration loading, validation, and default settings
//! for access limits and logging.

mod defaults;
mod loader;
mod validator;

pub use defaults::{default_config, ConfigDefaults, DEFAULT_MAX_CHAIN_DEPTH, DEFAULT_MAX_READ_SIZE};
pub use loader::{load_config, ConfigLoader, DEFAULT_CONFIG_FILE};
pub use validator::{validate_config, ConfigValidator, MAX_CHAIN_DEPTH_CEILING, VALID_LOG_LEVELS};

// Re-export the configuration structures
pub use loader::{Config, LoggingConfig, MemoryConfig, PointerConfig};

// Configuration-related error type
pub use loader::ConfigError;

// Configuration result type
pub type ConfigResult<T> = Result<T, ConfigError>;
