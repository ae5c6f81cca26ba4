//! Default configuration values for memory-accessor

use serde::{Deserialize, Serialize};

/// Byte-array read limit applied by a configured accessor (10 MiB)
pub const DEFAULT_MAX_READ_SIZE: usize = 10 * 1024 * 1024;

/// Chain depth limit applied by a configured accessor
pub const DEFAULT_MAX_CHAIN_DEPTH: usize = 64;

/// Default configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigDefaults {
    pub memory: MemoryDefaults,
    pub pointer: PointerDefaults,
    pub logging: LoggingDefaults,
}

/// Default memory configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryDefaults {
    pub max_read_size: usize,
}

/// Default pointer-chain configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointerDefaults {
    pub max_chain_depth: usize,
}

/// Default logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingDefaults {
    pub level: String,
    pub with_target: bool,
}

/// Returns the default configuration
pub fn default_config() -> ConfigDefaults {
    ConfigDefaults {
        memory: MemoryDefaults {
            max_read_size: DEFAULT_MAX_READ_SIZE,
        },
        pointer: PointerDefaults {
            max_chain_depth: DEFAULT_MAX_CHAIN_DEPTH,
        },
        logging: LoggingDefaults {
            level: "info".to_string(),
            with_target: false,
        },
    }
}
