//! Core module containing fundamental types for memory-accessor
//!
//! This module provides the foundational building blocks used throughout
//! the crate, including address handling, memory values and error types.

pub mod types;

// Re-export commonly used types for convenience
pub use types::{Address, ErrorKind, MemoryError, MemoryResult, MemoryValue, ValueType};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");
