//! Core type definitions for memory-accessor
//!
//! This module contains the fundamental types used throughout the crate:
//! the address wrapper, typed memory values and the error taxonomy.

mod address;
mod error;
mod value;

// Re-export all public types
pub use address::Address;
pub use error::{ErrorKind, MemoryError, MemoryResult, ReadFailure};
pub use value::{MemoryValue, ValueType};

// Common type aliases
pub type Offset = u64;
