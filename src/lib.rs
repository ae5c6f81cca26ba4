//! Typed memory access and pointer-chain resolution over a raw process-memory handle
//!
//! The crate never talks to a process itself. Callers implement
//! [`RawMemory`] for whatever reaches their target and pass it to
//! [`MemoryAccessor`] on every call.

pub mod config;
pub mod core;
pub mod logging;
pub mod memory;

// Re-export main types from core module
pub use crate::core::types::{
    Address, ErrorKind, MemoryError, MemoryResult, MemoryValue, Offset, ReadFailure, ValueType,
};

// Re-export the accessor surface
pub use memory::{
    byte_array_to_int, MemoryAccessor, PointerChain, Primitive, RawMemory, SparseMemory,
};
