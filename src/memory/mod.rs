//! Typed memory access on top of a raw memory capability
//!
//! This module provides:
//! - The [`RawMemory`] capability trait and an in-memory implementation
//! - Little-endian codecs for the supported primitives
//! - Typed reads and writes with exact-length validation
//! - Multi-level pointer-chain resolution

pub mod backend;
pub mod codec;
pub mod pointer;
pub mod raw;
pub mod reader;
pub mod writer;

pub use backend::SparseMemory;
pub use codec::{byte_array_to_int, Primitive};
pub use pointer::PointerChain;
pub use raw::RawMemory;

use crate::config::{Config, MemoryConfig, PointerConfig};

/// Typed reads, writes and pointer-chain resolution over any [`RawMemory`].
///
/// The accessor holds only its limits. The memory capability is passed to
/// every call and never retained, so one accessor can serve any number of
/// targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryAccessor {
    max_read_size: usize,
    max_chain_depth: usize,
}

impl MemoryAccessor {
    /// Create an accessor with no size or depth limits
    pub fn new() -> Self {
        Self::with_limits(usize::MAX, usize::MAX)
    }

    /// Create an accessor bounded by the configured read size and chain depth
    pub fn from_config(memory: &MemoryConfig, pointer: &PointerConfig) -> Self {
        Self::with_limits(memory.max_read_size, pointer.max_chain_depth)
    }

    /// Create an accessor using the limits from a loaded configuration
    pub fn with_config(config: &Config) -> Self {
        Self::from_config(&config.memory, &config.pointer)
    }

    /// Create an accessor with explicit limits
    pub fn with_limits(max_read_size: usize, max_chain_depth: usize) -> Self {
        MemoryAccessor {
            max_read_size,
            max_chain_depth,
        }
    }

    /// Largest byte-array read this accessor will issue
    pub fn max_read_size(&self) -> usize {
        self.max_read_size
    }

    /// Most offsets accepted in a single pointer chain
    pub fn max_chain_depth(&self) -> usize {
        self.max_chain_depth
    }
}

impl Default for MemoryAccessor {
    fn default() -> Self {
        Self::new()
    }
}
