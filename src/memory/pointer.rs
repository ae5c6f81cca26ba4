//! Multi-level pointer chain resolution
//!
//! A chain starts at a base address. Each level dereferences the current
//! address as a 64-bit little-endian pointer and then adds that level's
//! offset. Every offset is applied, including the last one, so the chain
//! `base -> a -> b` resolves to `*(*(base) + a) + b`.

use super::codec::Primitive;
use super::raw::RawMemory;
use super::MemoryAccessor;
use crate::core::types::{Address, MemoryError, MemoryResult, Offset};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, trace};

impl MemoryAccessor {
    /// Resolve `base` through `offsets` into a final address.
    ///
    /// Performs exactly one 8-byte read per offset, in order. An empty
    /// offset list returns `base` without touching memory. Stops at the
    /// first dereference that yields zero.
    pub fn resolve_pointer_chain(
        &self,
        mem: &(impl RawMemory + ?Sized),
        base: Address,
        offsets: &[Offset],
    ) -> MemoryResult<Address> {
        if offsets.len() > self.max_chain_depth {
            return Err(MemoryError::invalid_argument(format!(
                "pointer chain of {} levels exceeds the limit of {}",
                offsets.len(),
                self.max_chain_depth
            )));
        }

        let mut address = base;
        for (level, &offset) in offsets.iter().enumerate() {
            let pointer = self.read_pointer(mem, address)?;
            if pointer.is_null() {
                let err = MemoryError::null_pointer(level, address);
                debug!(error = %err, "pointer chain broken");
                return Err(err);
            }

            let next = pointer.offset(offset);
            trace!(level, from = %address, %pointer, offset, to = %next, "dereferenced");
            address = next;
        }

        Ok(address)
    }

    /// Resolve a chain and read a primitive at the address it lands on
    pub fn read_through_chain<T: Primitive>(
        &self,
        mem: &(impl RawMemory + ?Sized),
        chain: &PointerChain,
    ) -> MemoryResult<T> {
        let address = chain.resolve(self, mem)?;
        self.read(mem, address)
    }
}

/// A base address plus the offsets to walk from it
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PointerChain {
    pub base: Address,
    #[serde(default)]
    pub offsets: Vec<Offset>,
}

impl PointerChain {
    /// Create a chain with the given base and offsets
    pub fn new(base: Address, offsets: Vec<Offset>) -> Self {
        PointerChain { base, offsets }
    }

    /// Append another level
    pub fn then(mut self, offset: Offset) -> Self {
        self.offsets.push(offset);
        self
    }

    /// Number of dereferences needed to resolve this chain
    pub fn depth(&self) -> usize {
        self.offsets.len()
    }

    /// Resolve against `mem` with the given accessor's limits
    pub fn resolve(
        &self,
        accessor: &MemoryAccessor,
        mem: &(impl RawMemory + ?Sized),
    ) -> MemoryResult<Address> {
        accessor.resolve_pointer_chain(mem, self.base, &self.offsets)
    }
}

impl fmt::Display for PointerChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.base)?;
        for offset in &self.offsets {
            write!(f, " -> 0x{:X}", offset)?;
        }
        Ok(())
    }
}

impl FromStr for PointerChain {
    type Err = MemoryError;

    /// Parses `base -> offset -> offset ...`, each part in any [`Address`] notation
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split("->");
        let base = parts
            .next()
            .ok_or_else(|| MemoryError::InvalidAddress(s.to_string()))?
            .parse::<Address>()?;
        let offsets = parts
            .map(|part| part.parse::<Address>().map(|offset| offset.as_u64()))
            .collect::<MemoryResult<Vec<_>>>()?;

        Ok(PointerChain { base, offsets })
    }
}
