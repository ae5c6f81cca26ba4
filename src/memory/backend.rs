//! In-memory address space backed by mapped byte regions
//!
//! `SparseMemory` stands in for a live target: regions are mapped at a base
//! address and every access must fall entirely inside one region, the way a
//! read across an unmapped page fails against a real process.

use super::raw::RawMemory;
use crate::core::types::Address;
use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::trace;

/// A sparse, region-mapped byte store implementing [`RawMemory`]
#[derive(Debug, Default)]
pub struct SparseMemory {
    regions: RwLock<BTreeMap<u64, Vec<u8>>>,
}

impl SparseMemory {
    /// Create an empty address space
    pub fn new() -> Self {
        Self::default()
    }

    /// Map `data` at `base`, replacing any region that starts at the same base.
    ///
    /// Returns `false` if the new region would overlap a different one or
    /// run past the end of the address space.
    pub fn map_region(&self, base: Address, data: Vec<u8>) -> bool {
        let start = base.as_u64();
        let Some(end) = start.checked_add(data.len() as u64) else {
            return false;
        };

        let mut regions = self.regions_mut();
        let overlaps = regions
            .range(..end)
            .filter(|(&other, _)| other != start)
            .any(|(&other, bytes)| other + bytes.len() as u64 > start);
        if overlaps {
            return false;
        }

        trace!(%base, size = data.len(), "mapping region");
        regions.insert(start, data);
        true
    }

    /// Map a zero-filled region of `size` bytes
    pub fn map_zeroed(&self, base: Address, size: usize) -> bool {
        self.map_region(base, vec![0u8; size])
    }

    /// Remove the region starting at `base`, returning its contents
    pub fn unmap(&self, base: Address) -> Option<Vec<u8>> {
        self.regions_mut().remove(&base.as_u64())
    }

    /// Number of mapped regions
    pub fn region_count(&self) -> usize {
        self.regions().len()
    }

    /// Copy `len` bytes out of the store without going through [`RawMemory`]
    pub fn snapshot(&self, address: Address, len: usize) -> Option<Vec<u8>> {
        let regions = self.regions();
        let (base, bytes) = Self::locate(&regions, address.as_u64(), len)?;
        let start = (address.as_u64() - base) as usize;
        Some(bytes[start..start + len].to_vec())
    }

    fn locate<'r>(
        regions: &'r BTreeMap<u64, Vec<u8>>,
        address: u64,
        len: usize,
    ) -> Option<(u64, &'r Vec<u8>)> {
        let (&base, bytes) = regions.range(..=address).next_back()?;
        let end = address.checked_add(len as u64)?;
        if end > base + bytes.len() as u64 {
            return None;
        }
        Some((base, bytes))
    }

    // No access leaves the map half-updated, so a poisoned lock is still usable
    fn regions(&self) -> RwLockReadGuard<'_, BTreeMap<u64, Vec<u8>>> {
        self.regions.read().unwrap_or_else(|e| e.into_inner())
    }

    fn regions_mut(&self) -> RwLockWriteGuard<'_, BTreeMap<u64, Vec<u8>>> {
        self.regions.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl RawMemory for SparseMemory {
    fn read(&self, address: Address, length: u32) -> Option<Vec<u8>> {
        self.snapshot(address, length as usize)
    }

    fn write(&self, address: Address, data: &[u8]) -> bool {
        let mut regions = self.regions_mut();
        let addr = address.as_u64();
        let Some((base, _)) = Self::locate(&regions, addr, data.len()) else {
            return false;
        };
        let Some(bytes) = regions.get_mut(&base) else {
            return false;
        };
        let start = (addr - base) as usize;
        bytes[start..start + data.len()].copy_from_slice(data);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_inside_region() {
        let mem = SparseMemory::new();
        assert!(mem.map_region(Address::new(0x1000), vec![1, 2, 3, 4, 5, 6]));

        assert_eq!(mem.read(Address::new(0x1000), 2), Some(vec![1, 2]));
        assert_eq!(mem.read(Address::new(0x1004), 2), Some(vec![5, 6]));
        assert_eq!(mem.read(Address::new(0x1006), 0), Some(vec![]));
    }

    #[test]
    fn test_read_outside_region_fails() {
        let mem = SparseMemory::new();
        mem.map_zeroed(Address::new(0x1000), 8);

        assert_eq!(mem.read(Address::new(0x0FFF), 1), None);
        assert_eq!(mem.read(Address::new(0x1004), 8), None);
        assert_eq!(mem.read(Address::new(0x2000), 1), None);
        assert_eq!(mem.read(Address::new(u64::MAX), 4), None);
    }

    #[test]
    fn test_write_then_read() {
        let mem = SparseMemory::new();
        mem.map_zeroed(Address::new(0x4000), 16);

        assert!(mem.write(Address::new(0x4004), &[0xDE, 0xAD]));
        assert_eq!(
            mem.snapshot(Address::new(0x4002), 6),
            Some(vec![0, 0, 0xDE, 0xAD, 0, 0])
        );
    }

    #[test]
    fn test_write_outside_region_fails() {
        let mem = SparseMemory::new();
        mem.map_zeroed(Address::new(0x4000), 4);

        assert!(!mem.write(Address::new(0x4002), &[1, 2, 3]));
        assert!(!mem.write(Address::new(0x8000), &[1]));
        assert_eq!(mem.snapshot(Address::new(0x4000), 4), Some(vec![0; 4]));
    }

    #[test]
    fn test_overlapping_regions_rejected() {
        let mem = SparseMemory::new();
        assert!(mem.map_zeroed(Address::new(0x1000), 0x100));
        assert!(!mem.map_zeroed(Address::new(0x10F0), 0x20));
        assert!(!mem.map_zeroed(Address::new(0x0F00), 0x101));
        assert!(mem.map_zeroed(Address::new(0x1100), 0x10));
        assert!(!mem.map_zeroed(Address::new(u64::MAX - 1), 4));
        assert_eq!(mem.region_count(), 2);
    }

    #[test]
    fn test_remap_and_unmap() {
        let mem = SparseMemory::new();
        mem.map_region(Address::new(0x1000), vec![1]);
        assert!(mem.map_region(Address::new(0x1000), vec![9, 9]));
        assert_eq!(mem.read(Address::new(0x1000), 2), Some(vec![9, 9]));

        assert_eq!(mem.unmap(Address::new(0x1000)), Some(vec![9, 9]));
        assert_eq!(mem.read(Address::new(0x1000), 1), None);
        assert_eq!(mem.region_count(), 0);
    }
}
