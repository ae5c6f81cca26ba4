//! The raw memory capability the accessor is built on
//!
//! Implementors wrap whatever actually reaches the target process: a DMA
//! device, a hypervisor introspection handle, a minidump, or an in-memory
//! image for tests. The accessor never stores an implementor; every
//! operation borrows one for the duration of a single call.

use crate::core::types::Address;
use std::rc::Rc;
use std::sync::Arc;

/// Raw byte-level access to a target address space
pub trait RawMemory {
    /// Read `length` bytes starting at `address`.
    ///
    /// Returns `None` when the read fails. A successful read must return
    /// exactly `length` bytes; callers treat any other length as a failure.
    fn read(&self, address: Address, length: u32) -> Option<Vec<u8>>;

    /// Write all of `data` starting at `address`, returning whether it succeeded
    fn write(&self, address: Address, data: &[u8]) -> bool;
}

impl<M: RawMemory + ?Sized> RawMemory for &M {
    fn read(&self, address: Address, length: u32) -> Option<Vec<u8>> {
        (**self).read(address, length)
    }

    fn write(&self, address: Address, data: &[u8]) -> bool {
        (**self).write(address, data)
    }
}

impl<M: RawMemory + ?Sized> RawMemory for &mut M {
    fn read(&self, address: Address, length: u32) -> Option<Vec<u8>> {
        (**self).read(address, length)
    }

    fn write(&self, address: Address, data: &[u8]) -> bool {
        (**self).write(address, data)
    }
}

impl<M: RawMemory + ?Sized> RawMemory for Box<M> {
    fn read(&self, address: Address, length: u32) -> Option<Vec<u8>> {
        (**self).read(address, length)
    }

    fn write(&self, address: Address, data: &[u8]) -> bool {
        (**self).write(address, data)
    }
}

impl<M: RawMemory + ?Sized> RawMemory for Rc<M> {
    fn read(&self, address: Address, length: u32) -> Option<Vec<u8>> {
        (**self).read(address, length)
    }

    fn write(&self, address: Address, data: &[u8]) -> bool {
        (**self).write(address, data)
    }
}

impl<M: RawMemory + ?Sized> RawMemory for Arc<M> {
    fn read(&self, address: Address, length: u32) -> Option<Vec<u8>> {
        (**self).read(address, length)
    }

    fn write(&self, address: Address, data: &[u8]) -> bool {
        (**self).write(address, data)
    }
}
