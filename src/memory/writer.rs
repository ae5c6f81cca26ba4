//! Typed memory writes

use super::codec::Primitive;
use super::raw::RawMemory;
use super::MemoryAccessor;
use crate::core::types::{Address, MemoryError, MemoryResult, MemoryValue, ValueType};
use tracing::{debug, trace};

impl MemoryAccessor {
    /// Hand an encoded buffer to the capability, as-is
    fn write_raw(
        &self,
        mem: &(impl RawMemory + ?Sized),
        address: Address,
        data: &[u8],
        value_type: ValueType,
    ) -> MemoryResult<()> {
        trace!(%address, length = data.len(), %value_type, "raw write");

        if mem.write(address, data) {
            return Ok(());
        }

        let err = MemoryError::write_failed(value_type, address);
        debug!(error = %err, "typed write failed");
        Err(err)
    }

    /// Write any fixed-size primitive
    pub fn write<T: Primitive>(
        &self,
        mem: &(impl RawMemory + ?Sized),
        address: Address,
        value: T,
    ) -> MemoryResult<()> {
        self.write_raw(mem, address, &value.encode(), T::VALUE_TYPE)
    }

    /// Write a single byte
    pub fn write_byte(
        &self,
        mem: &(impl RawMemory + ?Sized),
        address: Address,
        value: u8,
    ) -> MemoryResult<()> {
        self.write(mem, address, value)
    }

    /// Write a 32-bit integer as four little-endian bytes
    pub fn write_int32(
        &self,
        mem: &(impl RawMemory + ?Sized),
        address: Address,
        value: i32,
    ) -> MemoryResult<()> {
        self.write(mem, address, value)
    }

    /// Write an IEEE-754 binary32 float
    pub fn write_float(
        &self,
        mem: &(impl RawMemory + ?Sized),
        address: Address,
        value: f32,
    ) -> MemoryResult<()> {
        self.write(mem, address, value)
    }

    /// Write an IEEE-754 binary64 float
    pub fn write_double(
        &self,
        mem: &(impl RawMemory + ?Sized),
        address: Address,
        value: f64,
    ) -> MemoryResult<()> {
        self.write(mem, address, value)
    }

    /// Write a 64-bit pointer
    pub fn write_pointer(
        &self,
        mem: &(impl RawMemory + ?Sized),
        address: Address,
        value: Address,
    ) -> MemoryResult<()> {
        self.write(mem, address, value.as_u64())
    }

    /// Write the caller's buffer verbatim; its length is the write size
    pub fn write_byte_array(
        &self,
        mem: &(impl RawMemory + ?Sized),
        address: Address,
        data: &[u8],
    ) -> MemoryResult<()> {
        self.write_raw(mem, address, data, ValueType::ByteArray)
    }

    /// Write a value chosen at runtime
    pub fn write_value(
        &self,
        mem: &(impl RawMemory + ?Sized),
        address: Address,
        value: &MemoryValue,
    ) -> MemoryResult<()> {
        self.write_raw(mem, address, &value.to_bytes(), value.value_type())
    }
}
