//! Typed memory reads with exact-length validation

use super::codec::Primitive;
use super::raw::RawMemory;
use super::MemoryAccessor;
use crate::core::types::{Address, MemoryError, MemoryResult, MemoryValue, ReadFailure, ValueType};
use tracing::{debug, trace};

impl MemoryAccessor {
    /// Issue one raw read of `length` bytes and decode it.
    ///
    /// `decode` returns `None` when the buffer is not exactly `length` bytes.
    fn read_decoded<T>(
        &self,
        mem: &(impl RawMemory + ?Sized),
        address: Address,
        length: u32,
        value_type: ValueType,
        decode: impl FnOnce(Vec<u8>) -> Option<T>,
    ) -> MemoryResult<T> {
        trace!(%address, length, %value_type, "raw read");

        let reason = match mem.read(address, length) {
            Some(buffer) => {
                let actual = buffer.len();
                match decode(buffer) {
                    Some(value) => return Ok(value),
                    None => ReadFailure::LengthMismatch {
                        expected: length as usize,
                        actual,
                    },
                }
            }
            None => ReadFailure::NoData,
        };

        let err = MemoryError::read_failed(value_type, address, reason);
        debug!(error = %err, "typed read failed");
        Err(err)
    }

    /// Read any fixed-size primitive
    pub fn read<T: Primitive>(
        &self,
        mem: &(impl RawMemory + ?Sized),
        address: Address,
    ) -> MemoryResult<T> {
        self.read_decoded(mem, address, T::SIZE as u32, T::VALUE_TYPE, |buffer| {
            T::decode(&buffer)
        })
    }

    /// Read a single byte
    pub fn read_byte(&self, mem: &(impl RawMemory + ?Sized), address: Address) -> MemoryResult<u8> {
        self.read(mem, address)
    }

    /// Read a little-endian two's-complement 32-bit integer
    pub fn read_int32(
        &self,
        mem: &(impl RawMemory + ?Sized),
        address: Address,
    ) -> MemoryResult<i32> {
        self.read(mem, address)
    }

    /// Read an IEEE-754 binary32 float
    pub fn read_float(
        &self,
        mem: &(impl RawMemory + ?Sized),
        address: Address,
    ) -> MemoryResult<f32> {
        self.read(mem, address)
    }

    /// Read an IEEE-754 binary64 float
    pub fn read_double(
        &self,
        mem: &(impl RawMemory + ?Sized),
        address: Address,
    ) -> MemoryResult<f64> {
        self.read(mem, address)
    }

    /// Read a 64-bit pointer
    pub fn read_pointer(
        &self,
        mem: &(impl RawMemory + ?Sized),
        address: Address,
    ) -> MemoryResult<Address> {
        self.read::<u64>(mem, address).map(Address::new)
    }

    /// Read exactly `length` bytes, returned unmodified
    pub fn read_byte_array(
        &self,
        mem: &(impl RawMemory + ?Sized),
        address: Address,
        length: u32,
    ) -> MemoryResult<Vec<u8>> {
        if length as usize > self.max_read_size {
            return Err(MemoryError::invalid_argument(format!(
                "byte array read of {} bytes exceeds the {} byte limit",
                length, self.max_read_size
            )));
        }

        self.read_decoded(mem, address, length, ValueType::ByteArray, |buffer| {
            (buffer.len() == length as usize).then_some(buffer)
        })
    }

    /// Read a value chosen at runtime.
    ///
    /// Byte arrays have no implied size; use [`read_value_sized`](Self::read_value_sized).
    pub fn read_value(
        &self,
        mem: &(impl RawMemory + ?Sized),
        address: Address,
        value_type: ValueType,
    ) -> MemoryResult<MemoryValue> {
        match value_type {
            ValueType::Byte => self.read::<u8>(mem, address).map(Primitive::into_value),
            ValueType::Int32 => self.read::<i32>(mem, address).map(Primitive::into_value),
            ValueType::Float => self.read::<f32>(mem, address).map(Primitive::into_value),
            ValueType::Double => self.read::<f64>(mem, address).map(Primitive::into_value),
            ValueType::Pointer => self.read::<u64>(mem, address).map(Primitive::into_value),
            ValueType::ByteArray => Err(MemoryError::invalid_argument(
                "byte array reads need an explicit length",
            )),
        }
    }

    /// Read a value chosen at runtime, with `length` used for byte arrays.
    ///
    /// For fixed-size types `length` must equal the type's size.
    pub fn read_value_sized(
        &self,
        mem: &(impl RawMemory + ?Sized),
        address: Address,
        value_type: ValueType,
        length: u32,
    ) -> MemoryResult<MemoryValue> {
        match value_type.size() {
            None => self
                .read_byte_array(mem, address, length)
                .map(MemoryValue::ByteArray),
            Some(size) if size == length as usize => self.read_value(mem, address, value_type),
            Some(size) => Err(MemoryError::invalid_length(size, length as usize)),
        }
    }
}
