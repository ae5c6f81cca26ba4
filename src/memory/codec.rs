//! Fixed-size little-endian codecs for the primitive types

use crate::core::types::{MemoryError, MemoryResult, MemoryValue, ValueType};

/// A primitive with a fixed little-endian wire representation
pub trait Primitive: Copy {
    /// Type tag used for diagnostics and dynamic dispatch
    const VALUE_TYPE: ValueType;
    /// Exact number of bytes on the wire
    const SIZE: usize;

    /// Decode from a buffer. Returns `None` unless `bytes.len() == Self::SIZE`.
    fn decode(bytes: &[u8]) -> Option<Self>;

    /// Encode into exactly `Self::SIZE` bytes
    fn encode(self) -> Vec<u8>;

    /// Wrap into the dynamic value enum
    fn into_value(self) -> MemoryValue;
}

macro_rules! impl_primitive {
    ($ty:ty, $value_type:ident) => {
        impl Primitive for $ty {
            const VALUE_TYPE: ValueType = ValueType::$value_type;
            const SIZE: usize = std::mem::size_of::<$ty>();

            fn decode(bytes: &[u8]) -> Option<Self> {
                bytes.try_into().ok().map(<$ty>::from_le_bytes)
            }

            fn encode(self) -> Vec<u8> {
                self.to_le_bytes().to_vec()
            }

            fn into_value(self) -> MemoryValue {
                MemoryValue::$value_type(self)
            }
        }
    };
}

impl_primitive!(u8, Byte);
impl_primitive!(i32, Int32);
impl_primitive!(f32, Float);
impl_primitive!(f64, Double);
impl_primitive!(u64, Pointer);

impl MemoryValue {
    /// Converts the value to its little-endian bytes
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            MemoryValue::Byte(v) => v.encode(),
            MemoryValue::Int32(v) => v.encode(),
            MemoryValue::Float(v) => v.encode(),
            MemoryValue::Double(v) => v.encode(),
            MemoryValue::Pointer(v) => v.encode(),
            MemoryValue::ByteArray(b) => b.clone(),
        }
    }

    /// Creates a value from bytes of the given type.
    ///
    /// Fixed-size types require the exact wire size; any other length yields `None`.
    pub fn from_bytes(bytes: &[u8], value_type: ValueType) -> Option<Self> {
        match value_type {
            ValueType::Byte => u8::decode(bytes).map(Primitive::into_value),
            ValueType::Int32 => i32::decode(bytes).map(Primitive::into_value),
            ValueType::Float => f32::decode(bytes).map(Primitive::into_value),
            ValueType::Double => f64::decode(bytes).map(Primitive::into_value),
            ValueType::Pointer => u64::decode(bytes).map(Primitive::into_value),
            ValueType::ByteArray => Some(MemoryValue::ByteArray(bytes.to_vec())),
        }
    }
}

/// Decode exactly four bytes as a little-endian `i32`.
///
/// An absent buffer and a buffer of the wrong size are reported as different
/// errors, both of [`ErrorKind::InvalidArgument`](crate::core::types::ErrorKind).
pub fn byte_array_to_int(bytes: Option<&[u8]>) -> MemoryResult<i32> {
    let bytes = bytes.ok_or(MemoryError::MissingArgument("bytes"))?;
    i32::decode(bytes).ok_or_else(|| MemoryError::invalid_length(i32::SIZE, bytes.len()))
}
