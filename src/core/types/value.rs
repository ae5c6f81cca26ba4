//! Typed values decoded from, or encoded into, raw memory buffers

use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents the primitive values the accessor can read and write
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum MemoryValue {
    Byte(u8),
    Int32(i32),
    Float(f32),
    Double(f64),
    Pointer(u64),
    ByteArray(Vec<u8>),
}

impl MemoryValue {
    /// Returns the size in bytes of the value's wire representation
    pub fn size(&self) -> usize {
        match self {
            MemoryValue::Byte(_) => 1,
            MemoryValue::Int32(_) | MemoryValue::Float(_) => 4,
            MemoryValue::Double(_) | MemoryValue::Pointer(_) => 8,
            MemoryValue::ByteArray(b) => b.len(),
        }
    }

    /// Gets the value type enum for this value
    pub fn value_type(&self) -> ValueType {
        match self {
            MemoryValue::Byte(_) => ValueType::Byte,
            MemoryValue::Int32(_) => ValueType::Int32,
            MemoryValue::Float(_) => ValueType::Float,
            MemoryValue::Double(_) => ValueType::Double,
            MemoryValue::Pointer(_) => ValueType::Pointer,
            MemoryValue::ByteArray(_) => ValueType::ByteArray,
        }
    }
}

/// Enum representing the type of a memory value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueType {
    Byte,
    Int32,
    Float,
    Double,
    Pointer,
    ByteArray,
}

impl ValueType {
    /// Returns the size in bytes for this value type
    pub fn size(&self) -> Option<usize> {
        match self {
            ValueType::Byte => Some(1),
            ValueType::Int32 | ValueType::Float => Some(4),
            ValueType::Double | ValueType::Pointer => Some(8),
            ValueType::ByteArray => None, // Variable size
        }
    }

    /// Name used in diagnostics
    pub fn name(&self) -> &'static str {
        match self {
            ValueType::Byte => "byte",
            ValueType::Int32 => "int32",
            ValueType::Float => "float",
            ValueType::Double => "double",
            ValueType::Pointer => "pointer",
            ValueType::ByteArray => "byte array",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for MemoryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemoryValue::Byte(v) => write!(f, "{}", v),
            MemoryValue::Int32(v) => write!(f, "{}", v),
            MemoryValue::Float(v) => write!(f, "{}", v),
            MemoryValue::Double(v) => write!(f, "{}", v),
            MemoryValue::Pointer(v) => write!(f, "0x{:016X}", v),
            MemoryValue::ByteArray(b) => write!(f, "{}", hex::encode_upper(b)),
        }
    }
}
