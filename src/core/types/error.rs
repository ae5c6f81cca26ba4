//! Error types for typed memory access

use super::address::Address;
use super::value::ValueType;
use std::fmt;
use thiserror::Error;

/// Main error type for memory operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MemoryError {
    #[error("Missing argument: `{0}` was not provided")]
    MissingArgument(&'static str),

    #[error("Invalid argument length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid memory address: {0}")]
    InvalidAddress(String),

    #[error("Failed to read {value_type} at {address}: {reason}")]
    ReadFailed {
        value_type: ValueType,
        address: Address,
        reason: ReadFailure,
    },

    #[error("Failed to write {value_type} at {address}")]
    WriteFailed {
        value_type: ValueType,
        address: Address,
    },

    #[error("Null pointer encountered at level {level} (dereferenced {address})")]
    NullPointer { level: usize, address: Address },
}

/// Why a raw read could not produce a typed value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadFailure {
    /// The capability returned no buffer at all
    NoData,
    /// A buffer came back but its length differs from the request
    LengthMismatch { expected: usize, actual: usize },
}

impl fmt::Display for ReadFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadFailure::NoData => f.write_str("no data returned"),
            ReadFailure::LengthMismatch { expected, actual } => {
                write!(f, "expected {} bytes, got {}", expected, actual)
            }
        }
    }
}

/// Coarse classification callers can branch on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidArgument,
    MemoryReadFailure,
    MemoryWriteFailure,
    NullPointerEncountered,
}

/// Result type alias for memory operations
pub type MemoryResult<T> = Result<T, MemoryError>;

impl MemoryError {
    /// Returns the failure class of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            MemoryError::MissingArgument(_)
            | MemoryError::InvalidLength { .. }
            | MemoryError::InvalidArgument(_)
            | MemoryError::InvalidAddress(_) => ErrorKind::InvalidArgument,
            MemoryError::ReadFailed { .. } => ErrorKind::MemoryReadFailure,
            MemoryError::WriteFailed { .. } => ErrorKind::MemoryWriteFailure,
            MemoryError::NullPointer { .. } => ErrorKind::NullPointerEncountered,
        }
    }

    /// Creates a read failed error
    pub fn read_failed(value_type: ValueType, address: Address, reason: ReadFailure) -> Self {
        MemoryError::ReadFailed {
            value_type,
            address,
            reason,
        }
    }

    /// Creates a write failed error
    pub fn write_failed(value_type: ValueType, address: Address) -> Self {
        MemoryError::WriteFailed {
            value_type,
            address,
        }
    }

    /// Creates a null pointer error for the given chain level
    pub fn null_pointer(level: usize, address: Address) -> Self {
        MemoryError::NullPointer { level, address }
    }

    /// Creates an invalid length error
    pub fn invalid_length(expected: usize, actual: usize) -> Self {
        MemoryError::InvalidLength { expected, actual }
    }

    /// Creates a generic invalid argument error
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        MemoryError::InvalidArgument(reason.into())
    }

    /// Value type involved in a failed read or write, if any
    pub fn value_type(&self) -> Option<ValueType> {
        match self {
            MemoryError::ReadFailed { value_type, .. }
            | MemoryError::WriteFailed { value_type, .. } => Some(*value_type),
            _ => None,
        }
    }
}
