//! Typed read/write behaviour against scripted and in-memory capabilities

mod common;

use common::{Call, ScriptedMemory};
use memory_accessor::{
    Address, ErrorKind, MemoryAccessor, MemoryError, MemoryValue, ReadFailure, SparseMemory,
    ValueType,
};

#[cfg(test)]
mod read_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_each_read_requests_canonical_size() {
        let mem = ScriptedMemory::new()
            .then_read(Some(vec![0x11]))
            .then_read(Some(vec![0; 4]))
            .then_read(Some(vec![0; 4]))
            .then_read(Some(vec![0; 8]))
            .then_read(Some(vec![0; 8]))
            .then_read(Some(vec![0; 3]));
        let accessor = MemoryAccessor::new();

        accessor.read_byte(&mem, Address::new(0x10)).unwrap();
        accessor.read_int32(&mem, Address::new(0x20)).unwrap();
        accessor.read_float(&mem, Address::new(0x30)).unwrap();
        accessor.read_double(&mem, Address::new(0x40)).unwrap();
        accessor.read_pointer(&mem, Address::new(0x50)).unwrap();
        accessor
            .read_byte_array(&mem, Address::new(0x60), 3)
            .unwrap();

        assert_eq!(
            mem.reads(),
            vec![
                (Address::new(0x10), 1),
                (Address::new(0x20), 4),
                (Address::new(0x30), 4),
                (Address::new(0x40), 8),
                (Address::new(0x50), 8),
                (Address::new(0x60), 3),
            ]
        );
    }

    #[test]
    fn test_decoding_is_little_endian() {
        let mem = ScriptedMemory::new()
            .then_read(Some(vec![0xFE, 0xFF, 0xFF, 0xFF]))
            .then_read(Some(vec![0x00, 0x00, 0x20, 0x41]))
            .then_read(Some(vec![0, 0, 0, 0, 0, 0, 0x24, 0x40]));
        let accessor = MemoryAccessor::new();

        assert_eq!(accessor.read_int32(&mem, Address::new(0)), Ok(-2));
        assert_eq!(accessor.read_float(&mem, Address::new(0)), Ok(10.0));
        assert_eq!(accessor.read_double(&mem, Address::new(0)), Ok(10.0));
    }

    #[test]
    fn test_missing_buffer_names_the_read() {
        let accessor = MemoryAccessor::new();
        let cases: Vec<(ValueType, MemoryError)> = vec![
            (
                ValueType::Float,
                accessor
                    .read_float(&ScriptedMemory::new(), Address::new(0x100))
                    .unwrap_err(),
            ),
            (
                ValueType::Double,
                accessor
                    .read_double(&ScriptedMemory::new(), Address::new(0x100))
                    .unwrap_err(),
            ),
            (
                ValueType::Int32,
                accessor
                    .read_int32(&ScriptedMemory::new(), Address::new(0x100))
                    .unwrap_err(),
            ),
            (
                ValueType::Byte,
                accessor
                    .read_byte(&ScriptedMemory::new(), Address::new(0x100))
                    .unwrap_err(),
            ),
            (
                ValueType::ByteArray,
                accessor
                    .read_byte_array(&ScriptedMemory::new(), Address::new(0x100), 16)
                    .unwrap_err(),
            ),
        ];

        for (value_type, err) in cases {
            assert_eq!(err.kind(), ErrorKind::MemoryReadFailure);
            assert_eq!(
                err,
                MemoryError::read_failed(value_type, Address::new(0x100), ReadFailure::NoData)
            );
            assert!(err.to_string().contains(value_type.name()));
        }
    }

    #[test]
    fn test_wrong_length_is_never_decoded() {
        let accessor = MemoryAccessor::new();

        for len in [0usize, 1, 2, 3, 5, 8] {
            let mem = ScriptedMemory::new().then_read(Some(vec![0xAB; len]));
            let err = accessor.read_int32(&mem, Address::new(4)).unwrap_err();
            assert_eq!(
                err,
                MemoryError::read_failed(
                    ValueType::Int32,
                    Address::new(4),
                    ReadFailure::LengthMismatch {
                        expected: 4,
                        actual: len
                    }
                )
            );
        }

        let mem = ScriptedMemory::new().then_read(Some(vec![1; 15]));
        let err = accessor
            .read_byte_array(&mem, Address::new(4), 16)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MemoryReadFailure);
    }

    #[test]
    fn test_oversized_byte_array_rejected_before_access() {
        let accessor = MemoryAccessor::with_limits(8, 4);
        let mem = ScriptedMemory::new();

        let err = accessor
            .read_byte_array(&mem, Address::new(0x1000), 9)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(mem.calls().is_empty());
    }
}

#[cfg(test)]
mod write_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_writes_encode_fixed_sizes() {
        let mem = ScriptedMemory::new();
        let accessor = MemoryAccessor::new();

        accessor.write_byte(&mem, Address::new(1), 0x7F).unwrap();
        accessor.write_int32(&mem, Address::new(2), 0x0102_0304).unwrap();
        accessor.write_float(&mem, Address::new(3), -1.0).unwrap();
        accessor.write_double(&mem, Address::new(4), 0.5).unwrap();

        assert_eq!(
            mem.calls(),
            vec![
                Call::Write {
                    address: Address::new(1),
                    data: vec![0x7F]
                },
                Call::Write {
                    address: Address::new(2),
                    data: vec![4, 3, 2, 1]
                },
                Call::Write {
                    address: Address::new(3),
                    data: vec![0x00, 0x00, 0x80, 0xBF]
                },
                Call::Write {
                    address: Address::new(4),
                    data: vec![0, 0, 0, 0, 0, 0, 0xE0, 0x3F]
                },
            ]
        );
    }

    #[test]
    fn test_write_failure_names_the_write() {
        let mem = ScriptedMemory::new().failing_writes();
        let accessor = MemoryAccessor::new();

        let results = vec![
            (ValueType::Float, accessor.write_float(&mem, Address::new(8), 1.0)),
            (ValueType::Double, accessor.write_double(&mem, Address::new(8), 1.0)),
            (ValueType::Int32, accessor.write_int32(&mem, Address::new(8), 1)),
            (ValueType::Byte, accessor.write_byte(&mem, Address::new(8), 1)),
            (
                ValueType::ByteArray,
                accessor.write_byte_array(&mem, Address::new(8), &[1, 2]),
            ),
        ];

        for (value_type, result) in results {
            let err = result.unwrap_err();
            assert_eq!(err.kind(), ErrorKind::MemoryWriteFailure);
            assert_eq!(err, MemoryError::write_failed(value_type, Address::new(8)));
        }
    }

    #[test]
    fn test_byte_array_write_is_verbatim() {
        let mem = ScriptedMemory::new();
        let data: Vec<u8> = (0..=255).collect();

        MemoryAccessor::new()
            .write_byte_array(&mem, Address::new(0x9000), &data)
            .unwrap();
        assert_eq!(mem.writes(), vec![(Address::new(0x9000), data)]);
    }
}

#[cfg(test)]
mod sparse_memory_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_byte_array_round_trip() {
        let mem = SparseMemory::new();
        mem.map_zeroed(Address::new(0x7000), 0x100);
        let accessor = MemoryAccessor::new();
        let data: Vec<u8> = (0u8..16).map(|i| i.wrapping_mul(37) ^ 0x5A).collect();

        accessor
            .write_byte_array(&mem, Address::new(0x7040), &data)
            .unwrap();
        assert_eq!(
            accessor.read_byte_array(&mem, Address::new(0x7040), 16),
            Ok(data)
        );
    }

    #[test]
    fn test_value_round_trip() {
        let mem = SparseMemory::new();
        mem.map_zeroed(Address::new(0x1000), 0x40);
        let accessor = MemoryAccessor::new();

        let value = MemoryValue::Double(-123.456);
        accessor
            .write_value(&mem, Address::new(0x1008), &value)
            .unwrap();
        assert_eq!(
            accessor.read_value(&mem, Address::new(0x1008), ValueType::Double),
            Ok(value)
        );
    }

    #[test]
    fn test_access_across_region_end_fails() {
        let mem = SparseMemory::new();
        mem.map_zeroed(Address::new(0x1000), 6);
        let accessor = MemoryAccessor::new();

        assert!(accessor.read_int32(&mem, Address::new(0x1002)).is_ok());
        assert_eq!(
            accessor
                .read_int32(&mem, Address::new(0x1003))
                .unwrap_err()
                .kind(),
            ErrorKind::MemoryReadFailure
        );
        assert_eq!(
            accessor
                .write_double(&mem, Address::new(0x1000), 1.0)
                .unwrap_err()
                .kind(),
            ErrorKind::MemoryWriteFailure
        );
    }
}
