//! Shared fakes for the integration tests

#![allow(dead_code)]

use memory_accessor::{Address, RawMemory};
use std::cell::RefCell;
use std::collections::VecDeque;

/// One call made against a fake capability
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Read { address: Address, length: u32 },
    Write { address: Address, data: Vec<u8> },
}

/// Answers reads from a queue of canned responses and records every call
#[derive(Default)]
pub struct ScriptedMemory {
    reads: RefCell<VecDeque<Option<Vec<u8>>>>,
    write_result: bool,
    calls: RefCell<Vec<Call>>,
}

impl ScriptedMemory {
    pub fn new() -> Self {
        ScriptedMemory {
            write_result: true,
            ..Default::default()
        }
    }

    /// Queue the next read's answer
    pub fn then_read(self, response: Option<Vec<u8>>) -> Self {
        self.reads.borrow_mut().push_back(response);
        self
    }

    /// Queue a pointer value as the next read's answer
    pub fn then_pointer(self, pointer: u64) -> Self {
        self.then_read(Some(pointer.to_le_bytes().to_vec()))
    }

    pub fn failing_writes(mut self) -> Self {
        self.write_result = false;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn reads(&self) -> Vec<(Address, u32)> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                Call::Read { address, length } => Some((*address, *length)),
                Call::Write { .. } => None,
            })
            .collect()
    }

    pub fn writes(&self) -> Vec<(Address, Vec<u8>)> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                Call::Write { address, data } => Some((*address, data.clone())),
                Call::Read { .. } => None,
            })
            .collect()
    }
}

impl RawMemory for ScriptedMemory {
    fn read(&self, address: Address, length: u32) -> Option<Vec<u8>> {
        self.calls.borrow_mut().push(Call::Read { address, length });
        self.reads.borrow_mut().pop_front().flatten()
    }

    fn write(&self, address: Address, data: &[u8]) -> bool {
        self.calls.borrow_mut().push(Call::Write {
            address,
            data: data.to_vec(),
        });
        self.write_result
    }
}
