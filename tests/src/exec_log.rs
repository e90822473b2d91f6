use crate::logging_driver::DriverOp;
use qbrecord::driver::operation::Operation;
use std::sync::{Arc, Mutex};

/// A wrapper around the operations log that provides a clean API for tests
pub struct ExecLog {
    ops: Arc<Mutex<Vec<DriverOp>>>,
}

impl ExecLog {
    pub(crate) fn new(ops: Arc<Mutex<Vec<DriverOp>>>) -> Self {
        Self { ops }
    }

    pub fn len(&self) -> usize {
        self.ops.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.lock().unwrap().is_empty()
    }

    pub fn clear(&mut self) {
        self.ops.lock().unwrap().clear();
    }

    /// Remove and return the oldest logged operation
    #[track_caller]
    pub fn pop_op(&mut self) -> Operation {
        self.pop().operation
    }

    #[track_caller]
    pub fn pop(&mut self) -> DriverOp {
        let mut ops = self.ops.lock().unwrap();
        assert!(!ops.is_empty(), "no operations logged");
        ops.remove(0)
    }
}
