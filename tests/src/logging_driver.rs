use qbrecord::driver::{operation::Operation, Driver, Response};
use qbrecord::{async_trait, Result};
use std::sync::{Arc, Mutex};

/// A driver wrapper that records every operation it executes.
#[derive(Debug)]
pub struct LoggingDriver {
    inner: Box<dyn Driver>,

    /// Using Arc<Mutex> so tests can read the log while the Db owns the driver
    ops_log: Arc<Mutex<Vec<DriverOp>>>,
}

#[derive(Debug)]
pub struct DriverOp {
    pub operation: Operation,

    /// `Err` holds the driver's error message
    pub response: std::result::Result<String, String>,
}

impl LoggingDriver {
    pub fn new(driver: Box<dyn Driver>) -> Self {
        Self {
            inner: driver,
            ops_log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn ops_log_handle(&self) -> Arc<Mutex<Vec<DriverOp>>> {
        self.ops_log.clone()
    }
}

#[async_trait]
impl Driver for LoggingDriver {
    async fn exec(&self, operation: Operation) -> Result<Response> {
        let operation_clone = operation.clone();
        let response = self.inner.exec(operation).await;

        let driver_op = DriverOp {
            operation: operation_clone,
            response: match &response {
                Ok(response) => Ok(format!("{:?}", response.rows)),
                Err(err) => Err(err.to_string()),
            },
        };

        self.ops_log
            .lock()
            .expect("Failed to acquire ops log lock")
            .push(driver_op);

        response
    }
}
