mod response;
pub use response::{Response, Rows};

pub mod operation;
pub use operation::Operation;

use crate::async_trait;

use std::fmt::Debug;

/// Executes operations against the remote service.
///
/// Drivers own transport concerns: credentials, HTTP, retries and timeouts.
/// The core only hands them compiled query strings and encoded payloads.
#[async_trait]
pub trait Driver: Debug + Send + Sync + 'static {
    /// Execute a single operation
    async fn exec(&self, op: Operation) -> crate::Result<Response>;
}
