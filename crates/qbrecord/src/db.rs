mod persist;
mod query;

use crate::{driver::Response, Driver, Result};
use qbrecord_core::driver::{operation::Source, Operation};

use std::sync::Arc;

/// Handle to the remote service, used to query and persist models.
///
/// Cloning is cheap; clones share the driver.
#[derive(Debug, Clone)]
pub struct Db {
    driver: Arc<dyn Driver>,
}

impl Db {
    pub fn new(driver: impl Driver) -> Db {
        Db {
            driver: Arc::new(driver),
        }
    }

    pub fn from_arc(driver: Arc<dyn Driver>) -> Db {
        Db { driver }
    }

    pub fn driver(&self) -> &dyn Driver {
        &*self.driver
    }

    async fn exec(&self, op: impl Into<Operation>) -> Result<Response> {
        let op = op.into();
        log::debug!("exec {op:?}");

        let table = op.table().to_string();
        self.driver.exec(op).await.map_err(|err| {
            err.context(qbrecord_core::err!("driver operation on `{table}` failed"))
        })
    }
}

/// An empty filter selects every record.
fn source(query: String) -> Source {
    if query.is_empty() {
        Source::All
    } else {
        Source::Query(query)
    }
}
