mod eval;
mod table;
mod view;

use table::Table;
use view::View;

use qbrecord_core::{
    async_trait,
    driver::{
        operation::{AddRecord, DeleteRecord, EditRecord, Operation, PurgeRecords, Query},
        Driver, Response,
    },
    Config, Error, Result, TableSchema,
};
use std::{collections::HashMap, sync::Arc};
use tokio::sync::Mutex;

/// Driver that keeps tables in process memory.
///
/// Record ids are assigned on add, the date created and date modified
/// columns are maintained, and compiled query strings are evaluated locally.
/// Saved reports (`qid`) cannot be run.
#[derive(Debug, Default)]
pub struct Memory {
    /// Base URL of the configured realm, used when logging
    url: Option<String>,

    /// Schemas registered for tables, keyed by table id
    schemas: HashMap<String, Arc<TableSchema>>,

    tables: Mutex<HashMap<String, Table>>,
}

impl Memory {
    pub fn new() -> Memory {
        Memory::default()
    }

    /// Create a driver for the realm named by `config`.
    pub fn from_config(config: &Config) -> Result<Memory> {
        let url = config.base_url()?;

        Ok(Memory {
            url: Some(url.to_string()),
            ..Memory::default()
        })
    }

    /// Register the field layout of a table.
    ///
    /// Without a schema a table stores values as written. With one, writes to
    /// unknown FIDs are rejected, and date fields are stored and compared as
    /// epoch milliseconds the way the service does.
    pub fn with_table(mut self, schema: Arc<TableSchema>) -> Memory {
        self.schemas.insert(schema.table_id().to_string(), schema);
        self
    }

    fn schema(&self, table: &str) -> Option<&TableSchema> {
        self.schemas.get(table).map(|schema| &**schema)
    }

    async fn exec_add_record(&self, op: AddRecord) -> Result<Response> {
        let schema = self.schema(&op.table);
        let mut tables = self.tables.lock().await;
        let table = tables.entry(op.table).or_default();

        let record_id = table.add(op.payload, schema)?;
        Ok(Response::record_id(record_id))
    }

    async fn exec_edit_record(&self, op: EditRecord) -> Result<Response> {
        let schema = self.schema(&op.table);
        let mut tables = self.tables.lock().await;

        let Some(table) = tables.get_mut(&op.table) else {
            return Ok(Response::success(false));
        };

        let edited = table.edit(op.record_id, op.payload, schema)?;
        Ok(Response::success(edited))
    }

    async fn exec_delete_record(&self, op: DeleteRecord) -> Result<Response> {
        let mut tables = self.tables.lock().await;

        let deleted = tables
            .get_mut(&op.table)
            .is_some_and(|table| table.delete(op.record_id));

        Ok(Response::success(deleted))
    }

    async fn exec_purge_records(&self, op: PurgeRecords) -> Result<Response> {
        let schema = self.schema(&op.table);
        let mut tables = self.tables.lock().await;

        let Some(table) = tables.get_mut(&op.table) else {
            table::check_source(&op.source)?;
            return Ok(Response::count(0));
        };

        let matching = table.select(&op.source, schema)?;
        for record_id in &matching {
            table.delete(*record_id);
        }

        Ok(Response::count(matching.len() as u64))
    }

    async fn exec_query(&self, op: Query) -> Result<Response> {
        let schema = self.schema(&op.table);
        let tables = self.tables.lock().await;

        let Some(table) = tables.get(&op.table) else {
            table::check_source(&op.source)?;
            return Ok(Response::values(vec![]));
        };

        let matching = table.select(&op.source, schema)?;
        let rows = View::parse(&op)?.apply(table, &matching);

        Ok(Response::values(rows))
    }
}

#[async_trait]
impl Driver for Memory {
    async fn exec(&self, op: Operation) -> Result<Response> {
        log::debug!(
            "memory driver{}: {:?}",
            self.url
                .as_deref()
                .map(|url| format!(" ({url})"))
                .unwrap_or_default(),
            op
        );

        match op {
            Operation::AddRecord(op) => self.exec_add_record(op).await,
            Operation::DeleteRecord(op) => self.exec_delete_record(op).await,
            Operation::EditRecord(op) => self.exec_edit_record(op).await,
            Operation::PurgeRecords(op) => self.exec_purge_records(op).await,
            Operation::Query(op) => self.exec_query(op).await,
        }
    }
}

fn unsupported(message: String) -> Error {
    Error::driver(std::io::Error::new(
        std::io::ErrorKind::Unsupported,
        message,
    ))
}
