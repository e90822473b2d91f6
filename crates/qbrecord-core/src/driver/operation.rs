mod add_record;
pub use add_record::AddRecord;

mod delete_record;
pub use delete_record::DeleteRecord;

mod edit_record;
pub use edit_record::EditRecord;

mod purge_records;
pub use purge_records::PurgeRecords;

mod query;
pub use query::{Query, Source};

#[derive(Debug, Clone)]
pub enum Operation {
    /// Create a new record, answered with its record id
    AddRecord(AddRecord),

    /// Delete one record by record id
    DeleteRecord(DeleteRecord),

    /// Update one record by record id
    EditRecord(EditRecord),

    /// Delete every record matching a query
    PurgeRecords(PurgeRecords),

    /// Fetch rows
    Query(Query),
}

impl Operation {
    /// The remote table the operation targets.
    pub fn table(&self) -> &str {
        match self {
            Self::AddRecord(op) => &op.table,
            Self::DeleteRecord(op) => &op.table,
            Self::EditRecord(op) => &op.table,
            Self::PurgeRecords(op) => &op.table,
            Self::Query(op) => &op.table,
        }
    }
}
