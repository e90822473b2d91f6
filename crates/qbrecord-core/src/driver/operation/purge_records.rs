use super::{Operation, Source};

#[derive(Debug, Clone)]
pub struct PurgeRecords {
    pub table: String,

    /// Which records to delete. `Source::All` empties the table.
    pub source: Source,
}

impl From<PurgeRecords> for Operation {
    fn from(value: PurgeRecords) -> Self {
        Self::PurgeRecords(value)
    }
}
