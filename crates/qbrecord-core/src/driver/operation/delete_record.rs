use super::Operation;

#[derive(Debug, Clone)]
pub struct DeleteRecord {
    pub table: String,
    pub record_id: u64,
}

impl From<DeleteRecord> for Operation {
    fn from(value: DeleteRecord) -> Self {
        Self::DeleteRecord(value)
    }
}
