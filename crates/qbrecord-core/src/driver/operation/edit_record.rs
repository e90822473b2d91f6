use super::Operation;

use crate::Payload;

#[derive(Debug, Clone)]
pub struct EditRecord {
    pub table: String,

    /// Record id (FID 3) of the record to update
    pub record_id: u64,

    /// Field values to write. Fields absent from the payload keep their
    /// current values.
    pub payload: Payload,
}

impl From<EditRecord> for Operation {
    fn from(value: EditRecord) -> Self {
        Self::EditRecord(value)
    }
}
