use super::Operation;

use crate::Payload;

#[derive(Debug, Clone)]
pub struct AddRecord {
    pub table: String,

    /// Field values to write
    pub payload: Payload,
}

impl From<AddRecord> for Operation {
    fn from(value: AddRecord) -> Self {
        Self::AddRecord(value)
    }
}
