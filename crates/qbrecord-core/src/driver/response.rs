use crate::{Error, RawRow, Result};

#[derive(Debug)]
pub struct Response {
    pub rows: Rows,
}

#[derive(Debug)]
pub enum Rows {
    /// Number of records affected by the operation
    Count(u64),

    /// Record id assigned to a new record
    RecordId(u64),

    /// Whether a single-record operation succeeded
    Success(bool),

    /// Rows returned by a query
    Values(Vec<RawRow>),
}

impl Response {
    pub fn count(count: u64) -> Self {
        Self {
            rows: Rows::Count(count),
        }
    }

    pub fn record_id(record_id: u64) -> Self {
        Self {
            rows: Rows::RecordId(record_id),
        }
    }

    pub fn success(success: bool) -> Self {
        Self {
            rows: Rows::Success(success),
        }
    }

    pub fn values(values: Vec<RawRow>) -> Self {
        Self {
            rows: Rows::Values(values),
        }
    }
}

impl Rows {
    pub fn is_count(&self) -> bool {
        matches!(self, Self::Count(_))
    }

    pub fn is_values(&self) -> bool {
        matches!(self, Self::Values(_))
    }

    fn variant_name(&self) -> &'static str {
        match self {
            Self::Count(_) => "Count",
            Self::RecordId(_) => "RecordId",
            Self::Success(_) => "Success",
            Self::Values(_) => "Values",
        }
    }

    pub fn into_count(self) -> Result<u64> {
        match self {
            Self::Count(count) => Ok(count),
            other => Err(unexpected("Count", &other)),
        }
    }

    pub fn into_record_id(self) -> Result<u64> {
        match self {
            Self::RecordId(id) => Ok(id),
            other => Err(unexpected("RecordId", &other)),
        }
    }

    pub fn into_success(self) -> Result<bool> {
        match self {
            Self::Success(success) => Ok(success),
            other => Err(unexpected("Success", &other)),
        }
    }

    pub fn into_values(self) -> Result<Vec<RawRow>> {
        match self {
            Self::Values(values) => Ok(values),
            other => Err(unexpected("Values", &other)),
        }
    }
}

fn unexpected(expected: &str, actual: &Rows) -> Error {
    Error::invalid_response(format!(
        "expected {expected}, got {}",
        actual.variant_name()
    ))
}
