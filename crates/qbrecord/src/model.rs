use crate::{Error, Record, Result, Row, TableSchema, Value};

use std::sync::Arc;

/// A record type mapped onto one remote table.
///
/// Implemented by `#[derive(Model)]`.
pub trait Model: Record + Sized + Send + 'static {
    /// The table layout, built once and shared by every instance.
    fn schema() -> &'static Arc<TableSchema>;

    /// Build an instance from a decoded row. Fields missing from the row load
    /// as `Null`.
    fn load(row: Row) -> Result<Self>;

    /// Set one field by name.
    fn assign(&mut self, name: &str, value: Value) -> Result<()>;

    /// True if the named field cannot load from `Null`. Queries always fetch
    /// these fields, whatever projection the caller asks for.
    fn is_required(name: &str) -> bool {
        let _ = name;
        false
    }

    /// Set every field named in `row`, without saving.
    fn assign_attributes(&mut self, row: Row) -> Result<()> {
        for (name, value) in row {
            self.assign(&name, value)?;
        }

        Ok(())
    }

    /// The service's record id (FID 3), once the record has been saved.
    fn record_id(&self) -> Option<u64> {
        let field = Self::schema().record_id_field()?;

        match self.field_value(&field.name) {
            Value::I64(id) => u64::try_from(id).ok(),
            Value::F64(id) if id.fract() == 0.0 && id >= 0.0 => Some(id as u64),
            _ => None,
        }
    }

    /// Store the record id assigned by the service. Models that do not
    /// declare FID 3 ignore it.
    fn set_record_id(&mut self, id: u64) -> Result<()> {
        let Some(field) = Self::schema().record_id_field() else {
            return Ok(());
        };

        let id = i64::try_from(id)
            .map_err(|_| Error::invalid_response(format!("record id {id} is out of range")))?;

        self.assign(&field.name, Value::I64(id))
    }
}
