use crate::{Error, Payload, Record, Result, TableSchema, Value};

use serde_json::Value as Json;

/// Build the write payload for `record`.
///
/// Fields are visited in declaration order. Unset values are dropped, as are
/// read-only fields. The primary key is the exception: it is written whenever
/// it is set, so the persistence caller can tell an edit from a create.
pub fn encode(record: &impl Record, schema: &TableSchema) -> Result<Payload> {
    let mut payload = Payload::new();

    for field in schema.fields() {
        let value = record.field_value(&field.name);

        if value.is_null() {
            continue;
        }

        if field.read_only && !field.primary_key {
            continue;
        }

        let raw = encode_value(value).map_err(|err| {
            err.context(err!(
                "failed to encode field `{}` (FID {}) on `{}`",
                field.name,
                field.fid,
                schema.table_id()
            ))
        })?;

        payload.insert(field.fid, raw);
    }

    Ok(payload)
}

/// Convert one typed value to its wire representation.
pub fn encode_value(value: Value) -> Result<Json> {
    Ok(match value {
        Value::Null => Json::Null,
        Value::Bool(v) => Json::Bool(v),
        Value::I64(v) => Json::from(v),
        Value::F64(v) => serde_json::Number::from_f64(v)
            .map(Json::Number)
            .ok_or_else(|| Error::type_conversion(Value::F64(v), "finite number"))?,
        Value::String(v) => Json::String(v),
        Value::Date(_) => Json::String(value.to_string()),
        Value::File(file) => serde_json::to_value(file)?,
    })
}
