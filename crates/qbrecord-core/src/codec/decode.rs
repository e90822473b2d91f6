use crate::{
    schema::{Fid, Field, FieldKind},
    Error, FileAttachment, RawRow, Result, Row, TableSchema, Value,
};

use jiff::{tz::TimeZone, Timestamp};
use serde_json::Value as Json;

/// Convert a raw response row into named, typed values.
///
/// Every FID in the row must belong to a field of `schema`; an unknown FID is
/// reported as an unknown field error rather than skipped.
pub fn decode(raw: &RawRow, schema: &TableSchema) -> Result<Row> {
    let mut row = Row::new();

    for (key, raw_value) in raw {
        let fid: Fid = key
            .parse()
            .map_err(|_| Error::unknown_field(schema.table_id(), key.as_str()))?;
        let field = schema.field_for_fid(fid)?;

        let value = decode_value(field, raw_value).map_err(|err| {
            err.context(err!(
                "failed to decode field `{}` (FID {}) on `{}`",
                field.name,
                field.fid,
                schema.table_id()
            ))
        })?;

        log::trace!("decoded {}={:?} as {}", field.name, value, field.kind);
        row.insert(field.name.as_str(), value);
    }

    Ok(row)
}

/// Convert one raw value according to the field's kind.
pub fn decode_value(field: &Field, raw: &Json) -> Result<Value> {
    if raw.is_null() {
        return Ok(Value::Null);
    }

    match field.kind {
        FieldKind::String => Ok(decode_string(raw)),
        FieldKind::Number => decode_number(raw),
        FieldKind::Date => decode_date(raw),
        FieldKind::Boolean => decode_boolean(raw),
        FieldKind::FileAttachment => decode_file(raw),
    }
}

fn decode_string(raw: &Json) -> Value {
    match raw {
        Json::String(s) => Value::String(s.clone()),
        other => Value::String(other.to_string()),
    }
}

fn decode_number(raw: &Json) -> Result<Value> {
    match raw {
        Json::String(s) => {
            let s = s.trim();

            if s.is_empty() {
                Ok(Value::Null)
            } else if s.contains('.') {
                s.parse()
                    .map(Value::F64)
                    .map_err(|_| Error::type_conversion(Value::String(s.into()), "f64"))
            } else {
                s.parse()
                    .map(Value::I64)
                    .map_err(|_| Error::type_conversion(Value::String(s.into()), "i64"))
            }
        }
        Json::Number(n) => match n.as_i64() {
            Some(v) => Ok(Value::I64(v)),
            None => n
                .as_f64()
                .map(Value::F64)
                .ok_or_else(|| Error::type_conversion(Value::String(n.to_string()), "f64")),
        },
        other => Err(Error::type_conversion(decode_string(other), "number")),
    }
}

fn decode_date(raw: &Json) -> Result<Value> {
    let millis = match raw {
        Json::String(s) if s.trim().is_empty() => return Ok(Value::Null),
        Json::String(s) => parse_millis(s.trim())
            .ok_or_else(|| Error::type_conversion(Value::String(s.clone()), "date"))?,
        Json::Number(n) => match n.as_i64() {
            Some(v) => v,
            None => n
                .as_f64()
                .map(|v| v.trunc() as i64)
                .ok_or_else(|| Error::type_conversion(Value::String(n.to_string()), "date"))?,
        },
        other => return Err(Error::type_conversion(decode_string(other), "date")),
    };

    let date = Timestamp::from_millisecond(millis)?
        .to_zoned(TimeZone::system())
        .date();

    Ok(Value::Date(date))
}

fn parse_millis(s: &str) -> Option<i64> {
    if s.contains('.') {
        s.parse::<f64>().ok().map(|v| v.trunc() as i64)
    } else {
        s.parse().ok()
    }
}

fn decode_boolean(raw: &Json) -> Result<Value> {
    match raw {
        Json::Bool(v) => Ok(Value::Bool(*v)),
        Json::Number(n) => match n.as_i64() {
            Some(0) => Ok(Value::Bool(false)),
            Some(1) => Ok(Value::Bool(true)),
            _ => Err(Error::type_conversion(Value::String(n.to_string()), "bool")),
        },
        Json::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(Value::Bool(true)),
            "" | "0" | "false" | "no" | "off" => Ok(Value::Bool(false)),
            _ => Err(Error::type_conversion(Value::String(s.clone()), "bool")),
        },
        other => Err(Error::type_conversion(decode_string(other), "bool")),
    }
}

fn decode_file(raw: &Json) -> Result<Value> {
    match raw {
        Json::String(s) if s.is_empty() => Ok(Value::Null),
        Json::String(s) => Ok(Value::File(FileAttachment::new(s.as_str()))),
        Json::Object(_) => {
            let file: FileAttachment = serde_json::from_value(raw.clone())?;
            Ok(Value::File(file))
        }
        other => Err(Error::type_conversion(decode_string(other), "file attachment")),
    }
}
