use crate::{eval, unsupported};

use indexmap::IndexMap;
use jiff::{civil::Date, tz::TimeZone, Timestamp};
use qbrecord_core::{
    driver::operation::Source,
    schema::{Fid, FieldKind},
    Error, Payload, Result, TableSchema,
};
use serde_json::Value as Json;
use std::collections::BTreeMap;

/// Stored field values of one record, keyed by FID.
pub(crate) type Record = IndexMap<Fid, Json>;

#[derive(Debug, Default)]
pub(crate) struct Table {
    /// Last record id handed out. Ids are never reused.
    last_record_id: u64,

    /// Records in record id order
    pub(crate) records: BTreeMap<u64, Record>,
}

impl Table {
    pub(crate) fn add(&mut self, payload: Payload, schema: Option<&TableSchema>) -> Result<u64> {
        let now = now_millis();
        let record_id = self.last_record_id + 1;

        let mut record = Record::new();
        record.insert(Fid::DATE_CREATED, now.clone());
        record.insert(Fid::DATE_MODIFIED, now);
        record.insert(Fid::RECORD_ID, Json::String(record_id.to_string()));
        write(&mut record, payload, schema)?;

        self.last_record_id = record_id;
        self.records.insert(record_id, record);

        Ok(record_id)
    }

    pub(crate) fn edit(
        &mut self,
        record_id: u64,
        payload: Payload,
        schema: Option<&TableSchema>,
    ) -> Result<bool> {
        let Some(record) = self.records.get_mut(&record_id) else {
            return Ok(false);
        };

        // Validate before touching the stored record
        let mut updated = record.clone();
        write(&mut updated, payload, schema)?;
        updated.insert(Fid::DATE_MODIFIED, now_millis());
        *record = updated;

        Ok(true)
    }

    pub(crate) fn delete(&mut self, record_id: u64) -> bool {
        self.records.remove(&record_id).is_some()
    }

    /// Ids of the records `source` selects, in record id order.
    pub(crate) fn select(&self, source: &Source, schema: Option<&TableSchema>) -> Result<Vec<u64>> {
        check_source(source)?;

        let Source::Query(query) = source else {
            return Ok(self.records.keys().copied().collect());
        };

        let query = qbrecord_query::parse(query)?;
        let mut ret = vec![];

        for (record_id, record) in &self.records {
            if query.evaluate(|clause| eval::matches(clause, record, schema))? {
                ret.push(*record_id);
            }
        }

        Ok(ret)
    }
}

/// Fails for sources the driver cannot run.
pub(crate) fn check_source(source: &Source) -> Result<()> {
    match source {
        Source::Qid(qid) => Err(unsupported(format!(
            "saved reports cannot be run in memory; qid={qid}"
        ))),
        Source::All | Source::Query(_) => Ok(()),
    }
}

fn write(record: &mut Record, payload: Payload, schema: Option<&TableSchema>) -> Result<()> {
    for (fid, value) in payload {
        // Maintained by the service
        if fid.is_builtin() {
            continue;
        }

        let value = match schema {
            Some(schema) => {
                let field = schema.field_for_fid(fid)?;
                store(field.kind, value)?
            }
            None => value,
        };

        record.insert(fid, value);
    }

    Ok(())
}

/// Convert a written value to the form the service returns it in.
fn store(kind: FieldKind, value: Json) -> Result<Json> {
    match (kind, value) {
        (FieldKind::Date, Json::String(text)) if !text.is_empty() => match date_millis(&text) {
            Some(millis) => Ok(Json::String(millis.to_string())),
            None => Err(Error::invalid_argument(format!(
                "`{text}` is not a MM/DD/YYYY date"
            ))),
        },
        (_, value) => Ok(value),
    }
}

/// Epoch milliseconds of local midnight on a `MM/DD/YYYY` date.
pub(crate) fn date_millis(text: &str) -> Option<i64> {
    let date = Date::strptime("%m/%d/%Y", text.trim()).ok()?;
    let zoned = date.to_zoned(TimeZone::system()).ok()?;
    Some(zoned.timestamp().as_millisecond())
}

fn now_millis() -> Json {
    Json::String(Timestamp::now().as_millisecond().to_string())
}
