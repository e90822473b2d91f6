use super::{Fid, Field, FieldKind, TableSchema};
use crate::{Error, Result};

use indexmap::IndexMap;
use std::collections::HashMap;

/// Collects field definitions for one remote table and validates them into a
/// [`TableSchema`].
#[derive(Debug)]
pub struct Builder {
    table_id: String,
    fields: Vec<Field>,
}

impl Builder {
    pub(super) fn new(table_id: impl Into<String>) -> Self {
        Self {
            table_id: table_id.into(),
            fields: vec![],
        }
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn string(self, name: &str, fid: u32) -> Self {
        self.field(Field::new(name, fid, FieldKind::String))
    }

    pub fn number(self, name: &str, fid: u32) -> Self {
        self.field(Field::new(name, fid, FieldKind::Number))
    }

    pub fn date(self, name: &str, fid: u32) -> Self {
        self.field(Field::new(name, fid, FieldKind::Date))
    }

    pub fn boolean(self, name: &str, fid: u32) -> Self {
        self.field(Field::new(name, fid, FieldKind::Boolean))
    }

    pub fn file_attachment(self, name: &str, fid: u32) -> Self {
        self.field(Field::new(name, fid, FieldKind::FileAttachment))
    }

    pub fn build(self) -> Result<TableSchema> {
        if self.table_id.trim().is_empty() {
            return Err(Error::invalid_schema("table id must not be empty"));
        }

        let mut fields = IndexMap::with_capacity(self.fields.len());
        let mut by_fid = HashMap::with_capacity(self.fields.len());
        let mut primary_key = None;
        let mut record_id = None;

        for (index, mut field) in self.fields.into_iter().enumerate() {
            if field.name.is_empty() {
                return Err(Error::invalid_schema(format!(
                    "field with FID {} has an empty name; table={}",
                    field.fid, self.table_id
                )));
            }

            if fields.contains_key(&field.name) {
                return Err(Error::invalid_schema(format!(
                    "duplicate field name `{}`; table={}",
                    field.name, self.table_id
                )));
            }

            if let Some(prev) = by_fid.insert(field.fid, index) {
                let prev: &Field = &fields[prev];
                return Err(Error::invalid_schema(format!(
                    "duplicate FID {} on `{}` and `{}`; table={}",
                    field.fid, prev.name, field.name, self.table_id
                )));
            }

            if field.primary_key {
                if let Some(prev) = primary_key {
                    let prev: &Field = &fields[prev];
                    return Err(Error::invalid_schema(format!(
                        "more than one primary key: `{}` and `{}`; table={}",
                        prev.name, field.name, self.table_id
                    )));
                }
                primary_key = Some(index);
            }

            if field.fid.is_builtin() {
                field.read_only = true;
            }

            if field.is_record_id() {
                record_id = Some(index);
            }

            fields.insert(field.name.clone(), field);
        }

        let Some(primary_key) = primary_key.or(record_id) else {
            return Err(Error::invalid_schema(format!(
                "no primary key flagged and no field owns the record id FID {}; table={}",
                Fid::RECORD_ID,
                self.table_id
            )));
        };

        Ok(TableSchema::new(
            self.table_id,
            fields,
            by_fid,
            primary_key,
            record_id,
        ))
    }
}
