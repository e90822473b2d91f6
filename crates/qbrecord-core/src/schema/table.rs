use super::{Builder, Fid, Field};
use crate::{Error, Result};

use indexmap::IndexMap;
use std::{collections::HashMap, sync::OnceLock};

/// Field layout of one remote table, as seen by one record type.
///
/// A schema is built once per record type and never mutated afterwards, so a
/// single instance can be shared (usually behind an `Arc`) by every thread
/// compiling queries or decoding rows for that type.
#[derive(Debug)]
pub struct TableSchema {
    /// Identifies the remote table (the service's database id)
    table_id: String,

    /// Fields in declaration order, keyed by name
    fields: IndexMap<String, Field>,

    /// Reverse index from FID to the field's position in `fields`
    by_fid: HashMap<Fid, usize>,

    /// Position of the primary key field
    primary_key: usize,

    /// Position of the record id field, when declared
    record_id: Option<usize>,

    /// Default projection, computed on first use
    projection: OnceLock<Vec<Fid>>,

    /// `projection` rendered as the service's dot-separated clist
    clist: OnceLock<String>,
}

impl TableSchema {
    pub fn builder(table_id: impl Into<String>) -> Builder {
        Builder::new(table_id)
    }

    pub(super) fn new(
        table_id: String,
        fields: IndexMap<String, Field>,
        by_fid: HashMap<Fid, usize>,
        primary_key: usize,
        record_id: Option<usize>,
    ) -> Self {
        Self {
            table_id,
            fields,
            by_fid,
            primary_key,
            record_id,
            projection: OnceLock::new(),
            clist: OnceLock::new(),
        }
    }

    pub fn table_id(&self) -> &str {
        &self.table_id
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> impl ExactSizeIterator<Item = &Field> {
        self.fields.values()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    pub fn resolve(&self, name: &str) -> Result<&Field> {
        self.field(name)
            .ok_or_else(|| Error::unknown_field(&self.table_id, name))
    }

    pub fn fid(&self, name: &str) -> Result<Fid> {
        self.resolve(name).map(|field| field.fid)
    }

    pub fn field_for_fid(&self, fid: Fid) -> Result<&Field> {
        self.by_fid
            .get(&fid)
            .map(|index| &self.fields[*index])
            .ok_or_else(|| Error::unknown_fid(&self.table_id, fid.0))
    }

    pub fn field_name_for_fid(&self, fid: Fid) -> Result<&str> {
        self.field_for_fid(fid).map(|field| field.name.as_str())
    }

    /// FIDs of every declared field, in declaration order. This is the default
    /// response projection.
    pub fn projection_list(&self) -> &[Fid] {
        self.projection
            .get_or_init(|| self.fields.values().map(|field| field.fid).collect())
    }

    /// The default projection as a dot-separated list, e.g. `3.6.7`.
    pub fn clist(&self) -> &str {
        self.clist.get_or_init(|| {
            self.projection_list()
                .iter()
                .map(Fid::to_string)
                .collect::<Vec<_>>()
                .join(".")
        })
    }

    /// Fields clients may write.
    pub fn writable_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.values().filter(|field| !field.read_only)
    }

    /// The explicitly flagged primary key, or the record id field when no
    /// field is flagged.
    pub fn primary_key(&self) -> &Field {
        &self.fields[self.primary_key]
    }

    /// The field that owns FID 3, if the record type declares it.
    pub fn record_id_field(&self) -> Option<&Field> {
        self.record_id.map(|index| &self.fields[index])
    }
}
