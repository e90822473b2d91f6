#[macro_use]
mod fmt;
use fmt::ToQuery;

mod delim;
use delim::{And, Or};

// Fragment serializers
mod clause;
use clause::Clause;

mod condition;
mod filter;
mod raw;

use crate::Filter;
use qbrecord_core::{schema::Fid, Result, TableSchema};

/// Compiles filters for one table into the service's query grammar.
#[derive(Debug)]
pub struct Serializer<'a> {
    /// Schema used to resolve field names
    schema: &'a TableSchema,
}

struct Formatter<'a> {
    /// Handle to the serializer
    serializer: &'a Serializer<'a>,

    /// Where to write the compiled query
    dst: &'a mut String,
}

impl<'a> Serializer<'a> {
    pub fn new(schema: &'a TableSchema) -> Serializer<'a> {
        Serializer { schema }
    }

    pub fn compile(&self, filter: &Filter) -> Result<String> {
        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
        };

        filter.to_query(&mut fmt)?;

        log::debug!(
            "compiled filter for `{}`: {}",
            self.schema.table_id(),
            ret
        );

        Ok(ret)
    }

    fn fid(&self, name: &str) -> Result<Fid> {
        self.schema.fid(name)
    }
}
