mod db;
pub use db::Db;

mod model;
pub use model::Model;

pub mod primitive;
pub use primitive::Primitive;

pub use qbrecord_core::{
    async_trait,
    codec::{decode, encode, Payload, RawRow, Record},
    driver::{self, Driver},
    row, schema, Config, Error, FileAttachment, Result, Row, TableSchema, Value,
};

pub use qbrecord_macros::Model;

pub use qbrecord_query::{Comparison, Condition, Conditions, Filter, QueryOptions};

#[doc(hidden)]
pub mod codegen_support {
    pub use crate::{Model, Primitive};
    pub use qbrecord_core::{schema, Error, Record, Result, Row, TableSchema, Value};
    pub use std::sync::{Arc, OnceLock};

    /// Validate a schema generated by `#[derive(Model)]`.
    ///
    /// The derive already rejects every invalid layout, so a failure here is
    /// a bug in the generated code.
    pub fn build_schema(model: &str, builder: schema::Builder) -> Arc<TableSchema> {
        match builder.build() {
            Ok(schema) => Arc::new(schema),
            Err(err) => panic!("generated schema for `{model}` is invalid: {err}"),
        }
    }

    /// Take one field out of a decoded row.
    pub fn load_field<T: Primitive>(row: &mut Row, name: &str) -> Result<T> {
        load_value(row.take(name), name)
    }

    pub fn load_value<T: Primitive>(value: Value, name: &str) -> Result<T> {
        T::load(value).map_err(|err| err.context(qbrecord_core::err!("field `{name}`")))
    }
}
