pub mod filter;
pub use filter::{Comparator, Comparison, Condition, Conditions, Filter, Operand};

pub mod options;
pub use options::{QueryOptions, ResolvedOptions};

pub mod parse;
pub use parse::parse;

pub mod serializer;
pub use serializer::Serializer;

use qbrecord_core::{Result, TableSchema};

/// Compile `filter` into the service's query grammar, resolving field names
/// against `schema`.
pub fn compile(filter: &Filter, schema: &TableSchema) -> Result<String> {
    Serializer::new(schema).compile(filter)
}
