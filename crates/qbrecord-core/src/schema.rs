mod builder;
pub use builder::Builder;

mod fid;
pub use fid::Fid;

mod field;
pub use field::{Field, FieldKind};

mod table;
pub use table::TableSchema;
