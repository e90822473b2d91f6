//! Conversion between FID-keyed wire rows and name-keyed typed values.

mod decode;
pub use decode::{decode, decode_value};

mod encode;
pub use encode::{encode, encode_value};

use crate::{schema::Fid, Row, Value};
use indexmap::IndexMap;

/// A row as returned by the remote service: raw values keyed by the FID
/// rendered as a string (e.g. `"6"`).
pub type RawRow = IndexMap<String, serde_json::Value>;

/// A write payload: raw values keyed by FID, in schema declaration order.
pub type Payload = IndexMap<Fid, serde_json::Value>;

/// Something that holds one value per declared field.
pub trait Record {
    /// The current value of the named field, or `Null` when unset.
    fn field_value(&self, name: &str) -> Value;
}

impl Record for Row {
    fn field_value(&self, name: &str) -> Value {
        self.get(name).cloned().unwrap_or_default()
    }
}
