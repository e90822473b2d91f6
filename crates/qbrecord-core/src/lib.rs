#[macro_use]
mod error;
pub use error::{Error, IntoError};

mod config;
pub use config::Config;

pub mod codec;
pub use codec::{Payload, RawRow, Record};

pub mod driver;
pub use driver::Driver;

pub mod schema;
pub use schema::TableSchema;

pub mod value;
pub use value::{FileAttachment, Row, Value};

/// A Result type alias that uses qbrecord's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

pub use async_trait::async_trait;
