mod file;
pub use file::FileAttachment;

mod row;
pub use row::Row;

use jiff::civil::Date;
use std::fmt;

/// A typed field value, as held by a record or produced by the codec.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// Checkbox value
    Bool(bool),

    /// Calendar date in the local time zone
    Date(Date),

    /// Number with a fractional part
    F64(f64),

    /// File attachment metadata and, for uploads, its contents
    File(FileAttachment),

    /// Number without a fractional part
    I64(i64),

    /// Absent / unset value
    #[default]
    Null,

    /// Text value
    String(String),
}

impl Value {
    pub const fn null() -> Self {
        Self::Null
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Name of the variant, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "Bool",
            Self::Date(_) => "Date",
            Self::F64(_) => "F64",
            Self::File(_) => "File",
            Self::I64(_) => "I64",
            Self::Null => "Null",
            Self::String(_) => "String",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::I64(v) => Some(*v),
            _ => None,
        }
    }

    /// Numeric view of the value; integers widen to `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::F64(v) => Some(*v),
            Self::I64(v) => Some(*v as f64),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<Date> {
        match self {
            Self::Date(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_file(&self) -> Option<&FileAttachment> {
        match self {
            Self::File(v) => Some(v),
            _ => None,
        }
    }

    /// Take the value out, leaving `Null` in its place.
    pub fn take(&mut self) -> Value {
        std::mem::take(self)
    }
}

/// Renders the value the way it is interpolated into query strings and shown
/// to users. Dates use the service's `MM/DD/YYYY` format and `Null` renders as
/// the empty string.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => fmt::Display::fmt(v, f),
            Self::Date(v) => write!(f, "{:02}/{:02}/{:04}", v.month(), v.day(), v.year()),
            Self::F64(v) => fmt::Display::fmt(v, f),
            Self::File(v) => f.write_str(&v.filename),
            Self::I64(v) => fmt::Display::fmt(v, f),
            Self::Null => Ok(()),
            Self::String(v) => f.write_str(v),
        }
    }
}

impl From<bool> for Value {
    fn from(src: bool) -> Self {
        Self::Bool(src)
    }
}

impl From<i32> for Value {
    fn from(src: i32) -> Self {
        Self::I64(src.into())
    }
}

impl From<u32> for Value {
    fn from(src: u32) -> Self {
        Self::I64(src.into())
    }
}

impl From<i64> for Value {
    fn from(src: i64) -> Self {
        Self::I64(src)
    }
}

impl From<f64> for Value {
    fn from(src: f64) -> Self {
        Self::F64(src)
    }
}

impl From<&str> for Value {
    fn from(src: &str) -> Self {
        Self::String(src.to_string())
    }
}

impl From<String> for Value {
    fn from(src: String) -> Self {
        Self::String(src)
    }
}

impl From<&String> for Value {
    fn from(src: &String) -> Self {
        Self::String(src.clone())
    }
}

impl From<Date> for Value {
    fn from(src: Date) -> Self {
        Self::Date(src)
    }
}

impl From<FileAttachment> for Value {
    fn from(src: FileAttachment) -> Self {
        Self::File(src)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(src: Option<T>) -> Self {
        match src {
            Some(value) => value.into(),
            None => Self::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_dates_as_month_day_year() {
        let value = Value::Date(jiff::civil::date(2015, 3, 7));
        assert_eq!(value.to_string(), "03/07/2015");
    }

    #[test]
    fn display_scalars() {
        assert_eq!(Value::from(1).to_string(), "1");
        assert_eq!(Value::from(123.45).to_string(), "123.45");
        assert_eq!(Value::from("Mrs. Brown").to_string(), "Mrs. Brown");
        assert_eq!(Value::from(true).to_string(), "true");
        assert_eq!(Value::Null.to_string(), "");
    }

    #[test]
    fn option_none_is_null() {
        assert!(Value::from(None::<i64>).is_null());
        assert_eq!(Value::from(Some(3)), Value::I64(3));
    }

    #[test]
    fn integers_widen_to_f64() {
        assert_eq!(Value::I64(2).as_f64(), Some(2.0));
        assert_eq!(Value::String("2".into()).as_f64(), None);
    }
}
