//! Conversion between Rust field types and [`Value`].

use crate::{schema::FieldKind, Error, FileAttachment, Result, Value};

use jiff::civil::Date;

/// A Rust type usable as a model field.
pub trait Primitive: Sized {
    /// How values of the field are decoded
    const KIND: FieldKind;

    /// True if the type can hold `Null`
    const NULLABLE: bool = false;

    fn load(value: Value) -> Result<Self>;

    fn to_value(&self) -> Value;
}

impl Primitive for String {
    const KIND: FieldKind = FieldKind::String;

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::String(v) => Ok(v),
            other => Err(Error::type_conversion(other, "String")),
        }
    }

    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }
}

impl Primitive for i64 {
    const KIND: FieldKind = FieldKind::Number;

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::I64(v) => Ok(v),
            // Integral values written with a decimal point, e.g. `12.0`
            Value::F64(v) if v.fract() == 0.0 && v.abs() < i64::MAX as f64 => Ok(v as i64),
            other => Err(Error::type_conversion(other, "i64")),
        }
    }

    fn to_value(&self) -> Value {
        Value::I64(*self)
    }
}

impl Primitive for i32 {
    const KIND: FieldKind = FieldKind::Number;

    fn load(value: Value) -> Result<Self> {
        let v = i64::load(value)?;
        i32::try_from(v).map_err(|_| Error::type_conversion(Value::I64(v), "i32"))
    }

    fn to_value(&self) -> Value {
        Value::I64((*self).into())
    }
}

impl Primitive for u32 {
    const KIND: FieldKind = FieldKind::Number;

    fn load(value: Value) -> Result<Self> {
        let v = i64::load(value)?;
        u32::try_from(v).map_err(|_| Error::type_conversion(Value::I64(v), "u32"))
    }

    fn to_value(&self) -> Value {
        Value::I64((*self).into())
    }
}

impl Primitive for f64 {
    const KIND: FieldKind = FieldKind::Number;

    fn load(value: Value) -> Result<Self> {
        match value.as_f64() {
            Some(v) => Ok(v),
            None => Err(Error::type_conversion(value, "f64")),
        }
    }

    fn to_value(&self) -> Value {
        Value::F64(*self)
    }
}

impl Primitive for bool {
    const KIND: FieldKind = FieldKind::Boolean;

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Bool(v) => Ok(v),
            other => Err(Error::type_conversion(other, "bool")),
        }
    }

    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }
}

impl Primitive for Date {
    const KIND: FieldKind = FieldKind::Date;

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Date(v) => Ok(v),
            other => Err(Error::type_conversion(other, "Date")),
        }
    }

    fn to_value(&self) -> Value {
        Value::Date(*self)
    }
}

impl Primitive for FileAttachment {
    const KIND: FieldKind = FieldKind::FileAttachment;

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::File(v) => Ok(v),
            other => Err(Error::type_conversion(other, "FileAttachment")),
        }
    }

    fn to_value(&self) -> Value {
        Value::File(self.clone())
    }
}

impl<T: Primitive> Primitive for Option<T> {
    const KIND: FieldKind = T::KIND;
    const NULLABLE: bool = true;

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Null => Ok(None),
            value => Ok(Some(T::load(value)?)),
        }
    }

    fn to_value(&self) -> Value {
        match self {
            Some(v) => v.to_value(),
            None => Value::Null,
        }
    }
}
