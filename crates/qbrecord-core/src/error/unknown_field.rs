use super::Error;

/// Error when a field name or FID has no entry in a table schema.
///
/// This always indicates a programming or configuration mistake and is never
/// retried.
#[derive(Debug)]
pub(super) struct UnknownFieldError {
    table: Box<str>,
    field: UnknownField,
}

#[derive(Debug)]
enum UnknownField {
    Name(Box<str>),
    Fid(u32),
}

impl std::error::Error for UnknownFieldError {}

impl core::fmt::Display for UnknownFieldError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match &self.field {
            UnknownField::Name(name) => {
                write!(f, "unknown field `{}` on `{}`", name, self.table)
            }
            UnknownField::Fid(fid) => {
                write!(f, "unknown field with FID {} on `{}`", fid, self.table)
            }
        }
    }
}

impl Error {
    /// Creates an unknown field error for a field name.
    pub fn unknown_field(table: impl Into<String>, name: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnknownField(UnknownFieldError {
            table: table.into().into(),
            field: UnknownField::Name(name.into().into()),
        }))
    }

    /// Creates an unknown field error for a FID.
    pub fn unknown_fid(table: impl Into<String>, fid: u32) -> Error {
        Error::from(super::ErrorKind::UnknownField(UnknownFieldError {
            table: table.into().into(),
            field: UnknownField::Fid(fid),
        }))
    }

    /// Returns `true` if this error is an unknown field error.
    pub fn is_unknown_field(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::UnknownField(_)))
    }
}
