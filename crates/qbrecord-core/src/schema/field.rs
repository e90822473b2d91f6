use super::Fid;
use std::fmt;

/// Describes one column of a remote table.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Symbolic field name used by application code
    pub name: String,

    /// Field identifier on the remote table
    pub fid: Fid,

    /// How raw values of this field are converted
    pub kind: FieldKind,

    /// True if clients never write this field
    pub read_only: bool,

    /// True if the field is the record type's primary key
    pub primary_key: bool,
}

/// The value type of a field.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FieldKind {
    String,
    Number,
    Date,
    Boolean,
    FileAttachment,
}

impl Field {
    pub fn new(name: impl Into<String>, fid: impl Into<Fid>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            fid: fid.into(),
            kind,
            read_only: false,
            primary_key: false,
        }
    }

    /// Flag the field as read-only.
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    /// Flag the field as the primary key.
    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    pub fn is_record_id(&self) -> bool {
        self.fid == Fid::RECORD_ID
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.write_str(match self {
            FieldKind::String => "string",
            FieldKind::Number => "number",
            FieldKind::Date => "date",
            FieldKind::Boolean => "boolean",
            FieldKind::FileAttachment => "file attachment",
        })
    }
}
