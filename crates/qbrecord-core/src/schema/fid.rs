use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Numeric field identifier assigned by the remote service.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fid(pub u32);

impl Fid {
    /// Date the record was created.
    pub const DATE_CREATED: Fid = Fid(1);

    /// Date the record was last modified.
    pub const DATE_MODIFIED: Fid = Fid(2);

    /// The service's intrinsic record identifier.
    pub const RECORD_ID: Fid = Fid(3);

    /// User that owns the record.
    pub const RECORD_OWNER: Fid = Fid(4);

    /// User that last modified the record.
    pub const LAST_MODIFIED_BY: Fid = Fid(5);

    /// True for the columns the service maintains itself. These are never
    /// written by clients.
    pub const fn is_builtin(self) -> bool {
        matches!(self.0, 1..=5)
    }
}

impl From<u32> for Fid {
    fn from(value: u32) -> Self {
        Fid(value)
    }
}

impl From<Fid> for u32 {
    fn from(value: Fid) -> Self {
        value.0
    }
}

impl FromStr for Fid {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Fid)
    }
}

impl fmt::Display for Fid {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, fmt)
    }
}

impl fmt::Debug for Fid {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "Fid({})", self.0)
    }
}
