use std::fmt;

/// A comparison operator of the query grammar, such as `EX` or `GTE`.
///
/// Comparators are passed through to the service as written.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Comparator(String);

impl Comparator {
    pub const EQUALS: &'static str = "EX";

    pub fn new(name: impl Into<String>) -> Comparator {
        Comparator(name.into())
    }

    pub fn equals() -> Comparator {
        Comparator(Self::EQUALS.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Comparators are written bare between two `.` separators, so they may
    /// only contain ASCII letters and digits.
    pub fn is_valid(&self) -> bool {
        !self.0.is_empty() && self.0.bytes().all(|b| b.is_ascii_alphanumeric())
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Comparator {
    fn from(value: &str) -> Self {
        Comparator::new(value)
    }
}

impl From<String> for Comparator {
    fn from(value: String) -> Self {
        Comparator(value)
    }
}
