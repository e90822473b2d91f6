use super::Error;

/// Error when a raw query string does not match the bracket grammar
/// `{'<fid>'.<CMP>.'<value>'}`.
#[derive(Debug)]
pub(super) struct MalformedFilterError {
    query: Box<str>,
    reason: Box<str>,
}

impl std::error::Error for MalformedFilterError {}

impl core::fmt::Display for MalformedFilterError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "malformed filter `{}`: {}", self.query, self.reason)
    }
}

impl Error {
    /// Creates a malformed filter error for `query`.
    pub fn malformed_filter(query: impl Into<String>, reason: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::MalformedFilter(MalformedFilterError {
            query: query.into().into(),
            reason: reason.into().into(),
        }))
    }

    /// Returns `true` if this error is a malformed filter error.
    pub fn is_malformed_filter(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::MalformedFilter(_)))
    }
}
