//! Error types that can occur during header related operation.

/// An error that can occur when a header field name is validated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HeaderError {
    /// Field name is empty.
    Empty,
    /// Field name contains a byte outside the token character set.
    Invalid(u8),
}

impl HeaderError {
    pub(crate) const fn message(&self) -> &'static str {
        match self {
            Self::Empty => "cannot be empty",
            Self::Invalid(_) => "contains invalid byte",
        }
    }
}

impl std::error::Error for HeaderError {}

impl std::fmt::Display for HeaderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "header name {}", self.message()),
            Self::Invalid(byte) => {
                write!(f, "header name {}: '{}'", self.message(), byte.escape_ascii())
            }
        }
    }
}
