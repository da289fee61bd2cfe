//! Shared parsing primitives.

/// Result of parsing a partially received buffer.
#[derive(Debug, PartialEq, Eq)]
pub enum ParseResult<T, E> {
    /// Bytes is not sufficient for parsing, more IO read is required.
    Pending,
    /// Parse success.
    Ok(T),
    /// Parse failed.
    Err(E),
}

impl<T, E> ParseResult<T, E> {
    /// Returns `true` if the parse result is [`Pending`].
    ///
    /// [`Pending`]: ParseResult::Pending
    #[inline]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Convert to `Result<Option<T>, E>`, where `None` is [`Pending`].
    ///
    /// [`Pending`]: ParseResult::Pending
    #[inline]
    pub fn transpose(self) -> Result<Option<T>, E> {
        match self {
            Self::Pending => Ok(None),
            Self::Ok(ok) => Ok(Some(ok)),
            Self::Err(err) => Err(err),
        }
    }
}
