//! Error returned by the read loop.
use std::{fmt, io};

use crate::h1::parser::ParseError;

/// An error that can occur while reading a request from a byte source.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
}

/// The kind of [`Error`].
#[derive(Debug)]
pub enum ErrorKind {
    /// Request line or header line is malformed.
    Parse(ParseError),
    /// Source reached end of stream before the header section is complete.
    UnexpectedEof,
    /// A request line or header line is longer than [`Limits::max_line_size`].
    ///
    /// [`Limits::max_line_size`]: crate::Limits::max_line_size
    TooLarge,
    /// Source returns an error other than end of stream.
    Io(io::Error),
}

use ErrorKind as Kind;

impl Error {
    /// Returns the [`ErrorKind`].
    #[inline]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Consume the error, returning the [`ErrorKind`].
    #[inline]
    pub fn into_kind(self) -> ErrorKind {
        self.kind
    }

    /// Returns `true` if the source ends in the middle of the request.
    #[inline]
    pub fn is_eof(&self) -> bool {
        matches!(self.kind, Kind::UnexpectedEof)
    }

    /// Returns the [`ParseError`] if the request is malformed.
    #[inline]
    pub fn as_parse(&self) -> Option<&ParseError> {
        match &self.kind {
            Kind::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<Kind> for Error {
    fn from(kind: Kind) -> Self {
        Self { kind }
    }
}

impl From<ParseError> for Error {
    fn from(v: ParseError) -> Self {
        Self { kind: Kind::Parse(v) }
    }
}

impl From<io::Error> for Error {
    fn from(v: io::Error) -> Self {
        Self { kind: Kind::Io(v) }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            Kind::Parse(err) => Some(err),
            Kind::Io(err) => Some(err),
            Kind::UnexpectedEof | Kind::TooLarge => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.kind, f)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::Parse(err) => write!(f, "parse error: {err}"),
            Kind::UnexpectedEof => f.write_str("unexpected end of stream, incomplete request"),
            Kind::TooLarge => f.write_str("request line or header line too long"),
            Kind::Io(err) => write!(f, "read error: {err}"),
        }
    }
}
