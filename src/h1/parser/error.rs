use crate::headers::HeaderError;

/// HTTP Parsing error.
///
/// Both variants carry the offending line, without its separator, for diagnostics. Any parse
/// error is terminal for the request being parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Request line is not `METHOD SP TARGET SP HTTP/1.1`.
    MalformedRequestLine {
        kind: InvalidReqline,
        line: String,
    },
    /// Header line is not `token ":" OWS value OWS`.
    MalformedHeader {
        kind: InvalidHeader,
        line: String,
    },
}

/// The reason a request line is malformed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidReqline {
    /// Request line does not split into exactly 3 single space separated parts.
    FieldCount(usize),
    /// Method is not one of the supported methods.
    UnknownMethod,
    /// Request target does not start with `/`, or is not UTF-8.
    InvalidTarget,
    /// Version literal is not exactly `HTTP/1.1`.
    UnsupportedVersion,
}

/// The reason a header line is malformed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidHeader {
    /// Header line contains no `:`.
    MissingColon,
    /// Whitespace between the field name and the colon.
    WhitespaceBeforeColon,
    /// Field name is empty or is not a `token`.
    Name(HeaderError),
    /// Field value is not UTF-8.
    NonUtf8Value,
}

impl ParseError {
    pub(crate) fn reqline(kind: InvalidReqline, line: &[u8]) -> Self {
        Self::MalformedRequestLine {
            kind,
            line: String::from_utf8_lossy(line).into_owned(),
        }
    }

    pub(crate) fn header(kind: InvalidHeader, line: &[u8]) -> Self {
        Self::MalformedHeader {
            kind,
            line: String::from_utf8_lossy(line).into_owned(),
        }
    }

    /// Returns the offending line.
    #[inline]
    pub fn line(&self) -> &str {
        match self {
            Self::MalformedRequestLine { line, .. } | Self::MalformedHeader { line, .. } => line,
        }
    }

    /// Returns `true` if the error occurs in request line.
    #[inline]
    pub const fn is_request_line(&self) -> bool {
        matches!(self, Self::MalformedRequestLine { .. })
    }

    /// Returns `true` if the error occurs in a header line.
    #[inline]
    pub const fn is_header(&self) -> bool {
        matches!(self, Self::MalformedHeader { .. })
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::MalformedHeader { kind: InvalidHeader::Name(err), .. } => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::MalformedRequestLine { kind, line } => {
                write!(f, "malformed request line, {kind}: {line:?}")
            }
            Self::MalformedHeader { kind, line } => {
                write!(f, "malformed header, {kind}: {line:?}")
            }
        }
    }
}

impl std::fmt::Display for InvalidReqline {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::FieldCount(n) => write!(f, "expected 3 parts, found {n}"),
            Self::UnknownMethod => f.write_str("unknown method"),
            Self::InvalidTarget => f.write_str("invalid request target"),
            Self::UnsupportedVersion => f.write_str("unsupported version"),
        }
    }
}

impl std::fmt::Display for InvalidHeader {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::MissingColon => f.write_str("missing colon"),
            Self::WhitespaceBeforeColon => f.write_str("whitespace before colon"),
            Self::Name(err) => std::fmt::Display::fmt(err, f),
            Self::NonUtf8Value => f.write_str("value is not utf-8"),
        }
    }
}
