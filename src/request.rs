//! HTTP Request
use crate::{
    common::ParseResult,
    h1::parser::{ParseError, parse_header_line, parse_request_line},
    headers::Headers,
    http::{Method, Version},
    log::{debug, trace},
};

/// HTTP Request Line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLine {
    pub method: Method,
    /// Request target, always starts with `/`.
    pub target: String,
    pub version: Version,
}

/// Parsing progress of a [`Request`].
///
/// Phase only moves forward, `RequestLine` to `Headers` to `Done`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the request line.
    #[default]
    RequestLine,
    /// Request line is parsed, waiting for header lines.
    Headers,
    /// The empty line ending the header section is parsed.
    Done,
}

/// HTTP Request.
///
/// Request is built incrementally by [`feed`][Request::feed]. Once the phase is
/// [`Phase::Done`], the request is complete and further feed is a no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Request {
    line: Option<RequestLine>,
    headers: Headers,
    phase: Phase,
}

impl Request {
    /// Create new empty [`Request`] waiting for the request line.
    #[inline]
    pub const fn new() -> Self {
        Self {
            line: None,
            headers: Headers::new(),
            phase: Phase::RequestLine,
        }
    }

    /// Returns current [`Phase`].
    #[inline]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns `true` if the header section is completely parsed.
    #[inline]
    pub const fn is_done(&self) -> bool {
        matches!(self.phase, Phase::Done)
    }

    /// Returns the request line, `None` while it is not yet parsed.
    #[inline]
    pub const fn request_line(&self) -> Option<&RequestLine> {
        self.line.as_ref()
    }

    /// Returns shared reference to [`Headers`].
    #[inline]
    pub const fn headers(&self) -> &Headers {
        &self.headers
    }

    /// Returns the request method, `None` while the request line is not yet parsed.
    #[inline]
    pub fn method(&self) -> Option<Method> {
        self.line.as_ref().map(|line| line.method)
    }

    /// Returns the request target, `None` while the request line is not yet parsed.
    #[inline]
    pub fn target(&self) -> Option<&str> {
        self.line.as_ref().map(|line| line.target.as_str())
    }
}

// ===== Parsing =====

impl Request {
    /// Parse as much of `bytes` as possible.
    ///
    /// `bytes` must start right after the bytes consumed by previous calls. Returns the number of
    /// bytes consumed, which can be `0` when more bytes is required. Consumed bytes must not be
    /// given again.
    ///
    /// The request line is parsed alone, header lines are only parsed on the next call. Header
    /// lines are parsed until a line is incomplete or the header section ends.
    ///
    /// # Errors
    ///
    /// Returns error if the request line or a header line is malformed. The error is terminal,
    /// the request must be discarded.
    pub fn feed(&mut self, bytes: &[u8]) -> Result<usize, ParseError> {
        match self.phase {
            Phase::RequestLine => {
                let Some((line, read)) = parse_request_line(bytes).transpose()? else {
                    return Ok(0);
                };
                debug!("request line: {} {} {}", line.method, line.target, line.version);
                self.line = Some(line);
                self.phase = Phase::Headers;
                Ok(read)
            }
            Phase::Headers => {
                let mut read = 0;
                loop {
                    match parse_header_line(&bytes[read..], &mut self.headers) {
                        ParseResult::Pending => return Ok(read),
                        ParseResult::Err(err) => return Err(err),
                        ParseResult::Ok((n, end)) => {
                            read += n;
                            if end {
                                debug!("header section complete, {} fields", self.headers.len());
                                self.phase = Phase::Done;
                                return Ok(read);
                            }
                            trace!("header line parsed, {n} bytes");
                        }
                    }
                }
            }
            Phase::Done => Ok(0),
        }
    }
}

impl std::fmt::Display for Request {
    /// Write a human readable dump of the request line and headers.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(line) = &self.line {
            writeln!(f, "Request line:")?;
            writeln!(f, "- Method: {}", line.method)?;
            writeln!(f, "- Target: {}", line.target)?;
            writeln!(f, "- Version: {}", line.version.number())?;
        }
        writeln!(f, "Headers:")?;
        for (name, value) in &self.headers {
            writeln!(f, "- {name}: {value}")?;
        }
        Ok(())
    }
}
