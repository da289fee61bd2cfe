//! Read loop.
//!
//! Pulls chunks from a byte source into a [`ReadBuffer`], feeds each complete line to a
//! [`Request`], and drops whatever the request consumed. The source may deliver any chunk size,
//! the parsed request is the same.
//!
//! Reaching end of stream before the header section is complete is an error, a partially parsed
//! request is never returned.
use std::io::Read;

use crate::{
    error::{Error, ErrorKind},
    limits::Limits,
    log::{debug, warning},
    matches,
    request::Request,
};

mod buffer;

pub use buffer::ReadBuffer;

/// Read and parse a request from `io` with default [`Limits`].
///
/// ```rust
/// let input = b"GET / HTTP/1.1\r\nHost: localhost:42069\r\nAccept: */*\r\n\r\n";
/// let req = httpfromtcp::parse_request(&input[..]).unwrap();
///
/// assert_eq!(req.target(), Some("/"));
/// assert_eq!(req.headers().get("host"), Some("localhost:42069"));
/// ```
///
/// # Errors
///
/// Returns error if the request is malformed, the source ends early, or the source fails.
#[inline]
pub fn parse_request<R: Read>(io: R) -> Result<Request, Error> {
    parse_request_with(io, &Limits::default())
}

/// Read and parse a request from `io`.
///
/// # Errors
///
/// Returns error if the request is malformed, exceeds `limits`, the source ends early, or the
/// source fails.
pub fn parse_request_with<R: Read>(mut io: R, limits: &Limits) -> Result<Request, Error> {
    let mut state = ReadLoop::new(limits);
    loop {
        let read = state.buffer.read_from(&mut io).inspect_err(|_err| {
            warning!("failed to read request: {_err}");
        })?;
        if state.advance(read)? {
            return Ok(state.request);
        }
    }
}

/// Read and parse a request from async `io` with default [`Limits`].
///
/// # Errors
///
/// Returns error if the request is malformed, the source ends early, or the source fails.
#[cfg(feature = "tokio")]
#[inline]
pub async fn parse_request_async<R>(io: R) -> Result<Request, Error>
where
    R: tokio::io::AsyncRead + Unpin,
{
    parse_request_async_with(io, &Limits::default()).await
}

/// Read and parse a request from async `io`.
///
/// # Errors
///
/// Returns error if the request is malformed, exceeds `limits`, the source ends early, or the
/// source fails.
#[cfg(feature = "tokio")]
pub async fn parse_request_async_with<R>(mut io: R, limits: &Limits) -> Result<Request, Error>
where
    R: tokio::io::AsyncRead + Unpin,
{
    let mut state = ReadLoop::new(limits);
    loop {
        let read = state.buffer.read_from_async(&mut io).await.inspect_err(|_err| {
            warning!("failed to read request: {_err}");
        })?;
        if state.advance(read)? {
            return Ok(state.request);
        }
    }
}

// ===== State =====

/// State shared by the blocking and async read loop.
#[derive(Debug)]
struct ReadLoop {
    request: Request,
    buffer: ReadBuffer,
    /// Leading bytes of the buffer known to contain no crlf.
    scanned: usize,
    max_line_size: usize,
}

impl ReadLoop {
    fn new(limits: &Limits) -> Self {
        Self {
            request: Request::new(),
            buffer: ReadBuffer::with_capacity(limits.initial_capacity),
            scanned: 0,
            max_line_size: limits.max_line_size,
        }
    }

    /// Handle a read of `read` bytes.
    ///
    /// Buffered lines are fed one at a time, each checked against the line limit before it is
    /// parsed, so the outcome does not depend on where the reads split the input.
    ///
    /// Returns `true` when the request is done.
    fn advance(&mut self, read: usize) -> Result<bool, Error> {
        if read == 0 {
            // every complete line is already fed on the previous read
            warning!(
                "unexpected end of stream in {:?} phase, {} bytes unconsumed",
                self.request.phase(),
                self.buffer.len(),
            );
            return Err(ErrorKind::UnexpectedEof.into());
        }

        loop {
            let chunk = self.buffer.chunk();

            // the last scanned byte may be the cr of a split separator
            let from = self.scanned.saturating_sub(1);
            let Some(end) = matches::find_crlf(&chunk[from..]).map(|end| from + end) else {
                self.scanned = chunk.len();
                // a trailing cr may be the start of the separator
                let partial = chunk.strip_suffix(b"\r").unwrap_or(chunk);
                self.check_line(partial.len())?;
                return Ok(false);
            };
            self.check_line(end)?;

            let consumed = self.request.feed(&chunk[..end + 2]).inspect_err(|_err| {
                warning!("rejected request: {_err}");
            })?;
            self.buffer.consume(consumed);
            self.scanned = 0;

            if self.request.is_done() {
                debug!("request complete, {} bytes left unread", self.buffer.len());
                return Ok(true);
            }
            if consumed == 0 {
                return Ok(false);
            }
        }
    }

    fn check_line(&self, len: usize) -> Result<(), Error> {
        if len > self.max_line_size {
            warning!("rejected request: line exceeds {} bytes", self.max_line_size);
            return Err(ErrorKind::TooLarge.into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod test;
