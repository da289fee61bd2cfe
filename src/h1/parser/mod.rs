//! HTTP/1.1 Parser.
//!
//! [`parse_request_line`] works on chunked bytes, given any length of bytes, the parser will find
//! the next crlf and parse the line before it. If crlf is not found, then the parser returns
//! [`ParseResult::Pending`], where more bytes is required to complete parsing. Pending is not an
//! error, nothing is consumed.
//!
//! [`parse_header_line`] works the same way. Additionally, if the parser encounter an empty line
//! with separator, it returns `ParseResult::Ok((2, true))` denoting that its the end of header
//! fields.
//!
//! Only `\r\n` is a line separator, a bare `\n` is part of the line.
//!
//! [`ParseResult::Pending`]: crate::common::ParseResult::Pending
mod request;
mod header;
mod error;

pub use request::parse_request_line;
pub use header::parse_header_line;
pub use error::{InvalidHeader, InvalidReqline, ParseError};
