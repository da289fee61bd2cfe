//! Incremental HTTP/1.1 Request Parser
//!
//! Bytes are accepted in whatever chunk sizes the source delivers them, down to single byte
//! reads, and parsed into a [`Request`] once the header section is complete.
//!
//! - [`h1::parser`] contains the stateless request-line and header-line parsers.
//! - [`Request::feed`] drives the parsers over an accumulation buffer.
//! - [`parse_request`] pulls bytes from a [`std::io::Read`] source until the request is done.
#![warn(missing_debug_implementations)]

mod log;
mod matches;

pub mod common;
pub mod http;
pub mod headers;
pub mod h1;
pub mod request;
pub mod io;
pub mod error;
pub mod limits;

pub use error::{Error, ErrorKind};
pub use headers::Headers;
pub use io::{parse_request, parse_request_with};
#[cfg(feature = "tokio")]
pub use io::{parse_request_async, parse_request_async_with};
pub use limits::Limits;
pub use request::{Phase, Request, RequestLine};
