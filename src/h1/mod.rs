//! HTTP/1.1 Protocol.
//!
//! - [`parser`] contains HTTP/1.1 request line and header line parser.
pub mod parser;
