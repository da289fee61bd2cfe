use super::error::{InvalidHeader, ParseError};
use crate::common::ParseResult;
use crate::headers::Headers;
use crate::matches;

/// Parse a single header line into `headers`.
///
/// ```not_rust
/// field-line = field-name ":" OWS field-value OWS CRLF
/// ```
///
/// On success returns the number of bytes consumed, including the crlf, and whether the line
/// was the empty line that ends the header section. Returns [`ParseResult::Pending`] if `bytes`
/// does not contains a crlf yet.
///
/// Whitespace before the field name is accepted, whitespace between the field name and the
/// colon is not.
pub fn parse_header_line(bytes: &[u8], headers: &mut Headers) -> ParseResult<(usize, bool), ParseError> {
    let Some(end) = matches::find_crlf(bytes) else {
        return ParseResult::Pending;
    };

    if end == 0 {
        return ParseResult::Ok((2, true));
    }

    let line = &bytes[..end];

    let Some(colon) = line.iter().position(|byte| *byte == b':') else {
        return ParseResult::Err(ParseError::header(InvalidHeader::MissingColon, line));
    };

    let (name, value) = (&line[..colon], &line[colon + 1..]);

    if name.last().is_some_and(u8::is_ascii_whitespace) {
        return ParseResult::Err(ParseError::header(InvalidHeader::WhitespaceBeforeColon, line));
    }

    let Ok(value) = std::str::from_utf8(value) else {
        return ParseResult::Err(ParseError::header(InvalidHeader::NonUtf8Value, line));
    };

    if let Err(err) = headers.set(name, value) {
        return ParseResult::Err(ParseError::header(InvalidHeader::Name(err), line));
    }

    ParseResult::Ok((end + 2, false))
}
