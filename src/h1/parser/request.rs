use super::error::{InvalidReqline, ParseError};
use crate::common::ParseResult;
use crate::http::{Method, Version};
use crate::matches;
use crate::request::RequestLine;

macro_rules! err {
    ($kind:expr, $line:expr) => {
        ParseResult::Err(ParseError::reqline($kind, $line))
    };
}

/// Parse a request line.
///
/// ```not_rust
/// request-line = method SP request-target SP HTTP-version CRLF
/// ```
///
/// On success returns the request line and the number of bytes consumed, including the crlf.
/// Returns [`ParseResult::Pending`] if `bytes` does not contains a crlf yet.
///
/// This function does not hold any state, it can be called again with a longer prefix of the
/// same bytes.
pub fn parse_request_line(bytes: &[u8]) -> ParseResult<(RequestLine, usize), ParseError> {
    let Some(end) = matches::find_crlf(bytes) else {
        return ParseResult::Pending;
    };

    let line = &bytes[..end];

    let mut parts = line.split(|byte| *byte == b' ');
    let (Some(method), Some(target), Some(version), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        let count = line.split(|byte| *byte == b' ').count();
        return err!(InvalidReqline::FieldCount(count), line);
    };

    let Some(method) = Method::from_bytes(method) else {
        return err!(InvalidReqline::UnknownMethod, line);
    };

    let target = match target {
        [b'/', ..] => match std::str::from_utf8(target) {
            Ok(ok) => ok.to_owned(),
            Err(_) => return err!(InvalidReqline::InvalidTarget, line),
        },
        _ => return err!(InvalidReqline::InvalidTarget, line),
    };

    let Some(version) = Version::from_bytes(version) else {
        return err!(InvalidReqline::UnsupportedVersion, line);
    };

    ParseResult::Ok((
        RequestLine {
            method,
            target,
            version,
        },
        end + 2,
    ))
}
