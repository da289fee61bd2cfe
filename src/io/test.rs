use std::io::{self, Read};

use crate::error::ErrorKind;
use crate::h1::parser::{InvalidHeader, InvalidReqline, ParseError};
use crate::http::{Method, Version};
use crate::io::{ReadBuffer, parse_request, parse_request_with};
use crate::limits::Limits;
use crate::request::Request;

/// Reads at most `per_read` bytes per call, to simulate a network peer.
struct ChunkReader<'a> {
    data: &'a [u8],
    per_read: usize,
}

impl<'a> ChunkReader<'a> {
    fn new(data: &'a [u8], per_read: usize) -> Self {
        Self { data, per_read }
    }
}

impl Read for ChunkReader<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.per_read.min(buf.len()).min(self.data.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        Ok(n)
    }
}

/// Fails with `kind` once `data` is exhausted, after yielding `interrupts` interrupted reads.
struct FailingReader<'a> {
    data: &'a [u8],
    interrupts: usize,
    kind: io::ErrorKind,
}

impl Read for FailingReader<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.interrupts > 0 {
            self.interrupts -= 1;
            return Err(io::ErrorKind::Interrupted.into());
        }
        if self.data.is_empty() {
            return Err(self.kind.into());
        }
        let n = self.data.len().min(buf.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        Ok(n)
    }
}

macro_rules! parse {
    ($input:expr, $per_read:expr) => {
        parse_request(ChunkReader::new(&$input[..], $per_read))
    };
}

const GOOD_GET: &[u8] = b"GET / HTTP/1.1\r\nHost: localhost:42069\r\nUser-Agent: curl/7.81.0\r\nAccept: */*\r\n\r\n";

#[test]
fn test_end_to_end() {
    let input = b"GET / HTTP/1.1\r\nHost: localhost:42069\r\nAccept: */*\r\n\r\n";
    let req = parse!(input, 3).unwrap();

    assert!(req.is_done());
    let line = req.request_line().unwrap();
    assert_eq!(line.method, Method::GET);
    assert_eq!(line.target, "/");
    assert_eq!(line.version, Version::HTTP_11);
    assert_eq!(line.version.number(), "1.1");

    let headers: Vec<_> = req.headers().iter().collect();
    assert_eq!(headers, [("host", "localhost:42069"), ("accept", "*/*")]);
}

#[test]
fn test_chunk_size_invariance() {
    let inputs: [&[u8]; 4] = [
        GOOD_GET,
        b"POST /coffee HTTP/1.1\r\nHost: localhost:42069\r\nUser-Agent: curl/7.81.0\r\nAccept: */*\r\n\r\n",
        b"GET /coffee HTTP/1.1\r\nHost: localhost:42069\r\nContent-Type:application-json\r\nContent-Length: 22\r\n\r\n{\"flavor\":\"dark mode\"}",
        b"DELETE /pot HTTP/1.1\r\nSet-Person: Elias\r\nSet-Person: Rob\r\n  Set-Person  :x\r\n\r\n",
    ];

    for input in &inputs[..3] {
        let whole = parse!(input, input.len()).unwrap();
        for per_read in 1..=input.len() {
            let req = parse!(input, per_read).unwrap();
            assert_eq!(req, whole, "read size {per_read}");
        }
    }

    // errors are just as independent of the read size
    let input = inputs[3];
    for per_read in 1..=input.len() {
        let err = parse!(input, per_read).unwrap_err();
        assert!(matches!(
            err.as_parse(),
            Some(ParseError::MalformedHeader { kind: InvalidHeader::WhitespaceBeforeColon, .. })
        ));
    }
}

#[test]
fn test_small_buffer_growth() {
    let limits = Limits { initial_capacity: 1, ..Limits::default() };
    for per_read in [1, 2, 7, GOOD_GET.len()] {
        let req = parse_request_with(ChunkReader::new(GOOD_GET, per_read), &limits).unwrap();
        assert_eq!(req.headers().get("user-agent"), Some("curl/7.81.0"));
    }
}

#[test]
fn test_headers() {
    macro_rules! test {
        ($input:literal; $($name:literal => $value:literal),* $(,)?) => {
            let req = parse!($input, 3).unwrap();
            $(
                assert_eq!(req.headers().get($name), Some($value), "header {}", $name);
            )*
        };
    }

    // standard
    test! {
        b"GET / HTTP/1.1\r\nHost: localhost:42069\r\nUser-Agent: curl/7.81.0\r\nAccept: */*\r\n\r\n";
        "host" => "localhost:42069",
        "user-agent" => "curl/7.81.0",
        "accept" => "*/*",
    }
    // empty values
    test! {
        b"GET / HTTP/1.1\r\nHost: \r\nUser-Agent:\r\nAccept:\r\n\r\n";
        "host" => "",
        "user-agent" => "",
        "accept" => "",
    }
    // duplicates
    test! {
        b"GET / HTTP/1.1\r\nSet-Person: Elias\r\nSet-Person: Rob\r\nSet-Person: Matt\r\n\r\n";
        "set-person" => "Elias, Rob, Matt",
    }
    // case-insensitive
    test! {
        b"GET / HTTP/1.1\r\nhost: localhost:42069\r\nUser-agent: curl/7.81.0\r\nACCEPT: */*\r\n\r\n";
        "host" => "localhost:42069",
        "user-agent" => "curl/7.81.0",
        "accept" => "*/*",
    }
    test! {
        b"GET / HTTP/1.1\r\nHost: a\r\nhost: b\r\nHOST: c\r\n\r\n";
        "host" => "a, b, c",
    }
    // no headers at all
    let req = parse!(b"GET / HTTP/1.1\r\n\r\n", 3).unwrap();
    assert!(req.is_done());
    assert!(req.headers().is_empty());
}

#[test]
fn test_malformed() {
    macro_rules! test {
        ($input:literal, $per_read:literal, $pat:pat) => {
            let err = parse!($input, $per_read).unwrap_err();
            match err.kind() {
                ErrorKind::Parse($pat) => { }
                kind => panic!("unexpected error: {kind:?}"),
            }
        };
    }

    test!(
        b"/coffee HTTP/1.1\r\nHost: localhost:42069\r\nUser-Agent: curl/7.81.0\r\nAccept: */*\r\n\r\n", 5,
        ParseError::MalformedRequestLine { kind: InvalidReqline::FieldCount(2), .. }
    );
    test!(
        b"/coffee GET HTTP/1.1\r\nHost: localhost:42069\r\nUser-Agent: curl/7.81.0\r\nAccept: */*\r\n\r\n", 28,
        ParseError::MalformedRequestLine { kind: InvalidReqline::UnknownMethod, .. }
    );
    test!(
        b"GET /coffee HTTP/2.1\r\nHost: localhost:42069\r\n\r\n", 4,
        ParseError::MalformedRequestLine { kind: InvalidReqline::UnsupportedVersion, .. }
    );
    test!(
        b"GET / HTTP/1.1\r\nHost localhost:42069\r\n\r\n", 3,
        ParseError::MalformedHeader { kind: InvalidHeader::Name(_), .. }
    );
    test!(
        b"GET / HTTP/1.1\r\nHost : foo\r\n\r\n", 3,
        ParseError::MalformedHeader { kind: InvalidHeader::WhitespaceBeforeColon, .. }
    );
    test!(
        b"GET / HTTP/1.1\r\nHost\r\n\r\n", 1,
        ParseError::MalformedHeader { kind: InvalidHeader::MissingColon, .. }
    );
}

#[test]
fn test_truncated() {
    macro_rules! test {
        ($input:expr) => {
            for per_read in 1..=$input.len().max(1) {
                let err = parse!($input, per_read).unwrap_err();
                assert!(err.is_eof(), "read size {per_read}: {err}");
            }
        };
    }

    test!(b"");
    test!(b"GET / HTT");
    test!(b"GET / HTTP/1.1\r\n");
    test!(b"GET / HTTP/1.1\r\nHost: localhost:42069\r\n");
    test!(b"GET / HTTP/1.1\r\nHost: localhost:42069\r\nUser-Agent: curl/7.81.0\r\nAccept: */*\r\n");
    test!(b"GET / HTTP/1.1\r\nHost: localhost:42069\r\n\r");
}

#[test]
fn test_too_large() {
    macro_rules! test {
        (#[ok] $input:expr, $limits:expr) => {
            let whole = parse_request_with(ChunkReader::new(&$input[..], $input.len()), &$limits).unwrap();
            for per_read in 1..=$input.len() {
                let req = parse_request_with(ChunkReader::new(&$input[..], per_read), &$limits).unwrap();
                assert_eq!(req, whole, "read size {per_read}");
            }
        };
        (#[error] $input:expr, $limits:expr, $read_sizes:expr) => {
            for per_read in $read_sizes {
                let err = parse_request_with(ChunkReader::new(&$input[..], per_read), &$limits).unwrap_err();
                assert!(matches!(err.kind(), ErrorKind::TooLarge), "read size {per_read}: {err}");
            }
        };
    }

    fn long_header(len: usize) -> Vec<u8> {
        let mut input = b"GET / HTTP/1.1\r\nX-Long: ".to_vec();
        input.extend(std::iter::repeat_n(b'a', len));
        input.extend_from_slice(b"\r\nHost: x\r\n\r\n");
        input
    }

    let limits = Limits { initial_capacity: 16, max_line_size: 32 };

    // the longest line is 23 bytes
    test!(#[ok] GOOD_GET, limits);

    // "X-Long: " and 24 bytes value is exactly at the limit
    let input = long_header(24);
    test!(#[ok] input, limits);

    let input = long_header(25);
    test!(#[error] input, limits, 1..=input.len());

    // a cr inside the line is counted once the next byte shows it is not a separator
    let mut input = b"GET / HTTP/1.1\r\nX-Cr: ".to_vec();
    input.extend(std::iter::repeat_n(b'a', 26));
    input.extend_from_slice(b"\r\r\n\r\n");
    test!(#[error] input, limits, 1..=input.len());

    // request line
    let mut input = b"GET /".to_vec();
    input.extend(std::iter::repeat_n(b'a', 8300));
    input.extend_from_slice(b" HTTP/1.1\r\nHost: x\r\n\r\n");
    test!(#[error] input, Limits::default(), [1, 2, 7, 1024, 4096, input.len()]);

    let req = parse_request_with(ChunkReader::new(&input, 4096), &Limits::unlimited()).unwrap();
    assert_eq!(req.target().map(str::len), Some(8301));

    // truncated line over the limit is too large rather than end of stream
    let input = long_header(25);
    let input = &input[..50];
    test!(#[error] input, limits, 1..=input.len());
}

#[test]
fn test_read_error() {
    let io = FailingReader {
        data: b"GET / HTTP/1.1\r\nHost: localhost:42069\r\n",
        interrupts: 0,
        kind: io::ErrorKind::ConnectionReset,
    };
    let err = parse_request(io).unwrap_err();
    match err.into_kind() {
        ErrorKind::Io(err) => assert_eq!(err.kind(), io::ErrorKind::ConnectionReset),
        kind => panic!("unexpected error: {kind:?}"),
    }

    // interrupted read is retried
    let io = FailingReader {
        data: GOOD_GET,
        interrupts: 3,
        kind: io::ErrorKind::ConnectionReset,
    };
    let req = parse_request(io).unwrap();
    assert_eq!(req.method(), Some(Method::GET));
}

#[test]
fn test_read_buffer() {
    let mut buffer = ReadBuffer::with_capacity(4);
    let mut io = ChunkReader::new(b"Host: localhost\r\n", 3);

    assert_eq!(buffer.read_from(&mut io).unwrap(), 3);
    assert_eq!(buffer.chunk(), b"Hos");
    buffer.consume(2);
    assert_eq!(buffer.chunk(), b"s");

    while buffer.read_from(&mut io).unwrap() != 0 { }
    assert_eq!(buffer.chunk(), b"st: localhost\r\n");
    buffer.consume(buffer.len());
    assert!(buffer.is_empty());
}

#[test]
fn test_read_window() {
    /// Records the length of every slice given to `read`.
    struct Recorder<'a> {
        inner: ChunkReader<'a>,
        lens: Vec<usize>,
    }

    impl Read for Recorder<'_> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            self.lens.push(buf.len());
            self.inner.read(buf)
        }
    }

    let mut buffer = ReadBuffer::with_capacity(1024);
    let mut io = Recorder { inner: ChunkReader::new(GOOD_GET, 1), lens: Vec::new() };

    for _ in 0..4 {
        assert_eq!(buffer.read_from(&mut io).unwrap(), 1);
    }
    assert_eq!(io.lens, [1024, 64, 64, 64]);
    assert_eq!(buffer.chunk(), b"GET ");

    // next slice is twice the previous read
    let mut buffer = ReadBuffer::with_capacity(1024);
    let mut io = Recorder { inner: ChunkReader::new(&[b'a'; 200], 200), lens: Vec::new() };

    assert_eq!(buffer.read_from(&mut io).unwrap(), 200);
    assert_eq!(buffer.read_from(&mut io).unwrap(), 0);
    assert_eq!(io.lens, [1024, 400]);
}

#[test]
fn test_display() {
    let req = parse!(GOOD_GET, 7).unwrap();
    let mut expected = Request::new();
    let read = expected.feed(GOOD_GET).unwrap();
    expected.feed(&GOOD_GET[read..]).unwrap();

    assert_eq!(req.to_string(), expected.to_string());
    assert!(req.to_string().starts_with("Request line:\n- Method: GET\n- Target: /\n- Version: 1.1\n"));
}

#[cfg(feature = "tokio")]
mod async_read {
    use tokio::io::AsyncWriteExt;

    use super::*;
    use crate::io::parse_request_async;

    #[tokio::test]
    async fn test_async_chunks() {
        let whole = parse_request(GOOD_GET).unwrap();

        for per_write in [1, 3, GOOD_GET.len()] {
            let (mut client, server) = tokio::io::duplex(8);
            let write = async move {
                for chunk in GOOD_GET.chunks(per_write) {
                    client.write_all(chunk).await.unwrap();
                }
                client.shutdown().await.unwrap();
            };
            let (req, ()) = tokio::join!(parse_request_async(server), write);
            assert_eq!(req.unwrap(), whole, "write size {per_write}");
        }
    }

    #[tokio::test]
    async fn test_async_truncated() {
        let err = parse_request_async(&b"GET / HTTP/1.1\r\n"[..]).await.unwrap_err();
        assert!(err.is_eof());

        let err = parse_request_async(&b"GET / HTTP/2.1\r\n\r\n"[..]).await.unwrap_err();
        assert!(err.as_parse().is_some_and(ParseError::is_request_line));
    }
}
