/// HTTP Version.
///
/// Only `HTTP/1.1` is accepted on the wire, any other version literal in a request-line is
/// malformed.
///
/// [httpwg](https://httpwg.org/specs/rfc9112.html#http.version)
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Version(Inner);

#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
enum Inner {
    #[default]
    Http11,
}

impl Version {
    /// `HTTP/1.1`
    pub const HTTP_11: Version = Version(Inner::Http11);

    /// Create [`Version`] from the full version literal, e.g: `HTTP/1.1`.
    #[inline]
    pub const fn from_bytes(src: &[u8]) -> Option<Version> {
        match src {
            b"HTTP/1.1" => Some(Self::HTTP_11),
            _ => None,
        }
    }

    /// Returns string representation of HTTP version, e.g: `HTTP/1.1`
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self.0 {
            Inner::Http11 => "HTTP/1.1",
        }
    }

    /// Returns the version number without the protocol name, e.g: `1.1`
    #[inline]
    pub const fn number(&self) -> &'static str {
        match self.0 {
            Inner::Http11 => "1.1",
        }
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Debug for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "\"{self}\"")
    }
}
