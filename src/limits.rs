//! Read loop configuration.

/// Buffer limits of the read loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limits {
    /// Initial capacity of the accumulation buffer (default: 1KB).
    ///
    /// The buffer doubles whenever it is full.
    pub initial_capacity: usize,
    /// Maximum length of a single request line or header line, excluding the crlf
    /// (default: 8KB).
    ///
    /// A line is rejected as soon as its buffered part is longer than the limit, whether or not
    /// the rest of the line has arrived.
    pub max_line_size: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            initial_capacity: 1024,
            max_line_size: 8 * 1024,
        }
    }
}

impl Limits {
    /// Create limits that never reject a request for its size.
    pub fn unlimited() -> Self {
        Self {
            max_line_size: usize::MAX,
            ..Self::default()
        }
    }
}
