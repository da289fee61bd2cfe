use bytes::{Buf, BytesMut};
use std::io::{self, Read};

use crate::log::trace;

/// Smallest slice handed to a blocking read.
const MIN_WINDOW: usize = 64;

/// Growable accumulation buffer.
///
/// Bytes are appended at the back by reads, and dropped from the front once consumed, so
/// consumed bytes are never examined again.
#[derive(Debug)]
pub struct ReadBuffer {
    buffer: BytesMut,
    initial: usize,
    /// Length of the slice handed to the next blocking read.
    window: usize,
}

impl ReadBuffer {
    /// Create new empty [`ReadBuffer`] with at least the specified capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            buffer: BytesMut::with_capacity(capacity),
            initial: capacity,
            window: capacity,
        }
    }

    /// Returns the unconsumed bytes.
    #[inline]
    pub fn chunk(&self) -> &[u8] {
        &self.buffer
    }

    /// Returns the number of unconsumed bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns `true` if every buffered byte is consumed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Drop the first `n` unconsumed bytes.
    ///
    /// # Panics
    ///
    /// Panics if `n` is greater than [`len`][ReadBuffer::len].
    #[inline]
    pub fn consume(&mut self, n: usize) {
        self.buffer.advance(n);
    }

    /// Make room for the next read when the buffer is full.
    ///
    /// Space left by consumed bytes is reclaimed first, otherwise the buffer grows by at least
    /// its current length.
    fn reserve(&mut self) {
        if self.buffer.len() < self.buffer.capacity() {
            return;
        }
        let additional = self.buffer.len().max(self.initial);
        self.buffer.reserve(additional);
        trace!("read buffer grow, len: {}, capacity: {}", self.buffer.len(), self.buffer.capacity());
    }

    /// Read once from `io` into the free capacity.
    ///
    /// Returns the number of bytes read, `0` means end of stream. Interrupted reads are retried.
    ///
    /// The slice given to `io` must be initialized, so its length follows the size of the
    /// previous read. It doubles when a read fills it and shrinks back when reads are short, so
    /// a source that trickles bytes does not pay for zeroing the whole free capacity.
    pub fn read_from<R: Read>(&mut self, io: &mut R) -> io::Result<usize> {
        self.reserve();

        let filled = self.buffer.len();
        let window = self.window.min(self.buffer.capacity() - filled);
        self.buffer.resize(filled + window, 0);

        let result = loop {
            match io.read(&mut self.buffer[filled..]) {
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                result => break result,
            }
        };

        let read = match &result {
            Ok(read) => *read,
            Err(_) => 0,
        };
        self.buffer.truncate(filled + read);
        self.window = read.saturating_mul(2).max(MIN_WINDOW);

        result
    }

    /// Read once from async `io` into the free capacity.
    ///
    /// Returns the number of bytes read, `0` means end of stream.
    #[cfg(feature = "tokio")]
    pub async fn read_from_async<R>(&mut self, io: &mut R) -> io::Result<usize>
    where
        R: tokio::io::AsyncRead + Unpin,
    {
        use tokio::io::AsyncReadExt;

        self.reserve();
        io.read_buf(&mut self.buffer).await
    }
}
