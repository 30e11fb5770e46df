//! crates/test-support/src/writers.rs
//! Writers that reject or truncate writes.

use std::io::{self, Write};

use crate::SharedBuffer;

/// Writer that rejects every write with a fixed [`io::ErrorKind`].
#[derive(Clone, Copy, Debug)]
pub struct FailingWriter {
    kind: io::ErrorKind,
}

impl FailingWriter {
    /// Creates a writer failing with `kind`.
    #[must_use]
    pub const fn new(kind: io::ErrorKind) -> Self {
        Self { kind }
    }
}

impl Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(self.kind, "sink rejected write"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::new(self.kind, "sink rejected flush"))
    }
}

/// Writer that accepts at most `limit` bytes per call.
#[derive(Clone, Debug)]
pub struct ShortWriter {
    inner: SharedBuffer,
    limit: usize,
}

impl ShortWriter {
    /// Wraps `inner`, truncating each write to `limit` bytes.
    #[must_use]
    pub const fn new(inner: SharedBuffer, limit: usize) -> Self {
        Self { inner, limit }
    }
}

impl Write for ShortWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let take = buf.len().min(self.limit);
        self.inner.write(&buf[..take])
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
