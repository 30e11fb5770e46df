//! crates/test-support/src/buffer.rs
//! Shared in-memory writer for asserting on emitted frames.

use std::io::{self, Write};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// In-memory writer whose clones share the same byte buffer.
///
/// Besides the bytes, the buffer counts how many times [`Write::write`] and
/// [`Write::flush`] were invoked so tests can assert on call granularity.
#[derive(Clone, Debug, Default)]
pub struct SharedBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
    writes: Arc<AtomicUsize>,
    flushes: Arc<AtomicUsize>,
}

impl SharedBuffer {
    /// Creates an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<u8>> {
        self.bytes.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns a copy of the bytes written so far.
    #[must_use]
    pub fn contents(&self) -> Vec<u8> {
        self.lock().clone()
    }

    /// Returns the bytes written so far, decoded as UTF-8 (lossily).
    #[must_use]
    pub fn contents_string(&self) -> String {
        String::from_utf8_lossy(&self.lock()).into_owned()
    }

    /// Discards the buffered bytes and resets the call counters.
    pub fn clear(&self) {
        self.lock().clear();
        self.writes.store(0, Ordering::SeqCst);
        self.flushes.store(0, Ordering::SeqCst);
    }

    /// Returns `true` when nothing has been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Number of [`Write::write`] calls observed.
    #[must_use]
    pub fn write_calls(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Number of [`Write::flush`] calls observed.
    #[must_use]
    pub fn flush_calls(&self) -> usize {
        self.flushes.load(Ordering::SeqCst)
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flushes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
