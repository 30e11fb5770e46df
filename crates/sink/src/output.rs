//! crates/sink/src/output.rs
//! Shared writer handle used as the destination of framed log lines.

use std::fmt;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

use crate::target::OutputTarget;

type SharedWriter = Arc<Mutex<dyn Write + Send + 'static>>;
type WriterGuard<'a> = MutexGuard<'a, dyn Write + Send + 'static>;

/// Clonable handle to a blocking byte sink.
///
/// An `Output` stores its writer behind an [`Arc`]-shared mutex. Clones share
/// the writer, so a logger derived from another logger keeps writing to the
/// same destination without the destination being duplicated. Equality is
/// identity: two handles compare equal exactly when they address the same
/// writer.
///
/// # Examples
///
/// ```
/// use sink::Output;
///
/// let first = Output::new(Vec::new());
/// let second = Output::new(Vec::new());
///
/// assert_eq!(first, first.clone());
/// assert_ne!(first, second);
/// ```
#[derive(Clone)]
pub struct Output {
    writer: SharedWriter,
    target: OutputTarget,
}

impl Output {
    /// Wraps `writer` in a new handle.
    ///
    /// The writer is moved into the handle and is only reachable through it
    /// from then on. Callers that need to inspect what was written should pass
    /// a writer that itself shares its storage (for example an
    /// `Arc<Mutex<Vec<u8>>>` wrapper).
    #[must_use]
    pub fn new<W>(writer: W) -> Self
    where
        W: Write + Send + 'static,
    {
        Self::with_target(writer, OutputTarget::Writer)
    }

    fn with_target<W>(writer: W, target: OutputTarget) -> Self
    where
        W: Write + Send + 'static,
    {
        let writer: SharedWriter = Arc::new(Mutex::new(writer));
        Self { writer, target }
    }

    /// Returns the handle for the process standard output stream.
    ///
    /// The handle is created on first use and shared afterwards, so every call
    /// returns a handle that compares equal to the previous ones.
    #[must_use]
    pub fn stdout() -> Self {
        static STDOUT: OnceLock<Output> = OnceLock::new();
        STDOUT
            .get_or_init(|| Self::with_target(io::stdout(), OutputTarget::Stdout))
            .clone()
    }

    /// Returns the handle for the process standard error stream.
    #[must_use]
    pub fn stderr() -> Self {
        static STDERR: OnceLock<Output> = OnceLock::new();
        STDERR
            .get_or_init(|| Self::with_target(io::stderr(), OutputTarget::Stderr))
            .clone()
    }

    /// Reports which kind of destination the handle writes to.
    #[must_use]
    pub const fn target(&self) -> OutputTarget {
        self.target
    }

    /// Returns `true` when both handles address the same writer.
    #[must_use]
    pub fn same_as(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.writer, &other.writer)
    }

    /// Writes `bytes` with a single [`Write::write`] call.
    ///
    /// The return value is whatever the writer reported: the number of bytes
    /// it accepted, which may be fewer than `bytes.len()`, or its error.
    /// Nothing is retried.
    pub fn write(&self, bytes: &[u8]) -> io::Result<usize> {
        self.lock().write(bytes)
    }

    /// Flushes the underlying writer.
    pub fn flush(&self) -> io::Result<()> {
        self.lock().flush()
    }

    fn lock(&self) -> WriterGuard<'_> {
        self.writer.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl PartialEq for Output {
    fn eq(&self, other: &Self) -> bool {
        self.same_as(other)
    }
}

impl Eq for Output {}

impl fmt::Debug for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Output")
            .field("target", &self.target)
            .finish_non_exhaustive()
    }
}
