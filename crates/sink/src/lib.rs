#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/sink/src/lib.rs
//!
//! # Overview
//!
//! `sink` provides the byte-output handle that klio loggers write framed log
//! lines to. An [`Output`] wraps any [`std::io::Write`] implementor behind a
//! shared, lock-protected handle so that several loggers can reference the
//! same destination without copying it.
//!
//! # Design
//!
//! The crate exposes [`Output`], a cheaply clonable handle around a writer.
//! Cloning an [`Output`] clones the handle, never the writer: every clone
//! addresses the same underlying sink, and equality between two handles is
//! identity of that sink. Process standard output and standard error are
//! available through [`Output::stdout`] and [`Output::stderr`], each backed by
//! a single process-wide handle so repeated calls compare equal.
//!
//! # Invariants
//!
//! - [`Output::write`] issues exactly one [`Write::write`](std::io::Write::write)
//!   call per invocation. No buffering, retries, or line splitting happen in
//!   the handle.
//! - The handle never closes the wrapped writer. Dropping the last clone drops
//!   the writer, which is the writer's own business.
//! - A writer that panicked while the handle's lock was held leaves the lock
//!   poisoned; the handle recovers the guard instead of propagating the panic.
//!
//! # Errors
//!
//! All operations surface [`std::io::Error`] values originating from the
//! underlying writer, unmodified.
//!
//! # Examples
//!
//! ```
//! use sink::{Output, OutputTarget};
//!
//! let output = Output::new(Vec::new());
//! let alias = output.clone();
//!
//! assert_eq!(alias, output);
//! assert_eq!(output.target(), OutputTarget::Writer);
//! assert_ne!(output, Output::stdout());
//! assert_eq!(Output::stdout(), Output::stdout());
//!
//! let written = alias.write(b"ready\n")?;
//! assert_eq!(written, 6);
//! # Ok::<(), std::io::Error>(())
//! ```

mod output;
mod target;

pub use output::Output;
pub use target::OutputTarget;
