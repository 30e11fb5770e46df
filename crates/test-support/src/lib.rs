#![deny(unsafe_code)]
#![deny(missing_docs)]

//! crates/test-support/src/lib.rs
//!
//! Shared test utilities for the klio logger workspace.
//!
//! - [`SharedBuffer`]: an in-memory writer whose clones share storage, so a
//!   test can hand one clone to a logger and inspect the other.
//! - [`FailingWriter`] and [`ShortWriter`]: writers that reject or truncate
//!   writes, for exercising error pass-through.
//! - [`TempLog`]: a temporary file that can be written through a sink and read
//!   back afterwards.
//! - [`global_logger_session`]: a lock serialising tests that retarget the
//!   process-wide loggers.

mod buffer;
mod session;
mod temp_log;
mod writers;

pub use buffer::SharedBuffer;
pub use session::{GlobalLoggerSession, global_logger_session};
pub use temp_log::TempLog;
pub use writers::{FailingWriter, ShortWriter};
