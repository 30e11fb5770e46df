#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `klio_logger` emits leveled, tagged log lines wrapped in klio's private
//! terminal escape sequences. A wrapping tool that understands the sequences
//! reads the level and tags out of band; anything else can strip the
//! escape-delimited parts and recover the plain message.
//!
//! # Design
//!
//! - [`Level`] is a closed vocabulary (`spam`, `debug`, `verbose`, `info`,
//!   `warn`, `error`, `fatal`) with a raw fallback for unvalidated tokens.
//!   [`parse_level`] matches case-insensitively and falls back to
//!   [`DEFAULT_LEVEL`].
//! - [`Logger`] holds an [`Output`], a level, and tags. Derivations
//!   ([`Logger::with_level`], [`Logger::with_tags`]) return new loggers;
//!   only the output can be swapped in place.
//! - [`Frame`] renders one line of the wire format.
//! - [`standard_logger`] and [`error_logger`] are process-wide instances on
//!   standard output and standard error; the per-level functions
//!   ([`info`], [`warnf`], ...) and macros ([`infof!`], ...) print through the
//!   standard logger.
//!
//! # Wire format
//!
//! ```text
//! ESC_klio_log_level "<level>"ESC\ESC_klio_tags [<tag>,...]ESC\<message>ESC_klio_resetESC\
//! ```
//!
//! followed by a single newline. `ESC` is 0x1B. The level and tags are
//! JSON-escaped; the message is not.
//!
//! # Invariants
//!
//! - Every print issues exactly one write to the output. Nothing is buffered
//!   or retried.
//! - Levels never filter: every print emits.
//! - Tags returned by [`Logger::tags`] are copies.
//!
//! # Errors
//!
//! Print operations return the output's [`std::io::Error`] unmodified.
//! [`parse_level`] never fails; the strict [`str::parse`] path reports
//! [`ParseLevelError`].
//!
//! # Concurrency
//!
//! Loggers are `Send + Sync`. Each frame reaches the writer in one call made
//! under the output's lock, but callers that need a strict global order
//! across threads must serialise their calls. Swapping an output while other
//! threads print is allowed; a print already in progress finishes on the
//! output it started with.
//!
//! # Examples
//!
//! ```
//! use klio_logger::{Level, Logger, Output};
//!
//! let logger = Logger::new(Output::new(Vec::new()));
//! let build = logger.with_tags(["build", "linux"]).with_level(Level::Verbose);
//!
//! build.print("compiling")?;
//! assert_eq!(logger.tags(), Vec::<String>::new());
//! # Ok::<(), std::io::Error>(())
//! ```
//!
//! # Feature flags
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Level`] and [`LoggerConfig`].
//! - `tracing`: a `tracing-subscriber` layer that prints tracing events as
//!   frames.

mod config;
mod defaults;
mod frame;
mod levels;
mod logger;
mod macros;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use config::LoggerConfig;
pub use defaults::{
    debug, debugf, error, error_logger, errorf, fatal, fatalf, info, infof, spam, spamf,
    standard_logger, verbose, verbosef, warn, warnf,
};
pub use frame::{
    ESC, Frame, LEVEL_INTRODUCER, RESET_SEQUENCE, STRING_TERMINATOR, TAGS_INTRODUCER,
};
pub use levels::{DEFAULT_LEVEL, Level, ParseLevelError, parse_level};
pub use logger::Logger;
pub use sink::{Output, OutputTarget};
#[cfg(feature = "tracing")]
pub use tracing_bridge::{KlioLayer, init_tracing, init_tracing_with_filter};
