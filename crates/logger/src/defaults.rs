//! crates/logger/src/defaults.rs
//! Process-wide loggers and the per-level shortcut functions.
//!
//! The standard logger writes to standard output at [`DEFAULT_LEVEL`]; the
//! error logger writes to standard error at [`Level::Error`]. Both are created
//! on first use and live for the rest of the process. Their level and tags
//! never change; their output can be swapped with [`Logger::set_output`].
//!
//! The shortcut functions derive a throwaway logger from the standard logger
//! with the matching level and its current tags, then print. `fatal` and
//! `fatalf` only name the level; they do not end the process.
//!
//! [`DEFAULT_LEVEL`]: crate::DEFAULT_LEVEL

use std::fmt;
use std::io;
use std::sync::OnceLock;

use sink::Output;

use crate::config::LoggerConfig;
use crate::levels::Level;
use crate::logger::Logger;

/// Returns the process-wide logger bound to standard output.
pub fn standard_logger() -> &'static Logger {
    static STANDARD: OnceLock<Logger> = OnceLock::new();
    STANDARD.get_or_init(|| Logger::new(Output::stdout()))
}

/// Returns the process-wide logger bound to standard error at `error` level.
pub fn error_logger() -> &'static Logger {
    static ERROR: OnceLock<Logger> = OnceLock::new();
    ERROR.get_or_init(|| {
        Logger::from_config(Output::stderr(), &LoggerConfig::with_level(Level::Error))
    })
}

fn emit(level: Level, message: &str) -> io::Result<usize> {
    standard_logger().with_level(level).print(message)
}

fn emitf(level: Level, args: fmt::Arguments<'_>) -> io::Result<usize> {
    standard_logger().with_level(level).printf(args)
}

/// Prints `message` through the standard logger at `spam` level.
pub fn spam(message: &str) -> io::Result<usize> {
    emit(Level::Spam, message)
}

/// Prints formatted `args` through the standard logger at `spam` level.
pub fn spamf(args: fmt::Arguments<'_>) -> io::Result<usize> {
    emitf(Level::Spam, args)
}

/// Prints `message` through the standard logger at `debug` level.
pub fn debug(message: &str) -> io::Result<usize> {
    emit(Level::Debug, message)
}

/// Prints formatted `args` through the standard logger at `debug` level.
pub fn debugf(args: fmt::Arguments<'_>) -> io::Result<usize> {
    emitf(Level::Debug, args)
}

/// Prints `message` through the standard logger at `verbose` level.
pub fn verbose(message: &str) -> io::Result<usize> {
    emit(Level::Verbose, message)
}

/// Prints formatted `args` through the standard logger at `verbose` level.
pub fn verbosef(args: fmt::Arguments<'_>) -> io::Result<usize> {
    emitf(Level::Verbose, args)
}

/// Prints `message` through the standard logger at `info` level.
pub fn info(message: &str) -> io::Result<usize> {
    emit(Level::Info, message)
}

/// Prints formatted `args` through the standard logger at `info` level.
pub fn infof(args: fmt::Arguments<'_>) -> io::Result<usize> {
    emitf(Level::Info, args)
}

/// Prints `message` through the standard logger at `warn` level.
pub fn warn(message: &str) -> io::Result<usize> {
    emit(Level::Warn, message)
}

/// Prints formatted `args` through the standard logger at `warn` level.
pub fn warnf(args: fmt::Arguments<'_>) -> io::Result<usize> {
    emitf(Level::Warn, args)
}

/// Prints `message` through the standard logger at `error` level.
pub fn error(message: &str) -> io::Result<usize> {
    emit(Level::Error, message)
}

/// Prints formatted `args` through the standard logger at `error` level.
pub fn errorf(args: fmt::Arguments<'_>) -> io::Result<usize> {
    emitf(Level::Error, args)
}

/// Prints `message` through the standard logger at `fatal` level.
///
/// The process keeps running.
pub fn fatal(message: &str) -> io::Result<usize> {
    emit(Level::Fatal, message)
}

/// Prints formatted `args` through the standard logger at `fatal` level.
pub fn fatalf(args: fmt::Arguments<'_>) -> io::Result<usize> {
    emitf(Level::Fatal, args)
}
