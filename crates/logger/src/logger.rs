//! crates/logger/src/logger.rs
//! The [`Logger`] value: derivation, accessors, and emission.

use std::fmt;
use std::io;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use sink::Output;

use crate::config::LoggerConfig;
use crate::frame::Frame;
use crate::levels::{DEFAULT_LEVEL, Level};

/// One independent logging configuration bound to an [`Output`].
///
/// A logger carries a [`Level`] and an ordered list of tags. Both are fixed
/// for the lifetime of the value: [`with_level`](Self::with_level) and
/// [`with_tags`](Self::with_tags) return new loggers and leave the receiver
/// untouched. The output is the only mutable part; [`set_output`](Self::set_output)
/// retargets the receiver in place so every holder of a reference to it
/// observes the change.
///
/// Every call to [`print`](Self::print) or [`printf`](Self::printf) renders
/// one [`Frame`] and hands it to the output in a single write. The level is
/// only transmitted, never used to filter.
///
/// # Examples
///
/// ```
/// use klio_logger::{Level, Logger, Output};
///
/// let logger = Logger::new(Output::new(Vec::new()))
///     .with_tags(["deploy"])
///     .with_level(Level::Warn);
///
/// assert_eq!(logger.level(), Level::Warn);
/// assert_eq!(logger.tags(), ["deploy"]);
/// logger.printf(format_args!("{} hosts pending", 3))?;
/// # Ok::<(), std::io::Error>(())
/// ```
pub struct Logger {
    output: RwLock<Output>,
    level: Level,
    tags: Vec<String>,
}

impl Logger {
    /// Creates a logger writing to `output` at [`DEFAULT_LEVEL`] with no tags.
    #[must_use]
    pub fn new(output: Output) -> Self {
        Self::with_parts(output, DEFAULT_LEVEL, Vec::new())
    }

    /// Creates a logger from a [`LoggerConfig`] snapshot.
    #[must_use]
    pub fn from_config(output: Output, config: &LoggerConfig) -> Self {
        Self::with_parts(output, config.level.clone(), config.tags.clone())
    }

    fn with_parts(output: Output, level: Level, tags: Vec<String>) -> Self {
        Self {
            output: RwLock::new(output),
            level,
            tags,
        }
    }

    /// Returns a new logger with `level`, keeping this logger's output and tags.
    ///
    /// The level is not validated; [`Level::Raw`] values are emitted as given.
    #[must_use]
    pub fn with_level(&self, level: Level) -> Self {
        Self::with_parts(self.output(), level, self.tags.clone())
    }

    /// Returns a new logger whose tags are exactly `tags`, in order.
    ///
    /// The previous tags are replaced, not extended. An empty iterator clears
    /// them.
    #[must_use]
    pub fn with_tags<I, S>(&self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tags = tags.into_iter().map(Into::into).collect();
        Self::with_parts(self.output(), self.level.clone(), tags)
    }

    /// Returns a new logger with no tags.
    #[must_use]
    pub fn without_tags(&self) -> Self {
        Self::with_parts(self.output(), self.level.clone(), Vec::new())
    }

    /// Returns the logger's level.
    #[must_use]
    pub fn level(&self) -> Level {
        self.level.clone()
    }

    /// Returns a copy of the logger's tags.
    ///
    /// Mutating the returned vector has no effect on the logger.
    #[must_use]
    pub fn tags(&self) -> Vec<String> {
        self.tags.clone()
    }

    /// Returns a handle to the logger's current output.
    #[must_use]
    pub fn output(&self) -> Output {
        self.read_output().clone()
    }

    /// Replaces the logger's output in place and returns the previous one.
    ///
    /// Writes issued after this call go to `output` only. Loggers previously
    /// derived from this one keep the output they were created with.
    pub fn set_output(&self, output: Output) -> Output {
        std::mem::replace(&mut *self.write_output(), output)
    }

    /// Returns the logger's level and tags as a [`LoggerConfig`].
    #[must_use]
    pub fn config(&self) -> LoggerConfig {
        LoggerConfig {
            level: self.level(),
            tags: self.tags(),
        }
    }

    /// Writes `message` as one frame.
    ///
    /// The message is emitted byte for byte; no newline is added or removed
    /// beyond the one terminating the frame. The result is the output's answer
    /// to the single write: the byte count it accepted or its error.
    pub fn print(&self, message: &str) -> io::Result<usize> {
        let frame = Frame::new(&self.level, &self.tags, message).encode()?;
        self.output().write(&frame)
    }

    /// Formats `args` and writes the result as one frame.
    ///
    /// ```
    /// use klio_logger::{Logger, Output};
    ///
    /// let logger = Logger::new(Output::new(Vec::new()));
    /// logger.printf(format_args!("{}/{}", 1, 2))?;
    /// # Ok::<(), std::io::Error>(())
    /// ```
    pub fn printf(&self, args: fmt::Arguments<'_>) -> io::Result<usize> {
        match args.as_str() {
            Some(message) => self.print(message),
            None => self.print(&args.to_string()),
        }
    }

    fn read_output(&self) -> RwLockReadGuard<'_, Output> {
        self.output.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_output(&self) -> RwLockWriteGuard<'_, Output> {
        self.output.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Clone for Logger {
    fn clone(&self) -> Self {
        Self::with_parts(self.output(), self.level.clone(), self.tags.clone())
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("output", &*self.read_output())
            .field("level", &self.level)
            .field("tags", &self.tags)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_support::{FailingWriter, SharedBuffer, ShortWriter};

    const INFO_FOO: &str =
        "\x1b_klio_log_level \"info\"\x1b\\\x1b_klio_tags []\x1b\\foo\x1b_klio_reset\x1b\\\n";

    fn buffered() -> (Logger, SharedBuffer) {
        let buffer = SharedBuffer::new();
        (Logger::new(Output::new(buffer.clone())), buffer)
    }

    #[test]
    fn new_logger_uses_defaults() {
        let (logger, _) = buffered();
        assert_eq!(logger.level(), DEFAULT_LEVEL);
        assert!(logger.tags().is_empty());
    }

    #[test]
    fn with_level_leaves_parent_untouched() {
        let (l1, _) = buffered();
        let l2 = l1.with_level(Level::Spam);
        let l3 = l2.with_level(Level::Warn);

        assert_eq!(l1.level(), DEFAULT_LEVEL);
        assert_eq!(l2.level(), Level::Spam);
        assert_eq!(l3.level(), Level::Warn);
    }

    #[test]
    fn with_tags_replaces_and_copies() {
        let (l1, _) = buffered();
        let l2 = l1.with_tags(["a", "b"]);
        let l3 = l2.with_tags(Vec::<String>::new());

        let mut returned = l2.tags();
        returned[0] = "xyz".to_owned();

        assert_eq!(l1.tags(), Vec::<String>::new());
        assert_eq!(l2.tags(), ["a", "b"]);
        assert_eq!(l3.tags(), Vec::<String>::new());
    }

    #[test]
    fn with_tags_does_not_share_the_source_vector() {
        let (logger, _) = buffered();
        let mut source = vec!["a".to_owned()];
        let derived = logger.with_tags(source.clone());
        source.push("b".to_owned());

        assert_eq!(derived.tags(), ["a"]);
    }

    #[test]
    fn without_tags_clears() {
        let (logger, _) = buffered();
        let tagged = logger.with_tags(["x"]).with_level(Level::Debug);
        let cleared = tagged.without_tags();

        assert!(cleared.tags().is_empty());
        assert_eq!(cleared.level(), Level::Debug);
    }

    #[test]
    fn derived_loggers_share_the_output() {
        let (logger, _) = buffered();
        let derived = logger.with_level(Level::Error).with_tags(["t"]);
        assert_eq!(derived.output(), logger.output());
    }

    #[test]
    fn print_writes_one_frame_in_one_call() {
        let (logger, buffer) = buffered();

        let written = logger.print("foo").expect("print succeeds");

        assert_eq!(buffer.contents_string(), INFO_FOO);
        assert_eq!(written, INFO_FOO.len());
        assert_eq!(buffer.write_calls(), 1);
    }

    #[test]
    fn print_carries_level_and_tags() {
        let (logger, buffer) = buffered();

        logger
            .with_tags(["a", "b", "c"])
            .with_level(Level::Spam)
            .print("foo")
            .expect("print succeeds");

        assert_eq!(
            buffer.contents_string(),
            "\x1b_klio_log_level \"spam\"\x1b\\\x1b_klio_tags [\"a\",\"b\",\"c\"]\x1b\\foo\x1b_klio_reset\x1b\\\n"
        );
    }

    #[test]
    fn resetting_level_and_tags_restores_default_frame() {
        let (logger, buffer) = buffered();

        logger
            .with_tags(["a", "b", "c"])
            .with_level(Level::Spam)
            .with_level(DEFAULT_LEVEL)
            .with_tags(Vec::<String>::new())
            .print("foo")
            .expect("print succeeds");

        assert_eq!(buffer.contents_string(), INFO_FOO);
    }

    #[test]
    fn print_escapes_level_and_tags() {
        let (logger, buffer) = buffered();

        logger
            .with_tags(["\x1b\\"])
            .with_level(Level::raw("\""))
            .print("foo")
            .expect("print succeeds");

        assert_eq!(
            buffer.contents_string(),
            "\x1b_klio_log_level \"\\\"\"\x1b\\\x1b_klio_tags [\"\\u001b\\\\\"]\x1b\\foo\x1b_klio_reset\x1b\\\n"
        );
    }

    #[test]
    fn printf_formats_before_framing() {
        let (logger, buffer) = buffered();

        logger
            .printf(format_args!("{}", "foo"))
            .expect("printf succeeds");

        assert_eq!(buffer.contents_string(), INFO_FOO);
    }

    #[test]
    fn printf_accepts_static_format_strings() {
        let (logger, buffer) = buffered();

        logger.printf(format_args!("foo")).expect("printf succeeds");

        assert_eq!(buffer.contents_string(), INFO_FOO);
    }

    #[test]
    fn set_output_retargets_the_receiver() {
        let first = SharedBuffer::new();
        let second = SharedBuffer::new();
        let logger = Logger::new(Output::new(first.clone()));

        let previous = logger.set_output(Output::new(second.clone()));
        logger.print("foo").expect("print succeeds");

        assert!(first.is_empty());
        assert_eq!(second.contents_string(), INFO_FOO);
        assert_eq!(previous.target(), sink::OutputTarget::Writer);
    }

    #[test]
    fn set_output_does_not_follow_into_derived_loggers() {
        let first = SharedBuffer::new();
        let second = SharedBuffer::new();
        let parent = Logger::new(Output::new(first.clone()));
        let child = parent.with_level(Level::Warn);

        let _ = parent.set_output(Output::new(second.clone()));
        child.print("child").expect("print succeeds");

        assert!(first.contents_string().contains("child"));
        assert!(second.is_empty());
    }

    #[test]
    fn write_errors_are_returned_unmodified() {
        let logger = Logger::new(Output::new(FailingWriter::new(io::ErrorKind::BrokenPipe)));

        let error = logger.print("lost").expect_err("print fails");

        assert_eq!(error.kind(), io::ErrorKind::BrokenPipe);
        assert_eq!(error.to_string(), "sink rejected write");
    }

    #[test]
    fn short_writes_are_reported_as_is() {
        let buffer = SharedBuffer::new();
        let logger = Logger::new(Output::new(ShortWriter::new(buffer.clone(), 4)));

        let written = logger.print("foo").expect("print succeeds");

        assert_eq!(written, 4);
        assert_eq!(buffer.contents(), b"\x1b_kl");
    }

    #[test]
    fn clone_is_independent_but_shares_output() {
        let (logger, _) = buffered();
        let tagged = logger.with_tags(["a"]);
        let copy = tagged.clone();

        let _ = copy.set_output(Output::new(Vec::new()));

        assert_eq!(copy.tags(), ["a"]);
        assert_ne!(copy.output(), tagged.output());
        assert_eq!(tagged.output(), logger.output());
    }

    #[test]
    fn config_round_trips_through_from_config() {
        let (logger, _) = buffered();
        let tagged = logger.with_tags(["x", "y"]).with_level(Level::Fatal);

        let rebuilt = Logger::from_config(tagged.output(), &tagged.config());

        assert_eq!(rebuilt.level(), Level::Fatal);
        assert_eq!(rebuilt.tags(), ["x", "y"]);
        assert_eq!(rebuilt.output(), tagged.output());
    }

    #[test]
    fn debug_lists_level_and_tags() {
        let (logger, _) = buffered();
        let rendered = format!("{:?}", logger.with_tags(["t"]));
        assert!(rendered.contains("Info"));
        assert!(rendered.contains("\"t\""));
    }
}
