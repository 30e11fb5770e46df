//! crates/logger/src/frame.rs
//! Escape-sequence framing of a single log line.
//!
//! A frame is laid out as
//!
//! ```text
//! ESC _klio_log_level <json string> ESC \
//! ESC _klio_tags <json array> ESC \
//! <message>
//! ESC _klio_reset ESC \ LF
//! ```
//!
//! with no separators between the parts. The level and every tag are JSON
//! string literals; the message is copied verbatim.

use std::io;

use crate::levels::Level;

/// The escape control byte (0x1B) that opens every sequence.
pub const ESC: u8 = 0x1b;

/// Introducer of the level sequence, including the trailing space.
pub const LEVEL_INTRODUCER: &str = "\x1b_klio_log_level ";

/// Introducer of the tags sequence, including the trailing space.
pub const TAGS_INTRODUCER: &str = "\x1b_klio_tags ";

/// Sequence that ends a frame's message.
pub const RESET_SEQUENCE: &str = "\x1b_klio_reset";

/// String terminator closing each sequence (`ESC \`).
pub const STRING_TERMINATOR: &str = "\x1b\\";

/// Borrowed view of the parts of one frame.
///
/// ```
/// use klio_logger::{Frame, Level};
///
/// let tags = vec!["build".to_owned()];
/// let bytes = Frame::new(&Level::Warn, &tags, "slow step").encode()?;
///
/// assert_eq!(
///     bytes,
///     b"\x1b_klio_log_level \"warn\"\x1b\\\x1b_klio_tags [\"build\"]\x1b\\slow step\x1b_klio_reset\x1b\\\n"
/// );
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Frame<'a> {
    level: &'a Level,
    tags: &'a [String],
    message: &'a str,
}

impl<'a> Frame<'a> {
    /// Assembles a frame from its parts.
    #[must_use]
    pub const fn new(level: &'a Level, tags: &'a [String], message: &'a str) -> Self {
        Self {
            level,
            tags,
            message,
        }
    }

    /// Renders the frame into a fresh buffer.
    pub fn encode(&self) -> io::Result<Vec<u8>> {
        let mut buffer = Vec::with_capacity(self.encoded_len_hint());
        self.encode_into(&mut buffer)?;
        Ok(buffer)
    }

    /// Appends the rendered frame to `buffer`.
    ///
    /// On error `buffer` may hold a partial frame.
    pub fn encode_into(&self, buffer: &mut Vec<u8>) -> io::Result<()> {
        buffer.extend_from_slice(LEVEL_INTRODUCER.as_bytes());
        serde_json::to_writer(&mut *buffer, self.level.as_str())?;
        buffer.extend_from_slice(STRING_TERMINATOR.as_bytes());

        buffer.extend_from_slice(TAGS_INTRODUCER.as_bytes());
        serde_json::to_writer(&mut *buffer, self.tags)?;
        buffer.extend_from_slice(STRING_TERMINATOR.as_bytes());

        buffer.extend_from_slice(self.message.as_bytes());

        buffer.extend_from_slice(RESET_SEQUENCE.as_bytes());
        buffer.extend_from_slice(STRING_TERMINATOR.as_bytes());
        buffer.push(b'\n');
        Ok(())
    }

    fn encoded_len_hint(&self) -> usize {
        let fixed = LEVEL_INTRODUCER.len()
            + TAGS_INTRODUCER.len()
            + RESET_SEQUENCE.len()
            + STRING_TERMINATOR.len() * 3
            + 1;
        let tags: usize = self.tags.iter().map(|tag| tag.len() + 3).sum();
        fixed + self.level.as_str().len() + 2 + tags + 2 + self.message.len()
    }
}
