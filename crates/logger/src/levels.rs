//! crates/logger/src/levels.rs
//! Level vocabulary, lenient and strict parsing.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use thiserror::Error;

/// Level assigned to loggers that were not given one explicitly.
pub const DEFAULT_LEVEL: Level = Level::Info;

/// Severity token carried in every emitted frame.
///
/// Levels are display tags, not thresholds: a logger always emits, whatever
/// its level. The seven known tokens have dedicated variants. [`Level::Raw`]
/// holds any other token; it is never produced by [`parse_level`] but is
/// accepted everywhere a level is, and is emitted as-is.
///
/// Equality and hashing compare tokens, so a raw level spelling a known token
/// equals the known variant.
///
/// ```
/// use klio_logger::Level;
///
/// assert_eq!(Level::raw("warn"), Level::Warn);
/// assert_eq!(Level::raw("notice").as_str(), "notice");
/// assert!(!Level::raw("notice").is_known());
/// ```
#[derive(Clone, Debug)]
pub enum Level {
    /// `spam`
    Spam,
    /// `debug`
    Debug,
    /// `verbose`
    Verbose,
    /// `info`
    Info,
    /// `warn`
    Warn,
    /// `error`
    Error,
    /// `fatal`
    Fatal,
    /// Unvalidated token outside the known vocabulary.
    Raw(String),
}

impl Level {
    /// The known levels in vocabulary order.
    pub const KNOWN: [Self; 7] = [
        Self::Spam,
        Self::Debug,
        Self::Verbose,
        Self::Info,
        Self::Warn,
        Self::Error,
        Self::Fatal,
    ];

    /// Builds a level from `token` without validating it.
    #[must_use]
    pub fn raw(token: impl Into<String>) -> Self {
        Self::Raw(token.into())
    }

    /// Returns the token transmitted on the wire.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Spam => "spam",
            Self::Debug => "debug",
            Self::Verbose => "verbose",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
            Self::Fatal => "fatal",
            Self::Raw(token) => token,
        }
    }

    /// Reports whether the token belongs to the known vocabulary.
    #[must_use]
    pub fn is_known(&self) -> bool {
        Self::KNOWN.iter().any(|known| known.as_str() == self.as_str())
    }

    fn match_known(text: &str) -> Option<Self> {
        Self::KNOWN
            .into_iter()
            .find(|known| known.as_str().eq_ignore_ascii_case(text))
    }
}

/// Parses `text` into a known level.
///
/// Matching ignores ASCII case but nothing else: surrounding whitespace makes
/// the match fail. On success the canonical lowercase variant is returned with
/// `true`. Otherwise the result is [`DEFAULT_LEVEL`] with `false`; the
/// returned level is then usable as-is.
///
/// ```
/// use klio_logger::{DEFAULT_LEVEL, Level, parse_level};
///
/// assert_eq!(parse_level("WARN"), (Level::Warn, true));
/// assert_eq!(parse_level("  spam"), (DEFAULT_LEVEL, false));
/// ```
#[must_use]
pub fn parse_level(text: &str) -> (Level, bool) {
    match Level::match_known(text) {
        Some(level) => (level, true),
        None => (DEFAULT_LEVEL, false),
    }
}

/// Error returned by the strict [`FromStr`] implementation of [`Level`].
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("unknown log level {text:?}")]
pub struct ParseLevelError {
    text: String,
}

impl ParseLevelError {
    /// The text that failed to match a known level.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::match_known(text).ok_or_else(|| ParseLevelError {
            text: text.to_owned(),
        })
    }
}

impl Default for Level {
    fn default() -> Self {
        DEFAULT_LEVEL
    }
}

impl PartialEq for Level {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for Level {}

impl Hash for Level {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Level {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Level {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let text = <String as serde::Deserialize>::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
