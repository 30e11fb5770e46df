//! crates/logger/src/config.rs
//! Serializable snapshot of a logger's level and tags.

use crate::levels::Level;

/// Level and tags of a [`Logger`](crate::Logger), detached from its output.
///
/// With the `serde` feature enabled the snapshot can be embedded in an
/// application's configuration file; missing fields take their defaults and
/// unknown level names are rejected.
///
/// ```
/// use klio_logger::{Level, Logger, LoggerConfig, Output};
///
/// let config = LoggerConfig {
///     level: Level::Debug,
///     tags: vec!["worker".to_owned()],
/// };
/// let logger = Logger::from_config(Output::new(Vec::new()), &config);
///
/// assert_eq!(logger.config(), config);
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct LoggerConfig {
    /// Level stamped on every frame.
    pub level: Level,
    /// Tags stamped on every frame, in order.
    pub tags: Vec<String>,
}

impl LoggerConfig {
    /// Returns a configuration with `level` and no tags.
    #[must_use]
    pub fn with_level(level: Level) -> Self {
        Self {
            level,
            tags: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::levels::DEFAULT_LEVEL;

    #[test]
    fn default_matches_new_logger() {
        let config = LoggerConfig::default();
        assert_eq!(config.level, DEFAULT_LEVEL);
        assert!(config.tags.is_empty());
    }

    #[test]
    fn with_level_leaves_tags_empty() {
        let config = LoggerConfig::with_level(Level::Error);
        assert_eq!(config.level, Level::Error);
        assert!(config.tags.is_empty());
    }
}
