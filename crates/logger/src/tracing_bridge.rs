//! crates/logger/src/tracing_bridge.rs
//! Bridge from the tracing crate to klio frames.
//!
//! [`KlioLayer`] is a tracing-subscriber layer that renders each tracing event
//! as one frame on a wrapped [`Logger`]. This lets code instrumented with the
//! standard tracing macros feed a klio-aware consumer without changes.
//!
//! # Level mapping
//!
//! | tracing | klio    |
//! |---------|---------|
//! | ERROR   | error   |
//! | WARN    | warn    |
//! | INFO    | info    |
//! | DEBUG   | debug   |
//! | TRACE   | spam    |
//!
//! # Usage
//!
//! ```rust,ignore
//! use klio_logger::{init_tracing, standard_logger};
//!
//! init_tracing(standard_logger().with_tags(["api"]))?;
//! tracing::warn!(attempt = 3, "upstream slow");
//! ```

use std::fmt::{self, Write as _};

use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::TryInitError;

use crate::levels::Level;
use crate::logger::Logger;

/// A tracing layer that prints every event through a [`Logger`].
///
/// The event's `message` field becomes the frame message and any other fields
/// are appended as ` name=value`. Write failures are dropped: a layer has no
/// caller to return them to.
#[derive(Debug)]
pub struct KlioLayer {
    logger: Logger,
    target_tag: bool,
}

impl KlioLayer {
    /// Creates a layer printing through `logger`.
    #[must_use]
    pub fn new(logger: Logger) -> Self {
        Self {
            logger,
            target_tag: false,
        }
    }

    /// Appends each event's target to the logger's tags when enabled.
    #[must_use]
    pub fn with_target_tag(mut self, enabled: bool) -> Self {
        self.target_tag = enabled;
        self
    }

    /// The logger events are printed through.
    #[must_use]
    pub const fn logger(&self) -> &Logger {
        &self.logger
    }

    /// Map a tracing level to a klio level.
    fn level_for(level: &tracing::Level) -> Level {
        match *level {
            tracing::Level::ERROR => Level::Error,
            tracing::Level::WARN => Level::Warn,
            tracing::Level::INFO => Level::Info,
            tracing::Level::DEBUG => Level::Debug,
            tracing::Level::TRACE => Level::Spam,
        }
    }

    fn logger_for(&self, event: &Event<'_>) -> Logger {
        let metadata = event.metadata();
        let logger = self.logger.with_level(Self::level_for(metadata.level()));
        if self.target_tag {
            let mut tags = logger.tags();
            tags.push(metadata.target().to_owned());
            logger.with_tags(tags)
        } else {
            logger
        }
    }
}

impl<S> Layer<S> for KlioLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = FrameVisitor::default();
        event.record(&mut visitor);
        let _ = self.logger_for(event).print(&visitor.finish());
    }
}

/// Collects the message and the remaining fields of an event.
#[derive(Default)]
struct FrameVisitor {
    message: String,
    fields: String,
}

impl FrameVisitor {
    fn finish(self) -> String {
        let mut rendered = self.message;
        rendered.push_str(&self.fields);
        rendered
    }
}

impl Visit for FrameVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        } else {
            let _ = write!(self.fields, " {}={value:?}", field.name());
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            value.clone_into(&mut self.message);
        } else {
            let _ = write!(self.fields, " {}={value}", field.name());
        }
    }
}

/// Installs a [`KlioLayer`] over `logger` as the global default subscriber.
///
/// Fails when a global subscriber has already been set.
pub fn init_tracing(logger: Logger) -> Result<(), TryInitError> {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(KlioLayer::new(logger))
        .try_init()
}

/// Installs a [`KlioLayer`] behind a caller-supplied filter layer.
///
/// ```rust,ignore
/// use klio_logger::{init_tracing_with_filter, standard_logger};
/// use tracing_subscriber::EnvFilter;
///
/// init_tracing_with_filter(standard_logger().clone(), EnvFilter::from_default_env())?;
/// ```
pub fn init_tracing_with_filter<F>(logger: Logger, filter: F) -> Result<(), TryInitError>
where
    F: Layer<tracing_subscriber::Registry> + Send + Sync + 'static,
{
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(filter)
        .with(KlioLayer::new(logger))
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for() {
        assert_eq!(KlioLayer::level_for(&tracing::Level::ERROR), Level::Error);
        assert_eq!(KlioLayer::level_for(&tracing::Level::WARN), Level::Warn);
        assert_eq!(KlioLayer::level_for(&tracing::Level::INFO), Level::Info);
        assert_eq!(KlioLayer::level_for(&tracing::Level::DEBUG), Level::Debug);
        assert_eq!(KlioLayer::level_for(&tracing::Level::TRACE), Level::Spam);
    }

    #[test]
    fn visitor_appends_fields_after_message() {
        let visitor = FrameVisitor {
            message: "started".to_owned(),
            fields: " port=8080".to_owned(),
        };
        assert_eq!(visitor.finish(), "started port=8080");
    }

    #[test]
    fn target_tag_is_off_by_default() {
        let layer = KlioLayer::new(Logger::new(sink::Output::new(Vec::new())));
        assert!(!layer.target_tag);
        assert!(layer.with_target_tag(true).target_tag);
    }
}
