//! Event builder for fluent log event construction
//!
//! An [`Event`] is created by one of the [`Logger`] factory methods, collects
//! a label and metadata through chained calls, and is consumed by
//! [`Event::msg`] or [`Event::msgf`], which hand it to the logger.

use super::log_entry::{LogEntry, LABEL_KEY};
use super::log_level::Level;
use super::logger::Logger;
use std::collections::HashMap;
use std::fmt;

/// Builder for a single log event
///
/// # Example
///
/// ```
/// use cli_logger::prelude::*;
///
/// let writer = BufferWriter::new();
/// let logger = Logger::builder()
///     .formatter(CliFormatter::new(CliFormatterOptions { colorize: false }))
///     .writer(writer.clone())
///     .build();
///
/// logger.info()
///     .label("http")
///     .str("status", "200")
///     .msg("request served");
///
/// assert_eq!(writer.stdout_string(), "[http] request served status=200\n");
/// ```
#[must_use = "an event does nothing until `msg` or `msgf` is called"]
pub struct Event<'a> {
    logger: &'a Logger,
    level: Level,
    metadata: HashMap<String, String>,
}

impl<'a> Event<'a> {
    /// Create an event at `level`, seeded with the level's default label.
    pub fn new(logger: &'a Logger, level: Level) -> Self {
        let mut metadata = HashMap::new();
        if let Some(label) = level.label() {
            metadata.insert(LABEL_KEY.to_string(), label.to_string());
        }
        Self {
            logger,
            level,
            metadata,
        }
    }

    pub fn level(&self) -> Level {
        self.level
    }

    /// Replace the label shown in front of the message.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.metadata.insert(LABEL_KEY.to_string(), label.into());
        self
    }

    /// Set one metadata entry, overwriting any previous value for `key`.
    pub fn str(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Set the message and dispatch the event.
    ///
    /// A filtered event returns before `message` is converted.
    pub fn msg(self, message: impl Into<String>) {
        if !self.logger.enabled(self.level) {
            return;
        }
        let entry = LogEntry {
            level: self.level,
            message: message.into(),
            metadata: self.metadata,
        };
        self.logger.log(entry);
    }

    /// Like [`msg`](Self::msg), with the message built from `format_args!`.
    ///
    /// The arguments are not formatted when the event is filtered out.
    ///
    /// ```
    /// # use cli_logger::prelude::*;
    /// # let logger = Logger::builder().writer(BufferWriter::new()).build();
    /// let port = 8080;
    /// logger.info().msgf(format_args!("listening on {}", port));
    /// ```
    pub fn msgf(self, args: fmt::Arguments<'_>) {
        if !self.logger.enabled(self.level) {
            return;
        }
        self.msg(fmt::format(args));
    }
}

impl fmt::Debug for Event<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Event")
            .field("level", &self.level)
            .field("metadata", &self.metadata)
            .finish()
    }
}
