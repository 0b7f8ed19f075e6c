//! Main logger implementation

use super::{
    event::Event,
    formatter::Formatter,
    log_entry::{trim_trailing_newline, LogEntry},
    log_level::Level,
    writer::Writer,
};
use crate::formatters::{CliFormatter, CliFormatterOptions};
use crate::writers::ConsoleWriter;
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

/// Exit status used after a fatal event has been written.
pub const FATAL_EXIT_CODE: i32 = 1;

/// Called with [`FATAL_EXIT_CODE`] once a fatal event has been written.
///
/// The default handler is [`std::process::exit`]. Tests install a handler
/// that records the code instead of terminating.
pub type ExitHandler = Arc<dyn Fn(i32) + Send + Sync>;

fn process_exit() -> ExitHandler {
    Arc::new(|code| std::process::exit(code))
}

/// Gates events by level, formats them and hands them to a writer.
///
/// Every field sits behind its own lock so a shared logger (the process
/// default included) can be reconfigured through `&self`. Reconfiguring
/// while other threads are logging is allowed, but an event that is already
/// past the gate uses whichever formatter and writer it observes.
pub struct Logger {
    max_level: RwLock<Level>,
    formatter: RwLock<Box<dyn Formatter>>,
    writer: RwLock<Box<dyn Writer>>,
    exit_handler: RwLock<ExitHandler>,
}

impl Logger {
    /// A logger at `info` with a colorized CLI formatter writing to the console.
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    pub fn set_max_level(&self, level: Level) {
        *self.max_level.write() = level;
    }

    pub fn max_level(&self) -> Level {
        *self.max_level.read()
    }

    pub fn set_formatter<F: Formatter + 'static>(&self, formatter: F) {
        *self.formatter.write() = Box::new(formatter);
    }

    pub fn set_writer<W: Writer + 'static>(&self, writer: W) {
        *self.writer.write() = Box::new(writer);
    }

    pub fn set_exit_handler(&self, handler: ExitHandler) {
        *self.exit_handler.write() = handler;
    }

    /// Whether an event at `level` would currently be written.
    pub fn enabled(&self, level: Level) -> bool {
        level.is_enabled(self.max_level())
    }

    /// Gate, format and write one entry; exits the process after a fatal one.
    ///
    /// Entries above the threshold and entries the formatter rejects are
    /// dropped without output.
    pub fn log(&self, mut entry: LogEntry) {
        if !self.enabled(entry.level) {
            return;
        }

        trim_trailing_newline(&mut entry.message);
        let data = match self.formatter.read().format(&entry) {
            Ok(data) => data,
            Err(_) => return,
        };
        self.writer.read().write(&data, entry.level);

        if entry.level == Level::Fatal {
            let exit = Arc::clone(&self.exit_handler.read());
            exit(FATAL_EXIT_CODE);
        }
    }

    /// An unlabeled event that is written regardless of the threshold.
    pub fn print(&self) -> Event<'_> {
        Event::new(self, Level::Print)
    }

    pub fn debug(&self) -> Event<'_> {
        Event::new(self, Level::Debug)
    }

    pub fn info(&self) -> Event<'_> {
        Event::new(self, Level::Info)
    }

    pub fn warning(&self) -> Event<'_> {
        Event::new(self, Level::Warning)
    }

    pub fn error(&self) -> Event<'_> {
        Event::new(self, Level::Error)
    }

    /// The process exits once the event's `msg` has written it.
    pub fn fatal(&self) -> Event<'_> {
        Event::new(self, Level::Fatal)
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("max_level", &self.max_level())
            .finish_non_exhaustive()
    }
}

/// Builder for creating Logger instances with fluent API
///
/// # Example
///
/// ```
/// use cli_logger::prelude::*;
///
/// let logger = Logger::builder()
///     .max_level(Level::Debug)
///     .formatter(CliFormatter::new(CliFormatterOptions { colorize: false }))
///     .writer(ConsoleWriter::new())
///     .build();
/// assert_eq!(logger.max_level(), Level::Debug);
/// ```
pub struct LoggerBuilder {
    max_level: Level,
    formatter: Option<Box<dyn Formatter>>,
    writer: Option<Box<dyn Writer>>,
    exit_handler: Option<ExitHandler>,
}

impl LoggerBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            max_level: Level::Info,
            formatter: None,
            writer: None,
            exit_handler: None,
        }
    }

    #[must_use]
    pub fn max_level(mut self, level: Level) -> Self {
        self.max_level = level;
        self
    }

    #[must_use]
    pub fn formatter<F: Formatter + 'static>(mut self, formatter: F) -> Self {
        self.formatter = Some(Box::new(formatter));
        self
    }

    #[must_use]
    pub fn writer<W: Writer + 'static>(mut self, writer: W) -> Self {
        self.writer = Some(Box::new(writer));
        self
    }

    #[must_use]
    pub fn exit_handler(mut self, handler: ExitHandler) -> Self {
        self.exit_handler = Some(handler);
        self
    }

    /// Unset parts fall back to a colorized [`CliFormatter`], a
    /// [`ConsoleWriter`] and [`std::process::exit`].
    #[must_use]
    pub fn build(self) -> Logger {
        let formatter = self.formatter.unwrap_or_else(|| {
            Box::new(CliFormatter::new(CliFormatterOptions { colorize: true }))
        });
        let writer = self
            .writer
            .unwrap_or_else(|| Box::new(ConsoleWriter::new()));

        Logger {
            max_level: RwLock::new(self.max_level),
            formatter: RwLock::new(formatter),
            writer: RwLock::new(writer),
            exit_handler: RwLock::new(self.exit_handler.unwrap_or_else(process_exit)),
        }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
