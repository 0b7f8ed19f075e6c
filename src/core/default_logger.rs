//! Process-wide default logger
//!
//! The default [`Logger`] is built on first use with the same configuration
//! as [`Logger::new`]: threshold `info`, a colorized [`CliFormatter`] and a
//! [`ConsoleWriter`]. It lives until the process ends and is never torn down.
//!
//! [`CliFormatter`]: crate::formatters::CliFormatter
//! [`ConsoleWriter`]: crate::writers::ConsoleWriter

use super::{event::Event, formatter::Formatter, log_level::Level, logger::Logger, writer::Writer};
use std::sync::OnceLock;

static DEFAULT_LOGGER: OnceLock<Logger> = OnceLock::new();

/// The shared default logger.
pub fn default_logger() -> &'static Logger {
    DEFAULT_LOGGER.get_or_init(Logger::new)
}

pub fn set_max_level(level: Level) {
    default_logger().set_max_level(level);
}

pub fn set_formatter<F: Formatter + 'static>(formatter: F) {
    default_logger().set_formatter(formatter);
}

pub fn set_writer<W: Writer + 'static>(writer: W) {
    default_logger().set_writer(writer);
}

/// An unlabeled event on the default logger, written regardless of threshold.
pub fn print() -> Event<'static> {
    default_logger().print()
}

pub fn debug() -> Event<'static> {
    default_logger().debug()
}

pub fn info() -> Event<'static> {
    default_logger().info()
}

pub fn warning() -> Event<'static> {
    default_logger().warning()
}

pub fn error() -> Event<'static> {
    default_logger().error()
}

/// The process exits after the event is written.
pub fn fatal() -> Event<'static> {
    default_logger().fatal()
}
