//! # CLI Logger
//!
//! A small leveled logger for command line tools. Events carry a level, a
//! bracketed label and free-form `key=value` metadata, and are rendered as
//!
//! ```text
//! [LABEL] message key=value key=value
//! ```
//!
//! ## Features
//!
//! - **Fluent events**: `info().label("db").str("table", "users").msg("migrated")`
//! - **Default logger**: free functions bound to a process-wide logger
//! - **Pluggable**: swap the [`Formatter`] or [`Writer`] at runtime
//! - **Thread Safe**: each writer serializes whole lines
//!
//! ```
//! use cli_logger::prelude::*;
//!
//! cli_logger::set_max_level(Level::Debug);
//! cli_logger::debug().str("attempt", "2").msg("connecting");
//! cli_logger::print().msg("plain output, never filtered");
//! ```

pub mod core;
pub mod formatters;
pub mod macros;
pub mod writers;

pub mod prelude {
    pub use crate::core::{
        default_logger, Event, ExitHandler, Formatter, Level, LogEntry, Logger, LoggerBuilder,
        LoggerError, Result, Writer, FATAL_EXIT_CODE, LABEL_KEY,
    };
    pub use crate::formatters::{CliFormatter, CliFormatterOptions};
    pub use crate::writers::{BufferWriter, ConsoleWriter};
}

pub use crate::core::default_logger::{
    debug, error, fatal, info, print, set_formatter, set_max_level, set_writer, warning,
};
pub use crate::core::{
    default_logger, Event, ExitHandler, Formatter, Level, LogEntry, Logger, LoggerBuilder,
    LoggerError, Result, Writer, FATAL_EXIT_CODE, LABEL_KEY,
};
pub use formatters::{CliFormatter, CliFormatterOptions};
pub use writers::{BufferWriter, ConsoleWriter};
