//! Core logger types and traits

pub mod default_logger;
pub mod error;
pub mod event;
pub mod formatter;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod writer;

pub use default_logger::default_logger;
pub use error::{LoggerError, Result};
pub use event::Event;
pub use formatter::Formatter;
pub use log_entry::{LogEntry, LABEL_KEY};
pub use log_level::Level;
pub use logger::{ExitHandler, Logger, LoggerBuilder, FATAL_EXIT_CODE};
pub use writer::Writer;
