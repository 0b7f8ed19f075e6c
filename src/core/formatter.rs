//! Formatter trait for rendering log entries

use super::{error::Result, log_entry::LogEntry};

/// Turns a [`LogEntry`] into the bytes of one output line, without the
/// trailing newline.
///
/// A formatter may fail; the logger then drops the event without writing
/// anything.
pub trait Formatter: Send + Sync {
    fn format(&self, entry: &LogEntry) -> Result<Vec<u8>>;
}
