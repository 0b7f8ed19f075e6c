//! Log level definitions

use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a log event, ordered from most restrictive to most verbose.
///
/// An event is emitted when `event_level <= max_level`. `Silent` is only
/// meaningful as a threshold: events at that level are never emitted.
/// [`Level::Print`] is a pseudo-level used by `print()` events; it sorts below
/// every other level so it passes the gate for any threshold, `Silent`
/// included.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[repr(i8)]
pub enum Level {
    Print = -1,
    Silent = 0,
    Fatal = 1,
    Error = 2,
    Warning = 3,
    #[default]
    Info = 4,
    Debug = 5,
}

impl Level {
    /// The six real levels, most restrictive first.
    pub const ALL: [Level; 6] = [
        Level::Silent,
        Level::Fatal,
        Level::Error,
        Level::Warning,
        Level::Info,
        Level::Debug,
    ];

    /// Canonical lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            Level::Print => "print",
            Level::Silent => "silent",
            Level::Fatal => "fatal",
            Level::Error => "error",
            Level::Warning => "warning",
            Level::Info => "info",
            Level::Debug => "debug",
        }
    }

    /// Default three-letter label rendered in front of the message.
    pub fn label(&self) -> Option<&'static str> {
        match self {
            Level::Fatal => Some("FTL"),
            Level::Error => Some("ERR"),
            Level::Warning => Some("WRN"),
            Level::Info => Some("INF"),
            Level::Debug => Some("DBG"),
            Level::Print | Level::Silent => None,
        }
    }

    /// Whether an event at this level passes a logger whose threshold is `max_level`.
    #[inline]
    pub fn is_enabled(&self, max_level: Level) -> bool {
        *self != Level::Silent && *self <= max_level
    }

    /// Error and fatal output goes to the error stream.
    #[inline]
    pub fn is_error_stream(&self) -> bool {
        matches!(self, Level::Error | Level::Fatal)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Level {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "silent" => Ok(Level::Silent),
            "fatal" => Ok(Level::Fatal),
            "error" => Ok(Level::Error),
            "warn" | "warning" => Ok(Level::Warning),
            "info" => Ok(Level::Info),
            "debug" => Ok(Level::Debug),
            _ => Err(LoggerError::invalid_level(s)),
        }
    }
}
