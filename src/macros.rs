//! Logging macros for ergonomic log message formatting.
//!
//! Each macro builds an event at its level and finishes it with `msgf`, so
//! arguments are only formatted when the event passes the logger's level
//! gate. Without a `logger:` prefix the process default logger is used.
//!
//! # Examples
//!
//! ```
//! use cli_logger::prelude::*;
//! use cli_logger::{info, warning};
//!
//! let logger = Logger::builder().writer(BufferWriter::new()).build();
//!
//! // Default logger
//! info!("Server started");
//!
//! // Explicit logger with format arguments
//! let port = 8080;
//! warning!(logger: logger, "Port {} already bound, retrying", port);
//! ```

/// Log a message at an explicit level.
///
/// # Examples
///
/// ```
/// # use cli_logger::prelude::*;
/// use cli_logger::log;
/// log!(Level::Info, "Simple message");
/// log!(Level::Debug, "Value: {}", 42);
/// ```
#[macro_export]
macro_rules! log {
    (logger: $logger:expr, $level:expr, $($arg:tt)+) => {
        $crate::Event::new(&$logger, $level).msgf(format_args!($($arg)+))
    };
    ($level:expr, $($arg:tt)+) => {
        $crate::Event::new($crate::default_logger(), $level).msgf(format_args!($($arg)+))
    };
}

/// Log a debug-level message.
///
/// ```
/// # use cli_logger::prelude::*;
/// use cli_logger::debug;
/// debug!("Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    (logger: $logger:expr, $($arg:tt)+) => {
        $logger.debug().msgf(format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::debug().msgf(format_args!($($arg)+))
    };
}

/// Log an info-level message.
///
/// ```
/// # use cli_logger::prelude::*;
/// use cli_logger::info;
/// info!("User {} logged in", 42);
/// ```
#[macro_export]
macro_rules! info {
    (logger: $logger:expr, $($arg:tt)+) => {
        $logger.info().msgf(format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::info().msgf(format_args!($($arg)+))
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warning {
    (logger: $logger:expr, $($arg:tt)+) => {
        $logger.warning().msgf(format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::warning().msgf(format_args!($($arg)+))
    };
}

/// Log an error-level message.
///
/// ```
/// # use cli_logger::prelude::*;
/// use cli_logger::error;
/// error!("Failed to open {}: {}", "config.toml", "not found");
/// ```
#[macro_export]
macro_rules! error {
    (logger: $logger:expr, $($arg:tt)+) => {
        $logger.error().msgf(format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::error().msgf(format_args!($($arg)+))
    };
}

/// Log a fatal-level message, then exit the process.
#[macro_export]
macro_rules! fatal {
    (logger: $logger:expr, $($arg:tt)+) => {
        $logger.fatal().msgf(format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::fatal().msgf(format_args!($($arg)+))
    };
}
