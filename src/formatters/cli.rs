//! Human-readable formatter for terminal output
//!
//! Renders `[label] message key=value key=value`. With colorization on, the
//! label is bold and colored by level and metadata keys are bold.

use crate::core::{Formatter, Level, LogEntry, Result};
#[cfg(feature = "console")]
use colored::Colorize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CliFormatterOptions {
    pub colorize: bool,
}

/// Formatter for command line output.
///
/// Decoration is fixed when the formatter is built and belongs to this
/// instance only. Without the `console` feature output is always plain.
#[derive(Debug, Clone, Default)]
pub struct CliFormatter {
    colorize: bool,
}

impl CliFormatter {
    pub fn new(options: CliFormatterOptions) -> Self {
        Self {
            colorize: options.colorize,
        }
    }

    pub fn colorize(&self) -> bool {
        self.colorize
    }

    fn decorate_label(&self, label: &str, level: Level) -> String {
        if self.colorize {
            paint_label(label, level)
        } else {
            label.to_string()
        }
    }

    fn decorate_key(&self, key: &str) -> String {
        if self.colorize {
            paint_key(key)
        } else {
            key.to_string()
        }
    }
}

#[cfg(feature = "console")]
fn paint_label(label: &str, level: Level) -> String {
    let colored = match level {
        Level::Fatal | Level::Error => label.bright_red(),
        Level::Warning => label.bright_yellow(),
        Level::Info => label.bright_blue(),
        Level::Debug => label.bright_magenta(),
        Level::Silent | Level::Print => return label.to_string(),
    };
    colored.bold().to_string()
}

#[cfg(feature = "console")]
fn paint_key(key: &str) -> String {
    key.bold().to_string()
}

#[cfg(not(feature = "console"))]
fn paint_label(label: &str, _level: Level) -> String {
    label.to_string()
}

#[cfg(not(feature = "console"))]
fn paint_key(key: &str) -> String {
    key.to_string()
}

impl Formatter for CliFormatter {
    fn format(&self, entry: &LogEntry) -> Result<Vec<u8>> {
        let mut line = String::with_capacity(entry.message.len() + 16);

        if let Some(label) = entry.label() {
            line.push('[');
            line.push_str(&self.decorate_label(label, entry.level));
            line.push_str("] ");
        }
        line.push_str(&entry.message);

        for (key, value) in entry.fields() {
            line.push(' ');
            line.push_str(&self.decorate_key(key));
            line.push('=');
            line.push_str(value);
        }

        Ok(line.into_bytes())
    }
}
