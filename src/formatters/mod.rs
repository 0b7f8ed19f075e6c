//! Formatter implementations

pub mod cli;

pub use cli::{CliFormatter, CliFormatterOptions};

pub use crate::core::Formatter;
