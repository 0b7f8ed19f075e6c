//! Log entry structure

use super::log_level::Level;
use std::collections::HashMap;

/// Metadata key whose value is rendered as the bracketed prefix.
pub const LABEL_KEY: &str = "label";

/// A fully built log event handed to a [`Formatter`](super::Formatter).
///
/// The `label` metadata entry is reserved: formatters render it in front of
/// the message and never as a trailing `key=value` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub level: Level,
    pub message: String,
    pub metadata: HashMap<String, String>,
}

impl LogEntry {
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            metadata: HashMap::new(),
        }
    }

    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// The label, if one is set and non-empty.
    pub fn label(&self) -> Option<&str> {
        self.metadata
            .get(LABEL_KEY)
            .map(String::as_str)
            .filter(|label| !label.is_empty())
    }

    /// Metadata entries other than the label, in unspecified order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.metadata
            .iter()
            .filter(|(key, _)| key.as_str() != LABEL_KEY)
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

/// Remove at most one trailing `\n`.
pub(crate) fn trim_trailing_newline(message: &mut String) {
    if message.ends_with('\n') {
        message.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_lookup() {
        let entry = LogEntry::new(Level::Info, "hi").with_field(LABEL_KEY, "INF");
        assert_eq!(entry.label(), Some("INF"));

        let entry = LogEntry::new(Level::Info, "hi").with_field(LABEL_KEY, "");
        assert_eq!(entry.label(), None);

        assert_eq!(LogEntry::new(Level::Print, "hi").label(), None);
    }

    #[test]
    fn test_fields_skip_label() {
        let entry = LogEntry::new(Level::Info, "hi")
            .with_field(LABEL_KEY, "X")
            .with_field("a", "1");
        let fields: Vec<_> = entry.fields().collect();
        assert_eq!(fields, vec![("a", "1")]);
    }

    #[test]
    fn test_trim_single_newline() {
        let mut message = String::from("hello\n\n");
        trim_trailing_newline(&mut message);
        assert_eq!(message, "hello\n");
        trim_trailing_newline(&mut message);
        assert_eq!(message, "hello");
        trim_trailing_newline(&mut message);
        assert_eq!(message, "hello");
    }
}
