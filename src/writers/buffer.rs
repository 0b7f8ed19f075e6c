//! In-memory writer for capturing log output

use super::console::write_line;
use crate::core::{Level, LoggerError, Result, Writer};
use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Debug, Default)]
struct Streams {
    out: Vec<u8>,
    err: Vec<u8>,
}

/// Captures lines in two in-memory streams with the same routing as
/// [`ConsoleWriter`](super::ConsoleWriter): `error` and `fatal` go to the
/// error stream, everything else to the output stream.
///
/// Clones share the same buffers, so a clone can be handed to a logger while
/// the original is kept for inspection.
///
/// # Example
///
/// ```
/// use cli_logger::prelude::*;
///
/// let writer = BufferWriter::new();
/// writer.write(b"oops", Level::Error);
/// assert_eq!(writer.stderr_string(), "oops\n");
/// assert_eq!(writer.stdout_string(), "");
/// ```
#[derive(Debug, Clone, Default)]
pub struct BufferWriter {
    streams: Arc<Mutex<Streams>>,
}

impl BufferWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stdout_bytes(&self) -> Vec<u8> {
        self.streams.lock().out.clone()
    }

    pub fn stderr_bytes(&self) -> Vec<u8> {
        self.streams.lock().err.clone()
    }

    /// Output stream contents, with invalid UTF-8 replaced.
    pub fn stdout_string(&self) -> String {
        String::from_utf8_lossy(&self.streams.lock().out).into_owned()
    }

    /// Error stream contents, with invalid UTF-8 replaced.
    pub fn stderr_string(&self) -> String {
        String::from_utf8_lossy(&self.streams.lock().err).into_owned()
    }

    /// Output stream contents, failing on invalid UTF-8.
    pub fn try_stdout_string(&self) -> Result<String> {
        Self::decode("stdout", self.stdout_bytes())
    }

    /// Error stream contents, failing on invalid UTF-8.
    pub fn try_stderr_string(&self) -> Result<String> {
        Self::decode("stderr", self.stderr_bytes())
    }

    pub fn is_empty(&self) -> bool {
        let streams = self.streams.lock();
        streams.out.is_empty() && streams.err.is_empty()
    }

    pub fn clear(&self) {
        let mut streams = self.streams.lock();
        streams.out.clear();
        streams.err.clear();
    }

    fn decode(stream: &str, bytes: Vec<u8>) -> Result<String> {
        String::from_utf8(bytes)
            .map_err(|e| LoggerError::writer(format!("{} is not valid UTF-8: {}", stream, e)))
    }
}

impl Writer for BufferWriter {
    fn write(&self, data: &[u8], level: Level) {
        let mut streams = self.streams.lock();
        let target = if level.is_error_stream() {
            &mut streams.err
        } else {
            &mut streams.out
        };
        let _ = write_line(target, data);
    }
}
