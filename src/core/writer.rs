//! Writer trait for log output destinations

use super::log_level::Level;

/// Delivers one formatted line to an output stream.
///
/// Implementations append the newline themselves, choose the stream from
/// `level`, and swallow I/O failures: logging never reports errors back to
/// the caller.
pub trait Writer: Send + Sync {
    fn write(&self, data: &[u8], level: Level);
}
