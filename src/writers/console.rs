//! Console writer implementation

use crate::core::{Level, Result, Writer};
use parking_lot::Mutex;
use std::fmt;
use std::io::{self, Write};

type Stream = Box<dyn Write + Send>;

struct Streams {
    out: Stream,
    err: Stream,
}

/// Writes lines to stdout, or to stderr for `error` and `fatal`.
///
/// One mutex per writer guards both streams and serializes whole lines. Two
/// separate `ConsoleWriter`s do not exclude each other even though they share
/// the process streams.
pub struct ConsoleWriter {
    streams: Mutex<Streams>,
}

impl ConsoleWriter {
    pub fn new() -> Self {
        Self::with_streams(io::stdout(), io::stderr())
    }

    /// A console writer over arbitrary output and error streams.
    pub fn with_streams<O, E>(out: O, err: E) -> Self
    where
        O: Write + Send + 'static,
        E: Write + Send + 'static,
    {
        Self {
            streams: Mutex::new(Streams {
                out: Box::new(out),
                err: Box::new(err),
            }),
        }
    }

    /// Like [`Writer::write`] but reports the I/O failure.
    pub fn try_write(&self, data: &[u8], level: Level) -> Result<()> {
        let mut streams = self.streams.lock();

        if level.is_error_stream() {
            write_line(&mut streams.err, data)
        } else {
            write_line(&mut streams.out, data)
        }
    }
}

impl Default for ConsoleWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ConsoleWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleWriter").finish_non_exhaustive()
    }
}

impl Writer for ConsoleWriter {
    fn write(&self, data: &[u8], level: Level) {
        let _ = self.try_write(data, level);
    }
}

/// Write `data` followed by exactly one newline, then flush.
pub(crate) fn write_line<W: Write + ?Sized>(out: &mut W, data: &[u8]) -> Result<()> {
    out.write_all(data)?;
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    /// Accepts one byte per call so unserialized writers would interleave.
    #[derive(Clone, Default)]
    struct TrickleSink {
        bytes: Arc<Mutex<Vec<u8>>>,
    }

    impl Write for TrickleSink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            match buf.first() {
                Some(byte) => {
                    self.bytes.lock().push(*byte);
                    thread::yield_now();
                    Ok(1)
                }
                None => Ok(0),
            }
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl TrickleSink {
        fn contents(&self) -> String {
            String::from_utf8(self.bytes.lock().clone()).unwrap()
        }
    }

    struct BrokenSink;

    impl Write for BrokenSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_line_appends_one_newline() {
        let mut out = Vec::new();
        write_line(&mut out, b"[INF] hello").unwrap();
        assert_eq!(out, b"[INF] hello\n");

        let mut out = Vec::new();
        write_line(&mut out, b"").unwrap();
        assert_eq!(out, b"\n");
    }

    #[test]
    fn test_routing_to_streams() {
        let out = TrickleSink::default();
        let err = TrickleSink::default();
        let writer = ConsoleWriter::with_streams(out.clone(), err.clone());

        writer.write(b"p", Level::Print);
        writer.write(b"i", Level::Info);
        writer.write(b"e", Level::Error);
        writer.write(b"f", Level::Fatal);

        assert_eq!(out.contents(), "p\ni\n");
        assert_eq!(err.contents(), "e\nf\n");
    }

    #[test]
    fn test_concurrent_lines_not_interleaved() {
        const THREADS: usize = 8;
        const PER_THREAD: usize = 50;

        let out = TrickleSink::default();
        let writer = ConsoleWriter::with_streams(out.clone(), io::sink());

        thread::scope(|scope| {
            for t in 0..THREADS {
                let writer = &writer;
                scope.spawn(move || {
                    let line = format!("[DBG] thread-{}", t);
                    for _ in 0..PER_THREAD {
                        writer.write(line.as_bytes(), Level::Debug);
                    }
                });
            }
        });

        let contents = out.contents();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), THREADS * PER_THREAD);
        for t in 0..THREADS {
            let expected = format!("[DBG] thread-{}", t);
            assert_eq!(lines.iter().filter(|l| **l == expected).count(), PER_THREAD);
        }
    }

    #[test]
    fn test_io_failure_reported_by_try_write_only() {
        let writer = ConsoleWriter::with_streams(BrokenSink, io::sink());

        assert!(writer.try_write(b"x", Level::Info).is_err());
        assert!(writer.try_write(b"x", Level::Error).is_ok());
        writer.write(b"x", Level::Info);
    }

    #[test]
    fn test_console_write_does_not_panic() {
        let writer = ConsoleWriter::new();
        writer.write(b"console writer test (stdout)", Level::Info);
        writer.write(b"console writer test (stderr)", Level::Error);
        assert!(writer.try_write(b"console writer test (print)", Level::Print).is_ok());
    }
}
