//! Writable sinks that appenders bind to at activation

use crate::core::{PipelineError, Result};
use std::io::{self, Write};

/// Canonical descriptor for the standard output stream target.
pub const SYSTEM_OUT: &str = "System.out";
/// Canonical descriptor for the standard error stream target.
pub const SYSTEM_ERR: &str = "System.err";

/// An external writable resource an appender writes rendered text to.
///
/// A sink is acquired during activation and released at finalization; the
/// pipeline treats its write/flush behavior as synchronous and bounded.
pub trait Sink: Send + Sync {
    fn write_str(&mut self, text: &str) -> Result<()>;
    fn flush(&mut self) -> Result<()>;

    /// Release the underlying resource. Process-stream sinks only flush.
    fn close(&mut self) -> Result<()>;

    /// Descriptor identifying the bound resource, e.g. `System.out`.
    fn target(&self) -> &str;
}

/// Sink over the process standard output stream.
pub struct StdoutSink {
    stream: io::Stdout,
}

impl StdoutSink {
    pub fn new() -> Self {
        Self {
            stream: io::stdout(),
        }
    }
}

impl Default for StdoutSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for StdoutSink {
    fn write_str(&mut self, text: &str) -> Result<()> {
        self.stream.lock().write_all(text.as_bytes())?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.stream.lock().flush()?;
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        self.flush()
    }

    fn target(&self) -> &str {
        SYSTEM_OUT
    }
}

/// Sink over the process standard error stream.
pub struct StderrSink {
    stream: io::Stderr,
}

impl StderrSink {
    pub fn new() -> Self {
        Self {
            stream: io::stderr(),
        }
    }
}

impl Default for StderrSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for StderrSink {
    fn write_str(&mut self, text: &str) -> Result<()> {
        self.stream.lock().write_all(text.as_bytes())?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.stream.lock().flush()?;
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        self.flush()
    }

    fn target(&self) -> &str {
        SYSTEM_ERR
    }
}

/// Adapter turning any writer into a sink.
///
/// Covers file-backed targets and in-memory buffers in tests; the writer is
/// dropped on `close`, after a final flush, and subsequent writes fail with a
/// sink error rather than touching a released resource.
pub struct WriterSink<W: Write + Send + Sync> {
    writer: Option<W>,
    target: String,
}

impl<W: Write + Send + Sync> WriterSink<W> {
    pub fn new(writer: W, target: impl Into<String>) -> Self {
        Self {
            writer: Some(writer),
            target: target.into(),
        }
    }
}

impl<W: Write + Send + Sync> Sink for WriterSink<W> {
    fn write_str(&mut self, text: &str) -> Result<()> {
        let writer = self
            .writer
            .as_mut()
            .ok_or_else(|| PipelineError::sink(&self.target, "sink is closed"))?;
        writer.write_all(text.as_bytes())?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        if let Some(writer) = self.writer.as_mut() {
            writer.flush()?;
        }
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        if let Some(mut writer) = self.writer.take() {
            writer.flush()?;
        }
        Ok(())
    }

    fn target(&self) -> &str {
        &self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writer_sink_round_trip() {
        let mut sink = WriterSink::new(Vec::new(), "buffer");
        sink.write_str("hello ").unwrap();
        sink.write_str("world").unwrap();
        sink.flush().unwrap();
        assert_eq!(sink.writer.as_ref().unwrap(), b"hello world");
    }

    #[test]
    fn test_writer_sink_rejects_writes_after_close() {
        let mut sink = WriterSink::new(Vec::new(), "buffer");
        sink.close().unwrap();
        let err = sink.write_str("late").unwrap_err();
        assert!(err.to_string().contains("closed"));
    }

    #[test]
    fn test_target_descriptors() {
        assert_eq!(StdoutSink::new().target(), SYSTEM_OUT);
        assert_eq!(StderrSink::new().target(), SYSTEM_ERR);
        assert_eq!(WriterSink::new(Vec::new(), "app.log").target(), "app.log");
    }
}
