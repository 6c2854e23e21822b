//! Trace sinks.
//!
//! The simulator appends ordered, complete lines to a caller-supplied sink
//! and performs no I/O setup of its own. Acquiring the destination (opening
//! a file, locking stdout) is the caller's responsibility, and a failed
//! acquisition must be treated as fatal to the session before any trace is
//! produced.

use std::io::Write;

use crate::common::SimError;

/// Ordered text-line sink for trace output.
pub trait TraceSink {
    /// Appends one line (without trailing newline) to the sink.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Sink`] if the underlying destination rejects the
    /// write.
    fn append(&mut self, line: &str) -> Result<(), SimError>;
}

/// In-memory sink collecting lines in append order.
///
/// Used by tests and by programmatic callers that post-process the trace.
#[derive(Debug, Default)]
pub struct BufferSink {
    lines: Vec<String>,
}

impl BufferSink {
    /// Creates an empty buffer sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collected lines, in append order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The whole trace as one string, each line newline-terminated.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}

impl TraceSink for BufferSink {
    fn append(&mut self, line: &str) -> Result<(), SimError> {
        self.lines.push(line.to_owned());
        Ok(())
    }
}

/// Sink writing newline-terminated lines to any [`Write`] destination.
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    out: W,
}

impl<W: Write> WriterSink<W> {
    /// Wraps an already-acquired writer (file, stdout, pipe).
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consumes the sink, handing back the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> TraceSink for WriterSink<W> {
    fn append(&mut self, line: &str) -> Result<(), SimError> {
        writeln!(self.out, "{line}")?;
        Ok(())
    }
}
