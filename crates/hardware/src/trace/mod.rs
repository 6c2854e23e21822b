//! Trace output.
//!
//! Everything the simulator says to the outside world goes through this
//! module. It provides:
//! 1. **Formatting:** The fixed-width load/step/final line builders. Field
//!    widths are byte-exact for compatibility with existing trace consumers.
//! 2. **Sinks:** The [`TraceSink`] abstraction plus an in-memory buffer sink
//!    and a writer-backed sink for files and stdout.

/// Fixed-width trace line formatting.
pub mod format;

/// Trace sink trait and implementations.
pub mod sink;

pub use sink::{BufferSink, TraceSink, WriterSink};
