//! Simulator error definitions.
//!
//! The multiply loop itself cannot fail: every signed 32-bit operand pair is
//! valid, and two's-complement wraparound during add/subtract is normal
//! behavior, not an error. Failures come only from the edges of the system,
//! the trace sink and scenario parsing, and both are fatal to the session
//! that hit them: a trace interrupted by a failed write is not valid.

use thiserror::Error;

/// Errors surfaced by the simulator library.
#[derive(Debug, Error)]
pub enum SimError {
    /// The trace sink rejected a write. No partial trace is valid past the
    /// failed line.
    #[error("trace sink unavailable: {0}")]
    Sink(#[from] std::io::Error),

    /// A scenario description failed to parse.
    #[error("invalid scenario: {0}")]
    Scenario(#[from] serde_json::Error),
}
