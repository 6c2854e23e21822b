//! Session driver: owns the sink and the shared cycle counter.
//!
//! The driver discipline matches the reference programs: one header line,
//! then runs back to back with the counter bumped by exactly one between
//! them, so run N+1's load line lands one cycle after run N's final line.
//! The counter is explicit state owned here and threaded into the core by
//! mutable reference, never hidden globals.

use crate::common::SimError;
use crate::core::multiplier::{BoothMultiplier, RunResult};
use crate::stats::SimStats;
use crate::trace::TraceSink;

/// Driver for a sequence of multiplication runs sharing one cycle counter.
#[derive(Debug)]
pub struct Session<S: TraceSink> {
    sink: S,
    cycle: u64,
    started: bool,
    stats: SimStats,
}

impl<S: TraceSink> Session<S> {
    /// Opens a session: writes the header line and arms the cycle counter.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Sink`] if the header cannot be written. A session
    /// that failed to open has produced no valid trace.
    pub fn open(mut sink: S, header: &str, start_cycle: u64) -> Result<Self, SimError> {
        sink.append(header)?;
        tracing::debug!(header, start_cycle, "session opened");
        Ok(Self {
            sink,
            cycle: start_cycle,
            started: false,
            stats: SimStats::default(),
        })
    }

    /// Runs one multiplication, continuing the session's cycle numbering.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Sink`] if any trace line cannot be written.
    pub fn run(&mut self, multiplier: i32, multiplicand: i32) -> Result<RunResult, SimError> {
        if self.started {
            // One-cycle gap between runs, as the reference drivers insert.
            self.cycle += 1;
        }
        self.started = true;

        let result =
            BoothMultiplier::run(multiplier, multiplicand, &mut self.cycle, &mut self.sink)?;
        self.stats.record(&result);
        Ok(result)
    }

    /// Runs every pair in order, collecting the per-run results.
    ///
    /// # Errors
    ///
    /// Returns the first sink failure; earlier runs' trace lines have
    /// already been emitted and the session is no longer valid.
    pub fn run_all(&mut self, pairs: &[(i32, i32)]) -> Result<Vec<RunResult>, SimError> {
        let mut results = Vec::with_capacity(pairs.len());
        for &(multiplier, multiplicand) in pairs {
            results.push(self.run(multiplier, multiplicand)?);
        }
        Ok(results)
    }

    /// Current cycle counter value.
    pub fn cycle(&self) -> u64 {
        self.cycle
    }

    /// Statistics accumulated so far.
    pub fn stats(&self) -> &SimStats {
        &self.stats
    }

    /// Ends the session, handing back the sink.
    pub fn into_sink(self) -> S {
        self.sink
    }
}
