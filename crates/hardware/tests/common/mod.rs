//! Shared test helpers.

use booth_core::core::multiplier::{BoothMultiplier, RunResult};
use booth_core::trace::BufferSink;

/// Runs one multiplication against a fresh buffer sink, returning the
/// captured lines and the run outcome.
pub fn run_capture(multiplier: i32, multiplicand: i32, start_cycle: u64) -> (Vec<String>, RunResult) {
    let mut sink = BufferSink::new();
    let mut cycle = start_cycle;
    let result = BoothMultiplier::run(multiplier, multiplicand, &mut cycle, &mut sink)
        .expect("buffer sink never fails");
    (sink.lines().to_vec(), result)
}

/// Strips the leading `Cycle:<n>` field, leaving the cycle-independent rest
/// of the line.
pub fn strip_cycle(line: &str) -> &str {
    line.split_once(" | ").map_or(line, |(_, rest)| rest)
}
