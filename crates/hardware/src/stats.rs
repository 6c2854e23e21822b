//! Simulation statistics collection and reporting.
//!
//! This module tracks counters across the runs of one session:
//! 1. **Runs and cycles:** Completed multiplications and total cycles consumed.
//! 2. **Operation mix:** Counts by Booth operation (add, sub, nop).

use crate::core::multiplier::{OPERAND_BITS, RunResult};

/// Statistics accumulated across the runs of one session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SimStats {
    /// Multiplication runs completed.
    pub runs: u64,
    /// Total cycles consumed by completed runs.
    pub cycles: u64,
    /// Cycles that added the multiplicand.
    pub op_add: u64,
    /// Cycles that subtracted the multiplicand.
    pub op_sub: u64,
    /// Cycles that left the accumulator unchanged.
    pub op_nop: u64,
}

impl SimStats {
    /// Folds one run's outcome into the totals.
    pub fn record(&mut self, result: &RunResult) {
        self.runs += 1;
        self.cycles += u64::from(OPERAND_BITS);
        self.op_add += result.adds;
        self.op_sub += result.subs;
        self.op_nop += result.nops;
    }

    /// Prints the session report to stdout.
    pub fn print(&self) {
        // Guard against a session with no completed runs.
        let cyc = if self.cycles == 0 { 1 } else { self.cycles };
        let pct = |n: u64| (n as f64 / cyc as f64) * 100.0;

        println!("\n==========================================================");
        println!("BOOTH MULTIPLIER SIMULATION STATISTICS");
        println!("==========================================================");
        println!("sim_runs                 {}", self.runs);
        println!("sim_cycles               {}", self.cycles);
        println!("----------------------------------------------------------");
        println!("OPERATION MIX");
        println!("  ops.add                {} ({:.2}%)", self.op_add, pct(self.op_add));
        println!("  ops.sub                {} ({:.2}%)", self.op_sub, pct(self.op_sub));
        println!("  ops.nop                {} ({:.2}%)", self.op_nop, pct(self.op_nop));
        println!("----------------------------------------------------------");
    }
}
