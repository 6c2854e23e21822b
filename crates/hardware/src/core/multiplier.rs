//! The 32-cycle multiply loop.
//!
//! One run multiplies two signed 32-bit operands through Booth recoding,
//! emitting a deterministic trace: one load line, 32 step lines, and one
//! final line carrying the signed 64-bit product. The cycle counter is
//! threaded in by the caller and advanced by exactly 32 per run, so a
//! session can keep continuous cycle numbering across runs.

use crate::common::{ProductRegister, SimError};
use crate::core::recode::BoothOp;
use crate::trace::format;
use crate::trace::TraceSink;

/// Operand width in bits; also the fixed iteration count of one run.
pub const OPERAND_BITS: u32 = 32;

/// Outcome of one multiplication run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunResult {
    /// Final 64-bit product register contents.
    pub bits: u64,
    /// The same bits as a signed 64-bit integer: the exact product of the
    /// two operands.
    pub product: i64,
    /// Cycles that added the multiplicand (bit pair `01`).
    pub adds: u64,
    /// Cycles that subtracted the multiplicand (bit pair `10`).
    pub subs: u64,
    /// Cycles that left the accumulator unchanged (bit pairs `00`/`11`).
    pub nops: u64,
}

/// Cycle-accurate Booth radix-2 multiplier.
pub struct BoothMultiplier;

impl BoothMultiplier {
    /// Runs one multiplication, appending its trace to `sink`.
    ///
    /// Emits exactly 34 lines. The load line and step 0 share the starting
    /// cycle number; the final line lands at `start + 32`. Every step line
    /// snapshots the register after the cycle's add/subtract and before its
    /// shift.
    ///
    /// All operand values are valid, including the signed extremes and zero;
    /// wraparound is governed by two's complement, never reported as an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Sink`] if the sink rejects a line. The trace is
    /// not valid past the failed write.
    pub fn run(
        multiplier: i32,
        multiplicand: i32,
        cycle: &mut u64,
        sink: &mut dyn TraceSink,
    ) -> Result<RunResult, SimError> {
        tracing::debug!(multiplier, multiplicand, start_cycle = *cycle, "run start");
        sink.append(&format::load_line(*cycle, multiplier, multiplicand))?;

        let mut reg = ProductRegister::load(multiplier);
        // There is no multiplier bit below the LSB, so the recoding bit
        // starts clear.
        let mut right = false;
        let (mut adds, mut subs, mut nops) = (0u64, 0u64, 0u64);

        for count in 0..OPERAND_BITS {
            // The recoding inputs are read before any mutation this cycle.
            let left = reg.lsb();
            let op = BoothOp::select(left, right);
            match op {
                BoothOp::Add => {
                    reg.add(multiplicand);
                    adds += 1;
                }
                BoothOp::Sub => {
                    reg.sub(multiplicand);
                    subs += 1;
                }
                BoothOp::Nop => nops += 1,
            }

            // Snapshot after the add/sub, before the shift.
            sink.append(&format::step_line(*cycle, count, op, reg.to_bits()))?;

            reg.shift_right();
            right = left;
            *cycle += 1;
        }

        let bits = reg.to_bits();
        sink.append(&format::final_line(*cycle, bits))?;

        let product = bits as i64;
        tracing::debug!(product, end_cycle = *cycle, "run done");
        Ok(RunResult {
            bits,
            product,
            adds,
            subs,
            nops,
        })
    }
}
