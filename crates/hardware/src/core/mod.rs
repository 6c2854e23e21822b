//! Multiplier core.
//!
//! This module implements the cycle-accurate Booth radix-2 multiply loop.
//! It is organized into two submodules:
//! - [`recode`]: the Booth operation selector (add, sub, nop) and mnemonics.
//! - [`multiplier`]: the fixed 32-cycle loop over the product register.

/// The 32-cycle multiply loop.
pub mod multiplier;

/// Booth recoding: bit-pair to operation selection.
pub mod recode;

pub use multiplier::{BoothMultiplier, OPERAND_BITS, RunResult};
pub use recode::BoothOp;
