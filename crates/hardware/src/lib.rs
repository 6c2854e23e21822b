//! Booth radix-2 multiplier simulator library.
//!
//! This crate implements a cycle-accurate simulator of the 32-bit Booth radix-2
//! signed multiplication algorithm with the following:
//! 1. **Core:** Booth recoding, the two-part product register, and the fixed 32-cycle multiply loop.
//! 2. **Trace:** Fixed-width trace line formatting and the output sink abstraction.
//! 3. **Simulation:** A session driver threading one cycle counter across successive runs.
//! 4. **Configuration:** Scenario descriptions (header, starting cycle, operand pairs).
//! 5. **Statistics:** Run, cycle, and operation-mix counters with report printing.

/// Common types (product register, error definitions).
pub mod common;
/// Scenario configuration (defaults, built-in driver scenarios, JSON loading).
pub mod config;
/// Multiplier core (Booth recoding and the cycle loop).
pub mod core;
/// Session driver threading the cycle counter across runs.
pub mod sim;
/// Simulation statistics collection and reporting.
pub mod stats;
/// Trace line formatting and output sinks.
pub mod trace;

/// Scenario description; use `ScenarioConfig::default()` or deserialize from JSON.
pub use crate::config::ScenarioConfig;
/// Main multiplier type; one `run` produces a complete 34-line trace.
pub use crate::core::BoothMultiplier;
/// Session driver; owns the sink and the shared cycle counter.
pub use crate::sim::Session;
