//! Scenario configuration.
//!
//! A scenario describes one driver session: the header line written before
//! the first run, the starting value of the shared cycle counter, and the
//! operand pairs to multiply in order. Scenarios are plain serde structures
//! so graders can describe sessions in JSON without recompiling; the two
//! built-in scenarios mirror the reference driver programs.

use serde::{Deserialize, Serialize};

use crate::common::SimError;

/// One driver session: header, starting cycle, and operand pairs.
///
/// `Default` is the two-run [`Self::swsim1`] scenario.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct ScenarioConfig {
    /// Session header line written before the first run.
    pub header: String,
    /// Starting value of the shared cycle counter.
    pub start_cycle: u64,
    /// `(multiplier, multiplicand)` pairs, run in order.
    pub pairs: Vec<(i32, i32)>,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self::swsim1()
    }
}

impl ScenarioConfig {
    /// The two-run driver scenario: `-8 * -2`, then `5 * 4`.
    pub fn swsim1() -> Self {
        Self {
            header: "Software Simulation Trace 1".to_owned(),
            start_cycle: 0,
            pairs: vec![(-8, -2), (5, 4)],
        }
    }

    /// The nine-run driver scenario: the two `swsim1` pairs plus the signed
    /// extremes and the zero/minus-one corner cases.
    pub fn swsim2() -> Self {
        Self {
            header: "Software Simulation Trace 2".to_owned(),
            start_cycle: 0,
            pairs: vec![
                (-8, -2),
                (5, 4),
                (i32::MAX, i32::MAX),
                (i32::MIN, i32::MIN),
                (i32::MAX, i32::MIN),
                (i32::MIN, i32::MAX),
                (0, -1),
                (-1, 0),
                (-1, -1),
            ],
        }
    }

    /// Parses a scenario from its JSON description.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Scenario`] if the JSON is malformed or a field
    /// has the wrong shape.
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        Ok(serde_json::from_str(json)?)
    }
}
