//! Per-command outcomes and the [`ExecutionSummary`] tally.

use std::fmt;

/// Classification of a single command after it has been interpreted.
///
/// Blocked and invalid are first-class results, not errors: they never
/// interrupt processing of the remaining sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The command was applied and changed probe state.
    Executed,
    /// A move was refused by the grid (bounds or obstacle); no state change.
    Blocked,
    /// The token was absent, blank, or unrecognized; the probe was untouched.
    Invalid,
}

/// Tally of command outcomes for one interpreted sequence.
///
/// Every consumed token increments exactly one counter, so
/// `total()` always equals the length of the sequence.
///
/// # Examples
///
/// ```
/// use sonde_core::{ExecutionSummary, Outcome};
///
/// let mut summary = ExecutionSummary::default();
/// summary.record(Outcome::Executed);
/// summary.record(Outcome::Blocked);
/// assert_eq!(summary.executed, 1);
/// assert_eq!(summary.blocked, 1);
/// assert_eq!(summary.invalid, 0);
/// assert_eq!(summary.total(), 2);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExecutionSummary {
    /// Commands applied successfully (all turns, unobstructed moves).
    pub executed: u32,
    /// Moves refused by grid bounds or an obstacle.
    pub blocked: u32,
    /// Tokens that were not one of the four recognized commands.
    pub invalid: u32,
}

impl ExecutionSummary {
    /// A zeroed summary, identical to `Default` but usable in `const` context.
    pub const ZERO: Self = Self {
        executed: 0,
        blocked: 0,
        invalid: 0,
    };

    /// Increment the counter matching `outcome`.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Executed => self.executed += 1,
            Outcome::Blocked => self.blocked += 1,
            Outcome::Invalid => self.invalid += 1,
        }
    }

    /// Total number of tokens consumed.
    pub const fn total(&self) -> u32 {
        self.executed + self.blocked + self.invalid
    }
}

impl fmt::Display for ExecutionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "executed={} blocked={} invalid={}",
            self.executed, self.blocked, self.invalid
        )
    }
}
