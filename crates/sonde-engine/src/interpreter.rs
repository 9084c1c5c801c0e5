//! The command interpreter: raw token stream in, outcome tally out.

use crate::probe::Probe;
use sonde_core::{Command, ExecutionSummary, Outcome};

/// Apply a sequence of raw command tokens to `probe`, in order.
///
/// Each token is decoded with [`Command::parse`] and classified:
///
/// - `L` / `R` always execute (turning never fails);
/// - `F` / `B` execute or block according to the grid;
/// - absent, blank, or unrecognized tokens are invalid and leave the
///   probe untouched.
///
/// The entire sequence is consumed — blocked and invalid tokens never
/// short-circuit — and the outcome of one command can change whether the
/// next succeeds (a turn redirects "forward"). The returned summary
/// satisfies `total() == number of tokens`.
///
/// # Examples
///
/// ```
/// use sonde_core::{Coordinate, Direction};
/// use sonde_engine::{apply_commands, Probe};
/// use sonde_grid::Grid;
///
/// let grid = Grid::new(3, 3).unwrap();
/// let mut probe = Probe::new(grid, Coordinate::new(0, 0), Direction::North).unwrap();
///
/// let summary = apply_commands(&mut probe, [Some("F"), Some("R"), Some("F")]);
/// assert_eq!(probe.position(), Coordinate::new(1, 1));
/// assert_eq!(probe.direction(), Direction::East);
/// assert_eq!((summary.executed, summary.blocked, summary.invalid), (3, 0, 0));
/// ```
pub fn apply_commands<I, S>(probe: &mut Probe, commands: I) -> ExecutionSummary
where
    I: IntoIterator<Item = Option<S>>,
    S: AsRef<str>,
{
    let mut summary = ExecutionSummary::default();
    for raw in commands {
        let token = raw.as_ref().map(AsRef::as_ref);
        let outcome = match Command::parse(token) {
            Command::TurnLeft => {
                probe.turn_left();
                Outcome::Executed
            }
            Command::TurnRight => {
                probe.turn_right();
                Outcome::Executed
            }
            Command::Forward => move_outcome(probe.move_forward().is_executed()),
            Command::Backward => move_outcome(probe.move_backward().is_executed()),
            Command::Invalid => Outcome::Invalid,
        };
        summary.record(outcome);
    }
    summary
}

fn move_outcome(executed: bool) -> Outcome {
    if executed {
        Outcome::Executed
    } else {
        Outcome::Blocked
    }
}
