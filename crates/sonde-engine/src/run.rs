//! Stateless execution: grid, probe, and commands submitted together.

use crate::error::EngineError;
use crate::interpreter::apply_commands;
use crate::probe::Probe;
use sonde_core::{Coordinate, Direction, ExecutionSummary};
use sonde_grid::Grid;

/// Input for a single stateless [`run`] call.
///
/// Everything needed for one complete simulation: grid dimensions,
/// obstacle cells, start pose, and the raw command tokens.
#[derive(Debug, Clone)]
pub struct RunSpec {
    /// Grid width (columns).
    pub width: u32,
    /// Grid height (rows).
    pub height: u32,
    /// Obstacle cells. Duplicates are collapsed; cells outside the grid
    /// are inert.
    pub obstacles: Vec<Coordinate>,
    /// Start position.
    pub start: Coordinate,
    /// Initial heading.
    pub direction: Direction,
    /// Raw command tokens, in order. `None` models an absent entry.
    pub commands: Vec<Option<String>>,
}

/// Final probe state and outcome tally from a [`run`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Final position.
    pub position: Coordinate,
    /// Final heading.
    pub direction: Direction,
    /// Every position occupied, in order, starting with the start cell.
    pub visited: Vec<Coordinate>,
    /// Per-command outcome tally for the whole sequence.
    pub summary: ExecutionSummary,
}

/// Run a complete simulation to completion on the calling thread.
///
/// Builds the grid, inserts the obstacles, places the probe, and
/// interprets every command in order. Construction failures abort the
/// run with nothing partially applied; blocked and invalid commands are
/// data in the report, never errors.
///
/// # Examples
///
/// ```
/// use sonde_core::{Coordinate, Direction};
/// use sonde_engine::{run, RunSpec};
///
/// let report = run(RunSpec {
///     width: 3,
///     height: 3,
///     obstacles: vec![],
///     start: Coordinate::new(0, 0),
///     direction: Direction::North,
///     commands: vec![Some("F".into()), Some("R".into()), Some("F".into())],
/// })
/// .unwrap();
///
/// assert_eq!(report.position, Coordinate::new(1, 1));
/// assert_eq!(report.direction, Direction::East);
/// assert_eq!(report.visited.len(), 3);
/// ```
///
/// # Errors
///
/// Returns [`EngineError::Grid`] for a degenerate grid and
/// [`EngineError::Probe`] for an inadmissible start cell.
pub fn run(spec: RunSpec) -> Result<RunReport, EngineError> {
    let mut grid = Grid::new(spec.width, spec.height)?;
    for obstacle in spec.obstacles {
        grid.add_obstacle(obstacle);
    }
    let mut probe = Probe::new(grid, spec.start, spec.direction)?;
    let summary = apply_commands(&mut probe, spec.commands);
    Ok(RunReport {
        position: probe.position(),
        direction: probe.direction(),
        visited: probe.visited().to_vec(),
        summary,
    })
}
