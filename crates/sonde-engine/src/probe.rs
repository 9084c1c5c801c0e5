//! The [`Probe`] state machine: position, heading, and visited path.

use crate::error::ProbeError;
use sonde_core::{Coordinate, Direction};
use sonde_grid::Grid;

/// Result of a single move attempt.
///
/// A refused move is a self-loop on position, never an error: the probe
/// stays put and the caller tallies the outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The probe stepped to the target cell.
    Executed,
    /// The target cell was refused; position and heading are unchanged.
    Blocked(BlockReason),
}

/// Why a move was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlockReason {
    /// The target cell lies outside the grid.
    OutOfBounds,
    /// The target cell is an obstacle.
    Obstacle,
}

impl MoveOutcome {
    /// Whether this outcome is [`Executed`](Self::Executed).
    pub const fn is_executed(self) -> bool {
        matches!(self, Self::Executed)
    }
}

/// The movable entity of the simulation.
///
/// A probe owns its [`Grid`] and tracks its current position, current
/// heading, and the ordered list of every position it has occupied,
/// seeded with the start cell. Invariants:
///
/// - `visited` is never empty and its last element equals `position`;
/// - `position` is always in bounds and never on an obstacle.
///
/// Moves self-loop on refusal; turns always succeed and never extend
/// the visited path.
///
/// # Examples
///
/// ```
/// use sonde_core::{Coordinate, Direction};
/// use sonde_engine::Probe;
/// use sonde_grid::Grid;
///
/// let grid = Grid::new(3, 3).unwrap();
/// let mut probe = Probe::new(grid, Coordinate::new(0, 0), Direction::North).unwrap();
///
/// assert!(probe.move_forward().is_executed());
/// assert_eq!(probe.position(), Coordinate::new(0, 1));
/// assert_eq!(probe.visited().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Probe {
    grid: Grid,
    position: Coordinate,
    direction: Direction,
    visited: Vec<Coordinate>,
}

impl Probe {
    /// Place a probe on `grid` at `start`, facing `direction`.
    ///
    /// # Errors
    ///
    /// Returns [`ProbeError::StartOutOfBounds`] if `start` lies outside
    /// the grid, or [`ProbeError::StartOnObstacle`] if it coincides with
    /// an obstacle. No probe exists on failure.
    pub fn new(grid: Grid, start: Coordinate, direction: Direction) -> Result<Self, ProbeError> {
        if !grid.is_within_bounds(start) {
            return Err(ProbeError::StartOutOfBounds {
                start,
                width: grid.width(),
                height: grid.height(),
            });
        }
        if grid.is_obstacle(start) {
            return Err(ProbeError::StartOnObstacle { start });
        }
        Ok(Self {
            grid,
            position: start,
            direction,
            visited: vec![start],
        })
    }

    /// Attempt one step in the current heading.
    pub fn move_forward(&mut self) -> MoveOutcome {
        let (dx, dy) = self.direction.forward_delta();
        self.step_to(self.position.offset(dx, dy))
    }

    /// Attempt one step against the current heading.
    ///
    /// The heading itself is unchanged: backing up is not a turn.
    pub fn move_backward(&mut self) -> MoveOutcome {
        let (dx, dy) = self.direction.forward_delta();
        self.step_to(self.position.offset(-dx, -dy))
    }

    /// Rotate 90° counter-clockwise. Always succeeds.
    pub fn turn_left(&mut self) {
        self.direction = self.direction.left();
    }

    /// Rotate 90° clockwise. Always succeeds.
    pub fn turn_right(&mut self) {
        self.direction = self.direction.right();
    }

    /// Current position.
    pub fn position(&self) -> Coordinate {
        self.position
    }

    /// Current heading.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Every position occupied so far, in order, starting with the start
    /// cell. Read-only: the internal history cannot be mutated through
    /// this borrow.
    pub fn visited(&self) -> &[Coordinate] {
        &self.visited
    }

    /// The grid this probe moves across.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Validate `target` and commit the step if it is admissible.
    fn step_to(&mut self, target: Coordinate) -> MoveOutcome {
        if !self.grid.is_within_bounds(target) {
            return MoveOutcome::Blocked(BlockReason::OutOfBounds);
        }
        if self.grid.is_obstacle(target) {
            return MoveOutcome::Blocked(BlockReason::Obstacle);
        }
        self.position = target;
        self.visited.push(target);
        MoveOutcome::Executed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn c(x: i32, y: i32) -> Coordinate {
        Coordinate::new(x, y)
    }

    fn probe_3x3(start: Coordinate, dir: Direction) -> Probe {
        Probe::new(Grid::new(3, 3).unwrap(), start, dir).unwrap()
    }

    // ── Construction tests ──────────────────────────────────────

    #[test]
    fn new_seeds_visited_with_start() {
        let p = probe_3x3(c(1, 2), Direction::East);
        assert_eq!(p.position(), c(1, 2));
        assert_eq!(p.direction(), Direction::East);
        assert_eq!(p.visited(), &[c(1, 2)]);
    }

    #[test]
    fn new_rejects_start_out_of_bounds() {
        let grid = Grid::new(3, 3).unwrap();
        let err = Probe::new(grid, c(3, 0), Direction::North).unwrap_err();
        assert_eq!(
            err,
            ProbeError::StartOutOfBounds {
                start: c(3, 0),
                width: 3,
                height: 3,
            }
        );
    }

    #[test]
    fn new_rejects_negative_start() {
        let grid = Grid::new(3, 3).unwrap();
        assert!(matches!(
            Probe::new(grid, c(-1, 0), Direction::North),
            Err(ProbeError::StartOutOfBounds { .. })
        ));
    }

    #[test]
    fn new_rejects_start_on_obstacle() {
        let mut grid = Grid::new(5, 5).unwrap();
        grid.add_obstacle(c(2, 1));
        let err = Probe::new(grid, c(2, 1), Direction::North).unwrap_err();
        assert_eq!(err, ProbeError::StartOnObstacle { start: c(2, 1) });
    }

    // ── Movement tests ──────────────────────────────────────────

    #[test]
    fn forward_moves_along_heading() {
        let mut p = probe_3x3(c(1, 1), Direction::North);
        assert_eq!(p.move_forward(), MoveOutcome::Executed);
        assert_eq!(p.position(), c(1, 2));

        let mut p = probe_3x3(c(1, 1), Direction::West);
        assert_eq!(p.move_forward(), MoveOutcome::Executed);
        assert_eq!(p.position(), c(0, 1));
    }

    #[test]
    fn backward_moves_against_heading_without_turning() {
        let mut p = probe_3x3(c(1, 1), Direction::North);
        assert_eq!(p.move_backward(), MoveOutcome::Executed);
        assert_eq!(p.position(), c(1, 0));
        assert_eq!(p.direction(), Direction::North);
    }

    #[test]
    fn executed_move_appends_exactly_one_visited_entry() {
        let mut p = probe_3x3(c(0, 0), Direction::East);
        p.move_forward();
        p.move_forward();
        assert_eq!(p.visited(), &[c(0, 0), c(1, 0), c(2, 0)]);
    }

    #[test]
    fn move_off_grid_is_blocked_with_no_state_change() {
        let mut p = probe_3x3(c(0, 0), Direction::South);
        assert_eq!(
            p.move_forward(),
            MoveOutcome::Blocked(BlockReason::OutOfBounds)
        );
        assert_eq!(p.position(), c(0, 0));
        assert_eq!(p.direction(), Direction::South);
        assert_eq!(p.visited(), &[c(0, 0)]);
    }

    #[test]
    fn move_into_obstacle_is_blocked_with_no_state_change() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.add_obstacle(c(1, 0));
        let mut p = Probe::new(grid, c(0, 0), Direction::East).unwrap();
        assert_eq!(
            p.move_forward(),
            MoveOutcome::Blocked(BlockReason::Obstacle)
        );
        assert_eq!(p.position(), c(0, 0));
        assert_eq!(p.visited(), &[c(0, 0)]);
    }

    #[test]
    fn revisited_cells_appear_again_in_history() {
        let mut p = probe_3x3(c(0, 0), Direction::North);
        p.move_forward();
        p.move_backward();
        assert_eq!(p.visited(), &[c(0, 0), c(0, 1), c(0, 0)]);
    }

    // ── Turning tests ───────────────────────────────────────────

    #[test]
    fn turns_change_heading_only() {
        let mut p = probe_3x3(c(1, 1), Direction::North);
        p.turn_right();
        assert_eq!(p.direction(), Direction::East);
        p.turn_left();
        p.turn_left();
        assert_eq!(p.direction(), Direction::West);
        assert_eq!(p.position(), c(1, 1));
        assert_eq!(p.visited().len(), 1);
    }

    #[test]
    fn blocked_move_never_changes_heading() {
        let mut p = probe_3x3(c(0, 0), Direction::West);
        p.move_forward();
        assert_eq!(p.direction(), Direction::West);
    }

    // ── Property tests ──────────────────────────────────────────

    fn arb_direction() -> impl Strategy<Value = Direction> {
        prop_oneof![
            Just(Direction::North),
            Just(Direction::East),
            Just(Direction::South),
            Just(Direction::West),
        ]
    }

    proptest! {
        #[test]
        fn last_visited_always_equals_position(
            start_x in 0i32..8, start_y in 0i32..8,
            dir in arb_direction(),
            moves in proptest::collection::vec(0u8..4, 0..64),
        ) {
            let grid = Grid::new(8, 8).unwrap();
            let mut p = Probe::new(grid, c(start_x, start_y), dir).unwrap();
            for m in moves {
                match m {
                    0 => { p.move_forward(); }
                    1 => { p.move_backward(); }
                    2 => p.turn_left(),
                    _ => p.turn_right(),
                }
                prop_assert_eq!(*p.visited().last().unwrap(), p.position());
                prop_assert!(p.grid().is_within_bounds(p.position()));
            }
            prop_assert_eq!(p.visited()[0], c(start_x, start_y));
        }

        #[test]
        fn probe_never_occupies_an_obstacle(
            moves in proptest::collection::vec(0u8..4, 0..64),
        ) {
            let mut grid = Grid::new(4, 4).unwrap();
            grid.add_obstacle(c(1, 0));
            grid.add_obstacle(c(2, 2));
            grid.add_obstacle(c(0, 3));
            let mut p = Probe::new(grid, c(0, 0), Direction::North).unwrap();
            for m in moves {
                match m {
                    0 => { p.move_forward(); }
                    1 => { p.move_backward(); }
                    2 => p.turn_left(),
                    _ => p.turn_right(),
                }
                prop_assert!(!p.grid().is_obstacle(p.position()));
            }
        }
    }
}
