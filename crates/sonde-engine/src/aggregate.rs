//! The stored bundle for the stateful lifecycle: probe + last summary.

use crate::interpreter::apply_commands;
use crate::probe::Probe;
use sonde_core::{Coordinate, Direction, ExecutionSummary};
use sonde_grid::Grid;

/// A probe together with the summary of the most recent command batch,
/// as stored under a [`ProbeId`](sonde_core::ProbeId).
///
/// Created with a zeroed summary. Each applied batch replaces the
/// summary — summaries are per-call, not cumulative — while the probe's
/// visited path keeps growing across calls.
#[derive(Debug, Clone)]
pub struct ProbeAggregate {
    probe: Probe,
    summary: ExecutionSummary,
}

impl ProbeAggregate {
    /// Wrap a freshly constructed probe with a zeroed summary.
    pub fn new(probe: Probe) -> Self {
        Self {
            probe,
            summary: ExecutionSummary::ZERO,
        }
    }

    /// Interpret a batch of raw command tokens against the probe and
    /// replace the stored summary with the batch's tally.
    pub fn apply_commands<I, S>(&mut self, commands: I) -> ExecutionSummary
    where
        I: IntoIterator<Item = Option<S>>,
        S: AsRef<str>,
    {
        self.summary = apply_commands(&mut self.probe, commands);
        self.summary
    }

    /// The wrapped probe.
    pub fn probe(&self) -> &Probe {
        &self.probe
    }

    /// The grid the probe moves across.
    pub fn grid(&self) -> &Grid {
        self.probe.grid()
    }

    /// Summary of the most recently applied batch (zeroed before the first).
    pub fn summary(&self) -> ExecutionSummary {
        self.summary
    }

    /// Current probe position.
    pub fn position(&self) -> Coordinate {
        self.probe.position()
    }

    /// Current probe heading.
    pub fn direction(&self) -> Direction {
        self.probe.direction()
    }

    /// Full visited path since creation, in order.
    pub fn visited(&self) -> &[Coordinate] {
        self.probe.visited()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sonde_core::Direction;

    fn aggregate_3x3() -> ProbeAggregate {
        let grid = Grid::new(3, 3).unwrap();
        let probe = Probe::new(grid, Coordinate::new(0, 0), Direction::North).unwrap();
        ProbeAggregate::new(probe)
    }

    #[test]
    fn new_aggregate_has_zeroed_summary() {
        let agg = aggregate_3x3();
        assert_eq!(agg.summary(), ExecutionSummary::ZERO);
        assert_eq!(agg.visited(), &[Coordinate::new(0, 0)]);
    }

    #[test]
    fn apply_replaces_summary_per_batch() {
        let mut agg = aggregate_3x3();
        agg.apply_commands([Some("F"), Some("F")]);
        assert_eq!(agg.summary().executed, 2);

        // Second batch: the previous tally is discarded, not accumulated.
        agg.apply_commands([Some("R")]);
        assert_eq!(agg.summary().executed, 1);
        assert_eq!(agg.summary().total(), 1);
    }

    #[test]
    fn visited_accumulates_across_batches() {
        let mut agg = aggregate_3x3();
        agg.apply_commands([Some("F")]);
        agg.apply_commands([Some("F")]);
        assert_eq!(agg.visited().len(), 3);
        assert_eq!(agg.position(), Coordinate::new(0, 2));
    }
}
