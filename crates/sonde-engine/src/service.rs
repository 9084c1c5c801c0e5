//! The stateful probe lifecycle: create, look up, apply commands.

use crate::aggregate::ProbeAggregate;
use crate::error::EngineError;
use crate::probe::Probe;
use crate::store::AggregateStore;
use sonde_core::{Coordinate, Direction, ProbeId};
use sonde_grid::Grid;

/// Front door for the stateful mode: probes persisted by identifier,
/// commands applied incrementally across calls.
///
/// The store is an injected abstraction rather than process-global
/// state, so the service is testable without any surrounding framework.
/// Obstacles are fixed at creation time — there is no post-creation
/// obstacle operation in this lifecycle.
///
/// # Examples
///
/// ```
/// use sonde_core::{Coordinate, Direction};
/// use sonde_engine::{InMemoryStore, ProbeService};
///
/// let mut service = ProbeService::new(InMemoryStore::new());
/// let id = service
///     .create(3, 3, &[], Coordinate::new(0, 0), Direction::North)
///     .unwrap();
///
/// let agg = service.apply(id, vec![Some("F".to_string())]).unwrap();
/// assert_eq!(agg.position(), Coordinate::new(0, 1));
/// assert_eq!(service.get(id).unwrap().summary().executed, 1);
/// ```
#[derive(Debug)]
pub struct ProbeService<S: AggregateStore> {
    store: S,
}

impl<S: AggregateStore> ProbeService<S> {
    /// Build a service over the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Create a probe on a fresh grid and persist it under a newly
    /// minted identifier.
    ///
    /// Nothing is stored if grid or probe construction fails.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Grid`] for degenerate dimensions and
    /// [`EngineError::Probe`] for an inadmissible start cell.
    pub fn create(
        &mut self,
        width: u32,
        height: u32,
        obstacles: &[Coordinate],
        start: Coordinate,
        direction: Direction,
    ) -> Result<ProbeId, EngineError> {
        let mut grid = Grid::new(width, height)?;
        for &obstacle in obstacles {
            grid.add_obstacle(obstacle);
        }
        let probe = Probe::new(grid, start, direction)?;
        let id = ProbeId::mint();
        self.store.put(id, ProbeAggregate::new(probe));
        Ok(id)
    }

    /// Look up the aggregate stored under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownProbe`] if nothing is stored under `id`.
    pub fn get(&self, id: ProbeId) -> Result<&ProbeAggregate, EngineError> {
        self.store.get(id).ok_or(EngineError::UnknownProbe { id })
    }

    /// Apply a batch of raw command tokens to the probe stored under
    /// `id`, replacing its summary, and return the updated aggregate.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownProbe`] if nothing is stored under
    /// `id`; the store is untouched in that case.
    pub fn apply<I, T>(&mut self, id: ProbeId, commands: I) -> Result<&ProbeAggregate, EngineError>
    where
        I: IntoIterator<Item = Option<T>>,
        T: AsRef<str>,
    {
        let aggregate = self
            .store
            .get_mut(id)
            .ok_or(EngineError::UnknownProbe { id })?;
        aggregate.apply_commands(commands);
        Ok(aggregate)
    }

    /// The underlying store, for inspection.
    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProbeError;
    use crate::store::InMemoryStore;
    use sonde_grid::GridError;

    fn c(x: i32, y: i32) -> Coordinate {
        Coordinate::new(x, y)
    }

    fn service() -> ProbeService<InMemoryStore> {
        ProbeService::new(InMemoryStore::new())
    }

    // ── create ──────────────────────────────────────────────────

    #[test]
    fn create_mints_distinct_ids() {
        let mut svc = service();
        let a = svc.create(3, 3, &[], c(0, 0), Direction::North).unwrap();
        let b = svc.create(3, 3, &[], c(0, 0), Direction::North).unwrap();
        assert_ne!(a, b);
        assert_eq!(svc.store().len(), 2);
    }

    #[test]
    fn create_with_degenerate_grid_stores_nothing() {
        let mut svc = service();
        let err = svc.create(0, 3, &[], c(0, 0), Direction::North).unwrap_err();
        assert_eq!(err, EngineError::Grid(GridError::EmptyGrid));
        assert!(svc.store().is_empty());
    }

    #[test]
    fn create_with_start_on_obstacle_stores_nothing() {
        let mut svc = service();
        let err = svc
            .create(5, 5, &[c(2, 1)], c(2, 1), Direction::North)
            .unwrap_err();
        assert_eq!(
            err,
            EngineError::Probe(ProbeError::StartOnObstacle { start: c(2, 1) })
        );
        assert!(svc.store().is_empty());
    }

    // ── get ─────────────────────────────────────────────────────

    #[test]
    fn get_returns_initial_state() {
        let mut svc = service();
        let id = svc.create(3, 3, &[], c(1, 2), Direction::West).unwrap();
        let agg = svc.get(id).unwrap();
        assert_eq!(agg.position(), c(1, 2));
        assert_eq!(agg.direction(), Direction::West);
        assert_eq!(agg.visited(), &[c(1, 2)]);
        assert_eq!(agg.summary().total(), 0);
    }

    #[test]
    fn get_unknown_id_fails() {
        let svc = service();
        let id = ProbeId::mint();
        assert_eq!(svc.get(id).unwrap_err(), EngineError::UnknownProbe { id });
    }

    // ── apply ───────────────────────────────────────────────────

    #[test]
    fn apply_updates_stored_state_in_place() {
        let mut svc = service();
        let id = svc.create(3, 3, &[], c(0, 0), Direction::North).unwrap();
        svc.apply(id, vec![Some("F"), Some("R"), Some("F")]).unwrap();

        let agg = svc.get(id).unwrap();
        assert_eq!(agg.position(), c(1, 1));
        assert_eq!(agg.direction(), Direction::East);
        assert_eq!(agg.summary().executed, 3);
    }

    #[test]
    fn apply_unknown_id_fails_without_side_effects() {
        let mut svc = service();
        let known = svc.create(3, 3, &[], c(0, 0), Direction::North).unwrap();
        let unknown = ProbeId::mint();
        let err = svc.apply(unknown, vec![Some("F")]).unwrap_err();
        assert_eq!(err, EngineError::UnknownProbe { id: unknown });
        // The known probe is untouched.
        assert_eq!(svc.get(known).unwrap().visited().len(), 1);
    }

    #[test]
    fn summaries_are_per_call_not_cumulative() {
        let mut svc = service();
        let id = svc.create(3, 3, &[], c(0, 0), Direction::North).unwrap();
        svc.apply(id, vec![Some("F"), Some("F")]).unwrap();
        svc.apply(id, vec![Some("bogus")]).unwrap();

        let agg = svc.get(id).unwrap();
        assert_eq!(agg.summary().executed, 0);
        assert_eq!(agg.summary().invalid, 1);
        // Visited history survives across batches.
        assert_eq!(agg.visited().len(), 3);
    }

    #[test]
    fn obstacles_fixed_at_creation_block_later_batches() {
        let mut svc = service();
        let id = svc
            .create(2, 2, &[c(0, 1)], c(1, 1), Direction::North)
            .unwrap();
        let agg = svc
            .apply(id, vec![Some("F"), Some("X"), None, Some("F"), Some("B")])
            .unwrap();
        assert_eq!(agg.position(), c(1, 0));
        let s = agg.summary();
        assert_eq!((s.executed, s.blocked, s.invalid), (1, 2, 2));
    }
}
