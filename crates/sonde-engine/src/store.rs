//! The identifier-keyed store behind the stateful lifecycle.

use crate::aggregate::ProbeAggregate;
use indexmap::IndexMap;
use sonde_core::ProbeId;

/// Abstract key-value storage for probe aggregates.
///
/// The engine treats the store as a pure mapping: any backing is
/// acceptable as long as a single-key read or update is atomic relative
/// to the surrounding service's concurrency guarantee. The engine itself
/// provides no locking (the core is synchronous per call).
pub trait AggregateStore {
    /// Store `aggregate` under `id`, replacing any previous value.
    fn put(&mut self, id: ProbeId, aggregate: ProbeAggregate);

    /// Look up the aggregate stored under `id`.
    fn get(&self, id: ProbeId) -> Option<&ProbeAggregate>;

    /// Look up the aggregate stored under `id` for in-place update.
    fn get_mut(&mut self, id: ProbeId) -> Option<&mut ProbeAggregate>;
}

/// Process-local store backed by an [`IndexMap`].
///
/// Preserves insertion order for deterministic iteration in tests and
/// diagnostics. Suitable for single-owner use; wrap in a lock to share.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    aggregates: IndexMap<ProbeId, ProbeAggregate>,
}

impl InMemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored aggregates.
    pub fn len(&self) -> usize {
        self.aggregates.len()
    }

    /// Whether the store holds no aggregates.
    pub fn is_empty(&self) -> bool {
        self.aggregates.is_empty()
    }

    /// Iterate over stored aggregates in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (ProbeId, &ProbeAggregate)> + '_ {
        self.aggregates.iter().map(|(id, agg)| (*id, agg))
    }
}

impl AggregateStore for InMemoryStore {
    fn put(&mut self, id: ProbeId, aggregate: ProbeAggregate) {
        self.aggregates.insert(id, aggregate);
    }

    fn get(&self, id: ProbeId) -> Option<&ProbeAggregate> {
        self.aggregates.get(&id)
    }

    fn get_mut(&mut self, id: ProbeId) -> Option<&mut ProbeAggregate> {
        self.aggregates.get_mut(&id)
    }
}
