//! The [`ProbeId`] opaque identifier type.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique [`ProbeId`] allocation.
static PROBE_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Opaque identifier for a stored probe aggregate.
///
/// Minted from a monotonic atomic counter via [`ProbeId::mint`]: two
/// aggregates created within the same process never share an id, even
/// across threads. The store treats the id as a pure lookup key and
/// never inspects its structure.
///
/// # Examples
///
/// ```
/// use sonde_core::ProbeId;
///
/// let a = ProbeId::mint();
/// let b = ProbeId::mint();
/// assert_ne!(a, b);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProbeId(u64);

impl ProbeId {
    /// Allocate a fresh, unique identifier.
    ///
    /// Each call returns an id that has never been returned before
    /// within this process. Thread-safe.
    pub fn mint() -> Self {
        Self(PROBE_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw numeric value, for serialization by outer layers.
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl From<u64> for ProbeId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

impl fmt::Display for ProbeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
