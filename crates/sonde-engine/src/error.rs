//! Error types for probe construction and the stateful lifecycle.

use std::error::Error;
use std::fmt;

use sonde_core::{Coordinate, ProbeId};
use sonde_grid::GridError;

/// Errors from [`Probe`](crate::Probe) construction.
///
/// Both variants reject the start cell; a probe is never created in an
/// invalid state. Fatal: the same input cannot succeed on retry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProbeError {
    /// The start coordinate lies outside the grid.
    StartOutOfBounds {
        /// The rejected start coordinate.
        start: Coordinate,
        /// Grid width at construction time.
        width: u32,
        /// Grid height at construction time.
        height: u32,
    },
    /// The start coordinate coincides with an obstacle.
    StartOnObstacle {
        /// The rejected start coordinate.
        start: Coordinate,
    },
}

impl fmt::Display for ProbeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StartOutOfBounds {
                start,
                width,
                height,
            } => {
                write!(f, "start {start} out of bounds [0, {width}) x [0, {height})")
            }
            Self::StartOnObstacle { start } => {
                write!(f, "start {start} is an obstacle")
            }
        }
    }
}

impl Error for ProbeError {}

/// Errors from the engine entry points ([`run()`](crate::run()) and
/// [`ProbeService`](crate::ProbeService)).
///
/// Construction failures abort the operation before anything is stored
/// or updated; per-command blocked/invalid outcomes are never errors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EngineError {
    /// Grid construction failed.
    Grid(GridError),
    /// Probe construction failed.
    Probe(ProbeError),
    /// No aggregate is stored under the given identifier.
    UnknownProbe {
        /// The identifier that did not resolve.
        id: ProbeId,
    },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::Probe(e) => write!(f, "probe: {e}"),
            Self::UnknownProbe { id } => write!(f, "no probe stored under id {id}"),
        }
    }
}

impl Error for EngineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::Probe(e) => Some(e),
            Self::UnknownProbe { .. } => None,
        }
    }
}

impl From<GridError> for EngineError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<ProbeError> for EngineError {
    fn from(e: ProbeError) -> Self {
        Self::Probe(e)
    }
}
