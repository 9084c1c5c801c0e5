//! Sonde: a directional probe simulation over a bounded 2D grid.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Sonde sub-crates. For most users, adding `sonde` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use sonde::prelude::*;
//!
//! // Stateless: grid + commands in, full report out.
//! let report = run(RunSpec {
//!     width: 3,
//!     height: 3,
//!     obstacles: vec![Coordinate::new(1, 1)],
//!     start: Coordinate::new(0, 0),
//!     direction: Direction::North,
//!     commands: vec![Some("F".into()), Some("R".into()), Some("F".into())],
//! })
//! .unwrap();
//! assert_eq!(report.direction, Direction::East);
//! assert_eq!(report.summary.blocked, 1); // (1, 1) is an obstacle
//!
//! // Stateful: a probe persisted by id, commands applied across calls.
//! let mut service = ProbeService::new(InMemoryStore::new());
//! let id = service
//!     .create(3, 3, &[], Coordinate::new(0, 0), Direction::North)
//!     .unwrap();
//! service.apply(id, vec![Some("F".to_string())]).unwrap();
//! assert_eq!(service.get(id).unwrap().position(), Coordinate::new(0, 1));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`core`] | `sonde-core` | Coordinates, headings, command tokens, tallies, ids |
//! | [`grid`] | `sonde-grid` | The bounded grid and obstacle set |
//! | [`engine`] | `sonde-engine` | Probe, interpreter, stateless run, stateful lifecycle |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core vocabulary types (`sonde-core`).
///
/// Coordinates, [`core::Direction`] arithmetic, [`core::Command`] token
/// parsing, the [`core::ExecutionSummary`] tally, and [`core::ProbeId`].
pub use sonde_core as core;

/// The bounded grid and obstacle model (`sonde-grid`).
pub use sonde_grid as grid;

/// The probe state machine and both execution modes (`sonde-engine`).
///
/// [`engine::run()`] for stateless execution, [`engine::ProbeService`] for
/// the identifier-keyed stateful lifecycle.
pub use sonde_engine as engine;

/// Common imports for typical Sonde usage.
///
/// ```rust
/// use sonde::prelude::*;
/// ```
pub mod prelude {
    // Core vocabulary
    pub use sonde_core::{
        Command, Coordinate, Direction, ExecutionSummary, Outcome, ParseDirectionError, ProbeId,
    };

    // Grid
    pub use sonde_grid::{Grid, GridError};

    // Engine
    pub use sonde_engine::{
        apply_commands, run, AggregateStore, BlockReason, EngineError, InMemoryStore, MoveOutcome,
        Probe, ProbeAggregate, ProbeError, ProbeService, RunReport, RunSpec,
    };
}
