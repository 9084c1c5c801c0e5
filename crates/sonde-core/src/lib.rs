//! Core types for the Sonde grid probe simulation.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental vocabulary used throughout the Sonde workspace:
//! coordinates, headings, command tokens, execution tallies, and the
//! probe identifier type.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod command;
pub mod coord;
pub mod direction;
pub mod id;
pub mod summary;

pub use command::Command;
pub use coord::Coordinate;
pub use direction::{Direction, ParseDirectionError};
pub use id::ProbeId;
pub use summary::{ExecutionSummary, Outcome};
