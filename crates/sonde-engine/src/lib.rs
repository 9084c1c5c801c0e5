//! Probe state machine, command interpreter, and aggregate lifecycle.
//!
//! This crate hosts the moving parts of the Sonde simulation:
//!
//! - [`Probe`]: the movable entity — position, heading, and visited path
//!   over a [`Grid`](sonde_grid::Grid).
//! - [`apply_commands`]: the command interpreter, consuming a raw token
//!   sequence and tallying per-command outcomes.
//! - [`run()`]: the stateless entry point — grid, probe, and commands
//!   submitted together, full [`RunReport`] returned.
//! - [`ProbeAggregate`], [`AggregateStore`], [`ProbeService`]: the stateful
//!   lifecycle — a probe persisted under a [`ProbeId`](sonde_core::ProbeId)
//!   with commands applied incrementally across calls.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod aggregate;
pub mod error;
pub mod interpreter;
pub mod probe;
pub mod run;
pub mod service;
pub mod store;

pub use aggregate::ProbeAggregate;
pub use error::{EngineError, ProbeError};
pub use interpreter::apply_commands;
pub use probe::{BlockReason, MoveOutcome, Probe};
pub use run::{run, RunReport, RunSpec};
pub use service::ProbeService;
pub use store::{AggregateStore, InMemoryStore};
