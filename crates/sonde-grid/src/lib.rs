//! Bounded grid and obstacle model for the Sonde probe simulation.
//!
//! This crate defines the [`Grid`] — the rectangular coordinate space a
//! probe moves across, plus the set of blocking obstacle cells — and the
//! errors arising from grid construction.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;

pub use error::GridError;
pub use grid::Grid;
