//! Shared fixtures for Sonde benchmarks.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use sonde_core::{Coordinate, Direction};
use sonde_engine::Probe;
use sonde_grid::Grid;

/// Build a deterministic command stream of `len` tokens.
///
/// Cycles through the four recognized tokens with an invalid token mixed
/// in every 7th position, so benches exercise all interpreter arms.
pub fn command_stream(len: usize) -> Vec<Option<String>> {
    (0..len)
        .map(|i| {
            if i % 7 == 6 {
                return Some("?".to_string());
            }
            let token = match i % 4 {
                0 => "F",
                1 => "R",
                2 => "B",
                _ => "L",
            };
            Some(token.to_string())
        })
        .collect()
}

/// A probe centered on an open `size x size` grid.
pub fn centered_probe(size: u32) -> Probe {
    let grid = Grid::new(size, size).expect("bench grid dimensions are valid");
    let mid = (size / 2) as i32;
    Probe::new(grid, Coordinate::new(mid, mid), Direction::North)
        .expect("bench start cell is valid")
}

/// A probe on a `size x size` grid with a diagonal wall of obstacles.
pub fn walled_probe(size: u32) -> Probe {
    let mut grid = Grid::new(size, size).expect("bench grid dimensions are valid");
    for i in 1..size as i32 {
        grid.add_obstacle(Coordinate::new(i, i));
    }
    Probe::new(grid, Coordinate::new(0, 0), Direction::North)
        .expect("bench start cell is valid")
}
