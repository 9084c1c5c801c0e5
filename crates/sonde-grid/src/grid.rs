//! The [`Grid`] bounded coordinate space with obstacles.

use crate::error::GridError;
use indexmap::IndexSet;
use sonde_core::Coordinate;

/// A bounded rectangular grid plus the set of blocking obstacle cells.
///
/// Valid cells are `0 <= x < width` and `0 <= y < height`. Obstacles are
/// a unique, unordered set; insertion order is preserved purely so that
/// iteration is deterministic.
///
/// # Examples
///
/// ```
/// use sonde_core::Coordinate;
/// use sonde_grid::Grid;
///
/// let mut grid = Grid::new(3, 3).unwrap();
/// grid.add_obstacle(Coordinate::new(1, 1));
///
/// assert!(grid.is_within_bounds(Coordinate::new(2, 2)));
/// assert!(!grid.is_within_bounds(Coordinate::new(3, 0)));
/// assert!(grid.is_obstacle(Coordinate::new(1, 1)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: u32,
    height: u32,
    obstacles: IndexSet<Coordinate>,
}

impl Grid {
    /// Maximum dimension size: coordinates use `i32`, so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create a grid of `width * height` cells with no obstacles.
    ///
    /// Returns `Err(GridError::EmptyGrid)` if either dimension is 0, or
    /// `Err(GridError::DimensionTooLarge)` if either exceeds [`Self::MAX_DIM`].
    pub fn new(width: u32, height: u32) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyGrid);
        }
        if width > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "width",
                value: width,
                max: Self::MAX_DIM,
            });
        }
        if height > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "height",
                value: height,
                max: Self::MAX_DIM,
            });
        }
        Ok(Self {
            width,
            height,
            obstacles: IndexSet::new(),
        })
    }

    /// Grid width (number of columns).
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height (number of rows).
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Whether `c` lies inside `[0, width) x [0, height)`.
    pub fn is_within_bounds(&self, c: Coordinate) -> bool {
        c.x >= 0 && c.x < self.width as i32 && c.y >= 0 && c.y < self.height as i32
    }

    /// Mark a cell as an obstacle.
    ///
    /// Idempotent: inserting the same coordinate twice has no additional
    /// effect. Returns `true` if the cell was newly marked. Coordinates
    /// outside the grid are accepted but unreachable, so they never block
    /// anything.
    pub fn add_obstacle(&mut self, c: Coordinate) -> bool {
        self.obstacles.insert(c)
    }

    /// Whether `c` is a blocking obstacle cell.
    pub fn is_obstacle(&self, c: Coordinate) -> bool {
        self.obstacles.contains(&c)
    }

    /// Iterate over the obstacle cells in insertion order.
    pub fn obstacles(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.obstacles.iter().copied()
    }

    /// Number of obstacle cells.
    pub fn obstacle_count(&self) -> usize {
        self.obstacles.len()
    }
}
