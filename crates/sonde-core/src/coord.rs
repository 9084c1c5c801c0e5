//! The [`Coordinate`] value type.

use std::fmt;

/// A position on a 2D grid.
///
/// Immutable once constructed; two coordinates are equal iff both
/// components match. Components are `i32` so that displacement
/// arithmetic at the grid boundary cannot wrap — a move off the edge
/// of a grid anchored at the origin produces a negative component,
/// which the bounds check then rejects.
///
/// # Examples
///
/// ```
/// use sonde_core::Coordinate;
///
/// let c = Coordinate::new(2, 3);
/// assert_eq!(c.offset(0, 1), Coordinate::new(2, 4));
/// assert_eq!(c.to_string(), "(2, 3)");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    /// Horizontal component (column).
    pub x: i32,
    /// Vertical component (row).
    pub y: i32,
}

impl Coordinate {
    /// Create a coordinate from its components.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return a new coordinate displaced by `(dx, dy)`.
    ///
    /// Uses saturating arithmetic: a displacement that would overflow
    /// `i32` clamps instead of wrapping back into the grid.
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn value_equality() {
        assert_eq!(Coordinate::new(1, 2), Coordinate::new(1, 2));
        assert_ne!(Coordinate::new(1, 2), Coordinate::new(2, 1));
    }

    #[test]
    fn offset_displaces_both_axes() {
        let c = Coordinate::new(3, 4);
        assert_eq!(c.offset(-1, 2), Coordinate::new(2, 6));
        // Original is untouched (Copy semantics).
        assert_eq!(c, Coordinate::new(3, 4));
    }

    #[test]
    fn offset_saturates_at_i32_extremes() {
        let c = Coordinate::new(i32::MAX, i32::MIN);
        assert_eq!(c.offset(1, -1), c);
    }

    #[test]
    fn from_tuple() {
        let c: Coordinate = (5, -2).into();
        assert_eq!(c, Coordinate::new(5, -2));
    }

    proptest! {
        #[test]
        fn offset_is_invertible(x in -1000i32..1000, y in -1000i32..1000,
                                dx in -1000i32..1000, dy in -1000i32..1000) {
            let c = Coordinate::new(x, y);
            prop_assert_eq!(c.offset(dx, dy).offset(-dx, -dy), c);
        }
    }
}
