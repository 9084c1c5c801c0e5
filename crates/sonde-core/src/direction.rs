//! The [`Direction`] heading and its rotation/displacement arithmetic.

use std::error::Error;
use std::fmt;
use std::str::FromStr;

/// One of the four cardinal headings a probe can face.
///
/// Rotations are cyclic over the ring North → East → South → West → North.
/// The forward displacement follows screen-independent grid convention:
/// north increases `y`, east increases `x`.
///
/// # Examples
///
/// ```
/// use sonde_core::Direction;
///
/// assert_eq!(Direction::North.right(), Direction::East);
/// assert_eq!(Direction::North.left(), Direction::West);
/// assert_eq!(Direction::East.forward_delta(), (1, 0));
/// assert_eq!("south".parse::<Direction>().unwrap(), Direction::South);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Facing up the grid (`+y`).
    North,
    /// Facing right (`+x`).
    East,
    /// Facing down the grid (`-y`).
    South,
    /// Facing left (`-x`).
    West,
}

impl Direction {
    /// Rotate 90° counter-clockwise. Total: never fails.
    pub const fn left(self) -> Self {
        match self {
            Self::North => Self::West,
            Self::West => Self::South,
            Self::South => Self::East,
            Self::East => Self::North,
        }
    }

    /// Rotate 90° clockwise. Total: never fails.
    pub const fn right(self) -> Self {
        match self {
            Self::North => Self::East,
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
        }
    }

    /// The `(dx, dy)` unit vector for one step forward in this heading.
    ///
    /// Backward is the negation; the probe computes it rather than this
    /// type carrying a second table.
    pub const fn forward_delta(self) -> (i32, i32) {
        match self {
            Self::North => (0, 1),
            Self::East => (1, 0),
            Self::South => (0, -1),
            Self::West => (-1, 0),
        }
    }

    /// Canonical uppercase name, as used on the wire.
    pub const fn name(self) -> &'static str {
        match self {
            Self::North => "NORTH",
            Self::East => "EAST",
            Self::South => "SOUTH",
            Self::West => "WEST",
        }
    }

    /// All four headings in ring order.
    pub const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing a direction token fails.
///
/// Carries the offending input so callers can report it verbatim.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseDirectionError {
    /// The token that did not match any heading.
    pub input: String,
}

impl fmt::Display for ParseDirectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unrecognized direction {:?} (expected NORTH, EAST, SOUTH, or WEST)",
            self.input
        )
    }
}

impl Error for ParseDirectionError {}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    /// Parse an external direction token.
    ///
    /// Trims surrounding whitespace and matches case-insensitively;
    /// anything other than the four canonical names is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "NORTH" => Ok(Self::North),
            "EAST" => Ok(Self::East),
            "SOUTH" => Ok(Self::South),
            "WEST" => Ok(Self::West),
            _ => Err(ParseDirectionError {
                input: s.to_string(),
            }),
        }
    }
}
