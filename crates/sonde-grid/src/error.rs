//! Error types for grid construction.

use std::fmt;

/// Errors arising from [`Grid`](crate::Grid) construction.
///
/// Both variants are fatal to construction: retrying with the same input
/// cannot succeed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// Width or height is zero; a grid must contain at least one cell.
    EmptyGrid,
    /// A dimension exceeds the `i32` coordinate range.
    DimensionTooLarge {
        /// Which dimension overflowed (`"width"` or `"height"`).
        name: &'static str,
        /// The configured value.
        value: u32,
        /// The maximum accepted value.
        max: u32,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid must have at least one cell"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "grid {name} {value} exceeds maximum {max}")
            }
        }
    }
}

impl std::error::Error for GridError {}
