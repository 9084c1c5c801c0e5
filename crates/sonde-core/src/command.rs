//! Command token parsing for the probe instruction stream.

use std::fmt;

/// A single probe instruction, decoded from a raw wire token.
///
/// Parsing is total: malformed input maps to the [`Invalid`](Self::Invalid)
/// arm rather than an error, because an unrecognized token is a first-class
/// per-command outcome, not a failure of the whole sequence.
///
/// Recognized tokens (after trimming and ASCII-uppercasing) are exactly
/// `F`, `B`, `L`, and `R`.
///
/// # Examples
///
/// ```
/// use sonde_core::Command;
///
/// assert_eq!(Command::parse(Some("F")), Command::Forward);
/// assert_eq!(Command::parse(Some(" r ")), Command::TurnRight);
/// assert_eq!(Command::parse(Some("jump")), Command::Invalid);
/// assert_eq!(Command::parse(None), Command::Invalid);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    /// Step one cell in the current heading (`F`).
    Forward,
    /// Step one cell against the current heading (`B`).
    Backward,
    /// Rotate 90° counter-clockwise (`L`).
    TurnLeft,
    /// Rotate 90° clockwise (`R`).
    TurnRight,
    /// Absent, blank, or unrecognized token. Never applied to a probe.
    Invalid,
}

impl Command {
    /// Decode a raw token into a command.
    ///
    /// `None` models an absent entry in the incoming sequence (e.g. a JSON
    /// `null`); it is invalid like any unrecognized string.
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::Invalid;
        };
        match raw.trim().to_ascii_uppercase().as_str() {
            "F" => Self::Forward,
            "B" => Self::Backward,
            "L" => Self::TurnLeft,
            "R" => Self::TurnRight,
            _ => Self::Invalid,
        }
    }

    /// The canonical single-letter token, or `None` for [`Invalid`](Self::Invalid).
    pub const fn token(self) -> Option<&'static str> {
        match self {
            Self::Forward => Some("F"),
            Self::Backward => Some("B"),
            Self::TurnLeft => Some("L"),
            Self::TurnRight => Some("R"),
            Self::Invalid => None,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token().unwrap_or("<invalid>"))
    }
}
