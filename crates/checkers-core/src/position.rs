//! Board coordinate representation.

use crate::BOARD_SIZE;
use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;
use thiserror::Error;

/// Error for a row or column outside 0-7.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("square ({row}, {col}) is off the board")]
pub struct OffBoardError {
    pub row: u8,
    pub col: u8,
}

/// A square on the board, addressed by row and column (both 0-7).
///
/// Row 0 is Magenta's home row and row 7 is Cyan's. Text form is the row
/// digit followed by the column digit, so `(5, 0)` is `"50"`.
///
/// The fields are private so every value is on the board; deserialization
/// goes through the same bounds check as [`Position::new`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Creates a position, returning `None` when off the board.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if (row as usize) < BOARD_SIZE && (col as usize) < BOARD_SIZE {
            Some(Position { row, col })
        } else {
            None
        }
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the position `dr` rows and `dc` columns away, if still on the board.
    #[inline]
    pub const fn offset(self, dr: i8, dc: i8) -> Option<Self> {
        let row = self.row as i8 + dr;
        let col = self.col as i8 + dc;
        if row < 0 || col < 0 {
            return None;
        }
        Self::new(row as u8, col as u8)
    }

    /// Returns true for the playable (dark) squares, where `row + col` is odd.
    #[inline]
    pub const fn is_dark(self) -> bool {
        (self.row + self.col) % 2 == 1
    }

    /// Parses the two-digit text form (e.g. `"50"`).
    pub fn parse(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 || !bytes[0].is_ascii_digit() || !bytes[1].is_ascii_digit() {
            return None;
        }
        Self::new(bytes[0] - b'0', bytes[1] - b'0')
    }

    /// Returns the square midway between two positions two diagonal steps apart.
    pub fn midpoint(self, other: Position) -> Option<Position> {
        let dr = other.row as i8 - self.row as i8;
        let dc = other.col as i8 - self.col as i8;
        if dr.abs() != 2 || dc.abs() != 2 {
            return None;
        }
        self.offset(dr / 2, dc / 2)
    }
}

impl TryFrom<(u8, u8)> for Position {
    type Error = OffBoardError;

    #[inline]
    fn try_from((row, col): (u8, u8)) -> Result<Self, Self::Error> {
        Self::new(row, col).ok_or(OffBoardError { row, col })
    }
}

impl<'de> Deserialize<'de> for Position {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Raw {
            row: u8,
            col: u8,
        }

        let Raw { row, col } = Raw::deserialize(deserializer)?;
        Position::try_from((row, col)).map_err(de::Error::custom)
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position({},{})", self.row, self.col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row, self.col)
    }
}
