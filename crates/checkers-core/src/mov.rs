//! Move representation.

use crate::Position;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors that can occur when parsing move notation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NotationError {
    #[error("invalid move notation: expected 'rc-rc' or 'rcxrc', got '{0}'")]
    InvalidFormat(String),

    #[error("invalid square: {0}")]
    InvalidSquare(String),

    #[error("'{0}' is not a diagonal step of one or two squares")]
    NotDiagonal(String),
}

/// A single step by one piece.
///
/// `captured` is set exactly when the move is a jump and names the square of
/// the opponent piece that is removed.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Position,
    pub to: Position,
    pub captured: Option<Position>,
}

impl Move {
    /// Creates a simple (non-capturing) move.
    #[inline]
    pub const fn step(from: Position, to: Position) -> Self {
        Move {
            from,
            to,
            captured: None,
        }
    }

    /// Creates a jump over `captured`.
    #[inline]
    pub const fn jump(from: Position, to: Position, captured: Position) -> Self {
        Move {
            from,
            to,
            captured: Some(captured),
        }
    }

    /// Returns true if this move captures a piece.
    #[inline]
    pub const fn is_jump(self) -> bool {
        self.captured.is_some()
    }

    /// Returns the notation for this move (e.g., "50-41", "32x14").
    pub fn to_notation(self) -> String {
        let sep = if self.is_jump() { 'x' } else { '-' };
        format!("{}{}{}", self.from, sep, self.to)
    }

    /// Parses a move from notation.
    ///
    /// Either separator is accepted; the move kind is inferred from the
    /// distance, so a two-square diagonal always carries its captured square.
    pub fn from_notation(s: &str) -> Result<Self, NotationError> {
        let s = s.trim();
        let (from, to) = s
            .split_once(['-', 'x'])
            .ok_or_else(|| NotationError::InvalidFormat(s.to_string()))?;
        let from =
            Position::parse(from).ok_or_else(|| NotationError::InvalidSquare(from.to_string()))?;
        let to = Position::parse(to).ok_or_else(|| NotationError::InvalidSquare(to.to_string()))?;

        let dr = (to.row() as i8 - from.row() as i8).abs();
        let dc = (to.col() as i8 - from.col() as i8).abs();
        match (dr, dc) {
            (1, 1) => Ok(Move::step(from, to)),
            (2, 2) => {
                let captured = from
                    .midpoint(to)
                    .ok_or_else(|| NotationError::NotDiagonal(s.to_string()))?;
                Ok(Move::jump(from, to, captured))
            }
            _ => Err(NotationError::NotDiagonal(s.to_string())),
        }
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self.to_notation())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_notation())
    }
}
