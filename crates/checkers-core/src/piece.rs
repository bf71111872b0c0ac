//! Checkers piece representation.

use crate::Color;
use serde::{Deserialize, Serialize};

/// A piece on the board: a man, or a king once crowned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Piece {
    pub color: Color,
    pub is_king: bool,
}

impl Piece {
    /// Creates an uncrowned piece.
    #[inline]
    pub const fn man(color: Color) -> Self {
        Piece {
            color,
            is_king: false,
        }
    }

    /// Creates a king.
    #[inline]
    pub const fn king(color: Color) -> Self {
        Piece {
            color,
            is_king: true,
        }
    }

    /// Returns this piece crowned. Crowning a king is a no-op.
    #[inline]
    pub const fn crowned(self) -> Self {
        Piece::king(self.color)
    }

    /// Material value used by the evaluator: 5 for a king, 1 for a man.
    #[inline]
    pub const fn value(self) -> i32 {
        if self.is_king {
            5
        } else {
            1
        }
    }

    /// Returns the layout character for this piece.
    ///
    /// Men are lowercase, kings uppercase: `c`, `C`, `m`, `M`.
    pub const fn to_layout_char(self) -> char {
        match (self.color, self.is_king) {
            (Color::Cyan, false) => 'c',
            (Color::Cyan, true) => 'C',
            (Color::Magenta, false) => 'm',
            (Color::Magenta, true) => 'M',
        }
    }

    /// Parses a layout character into a piece.
    pub const fn from_layout_char(c: char) -> Option<Piece> {
        match c {
            'c' => Some(Piece::man(Color::Cyan)),
            'C' => Some(Piece::king(Color::Cyan)),
            'm' => Some(Piece::man(Color::Magenta)),
            'M' => Some(Piece::king(Color::Magenta)),
            _ => None,
        }
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = if self.is_king { "King" } else { "Man" };
        write!(f, "{} {}", self.color, kind)
    }
}
