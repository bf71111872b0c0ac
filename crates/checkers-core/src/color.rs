//! Player color representation.

use serde::{Deserialize, Serialize};

/// The two sides of a checkers game.
///
/// Cyan moves first from rows 5-7 toward row 0; Magenta starts on rows 0-2
/// and advances toward row 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Cyan,
    Magenta,
}

impl Color {
    /// Both colors in turn order.
    pub const ALL: [Color; 2] = [Color::Cyan, Color::Magenta];

    /// Returns the opposite color.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Cyan => Color::Magenta,
            Color::Magenta => Color::Cyan,
        }
    }

    /// Returns the row step a man of this color advances by (-1 for Cyan, +1 for Magenta).
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::Cyan => -1,
            Color::Magenta => 1,
        }
    }

    /// Returns the row on which a man of this color is crowned (0 for Cyan, 7 for Magenta).
    #[inline]
    pub const fn promotion_row(self) -> u8 {
        match self {
            Color::Cyan => 0,
            Color::Magenta => 7,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::Cyan => write!(f, "Cyan"),
            Color::Magenta => write!(f, "Magenta"),
        }
    }
}
