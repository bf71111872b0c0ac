//! Board representation.

use checkers_core::{
    parse_layout, Color, LayoutError, Piece, Position, BOARD_SIZE, STARTING_LAYOUT,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The 8x8 playing grid.
///
/// `Board` is a small `Copy` value: every rule application produces a new
/// board instead of mutating a shared one. Pieces only ever occupy dark
/// squares (`(row + col)` odd); a deserialized grid is checked for that.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "Cells", try_from = "Cells")]
pub struct Board {
    cells: Cells,
}

/// Row-major grid as it appears on the wire.
type Cells = [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE];

impl Board {
    /// Creates a board with no pieces.
    pub const fn empty() -> Self {
        Board {
            cells: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Creates the standard starting board.
    pub fn standard() -> Self {
        match Self::from_layout(STARTING_LAYOUT) {
            Ok(board) => board,
            Err(e) => unreachable!("starting layout is valid: {e}"),
        }
    }

    /// Parses a board from a layout string.
    pub fn from_layout(layout: &str) -> Result<Self, LayoutError> {
        let mut board = Board::empty();
        for (pos, piece) in parse_layout(layout)? {
            *board.cell_mut(pos) = Some(piece);
        }
        Ok(board)
    }

    /// Returns the layout string for this board.
    pub fn to_layout(&self) -> String {
        self.cells
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| cell.map_or('.', Piece::to_layout_char))
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("/")
    }

    /// Returns the piece on the given square, if any.
    #[inline]
    pub fn piece_at(&self, pos: Position) -> Option<Piece> {
        self.cells[pos.row() as usize][pos.col() as usize]
    }

    #[inline]
    fn cell_mut(&mut self, pos: Position) -> &mut Option<Piece> {
        &mut self.cells[pos.row() as usize][pos.col() as usize]
    }

    /// Puts a piece on a dark square, replacing whatever was there.
    ///
    /// Returns false and leaves the board unchanged for a light square.
    pub fn place(&mut self, pos: Position, piece: Piece) -> bool {
        if !pos.is_dark() {
            return false;
        }
        *self.cell_mut(pos) = Some(piece);
        true
    }

    /// Removes and returns the piece on the given square.
    pub fn remove(&mut self, pos: Position) -> Option<Piece> {
        self.cell_mut(pos).take()
    }

    /// Iterates over occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells.iter().enumerate().filter_map(move |(col, cell)| {
                let piece = (*cell)?;
                Some((Position::new(row as u8, col as u8)?, piece))
            })
        })
    }

    /// Returns the number of pieces of the given color.
    pub fn count(&self, color: Color) -> usize {
        self.pieces().filter(|(_, p)| p.color == color).count()
    }

    /// Returns the number of kings of the given color.
    pub fn king_count(&self, color: Color) -> usize {
        self.pieces()
            .filter(|(_, p)| p.color == color && p.is_king)
            .count()
    }
}

impl From<Board> for Cells {
    fn from(board: Board) -> Self {
        board.cells
    }
}

impl TryFrom<Cells> for Board {
    type Error = LayoutError;

    fn try_from(cells: Cells) -> Result<Self, Self::Error> {
        let board = Board { cells };
        let light = board.pieces().find(|(pos, _)| !pos.is_dark());
        match light {
            Some((pos, _)) => Err(LayoutError::LightSquare(pos)),
            None => Ok(board),
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({})", self.to_layout())
    }
}

/// Renders the grid with row and column indices, row 0 at the top.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for col in 0..BOARD_SIZE {
            write!(f, " {col}")?;
        }
        writeln!(f)?;
        for (row, cells) in self.cells.iter().enumerate() {
            write!(f, "{row} ")?;
            for (col, cell) in cells.iter().enumerate() {
                let ch = match cell {
                    Some(piece) => piece.to_layout_char(),
                    None if (row + col) % 2 == 1 => '.',
                    None => ' ',
                };
                write!(f, " {ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
