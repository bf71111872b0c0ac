//! Text board layouts.
//!
//! A layout lists the eight rows from row 0 to row 7, separated by `/`.
//! Each row has exactly eight characters: `.` for an empty square or a
//! piece character (`c`, `C`, `m`, `M`, see [`Piece::to_layout_char`]).
//! Pieces are only allowed on dark squares.

use crate::{Piece, Position};
use thiserror::Error;

/// Number of rows and columns on the board.
pub const BOARD_SIZE: usize = 8;

/// The standard starting layout: Magenta men on rows 0-2, Cyan men on rows 5-7.
pub const STARTING_LAYOUT: &str =
    ".m.m.m.m/m.m.m.m./.m.m.m.m/......../......../c.c.c.c./.c.c.c.c/c.c.c.c.";

/// Errors that can occur when parsing a layout string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("invalid layout: expected 8 rows, got {0}")]
    InvalidRowCount(usize),

    #[error("invalid layout: row {row} has {len} squares, expected 8")]
    InvalidRowLength { row: usize, len: usize },

    #[error("invalid piece character '{ch}' at {row}{col}")]
    InvalidPiece { ch: char, row: usize, col: usize },

    #[error("piece on light square {0}")]
    LightSquare(Position),
}

/// Parses a layout string into the occupied squares, in row-major order.
pub fn parse_layout(layout: &str) -> Result<Vec<(Position, Piece)>, LayoutError> {
    let rows: Vec<&str> = layout.trim().split('/').collect();
    if rows.len() != BOARD_SIZE {
        return Err(LayoutError::InvalidRowCount(rows.len()));
    }

    let mut pieces = Vec::new();
    for (row, text) in rows.iter().enumerate() {
        let len = text.chars().count();
        if len != BOARD_SIZE {
            return Err(LayoutError::InvalidRowLength { row, len });
        }

        for (col, ch) in text.chars().enumerate() {
            if ch == '.' {
                continue;
            }
            let piece =
                Piece::from_layout_char(ch).ok_or(LayoutError::InvalidPiece { ch, row, col })?;
            let Some(pos) = Position::new(row as u8, col as u8) else {
                unreachable!("row and column are bounded by BOARD_SIZE");
            };
            if !pos.is_dark() {
                return Err(LayoutError::LightSquare(pos));
            }
            pieces.push((pos, piece));
        }
    }

    Ok(pieces)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;

    #[test]
    fn starting_layout_has_twelve_per_side() {
        let pieces = parse_layout(STARTING_LAYOUT).unwrap();
        let cyan = pieces.iter().filter(|(_, p)| p.color == Color::Cyan).count();
        let magenta = pieces
            .iter()
            .filter(|(_, p)| p.color == Color::Magenta)
            .count();
        assert_eq!(cyan, 12);
        assert_eq!(magenta, 12);
        assert!(pieces.iter().all(|(_, p)| !p.is_king));
    }

    #[test]
    fn starting_layout_rows() {
        for (pos, piece) in parse_layout(STARTING_LAYOUT).unwrap() {
            assert!(pos.is_dark());
            match piece.color {
                Color::Magenta => assert!(pos.row() <= 2),
                Color::Cyan => assert!(pos.row() >= 5),
            }
        }
    }

    #[test]
    fn row_count_error() {
        assert_eq!(
            parse_layout("......../........"),
            Err(LayoutError::InvalidRowCount(2))
        );
    }

    #[test]
    fn row_length_error() {
        let layout = "......./......../......../......../......../......../......../........";
        assert_eq!(
            parse_layout(layout),
            Err(LayoutError::InvalidRowLength { row: 0, len: 7 })
        );
    }

    #[test]
    fn invalid_piece_error() {
        let layout = "......../......../...q..../......../......../......../......../........";
        assert_eq!(
            parse_layout(layout),
            Err(LayoutError::InvalidPiece {
                ch: 'q',
                row: 2,
                col: 3
            })
        );
    }

    #[test]
    fn light_square_error() {
        let layout = "c......./......../......../......../......../......../......../........";
        assert_eq!(
            parse_layout(layout),
            Err(LayoutError::LightSquare(Position::new(0, 0).unwrap()))
        );
    }

    #[test]
    fn kings_parse() {
        let layout = ".C....../......../......../......../......../......../......../......M.";
        let pieces = parse_layout(layout).unwrap();
        assert_eq!(
            pieces,
            vec![
                (Position::new(0, 1).unwrap(), Piece::king(Color::Cyan)),
                (Position::new(7, 6).unwrap(), Piece::king(Color::Magenta)),
            ]
        );
    }
}
