//! Static evaluation.

use checkers_core::Color;
use checkers_engine::Board;

/// Material value of a man.
pub const MAN_VALUE: i32 = 1;
/// Material value of a king.
pub const KING_VALUE: i32 = 5;

/// Scores `board` from the point of view of `maximizing`.
///
/// Own material counts positive and opponent material negative. Position on
/// the board is ignored.
pub fn evaluate(board: &Board, maximizing: Color) -> i32 {
    board
        .pieces()
        .map(|(_, piece)| {
            if piece.color == maximizing {
                piece.value()
            } else {
                -piece.value()
            }
        })
        .sum()
}
