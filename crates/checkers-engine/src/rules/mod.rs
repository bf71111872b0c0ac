//! Rule set abstraction and move application.
//!
//! [`apply_move`] is the rule engine proper: a pure function from a board
//! and a move to the next board. The [`RuleSet`] trait bundles it with move
//! generation so callers such as the search can be written against one seam.

mod standard;

pub use standard::StandardCheckers;

use crate::Board;
use checkers_core::{Color, Move, Position};

/// Applies a move, returning the new board and whether the mover was crowned.
///
/// The mover is relocated from `m.from` to `m.to` and the piece on
/// `m.captured`, if any, is removed. A man landing on its promotion row
/// becomes a king; this is checked once, after relocation. An empty `from`
/// square leaves the board unchanged.
pub fn apply_move(board: &Board, m: Move) -> (Board, bool) {
    let mut next = *board;
    let Some(piece) = next.remove(m.from) else {
        return (next, false);
    };

    if let Some(captured) = m.captured {
        next.remove(captured);
    }

    let promoted = !piece.is_king && m.to.row() == piece.color.promotion_row();
    let piece = if promoted { piece.crowned() } else { piece };
    next.place(m.to, piece);

    (next, promoted)
}

/// Trait bundling the rules of a checkers variant.
///
/// # Example
///
/// ```
/// use checkers_core::Color;
/// use checkers_engine::{RuleSet, StandardCheckers};
///
/// let board = StandardCheckers.initial_board();
/// let moves = StandardCheckers.generate_moves(&board, Color::Cyan, None);
/// assert_eq!(moves.len(), 7);
/// ```
pub trait RuleSet {
    /// Returns the board a new game starts from.
    fn initial_board(&self) -> Board;

    /// Returns the color that moves first.
    fn first_mover(&self) -> Color;

    /// Generates the legal moves for `color`, optionally restricted to one origin.
    fn generate_moves(&self, board: &Board, color: Color, origin: Option<Position>) -> Vec<Move>;

    /// Applies a move, returning the new board and whether the mover was crowned.
    fn apply_move(&self, board: &Board, m: Move) -> (Board, bool);

    /// Returns the jumps that continue a multi-jump from `at`.
    fn continuation_jumps(&self, board: &Board, color: Color, at: Position) -> Vec<Move>;

    /// Returns true if `color` has at least one legal move.
    fn has_moves(&self, board: &Board, color: Color) -> bool {
        !self.generate_moves(board, color, None).is_empty()
    }
}
