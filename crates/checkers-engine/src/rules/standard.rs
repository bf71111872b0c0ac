//! Standard 8x8 checkers rules.

use super::{apply_move, RuleSet};
use crate::movegen::{continuation_jumps, generate_moves, has_moves};
use crate::Board;
use checkers_core::{Color, Move, Position};

/// Standard rules: forced capture, men move forward only, kings both ways,
/// a multi-jump ends when the jumping man is crowned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StandardCheckers;

impl RuleSet for StandardCheckers {
    fn initial_board(&self) -> Board {
        Board::standard()
    }

    fn first_mover(&self) -> Color {
        Color::Cyan
    }

    fn generate_moves(&self, board: &Board, color: Color, origin: Option<Position>) -> Vec<Move> {
        generate_moves(board, color, origin)
    }

    fn apply_move(&self, board: &Board, m: Move) -> (Board, bool) {
        apply_move(board, m)
    }

    fn continuation_jumps(&self, board: &Board, color: Color, at: Position) -> Vec<Move> {
        continuation_jumps(board, color, at)
    }

    fn has_moves(&self, board: &Board, color: Color) -> bool {
        has_moves(board, color)
    }
}
