//! Perft (performance test) for move generator validation.
//!
//! A ply here is a whole turn: once a piece starts a multi-jump, every
//! possible continuation is followed before the other side moves.

use super::{continuation_jumps, generate_moves};
use crate::rules::apply_move;
use crate::Board;
use checkers_core::{Color, Move};

/// Counts the number of leaf nodes at the given depth.
pub fn perft(board: &Board, color: Color, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    generate_moves(board, color, None)
        .into_iter()
        .map(|m| perft_move(board, color, m, depth))
        .sum()
}

/// Perft with divide - node count below each first move.
pub fn perft_divide(board: &Board, color: Color, depth: u32) -> Vec<(String, u64)> {
    let mut results: Vec<(String, u64)> = generate_moves(board, color, None)
        .into_iter()
        .map(|m| (m.to_notation(), perft_move(board, color, m, depth.max(1))))
        .collect();

    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}

fn perft_move(board: &Board, color: Color, m: Move, depth: u32) -> u64 {
    let (next, promoted) = apply_move(board, m);
    if m.is_jump() && !promoted {
        let continuations = continuation_jumps(&next, color, m.to);
        if !continuations.is_empty() {
            return continuations
                .into_iter()
                .map(|c| perft_move(&next, color, c, depth))
                .sum();
        }
    }
    perft(&next, color.opposite(), depth - 1)
}
