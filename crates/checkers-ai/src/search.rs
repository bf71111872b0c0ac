//! Minimax search with alpha-beta pruning.
//!
//! Scores are always from the maximizer's point of view: one side maximizes
//! and the other minimizes, rather than negating at every ply. Moves are
//! tried in generator order and a later move only replaces the best one on a
//! strictly better score, so ties resolve to the first move generated.
//!
//! A jump that leaves the jumping piece able to jump again is followed
//! through inside the same ply: the first further jump is taken until none
//! remain or the piece is crowned. Alternative continuations are not
//! explored.

use crate::evaluation::evaluate;
use checkers_core::{Color, Move, Position};
use checkers_engine::{Board, RuleSet, StandardCheckers};

/// Score of a position where the side to move has no legal move.
pub const WIN_SCORE: i32 = 1000;

const RULES: StandardCheckers = StandardCheckers;

/// Search state.
#[derive(Debug, Clone, Default)]
pub struct Searcher {
    nodes: u64,
}

impl Searcher {
    pub fn new() -> Self {
        Searcher { nodes: 0 }
    }

    /// Number of positions visited below the root by the last search.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Picks the best move for `maximizing`, the side to move on `board`.
    ///
    /// Returns `None` when that side has no legal move. A depth of 0 is
    /// searched as depth 1.
    pub fn choose_move(&mut self, board: &Board, depth: u32, maximizing: Color) -> Option<Move> {
        let moves = RULES.generate_moves(board, maximizing, None);
        self.search_root(board, moves, depth, maximizing)
    }

    /// Picks the best continuation of a multi-jump for the piece on `origin`.
    ///
    /// Only jumps by that piece are considered at the root.
    pub fn choose_continuation(
        &mut self,
        board: &Board,
        origin: Position,
        depth: u32,
        maximizing: Color,
    ) -> Option<Move> {
        let moves = RULES.continuation_jumps(board, maximizing, origin);
        self.search_root(board, moves, depth, maximizing)
    }

    fn search_root(
        &mut self,
        board: &Board,
        moves: Vec<Move>,
        depth: u32,
        maximizing: Color,
    ) -> Option<Move> {
        self.nodes = 0;
        let depth = depth.max(1);
        let mut alpha = i32::MIN;
        let beta = i32::MAX;
        let mut best: Option<(Move, i32)> = None;

        for &m in &moves {
            let child = self.play_through(board, maximizing, m);
            let score = self.minimax(
                &child,
                depth - 1,
                maximizing.opposite(),
                maximizing,
                alpha,
                beta,
            );
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((m, score));
            }
            alpha = alpha.max(score);
        }

        if let Some((m, score)) = best {
            tracing::debug!(
                %m,
                score,
                depth,
                nodes = self.nodes,
                candidates = moves.len(),
                color = %maximizing,
                "search finished"
            );
        }
        best.map(|(m, _)| m)
    }

    fn minimax(
        &mut self,
        board: &Board,
        depth: u32,
        to_move: Color,
        maximizing: Color,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.nodes += 1;

        if depth == 0 {
            return evaluate(board, maximizing);
        }

        let moves = RULES.generate_moves(board, to_move, None);
        if moves.is_empty() {
            return if to_move == maximizing {
                -WIN_SCORE
            } else {
                WIN_SCORE
            };
        }

        if to_move == maximizing {
            let mut best = i32::MIN;
            for m in moves {
                let child = self.play_through(board, to_move, m);
                let score =
                    self.minimax(&child, depth - 1, to_move.opposite(), maximizing, alpha, beta);
                best = best.max(score);
                alpha = alpha.max(score);
                if beta <= alpha {
                    break;
                }
            }
            best
        } else {
            let mut best = i32::MAX;
            for m in moves {
                let child = self.play_through(board, to_move, m);
                let score =
                    self.minimax(&child, depth - 1, to_move.opposite(), maximizing, alpha, beta);
                best = best.min(score);
                beta = beta.min(score);
                if beta <= alpha {
                    break;
                }
            }
            best
        }
    }

    /// Applies `m` and any forced continuation, yielding the board the
    /// opponent moves on.
    fn play_through(&self, board: &Board, color: Color, m: Move) -> Board {
        let (mut board, mut promoted) = RULES.apply_move(board, m);
        if !m.is_jump() {
            return board;
        }

        let mut at = m.to;
        while !promoted {
            let Some(&next) = RULES.continuation_jumps(&board, color, at).first() else {
                break;
            };
            (board, promoted) = RULES.apply_move(&board, next);
            at = next.to;
        }
        board
    }
}
