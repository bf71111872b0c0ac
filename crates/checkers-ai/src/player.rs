//! The computer side of a game.

use crate::{Difficulty, Searcher};
use checkers_core::{Color, Move};
use checkers_engine::{Game, GameState, Transition};

/// A computer opponent playing one color at a fixed difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComputerPlayer {
    pub difficulty: Difficulty,
    pub color: Color,
}

impl ComputerPlayer {
    pub fn new(difficulty: Difficulty, color: Color) -> Self {
        ComputerPlayer { difficulty, color }
    }

    /// Picks the next move for this player in `state`.
    ///
    /// Returns `None` when the game is over or it is not this player's turn.
    /// During a pending multi-jump only the pinned piece is searched. This
    /// does not touch any session, so it can run on a background thread.
    pub fn plan(&self, state: &GameState) -> Option<Move> {
        if state.winner.is_some() || state.turn != self.color {
            return None;
        }
        let depth = self.difficulty.depth();
        let mut searcher = Searcher::new();
        match state.pending_multi_jump {
            Some(at) => searcher.choose_continuation(&state.board, at, depth, self.color),
            None => searcher.choose_move(&state.board, depth, self.color),
        }
    }

    /// Plays a whole turn on `game`, continuing multi-jumps until the turn
    /// passes or the game ends.
    ///
    /// Returns the last transition, or [`Transition::Ignored`] if there was
    /// nothing to play.
    pub fn take_turn(&self, game: &mut Game) -> Transition {
        let mut last = Transition::Ignored;
        while let Some(m) = self.plan(game.state()) {
            last = game.make_move(m);
            if !matches!(last, Transition::Continued { .. }) {
                break;
            }
        }
        last
    }
}
