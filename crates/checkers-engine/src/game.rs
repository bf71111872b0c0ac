//! Turn control for a game between two sides.
//!
//! The [`Game`] struct owns the authoritative [`GameState`] and is the only
//! way to change it. Every transition builds a complete new state and swaps
//! it in, so a snapshot taken with [`Game::state`] is never half-updated.
//!
//! Invalid interactions (out-of-turn selections, illegal moves, input after
//! the game has ended) are absorbed: they return [`Transition::Ignored`] or
//! fall back to a selection, and never raise an error.

use crate::rules::{RuleSet, StandardCheckers};
use crate::Board;
use checkers_core::{Color, Move, Position};
use serde::{Deserialize, Serialize};

const RULES: StandardCheckers = StandardCheckers;

/// Pieces captured by each side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureCount {
    pub cyan: u32,
    pub magenta: u32,
}

impl CaptureCount {
    /// Returns the number of pieces captured by `color`.
    pub const fn of(self, color: Color) -> u32 {
        match color {
            Color::Cyan => self.cyan,
            Color::Magenta => self.magenta,
        }
    }

    /// Returns the counts with one more capture credited to `color`.
    const fn credited(self, color: Color) -> Self {
        match color {
            Color::Cyan => CaptureCount {
                cyan: self.cyan + 1,
                ..self
            },
            Color::Magenta => CaptureCount {
                magenta: self.magenta + 1,
                ..self
            },
        }
    }
}

/// Complete session state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    /// Current board.
    pub board: Board,
    /// The side to move.
    pub turn: Color,
    /// Set once the game has been won.
    pub winner: Option<Color>,
    /// Square of the selected piece.
    pub selected: Option<Position>,
    /// Square the side to move must continue jumping from.
    pub pending_multi_jump: Option<Position>,
    /// Pieces captured by each side.
    pub captures: CaptureCount,
    /// Completed turns.
    pub move_count: u32,
}

impl GameState {
    /// Creates the state of a fresh game.
    pub fn new() -> Self {
        Self::from_board(RULES.initial_board(), RULES.first_mover())
    }

    /// Creates a state for a custom board with `turn` to move.
    ///
    /// If the side to move is already stuck, the other side is recorded as
    /// the winner.
    pub fn from_board(board: Board, turn: Color) -> Self {
        let winner = (!RULES.has_moves(&board, turn)).then(|| turn.opposite());
        GameState {
            board,
            turn,
            winner,
            selected: None,
            pending_multi_jump: None,
            captures: CaptureCount::default(),
            move_count: 0,
        }
    }

    /// Returns the phase of the turn this state is in.
    pub fn phase(&self) -> Phase {
        if let Some(winner) = self.winner {
            Phase::GameOver(winner)
        } else if let Some(at) = self.pending_multi_jump {
            Phase::MultiJumpPending(self.turn, at)
        } else if let Some(at) = self.selected {
            Phase::PieceSelected(self.turn, at)
        } else {
            Phase::AwaitingSelection(self.turn)
        }
    }

    /// Returns the moves the side to move may play.
    ///
    /// During a multi-jump only continuations of the pinned piece are legal.
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.winner.is_some() {
            return Vec::new();
        }
        RULES.generate_moves(&self.board, self.turn, self.pending_multi_jump)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Where a game is within the current turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the side to move to pick a piece.
    AwaitingSelection(Color),
    /// A piece has been picked.
    PieceSelected(Color, Position),
    /// The side to move must keep jumping with the piece on this square.
    MultiJumpPending(Color, Position),
    /// The game has been won.
    GameOver(Color),
}

/// Terminal record emitted once when a game is won.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameOutcome {
    pub winner: Color,
    pub move_count: u32,
}

/// What a call into the turn controller did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Nothing changed.
    Ignored,
    /// A piece was selected.
    Selected(Position),
    /// A move was played and the turn passed.
    Moved { mv: Move, promoted: bool },
    /// A jump was played and the same piece must jump again from `at`.
    Continued { mv: Move, at: Position },
    /// A move was played and won the game.
    Finished(GameOutcome),
}

/// A game session.
///
/// # Example
///
/// ```
/// use checkers_core::{Color, Position};
/// use checkers_engine::{Game, Phase};
///
/// let mut game = Game::new();
/// game.select(Position::new(5, 2).unwrap());
/// assert_eq!(
///     game.phase(),
///     Phase::PieceSelected(Color::Cyan, Position::new(5, 2).unwrap())
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    state: GameState,
    /// Bumped on every reset so results computed for an older session can be told apart.
    generation: u64,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a new game from the standard starting board.
    pub fn new() -> Self {
        Game {
            state: GameState::new(),
            generation: 0,
        }
    }

    /// Creates a game from an arbitrary state.
    pub fn from_state(state: GameState) -> Self {
        Game {
            state,
            generation: 0,
        }
    }

    /// Returns the current state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Returns the session generation.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Returns the moves the side to move may play.
    pub fn legal_moves(&self) -> Vec<Move> {
        self.state.legal_moves()
    }

    /// Returns the squares the selected piece may move to.
    pub fn legal_targets(&self) -> Vec<Position> {
        let Some(selected) = self.state.selected else {
            return Vec::new();
        };
        self.legal_moves()
            .into_iter()
            .filter(|m| m.from == selected)
            .map(|m| m.to)
            .collect()
    }

    /// Returns the outcome once the game has been won.
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.state.winner.map(|winner| GameOutcome {
            winner,
            move_count: self.state.move_count,
        })
    }

    /// Returns true once the game has been won.
    pub fn is_over(&self) -> bool {
        self.state.winner.is_some()
    }

    /// Selects the piece on `pos` for the side to move.
    ///
    /// Ignored when the game is over, when another piece is pinned by a
    /// multi-jump, or when the square holds no piece of the side to move
    /// that has a legal move.
    pub fn select(&mut self, pos: Position) -> Transition {
        if self.state.winner.is_some() {
            return Transition::Ignored;
        }
        if self.state.pending_multi_jump.is_some_and(|at| at != pos) {
            return Transition::Ignored;
        }
        if !self.legal_moves().iter().any(|m| m.from == pos) {
            tracing::debug!(square = %pos, "selection ignored");
            return Transition::Ignored;
        }

        self.state = GameState {
            selected: Some(pos),
            ..self.state.clone()
        };
        Transition::Selected(pos)
    }

    /// Plays a move for the side to move.
    ///
    /// The candidate is matched against the legal moves on its `from` and
    /// `to` squares, so callers need not fill in `captured`. A candidate
    /// that is not legal is treated as a selection of its `to` square.
    pub fn make_move(&mut self, candidate: Move) -> Transition {
        if self.state.winner.is_some() {
            return Transition::Ignored;
        }

        let legal = self
            .legal_moves()
            .into_iter()
            .find(|m| m.from == candidate.from && m.to == candidate.to);

        match legal {
            Some(m) => self.play(m),
            None => self.select(candidate.to),
        }
    }

    /// Plays `m` only if the session is still at `generation`.
    ///
    /// Used to apply results computed in the background: a move computed
    /// before a [`reset`](Game::reset) is discarded.
    pub fn apply_if_current(&mut self, generation: u64, m: Move) -> Transition {
        if generation != self.generation {
            tracing::debug!(
                stale = generation,
                current = self.generation,
                "discarding move for an older session"
            );
            return Transition::Ignored;
        }
        self.make_move(m)
    }

    /// Starts a new game and invalidates outstanding results.
    pub fn reset(&mut self) {
        self.state = GameState::new();
        self.generation += 1;
        tracing::info!(generation = self.generation, "game reset");
    }

    fn play(&mut self, m: Move) -> Transition {
        let prev = &self.state;
        let mover = prev.turn;
        let (board, promoted) = RULES.apply_move(&prev.board, m);
        let captures = if m.is_jump() {
            prev.captures.credited(mover)
        } else {
            prev.captures
        };

        if m.is_jump() && !promoted && !RULES.continuation_jumps(&board, mover, m.to).is_empty() {
            self.state = GameState {
                board,
                turn: mover,
                winner: None,
                selected: Some(m.to),
                pending_multi_jump: Some(m.to),
                captures,
                move_count: prev.move_count,
            };
            tracing::debug!(%m, color = %mover, "multi-jump continues");
            return Transition::Continued { mv: m, at: m.to };
        }

        let next = mover.opposite();
        let winner = (!RULES.has_moves(&board, next)).then_some(mover);
        self.state = GameState {
            board,
            turn: next,
            winner,
            selected: None,
            pending_multi_jump: None,
            captures,
            move_count: prev.move_count + 1,
        };
        tracing::debug!(%m, color = %mover, promoted, "move played");

        match self.outcome() {
            Some(outcome) => {
                tracing::info!(
                    winner = %outcome.winner,
                    moves = outcome.move_count,
                    "game over"
                );
                Transition::Finished(outcome)
            }
            None => Transition::Moved { mv: m, promoted },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(row: u8, col: u8) -> Position {
        Position::new(row, col).unwrap()
    }

    fn game_from(layout: &str, turn: Color) -> Game {
        Game::from_state(GameState::from_board(
            Board::from_layout(layout).unwrap(),
            turn,
        ))
    }

    #[test]
    fn new_game() {
        let game = Game::new();
        let state = game.state();
        assert_eq!(state.turn, Color::Cyan);
        assert_eq!(state.winner, None);
        assert_eq!(state.selected, None);
        assert_eq!(state.pending_multi_jump, None);
        assert_eq!(state.captures, CaptureCount::default());
        assert_eq!(state.move_count, 0);
        assert_eq!(game.phase(), Phase::AwaitingSelection(Color::Cyan));
        assert_eq!(game.generation(), 0);
    }

    #[test]
    fn select_own_piece_with_moves() {
        let mut game = Game::new();
        assert_eq!(game.select(pos(5, 0)), Transition::Selected(pos(5, 0)));
        assert_eq!(game.state().selected, Some(pos(5, 0)));
        assert_eq!(game.legal_targets(), vec![pos(4, 1)]);
    }

    #[test]
    fn select_is_ignored_for_invalid_squares() {
        let mut game = Game::new();
        let before = game.state().clone();
        // Empty square, opponent piece, own piece with no moves.
        assert_eq!(game.select(pos(4, 1)), Transition::Ignored);
        assert_eq!(game.select(pos(2, 1)), Transition::Ignored);
        assert_eq!(game.select(pos(6, 1)), Transition::Ignored);
        assert_eq!(game.state(), &before);
    }

    #[test]
    fn simple_move_passes_turn() {
        let mut game = Game::new();
        let result = game.make_move(Move::step(pos(5, 0), pos(4, 1)));
        assert_eq!(
            result,
            Transition::Moved {
                mv: Move::step(pos(5, 0), pos(4, 1)),
                promoted: false
            }
        );
        let state = game.state();
        assert_eq!(state.turn, Color::Magenta);
        assert_eq!(state.move_count, 1);
        assert_eq!(state.selected, None);
    }

    #[test]
    fn illegal_move_becomes_selection_of_target() {
        let mut game = Game::new();
        // 52 -> 30 is not a legal move, and 30 is empty.
        assert_eq!(
            game.make_move(Move::step(pos(5, 2), pos(3, 0))),
            Transition::Ignored
        );
        // Moving "to" an own movable piece selects it.
        assert_eq!(
            game.make_move(Move::step(pos(6, 1), pos(5, 2))),
            Transition::Selected(pos(5, 2))
        );
        assert_eq!(game.state().move_count, 0);
        assert_eq!(game.state().turn, Color::Cyan);
    }

    #[test]
    fn jump_credits_capture_to_mover() {
        let mut game = game_from(
            ".m....../......../...m..../..c...../......../......../......../........",
            Color::Cyan,
        );
        let result = game.make_move(Move::step(pos(3, 2), pos(1, 4)));
        assert!(matches!(result, Transition::Moved { .. }));
        let state = game.state();
        assert_eq!(state.captures.cyan, 1);
        assert_eq!(state.captures.magenta, 0);
        assert_eq!(state.board.piece_at(pos(2, 3)), None);
        assert_eq!(state.turn, Color::Magenta);
    }

    #[test]
    fn multi_jump_keeps_turn_and_pins_piece() {
        // Cyan on 54 jumps 43 landing on 32, then must jump 21.
        let mut game = game_from(
            "......../......../.m....../......../...m..../....c.../......../M.......",
            Color::Cyan,
        );
        let result = game.make_move(Move::step(pos(5, 4), pos(3, 2)));
        assert_eq!(
            result,
            Transition::Continued {
                mv: Move::jump(pos(5, 4), pos(3, 2), pos(4, 3)),
                at: pos(3, 2)
            }
        );
        let state = game.state();
        assert_eq!(state.turn, Color::Cyan);
        assert_eq!(state.pending_multi_jump, Some(pos(3, 2)));
        assert_eq!(state.selected, Some(pos(3, 2)));
        assert_eq!(state.move_count, 0);
        assert_eq!(game.phase(), Phase::MultiJumpPending(Color::Cyan, pos(3, 2)));
        assert_eq!(game.legal_targets(), vec![pos(1, 0)]);

        // Another square cannot be selected while the piece is pinned.
        assert_eq!(game.select(pos(5, 4)), Transition::Ignored);
        assert_eq!(game.select(pos(3, 2)), Transition::Selected(pos(3, 2)));

        let result = game.make_move(Move::step(pos(3, 2), pos(1, 0)));
        assert!(matches!(result, Transition::Moved { .. }));
        let state = game.state();
        assert_eq!(state.turn, Color::Magenta);
        assert_eq!(state.pending_multi_jump, None);
        assert_eq!(state.captures.cyan, 2);
        assert_eq!(state.move_count, 1);
    }

    #[test]
    fn promotion_ends_multi_jump() {
        // Cyan on 21 jumps 12 and is crowned on 03. A king could jump 14 next,
        // but crowning ends the turn.
        let mut game = game_from(
            "......../..m.m.../.c....../......../......../......../......../M.......",
            Color::Cyan,
        );
        let result = game.make_move(Move::step(pos(2, 1), pos(0, 3)));
        assert_eq!(
            result,
            Transition::Moved {
                mv: Move::jump(pos(2, 1), pos(0, 3), pos(1, 2)),
                promoted: true
            }
        );
        let state = game.state();
        assert_eq!(state.turn, Color::Magenta);
        assert_eq!(state.pending_multi_jump, None);
        assert!(state.board.piece_at(pos(0, 3)).unwrap().is_king);
    }

    #[test]
    fn immobilizing_the_opponent_wins() {
        // Capturing the last magenta piece leaves Magenta without moves.
        let mut game = game_from(
            "......../......../...m..../..c...../......../......../......../........",
            Color::Cyan,
        );
        let result = game.make_move(Move::step(pos(3, 2), pos(1, 4)));
        assert_eq!(
            result,
            Transition::Finished(GameOutcome {
                winner: Color::Cyan,
                move_count: 1
            })
        );
        assert_eq!(game.phase(), Phase::GameOver(Color::Cyan));
        assert_eq!(game.outcome().map(|o| o.winner), Some(Color::Cyan));
    }

    #[test]
    fn input_after_game_over_is_ignored() {
        let mut game = game_from(
            "......../......../...m..../..c...../......../......../......../........",
            Color::Cyan,
        );
        game.make_move(Move::step(pos(3, 2), pos(1, 4)));
        let before = game.state().clone();
        assert_eq!(game.select(pos(1, 4)), Transition::Ignored);
        assert_eq!(
            game.make_move(Move::step(pos(1, 4), pos(0, 5))),
            Transition::Ignored
        );
        assert_eq!(game.state(), &before);
    }

    #[test]
    fn stuck_side_to_move_loses_immediately() {
        let game = game_from(
            "......../......../......../......../......../......../.m....../c.c.....",
            Color::Magenta,
        );
        assert_eq!(game.state().winner, Some(Color::Cyan));
    }

    #[test]
    fn reset_bumps_generation_and_discards_stale_moves() {
        let mut game = Game::new();
        let stale = game.generation();
        game.make_move(Move::step(pos(5, 0), pos(4, 1)));
        game.reset();

        assert_eq!(game.generation(), stale + 1);
        assert_eq!(game.state(), &GameState::new());
        // A reply computed for the old session is dropped.
        assert_eq!(
            game.apply_if_current(stale, Move::step(pos(5, 2), pos(4, 3))),
            Transition::Ignored
        );
        assert_eq!(game.state().move_count, 0);
        assert!(matches!(
            game.apply_if_current(game.generation(), Move::step(pos(5, 2), pos(4, 3))),
            Transition::Moved { .. }
        ));
    }

    #[test]
    fn state_serializes_for_front_ends() {
        let json = serde_json::to_value(Game::new().state()).unwrap();
        assert_eq!(json["turn"], "cyan");
        assert_eq!(json["moveCount"], 0);
        assert_eq!(json["captures"]["cyan"], 0);
        assert_eq!(json["board"][0][1]["color"], "magenta");
        assert_eq!(json["board"][0][1]["isKing"], false);
        assert!(json["board"][0][0].is_null());
    }

    #[test]
    fn restored_state_must_be_well_formed() {
        let json = serde_json::to_value(Game::new().state()).unwrap();
        let state: GameState = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(Game::from_state(state).state(), Game::new().state());

        let mut light = json.clone();
        light["board"][4][4] = serde_json::json!({ "color": "cyan", "isKing": false });
        assert!(serde_json::from_value::<GameState>(light).is_err());

        let mut off_board = json;
        off_board["selected"] = serde_json::json!({ "row": 9, "col": 0 });
        assert!(serde_json::from_value::<GameState>(off_board).is_err());
    }
}
