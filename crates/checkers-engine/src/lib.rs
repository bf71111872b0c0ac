//! Checkers rules engine.
//!
//! This crate provides:
//! - [`Board`] - the 8x8 grid of pieces, a plain `Copy` value
//! - Move generation with forced captures ([`generate_moves`])
//! - Move application with captures and promotion ([`apply_move`])
//! - [`RuleSet`] - trait bundling the rules, implemented by [`StandardCheckers`]
//! - [`Game`] - the turn controller owning a [`GameState`]
//!
//! # Example
//!
//! ```
//! use checkers_core::{Color, Move, Position};
//! use checkers_engine::{Game, Transition};
//!
//! let mut game = Game::new();
//! let from = Position::new(5, 0).unwrap();
//! let to = Position::new(4, 1).unwrap();
//!
//! assert!(matches!(game.select(from), Transition::Selected(_)));
//! assert!(matches!(game.make_move(Move::step(from, to)), Transition::Moved { .. }));
//! assert_eq!(game.state().turn, Color::Magenta);
//! ```

mod board;
mod game;
pub mod movegen;
pub mod rules;

pub use board::Board;
pub use game::{CaptureCount, Game, GameOutcome, GameState, Phase, Transition};
pub use movegen::{continuation_jumps, generate_moves, has_moves};
pub use rules::{apply_move, RuleSet, StandardCheckers};
