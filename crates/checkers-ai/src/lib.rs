//! Computer opponent for checkers.
//!
//! A depth-bounded minimax search with alpha-beta pruning over the rules in
//! `checkers-engine`, a material evaluation, and a [`ComputerPlayer`] that
//! plays whole turns (including its own multi-jumps) on a [`Game`].
//!
//! [`Game`]: checkers_engine::Game
//!
//! # Example
//!
//! ```
//! use checkers_ai::{ComputerPlayer, Difficulty};
//! use checkers_core::{Color, Move, Position};
//! use checkers_engine::Game;
//!
//! let mut game = Game::new();
//! let from = Position::new(5, 0).unwrap();
//! game.make_move(Move::step(from, Position::new(4, 1).unwrap()));
//!
//! let computer = ComputerPlayer::new(Difficulty::Easy, Color::Magenta);
//! computer.take_turn(&mut game);
//! assert_eq!(game.state().turn, Color::Cyan);
//! ```

mod difficulty;
mod evaluation;
mod player;
mod search;

pub use difficulty::{Difficulty, DifficultyError};
pub use evaluation::{evaluate, KING_VALUE, MAN_VALUE};
pub use player::ComputerPlayer;
pub use search::{Searcher, WIN_SCORE};
