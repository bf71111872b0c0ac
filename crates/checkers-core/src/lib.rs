//! Core types for checkers.
//!
//! This crate provides the fundamental types used across the checkers engine:
//! - [`Piece`] and [`Color`] for piece representation
//! - [`Position`] for board coordinates
//! - [`Move`] for move representation and notation
//! - Board layout parsing and serialization

mod color;
mod layout;
mod mov;
mod piece;
mod position;

pub use color::Color;
pub use layout::{parse_layout, LayoutError, BOARD_SIZE, STARTING_LAYOUT};
pub use mov::{Move, NotationError};
pub use piece::Piece;
pub use position::{OffBoardError, Position};
