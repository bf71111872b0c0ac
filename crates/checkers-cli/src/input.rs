//! Parsing of commands typed during play.

use checkers_core::{Move, NotationError, Position};
use thiserror::Error;

/// Something the player asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// A square: selects a piece, or moves the selected piece there.
    Square(Position),
    /// A full move such as `50-41` or `32x14`.
    Move(Move),
    Reset,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("empty input")]
    Empty,
    #[error("'{0}' is not a square; use two digits row then column, e.g. 52")]
    InvalidSquare(String),
    #[error(transparent)]
    Notation(#[from] NotationError),
}

/// Parses one line of input.
pub fn parse_command(line: &str) -> Result<Command, InputError> {
    let input = line.trim();
    match input.to_ascii_lowercase().as_str() {
        "" => Err(InputError::Empty),
        "reset" | "r" => Ok(Command::Reset),
        "help" | "h" | "?" => Ok(Command::Help),
        "quit" | "q" | "exit" => Ok(Command::Quit),
        s if s.contains(['-', 'x']) => Ok(Command::Move(Move::from_notation(s)?)),
        s => Position::parse(s)
            .map(Command::Square)
            .ok_or_else(|| InputError::InvalidSquare(input.to_string())),
    }
}

pub const HELP: &str = "\
Commands:
  52        select the piece on row 5, column 2 (or move the selected piece there)
  52-43     move a piece one square diagonally
  52x34     jump over an opponent piece
  reset     start a new game
  quit      leave";
