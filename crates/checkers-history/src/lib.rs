//! Game history for checkers.
//!
//! Finished games are stored as [`GameRecord`]s behind the [`HistoryStore`]
//! trait. [`SqliteHistoryStore`] keeps them in a SQLite database file.

mod record;
mod sqlite;

pub use record::{GameRecord, NewGameRecord, PlayerType};
pub use sqlite::SqliteHistoryStore;

use checkers_ai::DifficultyError;
use thiserror::Error;

/// Errors that can occur when reading or writing game history.
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("failed to create history directory: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid timestamp in history: {0}")]
    Timestamp(#[from] chrono::ParseError),

    #[error("invalid record id in history: {0}")]
    Id(#[from] uuid::Error),

    #[error("unknown player type '{0}'")]
    PlayerType(String),

    #[error(transparent)]
    Difficulty(#[from] DifficultyError),
}

/// Storage for finished games.
pub trait HistoryStore {
    /// Stores a finished game and returns it with its id and timestamp.
    fn save(&self, record: &NewGameRecord) -> Result<GameRecord, HistoryError>;

    /// Returns every stored game, newest first.
    fn list(&self) -> Result<Vec<GameRecord>, HistoryError>;
}
