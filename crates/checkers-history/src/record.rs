//! Game records.

use crate::HistoryError;
use checkers_ai::Difficulty;
use checkers_core::Color;
use checkers_engine::GameOutcome;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Which participant won a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerType {
    /// The human player.
    Player,
    /// The computer opponent.
    Ai,
}

impl PlayerType {
    /// Maps the winning color to a participant, given the human's color.
    pub fn from_winner(winner: Color, human: Color) -> Self {
        if winner == human {
            PlayerType::Player
        } else {
            PlayerType::Ai
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            PlayerType::Player => "player",
            PlayerType::Ai => "ai",
        }
    }
}

impl fmt::Display for PlayerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for PlayerType {
    type Err = HistoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "player" => Ok(PlayerType::Player),
            "ai" => Ok(PlayerType::Ai),
            other => Err(HistoryError::PlayerType(other.to_string())),
        }
    }
}

/// A finished game that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGameRecord {
    pub player_name: String,
    pub winner: PlayerType,
    pub difficulty: Difficulty,
    /// Completed turns over the whole game.
    pub moves: u32,
}

impl NewGameRecord {
    /// Builds a record for `outcome`, where the human played `human`.
    ///
    /// ```
    /// use checkers_ai::Difficulty;
    /// use checkers_core::Color;
    /// use checkers_engine::GameOutcome;
    /// use checkers_history::{NewGameRecord, PlayerType};
    ///
    /// let outcome = GameOutcome { winner: Color::Magenta, move_count: 31 };
    /// let record = NewGameRecord::from_outcome(&outcome, "ADA", Color::Cyan, Difficulty::Hard);
    /// assert_eq!(record.winner, PlayerType::Ai);
    /// assert_eq!(record.moves, 31);
    /// ```
    pub fn from_outcome(
        outcome: &GameOutcome,
        player_name: &str,
        human: Color,
        difficulty: Difficulty,
    ) -> Self {
        NewGameRecord {
            player_name: player_name.to_string(),
            winner: PlayerType::from_winner(outcome.winner, human),
            difficulty,
            moves: outcome.move_count,
        }
    }
}

/// A stored game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRecord {
    pub id: Uuid,
    pub player_name: String,
    pub winner: PlayerType,
    pub difficulty: Difficulty,
    pub moves: u32,
    pub created_at: DateTime<Utc>,
}

impl GameRecord {
    /// Returns true if the human won.
    pub fn is_victory(&self) -> bool {
        self.winner == PlayerType::Player
    }
}
