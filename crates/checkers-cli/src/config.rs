//! Configuration file loading.
//!
//! Settings are read from `checkers.toml` in the working directory. Every
//! field is optional and a missing file means all defaults.

use checkers_ai::Difficulty;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading the configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Player and game settings.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct CheckersConfig {
    /// Name recorded in the game history.
    #[serde(default = "default_player_name")]
    pub player_name: String,
    /// Strength of the computer opponent.
    #[serde(default)]
    pub difficulty: Difficulty,
    /// Pause before the computer moves, in milliseconds.
    #[serde(default = "default_think_delay_ms")]
    pub think_delay_ms: u64,
    /// SQLite database holding finished games.
    #[serde(default = "default_history_db")]
    pub history_db: PathBuf,
}

fn default_player_name() -> String {
    "GUEST".to_string()
}

fn default_think_delay_ms() -> u64 {
    800
}

fn default_history_db() -> PathBuf {
    PathBuf::from("data/history.db")
}

impl Default for CheckersConfig {
    fn default() -> Self {
        CheckersConfig {
            player_name: default_player_name(),
            difficulty: Difficulty::default(),
            think_delay_ms: default_think_delay_ms(),
            history_db: default_history_db(),
        }
    }
}

impl CheckersConfig {
    /// Loads the configuration from [`Self::config_path()`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// or [`ConfigError::ParseError`] if the file contains invalid TOML.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Self::config_path())
    }

    /// Loads the configuration from `path`, or the defaults if it does not exist.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Ok(toml::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    pub fn config_path() -> PathBuf {
        PathBuf::from("checkers.toml")
    }

    /// Applies command-line overrides on top of the file values.
    pub fn with_overrides(
        mut self,
        player_name: Option<String>,
        difficulty: Option<Difficulty>,
        think_delay_ms: Option<u64>,
    ) -> Self {
        if let Some(name) = player_name {
            self.player_name = name;
        }
        if let Some(difficulty) = difficulty {
            self.difficulty = difficulty;
        }
        if let Some(ms) = think_delay_ms {
            self.think_delay_ms = ms;
        }
        self
    }
}
