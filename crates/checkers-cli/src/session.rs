//! An interactive game between the terminal player and the computer.

use crate::config::CheckersConfig;
use crate::input::Command;
use checkers_ai::{ComputerPlayer, Difficulty};
use checkers_core::{Color, Move};
use checkers_engine::{Game, Transition};
use checkers_history::{HistoryStore, NewGameRecord};
use std::time::Duration;

/// The human always plays the first mover.
pub const HUMAN: Color = Color::Cyan;

/// What a player command did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    Played(Transition),
    Reset,
    Help,
    Quit,
}

pub struct Session {
    game: Game,
    computer: ComputerPlayer,
    player_name: String,
    difficulty: Difficulty,
    think_delay: Duration,
    /// Set once the current game has been written to the history.
    recorded: bool,
}

impl Session {
    pub fn new(config: &CheckersConfig) -> Self {
        Session {
            game: Game::new(),
            computer: ComputerPlayer::new(config.difficulty, HUMAN.opposite()),
            player_name: config.player_name.clone(),
            difficulty: config.difficulty,
            think_delay: Duration::from_millis(config.think_delay_ms),
            recorded: false,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Returns true when the computer should move next.
    pub fn computer_to_move(&self) -> bool {
        !self.game.is_over() && self.game.state().turn == self.computer.color
    }

    /// Applies a command typed by the player.
    pub fn handle(&mut self, command: Command) -> Reply {
        match command {
            Command::Quit => Reply::Quit,
            Command::Help => Reply::Help,
            Command::Reset => {
                self.game.reset();
                self.recorded = false;
                Reply::Reset
            }
            _ if self.game.state().turn != HUMAN => Reply::Played(Transition::Ignored),
            Command::Move(m) => Reply::Played(self.game.make_move(m)),
            Command::Square(pos) => {
                let result = match self.game.state().selected {
                    Some(from) if from != pos => self.game.make_move(Move::step(from, pos)),
                    _ => self.game.select(pos),
                };
                Reply::Played(result)
            }
        }
    }

    /// Lets the computer play its whole turn.
    ///
    /// Each step is searched on the blocking pool while the think delay runs,
    /// then applied only if no reset happened in between.
    pub async fn computer_turn(&mut self) -> anyhow::Result<Vec<Transition>> {
        let mut played = Vec::new();
        while self.computer_to_move() {
            let generation = self.game.generation();
            let state = self.game.state().clone();
            let computer = self.computer;

            let (planned, ()) = tokio::join!(
                tokio::task::spawn_blocking(move || computer.plan(&state)),
                tokio::time::sleep(self.think_delay),
            );
            let Some(m) = planned? else {
                break;
            };

            let result = self.game.apply_if_current(generation, m);
            played.push(result);
            if !matches!(result, Transition::Continued { .. }) {
                break;
            }
        }
        Ok(played)
    }

    /// Writes a finished game to `store`, once per game.
    ///
    /// A failed save is logged and otherwise ignored.
    pub fn record_outcome(&mut self, store: Option<&dyn HistoryStore>) {
        let Some(outcome) = self.game.outcome() else {
            return;
        };
        if self.recorded {
            return;
        }
        self.recorded = true;

        let Some(store) = store else {
            return;
        };
        let record =
            NewGameRecord::from_outcome(&outcome, &self.player_name, HUMAN, self.difficulty);
        if let Err(e) = store.save(&record) {
            tracing::error!(error = %e, "failed to save game record");
        }
    }
}
