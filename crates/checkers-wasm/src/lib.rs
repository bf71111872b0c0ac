//! WebAssembly bindings for the checkers engine.
//!
//! # Usage
//!
//! ```javascript
//! import init, { CheckersGame } from 'checkers-wasm';
//!
//! await init();
//!
//! const game = new CheckersGame("medium");
//! game.select(5, 2);
//! console.log(game.legalTargets()); // ["41", "43"]
//! game.makeMove(5, 2, 4, 3);
//!
//! const generation = game.generation();
//! setTimeout(() => game.computerMove(generation), 800);
//! ```

use checkers_ai::{ComputerPlayer, Difficulty};
use checkers_core::{Color, Move, Position};
use checkers_engine::{Game, Transition};
use wasm_bindgen::prelude::*;

/// A game against the computer that can be driven from JavaScript.
///
/// The human plays cyan and moves first.
#[wasm_bindgen]
pub struct CheckersGame {
    game: Game,
    computer: ComputerPlayer,
}

#[wasm_bindgen]
impl CheckersGame {
    /// Creates a new game at the given difficulty ("easy", "medium" or "hard").
    #[wasm_bindgen(constructor)]
    pub fn new(difficulty: &str) -> Result<CheckersGame, JsError> {
        let difficulty: Difficulty = difficulty
            .parse()
            .map_err(|e: checkers_ai::DifficultyError| JsError::new(&e.to_string()))?;
        Ok(Self::with_difficulty(difficulty))
    }

    /// Selects the piece on a square. Returns true if the selection was accepted.
    pub fn select(&mut self, row: u8, col: u8) -> bool {
        let Some(pos) = Position::new(row, col) else {
            return false;
        };
        matches!(self.game.select(pos), Transition::Selected(_))
    }

    /// Moves a piece, returning what happened: "moved", "continued",
    /// "finished", "selected" or "ignored".
    ///
    /// A move that is not legal is treated as a click on the target square.
    #[wasm_bindgen(js_name = makeMove)]
    pub fn make_move(&mut self, from_row: u8, from_col: u8, to_row: u8, to_col: u8) -> String {
        let (Some(from), Some(to)) = (
            Position::new(from_row, from_col),
            Position::new(to_row, to_col),
        ) else {
            return transition_name(Transition::Ignored).to_string();
        };
        transition_name(self.game.make_move(Move::step(from, to))).to_string()
    }

    /// Starts a new game. Pending computer moves for the old game are dropped.
    pub fn reset(&mut self) {
        self.game.reset();
    }

    /// Returns the full game state as a plain object.
    pub fn state(&self) -> Result<JsValue, JsError> {
        serde_wasm_bindgen::to_value(self.game.state()).map_err(|e| JsError::new(&e.to_string()))
    }

    /// Returns the squares (as "rc" strings) the selected piece can move to.
    #[wasm_bindgen(js_name = legalTargets)]
    pub fn legal_targets(&self) -> Vec<String> {
        self.game
            .legal_targets()
            .into_iter()
            .map(|pos| pos.to_string())
            .collect()
    }

    /// Lets the computer play its turn.
    ///
    /// `generation` is the value of [`generation`](Self::generation) when the
    /// move was scheduled; if the game was reset since, nothing is played.
    /// Returns the name of the last transition, as for `makeMove`.
    #[wasm_bindgen(js_name = computerMove)]
    pub fn computer_move(&mut self, generation: u32) -> String {
        if u64::from(generation) != self.game.generation() {
            return transition_name(Transition::Ignored).to_string();
        }
        transition_name(self.computer.take_turn(&mut self.game)).to_string()
    }

    /// Session counter, bumped on every reset.
    pub fn generation(&self) -> u32 {
        js_generation(self.game.generation())
    }

    /// Returns "cyan" or "magenta" once the game is won.
    pub fn winner(&self) -> Option<String> {
        self.game.state().winner.map(color_name)
    }

    /// Returns the side to move.
    pub fn turn(&self) -> String {
        color_name(self.game.state().turn)
    }

    /// Returns true when it is the computer's turn in a running game.
    #[wasm_bindgen(js_name = isComputerTurn)]
    pub fn is_computer_turn(&self) -> bool {
        !self.game.is_over() && self.game.state().turn == self.computer.color
    }

    pub fn difficulty(&self) -> String {
        self.computer.difficulty.to_string()
    }
}

impl CheckersGame {
    pub fn with_difficulty(difficulty: Difficulty) -> Self {
        CheckersGame {
            game: Game::new(),
            computer: ComputerPlayer::new(difficulty, Color::Magenta),
        }
    }
}

impl Default for CheckersGame {
    fn default() -> Self {
        Self::with_difficulty(Difficulty::default())
    }
}

/// Saturates at `u32::MAX`; past that point no scheduled move matches.
fn js_generation(generation: u64) -> u32 {
    u32::try_from(generation).unwrap_or(u32::MAX)
}

fn color_name(color: Color) -> String {
    match color {
        Color::Cyan => "cyan".to_string(),
        Color::Magenta => "magenta".to_string(),
    }
}

fn transition_name(transition: Transition) -> &'static str {
    match transition {
        Transition::Ignored => "ignored",
        Transition::Selected(_) => "selected",
        Transition::Moved { .. } => "moved",
        Transition::Continued { .. } => "continued",
        Transition::Finished(_) => "finished",
    }
}
