//! Text rendering of a game for the terminal.

use checkers_core::{Color, Position, BOARD_SIZE};
use checkers_engine::GameState;

/// Draws the board with row and column indices.
///
/// The selected piece is bracketed and squares it can move to are marked
/// with `*`.
pub fn render_board(state: &GameState, targets: &[Position]) -> String {
    let header: String = (0..BOARD_SIZE).map(|col| format!(" {col} ")).collect();
    let mut out = format!("   {header}\n");

    for row in 0..BOARD_SIZE as u8 {
        out.push_str(&format!("{row}  "));
        for col in 0..BOARD_SIZE as u8 {
            let Some(pos) = Position::new(row, col) else {
                continue;
            };
            let ch = match state.board.piece_at(pos) {
                Some(piece) => piece.to_layout_char(),
                None if targets.contains(&pos) => '*',
                None if pos.is_dark() => '.',
                None => ' ',
            };
            let cell = if state.selected == Some(pos) {
                format!("[{ch}]")
            } else {
                format!(" {ch} ")
            };
            out.push_str(&cell);
        }
        out.push('\n');
    }
    out
}

/// One-line summary of whose turn it is and the score.
pub fn render_status(state: &GameState, human: Color) -> String {
    let side = |color: Color| if color == human { "you" } else { "computer" };
    let head = match (state.winner, state.pending_multi_jump) {
        (Some(winner), _) => format!("{winner} ({}) wins", side(winner)),
        (None, Some(at)) => format!(
            "{} ({}) must keep jumping from {at}",
            state.turn,
            side(state.turn)
        ),
        (None, None) => format!("{} ({}) to move", state.turn, side(state.turn)),
    };
    format!(
        "{head} | captures cyan {} magenta {} | moves {}",
        state.captures.cyan, state.captures.magenta, state.move_count
    )
}
