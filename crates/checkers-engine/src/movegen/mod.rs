//! Move generation.
//!
//! Moves are produced in a fixed order: by origin square in increasing row
//! then column, and for each origin by direction with `dr = -1` before
//! `dr = 1` and `dc = -1` before `dc = 1`. The search relies on this order
//! for reproducible tie-breaks.

pub mod perft;

use crate::Board;
use checkers_core::{Color, Move, Piece, Position};

const COLUMN_STEPS: [i8; 2] = [-1, 1];

/// Row directions a piece may travel in, in generation order.
fn row_steps(piece: Piece) -> &'static [i8] {
    if piece.is_king {
        &[-1, 1]
    } else {
        match piece.color {
            Color::Cyan => &[-1],
            Color::Magenta => &[1],
        }
    }
}

/// Appends the simple moves and jumps available to one piece.
fn piece_moves(
    board: &Board,
    from: Position,
    piece: Piece,
    steps: &mut Vec<Move>,
    jumps: &mut Vec<Move>,
) {
    for &dr in row_steps(piece) {
        for dc in COLUMN_STEPS {
            let Some(next) = from.offset(dr, dc) else {
                continue;
            };
            match board.piece_at(next) {
                None => steps.push(Move::step(from, next)),
                Some(other) if other.color != piece.color => {
                    if let Some(landing) = next.offset(dr, dc) {
                        if board.piece_at(landing).is_none() {
                            jumps.push(Move::jump(from, landing, next));
                        }
                    }
                }
                Some(_) => {}
            }
        }
    }
}

/// Generates the legal moves for `color`.
///
/// With `origin` set, only the piece on that square is considered; an empty
/// or opponent-occupied origin yields no moves. If any jump is available in
/// the scanned set, only jumps are returned (forced capture).
pub fn generate_moves(board: &Board, color: Color, origin: Option<Position>) -> Vec<Move> {
    let mut steps = Vec::new();
    let mut jumps = Vec::new();

    match origin {
        Some(from) => {
            if let Some(piece) = board.piece_at(from).filter(|p| p.color == color) {
                piece_moves(board, from, piece, &mut steps, &mut jumps);
            }
        }
        None => {
            for (from, piece) in board.pieces().filter(|(_, p)| p.color == color) {
                piece_moves(board, from, piece, &mut steps, &mut jumps);
            }
        }
    }

    if jumps.is_empty() {
        steps
    } else {
        jumps
    }
}

/// Returns true if `color` has at least one legal move.
pub fn has_moves(board: &Board, color: Color) -> bool {
    board
        .pieces()
        .filter(|(_, p)| p.color == color)
        .any(|(from, piece)| {
            let mut steps = Vec::new();
            let mut jumps = Vec::new();
            piece_moves(board, from, piece, &mut steps, &mut jumps);
            !steps.is_empty() || !jumps.is_empty()
        })
}

/// Returns the further jumps available to the piece that just landed on `at`.
///
/// Empty when the piece has no jump left, even if it still has simple moves.
pub fn continuation_jumps(board: &Board, color: Color, at: Position) -> Vec<Move> {
    let mut moves = generate_moves(board, color, Some(at));
    moves.retain(|m| m.is_jump());
    moves
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(row: u8, col: u8) -> Position {
        Position::new(row, col).unwrap()
    }

    fn board(layout: &str) -> Board {
        Board::from_layout(layout).unwrap()
    }

    #[test]
    fn start_has_seven_moves_per_side() {
        let start = Board::standard();
        assert_eq!(generate_moves(&start, Color::Cyan, None).len(), 7);
        assert_eq!(generate_moves(&start, Color::Magenta, None).len(), 7);
    }

    #[test]
    fn start_moves_are_ordered() {
        let moves = generate_moves(&Board::standard(), Color::Cyan, None);
        let notation: Vec<String> = moves.iter().map(|m| m.to_notation()).collect();
        assert_eq!(
            notation,
            vec!["50-41", "52-41", "52-43", "54-43", "54-45", "56-45", "56-47"]
        );
    }

    #[test]
    fn edge_piece_has_single_move() {
        let moves = generate_moves(&Board::standard(), Color::Cyan, Some(pos(5, 0)));
        assert_eq!(moves, vec![Move::step(pos(5, 0), pos(4, 1))]);
    }

    #[test]
    fn origin_of_wrong_color_or_empty_yields_nothing() {
        let start = Board::standard();
        assert!(generate_moves(&start, Color::Cyan, Some(pos(2, 1))).is_empty());
        assert!(generate_moves(&start, Color::Cyan, Some(pos(4, 1))).is_empty());
    }

    #[test]
    fn single_jump_scenario() {
        // Cyan at 32, Magenta at 23, 14 empty.
        let b = board("......../......../...m..../..c...../......../......../......../........");
        let moves = generate_moves(&b, Color::Cyan, Some(pos(3, 2)));
        assert_eq!(moves, vec![Move::jump(pos(3, 2), pos(1, 4), pos(2, 3))]);
    }

    #[test]
    fn forced_capture_suppresses_steps_across_board() {
        // The cyan man on 70 could step, but the one on 32 must jump.
        let b = board("......../......../...m..../..c...../......../......../......../c.......");
        let moves = generate_moves(&b, Color::Cyan, None);
        assert_eq!(moves, vec![Move::jump(pos(3, 2), pos(1, 4), pos(2, 3))]);
    }

    #[test]
    fn blocked_jump_is_not_generated() {
        // Landing square 14 is occupied by another magenta piece.
        let b = board("......../....m.../...m..../..c...../......../......../......../........");
        let moves = generate_moves(&b, Color::Cyan, Some(pos(3, 2)));
        assert_eq!(moves, vec![Move::step(pos(3, 2), pos(2, 1))]);
    }

    #[test]
    fn men_do_not_move_backwards() {
        let b = board("......../......../......../..c...../.m....../......../......../........");
        // Magenta on 41 sits behind the cyan man; no backward jump for a man.
        let moves = generate_moves(&b, Color::Cyan, Some(pos(3, 2)));
        assert_eq!(
            moves,
            vec![Move::step(pos(3, 2), pos(2, 1)), Move::step(pos(3, 2), pos(2, 3))]
        );
    }

    #[test]
    fn kings_move_both_ways_in_order() {
        let b = board("......../......../......../..C...../......../......../......../........");
        let moves = generate_moves(&b, Color::Cyan, Some(pos(3, 2)));
        assert_eq!(
            moves,
            vec![
                Move::step(pos(3, 2), pos(2, 1)),
                Move::step(pos(3, 2), pos(2, 3)),
                Move::step(pos(3, 2), pos(4, 1)),
                Move::step(pos(3, 2), pos(4, 3)),
            ]
        );
    }

    #[test]
    fn king_jumps_backwards() {
        let b = board("......../......../......../..C...../...m..../......../......../........");
        let moves = generate_moves(&b, Color::Cyan, None);
        assert_eq!(moves, vec![Move::jump(pos(3, 2), pos(5, 4), pos(4, 3))]);
    }

    #[test]
    fn has_moves_detects_blocked_side() {
        // The magenta man on 61 is wedged against Cyan's home row.
        let b = board("......../......../......../......../......../......../.m....../c.c.....");
        assert!(!has_moves(&b, Color::Magenta));
        assert!(generate_moves(&b, Color::Magenta, None).is_empty());
        assert!(has_moves(&b, Color::Cyan));
        assert!(!has_moves(&Board::empty(), Color::Cyan));
        assert!(has_moves(&Board::standard(), Color::Magenta));
    }

    #[test]
    fn continuation_jumps_ignore_steps() {
        let b = board("......../......../......../..c...../......../......../......../........");
        assert!(continuation_jumps(&b, Color::Cyan, pos(3, 2)).is_empty());
    }
}
