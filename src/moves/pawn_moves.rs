//! Pawn movement.
//!
//! Pawns are the only role whose moving pattern differs from its attacking
//! pattern, so two entry points exist: `pawn_destinations` for moves and
//! `pawn_attacks` for the squares a pawn threatens.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::geometry::{offset_square, row_col_to_square, square_to_row_col};
use crate::game_state::position::Position;

const CAPTURE_COLS: [i8; 2] = [-1, 1];

pub fn pawn_destinations(position: &Position, from: Square, color: Color, out: &mut Vec<Square>) {
    let board = &position.board;
    let forward = color.forward();
    let (row, _) = square_to_row_col(from);

    if let Some(one_step) = offset_square(from, forward, 0) {
        if board.is_empty(one_step) {
            out.push(one_step);

            if row == color.pawn_row() {
                if let Some(two_step) = offset_square(from, 2 * forward, 0) {
                    if board.is_empty(two_step) {
                        out.push(two_step);
                    }
                }
            }
        }
    }

    for d_col in CAPTURE_COLS {
        let Some(to) = offset_square(from, forward, d_col) else {
            continue;
        };
        match board.color_at(to) {
            Some(occupant) if occupant != color => out.push(to),
            Some(_) => {}
            None => {
                if is_en_passant_capture(position, from, to, color) {
                    out.push(to);
                }
            }
        }
    }
}

/// Both forward diagonals, whether or not anything stands there.
pub fn pawn_attacks(from: Square, color: Color, out: &mut Vec<Square>) {
    for d_col in CAPTURE_COLS {
        if let Some(to) = offset_square(from, color.forward(), d_col) {
            out.push(to);
        }
    }
}

/// `to` is the live en-passant target and an enemy pawn sits beside `from`,
/// on the row the capturing pawn starts from.
pub fn is_en_passant_capture(position: &Position, from: Square, to: Square, color: Color) -> bool {
    if position.en_passant != Some(to) {
        return false;
    }
    en_passant_victim(&position.board, from, to)
        .map(|victim| victim == Piece::new(color.opposite(), PieceKind::Pawn))
        .unwrap_or(false)
}

/// Square of the pawn removed by an en-passant capture from `from` to `to`.
#[inline]
pub fn en_passant_victim_square(from: Square, to: Square) -> Square {
    let (from_row, _) = square_to_row_col(from);
    let (_, to_col) = square_to_row_col(to);
    row_col_to_square(from_row, to_col)
}

fn en_passant_victim(board: &Board, from: Square, to: Square) -> Option<Piece> {
    board.piece_at(en_passant_victim_square(from, to))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lone_pawn(square: Square, color: Color) -> Position {
        let mut position = Position::standard();
        position.board = Board::empty();
        position
            .board
            .set_piece(square, Some(Piece::new(color, PieceKind::Pawn)));
        position
    }

    #[test]
    fn start_row_pawn_can_advance_one_or_two() {
        let position = Position::standard();
        let mut out = Vec::new();
        pawn_destinations(&position, 12, Color::Light, &mut out);
        assert_eq!(out, vec![20, 28]);
    }

    #[test]
    fn blocked_pawn_cannot_jump() {
        let mut position = lone_pawn(12, Color::Light);
        position
            .board
            .set_piece(20, Some(Piece::new(Color::Dark, PieceKind::Knight)));
        let mut out = Vec::new();
        pawn_destinations(&position, 12, Color::Light, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn pawn_steps_once_when_only_the_second_square_is_blocked() {
        let mut position = lone_pawn(12, Color::Light);
        position
            .board
            .set_piece(28, Some(Piece::new(Color::Dark, PieceKind::Knight)));
        let mut out = Vec::new();
        pawn_destinations(&position, 12, Color::Light, &mut out);
        assert_eq!(out, vec![20]);
    }

    #[test]
    fn dark_pawn_moves_toward_row_zero() {
        let position = lone_pawn(52, Color::Dark);
        let mut out = Vec::new();
        pawn_destinations(&position, 52, Color::Dark, &mut out);
        assert_eq!(out, vec![44, 36]);
    }

    #[test]
    fn pawn_attacks_ignore_occupancy_and_edges() {
        let mut out = Vec::new();
        pawn_attacks(8, Color::Light, &mut out);
        assert_eq!(out, vec![17]);

        out.clear();
        pawn_attacks(36, Color::Dark, &mut out);
        assert_eq!(out, vec![27, 29]);
    }

    #[test]
    fn en_passant_target_is_reachable_only_beside_the_advanced_pawn() {
        // Light pawn e5, Dark pawn just advanced d7-d5.
        let mut position = lone_pawn(36, Color::Light);
        position
            .board
            .set_piece(35, Some(Piece::new(Color::Dark, PieceKind::Pawn)));
        position.en_passant = Some(43);

        let mut out = Vec::new();
        pawn_destinations(&position, 36, Color::Light, &mut out);
        assert!(out.contains(&43));
        assert_eq!(en_passant_victim_square(36, 43), 35);

        position.board.set_piece(35, None);
        out.clear();
        pawn_destinations(&position, 36, Color::Light, &mut out);
        assert!(!out.contains(&43));
    }
}
