//! Role dispatch for pseudo-legal generation.
//!
//! Destinations here obey movement patterns and occupancy but ignore whether
//! the mover's own king ends up attacked. The position passed in may be
//! hypothetical.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::position::Position;
use crate::moves::bishop_moves::bishop_destinations;
use crate::moves::king_moves::{king_destinations, king_steps};
use crate::moves::knight_moves::knight_destinations;
use crate::moves::pawn_moves::{pawn_attacks, pawn_destinations};
use crate::moves::queen_moves::queen_destinations;
use crate::moves::rook_moves::rook_destinations;

/// Pseudo-legal destinations of the piece on `from`, in generation order.
/// Empty when `from` is empty.
pub fn pseudo_legal_destinations(position: &Position, from: Square, out: &mut Vec<Square>) {
    let Some(piece) = position.board.piece_at(from) else {
        return;
    };
    let board = &position.board;
    match piece.kind {
        PieceKind::Pawn => pawn_destinations(position, from, piece.color, out),
        PieceKind::Knight => knight_destinations(board, from, piece.color, out),
        PieceKind::Bishop => bishop_destinations(board, from, piece.color, out),
        PieceKind::Rook => rook_destinations(board, from, piece.color, out),
        PieceKind::Queen => queen_destinations(board, from, piece.color, out),
        PieceKind::King => king_destinations(position, from, piece.color, out),
    }
}

/// Squares the piece on `from` threatens. Same patterns as
/// `pseudo_legal_destinations` except that pawns reach both forward
/// diagonals regardless of occupancy and kings never castle.
pub fn attack_reach(board: &Board, from: Square, out: &mut Vec<Square>) {
    let Some(piece) = board.piece_at(from) else {
        return;
    };
    match piece.kind {
        PieceKind::Pawn => pawn_attacks(from, piece.color, out),
        PieceKind::Knight => knight_destinations(board, from, piece.color, out),
        PieceKind::Bishop => bishop_destinations(board, from, piece.color, out),
        PieceKind::Rook => rook_destinations(board, from, piece.color, out),
        PieceKind::Queen => queen_destinations(board, from, piece.color, out),
        PieceKind::King => king_steps(board, from, piece.color, out),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_position_pseudo_moves_match_legal_count() {
        let position = Position::standard();
        let mut total = 0;
        for (square, piece) in position.board.occupied() {
            if piece.color != Color::Light {
                continue;
            }
            let mut out = Vec::new();
            pseudo_legal_destinations(&position, square, &mut out);
            total += out.len();
        }
        assert_eq!(total, 20);
    }

    #[test]
    fn empty_square_generates_nothing() {
        let mut out = Vec::new();
        pseudo_legal_destinations(&Position::standard(), 27, &mut out);
        attack_reach(&Board::standard(), 27, &mut out);
        assert!(out.is_empty());
    }
}
