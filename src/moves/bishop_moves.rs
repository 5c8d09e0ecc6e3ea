//! Bishop movement: diagonal rays.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::ray_destinations;

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

#[inline]
pub fn bishop_destinations(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    ray_destinations(board, from, color, &BISHOP_DIRECTIONS, out);
}

#[cfg(test)]
mod tests {
    use super::bishop_destinations;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::*;

    #[test]
    fn bishop_on_d4_of_empty_board_sees_thirteen_squares() {
        let mut out = Vec::new();
        bishop_destinations(&Board::empty(), 27, Color::Dark, &mut out);
        assert_eq!(out.len(), 13);
    }

    #[test]
    fn bishop_blocker_stops_ray() {
        let mut board = Board::empty();
        board.set_piece(20, Some(Piece::new(Color::Dark, PieceKind::Pawn)));
        let mut out = Vec::new();
        bishop_destinations(&board, 2, Color::Light, &mut out);

        // c1 reaches e3 as a capture but not f4 behind it.
        assert!(out.contains(&20));
        assert!(!out.contains(&29));
    }
}
