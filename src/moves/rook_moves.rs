//! Rook movement: orthogonal rays.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::ray_destinations;

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

#[inline]
pub fn rook_destinations(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    ray_destinations(board, from, color, &ROOK_DIRECTIONS, out);
}
