use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::ray_destinations;

pub const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

#[inline]
pub fn queen_destinations(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    ray_destinations(board, from, color, &QUEEN_DIRECTIONS, out);
}
