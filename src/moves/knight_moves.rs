use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::step_destinations;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

#[inline]
pub fn knight_destinations(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    step_destinations(board, from, color, &KNIGHT_OFFSETS, out);
}
