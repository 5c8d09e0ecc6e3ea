//! Destination walkers shared by every piece role.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::geometry::offset_square;

/// Fixed-offset movement (knight, king). A destination is kept when it is on
/// the board and not occupied by a piece of `color`.
pub fn step_destinations(
    board: &Board,
    from: Square,
    color: Color,
    offsets: &[(i8, i8)],
    out: &mut Vec<Square>,
) {
    for &(d_row, d_col) in offsets {
        let Some(to) = offset_square(from, d_row, d_col) else {
            continue;
        };
        if board.color_at(to) != Some(color) {
            out.push(to);
        }
    }
}

/// Sliding movement (bishop, rook, queen). Each ray stops before the first
/// friendly piece, or on the first enemy piece, or at the board edge.
pub fn ray_destinations(
    board: &Board,
    from: Square,
    color: Color,
    directions: &[(i8, i8)],
    out: &mut Vec<Square>,
) {
    for &(d_row, d_col) in directions {
        let mut current = from;
        while let Some(to) = offset_square(current, d_row, d_col) {
            match board.color_at(to) {
                None => out.push(to),
                Some(occupant) => {
                    if occupant != color {
                        out.push(to);
                    }
                    break;
                }
            }
            current = to;
        }
    }
}
