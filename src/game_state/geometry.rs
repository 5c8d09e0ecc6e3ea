//! Square index helpers.
//!
//! Pure conversions between flat indices and `(row, col)` pairs. Row 0 is
//! the Light back rank, column 0 is the a-file. Nothing here validates
//! input beyond what the signature promises.

use crate::game_state::chess_types::Square;

#[inline]
pub const fn square_to_row_col(square: Square) -> (u8, u8) {
    (square / 8, square % 8)
}

#[inline]
pub const fn row_col_to_square(row: u8, col: u8) -> Square {
    row * 8 + col
}

#[inline]
pub const fn is_in_bounds(row: i8, col: i8) -> bool {
    row >= 0 && row < 8 && col >= 0 && col < 8
}

/// Steps `square` by `(d_row, d_col)`, or `None` when that leaves the board.
#[inline]
pub const fn offset_square(square: Square, d_row: i8, d_col: i8) -> Option<Square> {
    let row = (square / 8) as i8 + d_row;
    let col = (square % 8) as i8 + d_col;
    if is_in_bounds(row, col) {
        Some(row_col_to_square(row as u8, col as u8))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_and_row_col_are_bijective() {
        for square in 0..64u8 {
            let (row, col) = square_to_row_col(square);
            assert_eq!(row_col_to_square(row, col), square);
        }
    }

    #[test]
    fn offsets_stop_at_board_edges() {
        assert_eq!(offset_square(0, -1, 0), None);
        assert_eq!(offset_square(7, 0, 1), None);
        assert_eq!(offset_square(27, 1, 1), Some(36));
        assert_eq!(offset_square(63, 1, 0), None);
    }
}
