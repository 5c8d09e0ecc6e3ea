//! Canonical chess-rule constants.

use crate::game_state::chess_types::{Color, Square};
use crate::game_state::geometry::row_col_to_square;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

pub const KING_HOME_COL: u8 = 4;
pub const KINGSIDE_ROOK_COL: u8 = 7;
pub const QUEENSIDE_ROOK_COL: u8 = 0;

#[inline]
pub const fn king_home(color: Color) -> Square {
    row_col_to_square(color.back_row(), KING_HOME_COL)
}

#[inline]
pub const fn kingside_rook_home(color: Color) -> Square {
    row_col_to_square(color.back_row(), KINGSIDE_ROOK_COL)
}

#[inline]
pub const fn queenside_rook_home(color: Color) -> Square {
    row_col_to_square(color.back_row(), QUEENSIDE_ROOK_COL)
}

/// Row of the square a `mover` pawn passes over on its two-square advance.
#[inline]
pub const fn en_passant_target_row(mover: Color) -> u8 {
    match mover {
        Color::Light => 2,
        Color::Dark => 5,
    }
}
