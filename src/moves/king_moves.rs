//! King movement, including castling.
//!
//! Castling safety is tested with the attack detector on the unchanged
//! board. The attack detector never generates castling itself, so the two
//! cannot recurse into each other.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::{king_home, kingside_rook_home, queenside_rook_home};
use crate::game_state::chess_types::*;
use crate::game_state::position::Position;
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_shared::step_destinations;

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (1, -1),
    (1, 0),
    (1, 1),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

#[inline]
pub fn king_steps(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    step_destinations(board, from, color, &KING_OFFSETS, out);
}

pub fn king_destinations(position: &Position, from: Square, color: Color, out: &mut Vec<Square>) {
    king_steps(&position.board, from, color, out);
    generate_castling_moves(position, from, color, out);
}

fn generate_castling_moves(position: &Position, from: Square, color: Color, out: &mut Vec<Square>) {
    let rights = position.castling_rights;
    if !rights.kingside(color) && !rights.queenside(color) {
        return;
    }

    let home = king_home(color);
    if from != home {
        return;
    }

    let board = &position.board;
    let enemy = color.opposite();
    let own_rook = Some(Piece::new(color, PieceKind::Rook));

    // Cannot castle out of check.
    if is_square_attacked(board, home, enemy) {
        return;
    }

    if rights.kingside(color)
        && board.piece_at(kingside_rook_home(color)) == own_rook
        && board.is_empty(home + 1)
        && board.is_empty(home + 2)
        && !is_square_attacked(board, home + 1, enemy)
        && !is_square_attacked(board, home + 2, enemy)
    {
        out.push(home + 2);
    }

    if rights.queenside(color)
        && board.piece_at(queenside_rook_home(color)) == own_rook
        && board.is_empty(home - 1)
        && board.is_empty(home - 2)
        && board.is_empty(home - 3)
        && !is_square_attacked(board, home - 1, enemy)
        && !is_square_attacked(board, home - 2, enemy)
    {
        out.push(home - 2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::fen_parser::parse_fen;

    fn king_targets(fen: &str, from: Square) -> Vec<Square> {
        let position = parse_fen(fen).expect("test FEN should parse");
        let color = position
            .board
            .color_at(from)
            .expect("test square should hold the king");
        let mut out = Vec::new();
        king_destinations(&position, from, color, &mut out);
        out.sort_unstable();
        out
    }

    #[test]
    fn both_castles_available_on_clear_back_rank() {
        let targets = king_targets("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1", 4);
        assert!(targets.contains(&6));
        assert!(targets.contains(&2));
    }

    #[test]
    fn castling_through_attacked_square_is_refused() {
        // Dark rook on f8 covers f1.
        let targets = king_targets("5r1k/8/8/8/8/8/8/R3K2R w KQ - 0 1", 4);
        assert!(!targets.contains(&6));
        assert!(targets.contains(&2));
    }

    #[test]
    fn castling_out_of_check_is_refused() {
        let targets = king_targets("4r2k/8/8/8/8/8/8/R3K2R w KQ - 0 1", 4);
        assert!(!targets.contains(&6));
        assert!(!targets.contains(&2));
    }

    #[test]
    fn queenside_b_file_may_be_attacked_but_not_occupied() {
        // Dark rook on b8 attacks b1 only; queenside castling stays legal.
        let targets = king_targets("1r5k/8/8/8/8/8/8/R3K2R w KQ - 0 1", 4);
        assert!(targets.contains(&2));

        let blocked = king_targets("7k/8/8/8/8/8/8/RN2K2R w KQ - 0 1", 4);
        assert!(!blocked.contains(&2));
    }

    #[test]
    fn lost_right_disables_castle() {
        let targets = king_targets("r3k2r/8/8/8/8/8/8/R3K2R w Qkq - 0 1", 4);
        assert!(!targets.contains(&6));
        assert!(targets.contains(&2));
    }
}
