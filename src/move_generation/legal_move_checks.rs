//! Attack and check queries.
//!
//! Plain scans over all 64 cells; no incremental attack maps are kept.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::pseudo_legal::attack_reach;

/// True when any `attacker_color` piece on `board` reaches `square`.
pub fn is_square_attacked(board: &Board, square: Square, attacker_color: Color) -> bool {
    let mut reach = Vec::with_capacity(28);
    for (from, piece) in board.occupied() {
        if piece.color != attacker_color {
            continue;
        }
        reach.clear();
        attack_reach(board, from, &mut reach);
        if reach.contains(&square) {
            return true;
        }
    }
    false
}

/// Every `attacker_color` piece reaching `square`.
pub fn attackers_to_square(board: &Board, square: Square, attacker_color: Color) -> Vec<(Square, PieceKind)> {
    let mut attackers = Vec::new();
    let mut reach = Vec::with_capacity(28);
    for (from, piece) in board.occupied() {
        if piece.color != attacker_color {
            continue;
        }
        reach.clear();
        attack_reach(board, from, &mut reach);
        if reach.contains(&square) {
            attackers.push((from, piece.kind));
        }
    }
    attackers
}

/// A side with no king on the board counts as in check. Only a corrupted
/// board can lack a king.
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    match board.king_square(color) {
        Some(king_sq) => is_square_attacked(board, king_sq, color.opposite()),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::fen_parser::parse_fen;

    #[test]
    fn pawns_attack_empty_diagonals() {
        let board = Board::standard();
        // e2 pawn covers d3 and f3; d3 is empty.
        assert!(is_square_attacked(&board, 19, Color::Light));
        assert!(is_square_attacked(&board, 21, Color::Light));
        assert!(!is_square_attacked(&board, 28, Color::Light));
    }

    #[test]
    fn blocked_slider_does_not_attack() {
        let position = parse_fen("4k3/8/8/8/8/8/4P3/4R1K1 w - - 0 1").expect("FEN should parse");
        // Rook e1 is blocked by its own pawn on e2.
        assert!(!is_square_attacked(&position.board, 60, Color::Light));
        assert!(is_square_attacked(&position.board, 3, Color::Light));
    }

    #[test]
    fn missing_king_counts_as_check() {
        let board = Board::empty();
        assert!(is_king_in_check(&board, Color::Light));
    }

    #[test]
    fn attackers_lists_each_checking_piece() {
        let position =
            parse_fen("4k3/8/8/8/8/5n2/8/4r1K1 w - - 0 1").expect("FEN should parse");
        let mut attackers = attackers_to_square(&position.board, 6, Color::Dark);
        attackers.sort_unstable_by_key(|(square, _)| *square);
        assert_eq!(
            attackers,
            vec![(4, PieceKind::Rook), (21, PieceKind::Knight)]
        );
        assert!(is_king_in_check(&position.board, Color::Light));
    }
}
