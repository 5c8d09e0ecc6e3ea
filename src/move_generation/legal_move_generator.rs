//! Legal move generation.
//!
//! Every pseudo-legal destination is played on a copy of the board and kept
//! only if the mover's king is not attacked afterwards. That simulation is
//! the only legality test; no pin or check-evasion shortcuts are taken.

use crate::game_state::chess_types::*;
use crate::game_state::geometry::square_to_row_col;
use crate::game_state::position::Position;
use crate::move_generation::legal_move_apply::apply_to_board;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::pseudo_legal::pseudo_legal_destinations;

/// Legal destinations of the piece on `from`. Empty when `from` is out of
/// range, empty, or holds a piece of the side not to move.
pub fn legal_destinations(position: &Position, from: Square) -> Vec<Square> {
    if from >= 64 {
        return Vec::new();
    }
    let Some(piece) = position.board.piece_at(from) else {
        return Vec::new();
    };
    if piece.color != position.side_to_move {
        return Vec::new();
    }

    let mut pseudo = Vec::with_capacity(28);
    pseudo_legal_destinations(position, from, &mut pseudo);
    pseudo.retain(|&to| leaves_king_safe(position, Move::new(from, to), piece.color));
    pseudo
}

fn leaves_king_safe(position: &Position, mv: Move, mover: Color) -> bool {
    let mut board = position.board;
    match apply_to_board(&mut board, mv, position.en_passant) {
        Ok(_) => !is_king_in_check(&board, mover),
        Err(_) => false,
    }
}

/// True when the pawn move `from -> to` lands on its promotion row.
pub fn is_promotion_move(position: &Position, from: Square, to: Square) -> bool {
    match position.board.piece_at(from) {
        Some(piece) if piece.kind == PieceKind::Pawn => {
            square_to_row_col(to).0 == piece.color.promotion_row()
        }
        _ => false,
    }
}

/// All legal moves for the side to move, scanning squares in index order.
/// A promoting destination yields one move per promotion role, queen first.
pub fn legal_moves(position: &Position) -> Vec<Move> {
    let mut moves = Vec::with_capacity(48);
    for (from, piece) in position.board.occupied() {
        if piece.color != position.side_to_move {
            continue;
        }
        for to in legal_destinations(position, from) {
            if is_promotion_move(position, from, to) {
                moves.extend(
                    PieceKind::PROMOTION_CHOICES
                        .iter()
                        .map(|&kind| Move::with_promotion(from, to, kind)),
                );
            } else {
                moves.push(Move::new(from, to));
            }
        }
    }
    moves
}

pub fn has_any_legal_move(position: &Position) -> bool {
    position
        .board
        .occupied()
        .filter(|(_, piece)| piece.color == position.side_to_move)
        .any(|(from, _)| !legal_destinations(position, from).is_empty())
}

/// Status of `position` judged from the side to move's options.
pub fn evaluate_status(position: &Position) -> GameStatus {
    if has_any_legal_move(position) {
        GameStatus::Ongoing
    } else if is_king_in_check(&position.board, position.side_to_move) {
        GameStatus::Checkmate {
            winner: position.side_to_move.opposite(),
        }
    } else {
        GameStatus::Stalemate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::fen_parser::parse_fen;

    #[test]
    fn start_position_has_twenty_moves() {
        let moves = legal_moves(&Position::standard());
        assert_eq!(moves.len(), 20);
        let knight_moves = moves.iter().filter(|mv| mv.from == 1 || mv.from == 6).count();
        assert_eq!(knight_moves, 4);
    }

    #[test]
    fn pinned_piece_cannot_leave_the_pin_line() {
        // Light bishop d2 is pinned by the Dark bishop on b4 against the king on e1.
        let position = parse_fen("4k3/8/8/8/1b6/8/3B4/4K3 w - - 0 1").expect("FEN should parse");
        let destinations = legal_destinations(&position, 11);
        assert_eq!(destinations, vec![18, 25]);
    }

    #[test]
    fn king_may_not_step_into_attack() {
        let position = parse_fen("4k3/8/8/8/8/8/r7/4K3 w - - 0 1").expect("FEN should parse");
        let mut destinations = legal_destinations(&position, 4);
        destinations.sort_unstable();
        // Second row is covered by the rook on a2.
        assert_eq!(destinations, vec![3, 5]);
    }

    #[test]
    fn other_sides_pieces_have_no_destinations() {
        let position = Position::standard();
        assert!(legal_destinations(&position, 52).is_empty());
        assert!(legal_destinations(&position, 30).is_empty());
        assert!(legal_destinations(&position, 200).is_empty());
    }

    #[test]
    fn promotions_expand_to_four_roles() {
        let position = parse_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let promotions: Vec<Move> = legal_moves(&position)
            .into_iter()
            .filter(|mv| mv.from == 48)
            .collect();
        assert_eq!(
            promotions,
            vec![
                Move::with_promotion(48, 56, PieceKind::Queen),
                Move::with_promotion(48, 56, PieceKind::Rook),
                Move::with_promotion(48, 56, PieceKind::Bishop),
                Move::with_promotion(48, 56, PieceKind::Knight),
            ]
        );
    }

    #[test]
    fn no_returned_move_leaves_own_king_attacked() {
        let fens = [
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
            "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
            "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
        ];
        for fen in fens {
            let position = parse_fen(fen).expect("FEN should parse");
            for mv in legal_moves(&position) {
                let applied = position.play(mv).expect("legal move should apply");
                assert!(
                    !is_king_in_check(&applied.next.board, position.side_to_move),
                    "{mv:?} exposes the king in {fen}"
                );
            }
        }
    }

    #[test]
    fn stalemate_and_checkmate_are_told_apart() {
        let stalemate = parse_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").expect("FEN should parse");
        assert_eq!(evaluate_status(&stalemate), GameStatus::Stalemate);

        let mate = parse_fen("7k/6Q1/6K1/8/8/8/8/8 b - - 0 1").expect("FEN should parse");
        assert_eq!(
            evaluate_status(&mate),
            GameStatus::Checkmate {
                winner: Color::Light
            }
        );
    }
}
