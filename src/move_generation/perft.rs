//! Perft: exhaustive legal-move tree counts used to validate generation.
//!
//! Leaf statistics follow the usual conventions: a leaf counts as a capture,
//! en passant, castle or promotion according to the move that reached it,
//! and as a check when the side to move there is in check.

use crate::errors::ChessResult;
use crate::game_state::chess_types::{Move, MoveKind};
use crate::game_state::position::Position;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::{has_any_legal_move, legal_moves};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
    pub checks: u64,
    pub checkmates: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

pub fn perft(position: &Position, depth: u8) -> ChessResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut total = PerftCounts::default();
    for mv in legal_moves(position) {
        let applied = position.play(mv)?;
        if depth == 1 {
            let kind = applied.change.kind;
            let mut leaf = PerftCounts {
                nodes: 1,
                ..PerftCounts::default()
            };
            if kind.is_capture() {
                leaf.captures = 1;
            }
            if kind == MoveKind::EnPassant {
                leaf.en_passant = 1;
            }
            if kind.is_castle() {
                leaf.castles = 1;
            }
            if kind.is_promotion() {
                leaf.promotions = 1;
            }
            let next = &applied.next;
            if is_king_in_check(&next.board, next.side_to_move) {
                leaf.checks = 1;
                if !has_any_legal_move(next) {
                    leaf.checkmates = 1;
                }
            }
            total.merge(leaf);
        } else {
            total.merge(perft(&applied.next, depth - 1)?);
        }
    }

    Ok(total)
}

/// Leaf count per root move, in generation order.
pub fn perft_divide(position: &Position, depth: u8) -> ChessResult<Vec<(Move, u64)>> {
    let mut out = Vec::new();
    if depth == 0 {
        return Ok(out);
    }
    for mv in legal_moves(position) {
        let applied = position.play(mv)?;
        out.push((mv, perft(&applied.next, depth - 1)?.nodes));
    }
    Ok(out)
}
