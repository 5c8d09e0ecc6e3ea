//! Material values used by the move selectors and captured-piece display.

use crate::game_state::chess_types::*;
use crate::game_state::position::Position;
use crate::moves::pawn_moves::is_en_passant_capture;

/// Centipawn value of a role. The king is priced far above everything else.
#[inline]
pub const fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 100,
        PieceKind::Knight => 320,
        PieceKind::Bishop => 330,
        PieceKind::Rook => 500,
        PieceKind::Queen => 900,
        PieceKind::King => 20000,
    }
}

/// Value of whatever `mv` would capture in `position`, zero for quiet moves.
/// En-passant captures are worth a pawn even though the target is empty.
pub fn capture_value(position: &Position, mv: Move) -> i32 {
    let board = &position.board;
    let Some(mover) = board.piece_at(mv.from) else {
        return 0;
    };
    match board.piece_at(mv.to) {
        Some(target) if target.color != mover.color => piece_value(target.kind),
        Some(_) => 0,
        None => {
            if mover.kind == PieceKind::Pawn
                && is_en_passant_capture(position, mv.from, mv.to, mover.color)
            {
                piece_value(PieceKind::Pawn)
            } else {
                0
            }
        }
    }
}
