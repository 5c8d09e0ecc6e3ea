use crate::errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_rules::{kingside_rook_home, queenside_rook_home};
use crate::game_state::chess_types::*;
use crate::game_state::geometry::square_to_row_col;
use crate::game_state::position::Position;
use crate::moves::pawn_moves::en_passant_victim_square;

/// Board-level effect of one move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardChange {
    /// Piece as it stood on the origin square.
    pub moved: Piece,
    pub captured: Option<Piece>,
    pub kind: MoveKind,
}

/// Result of playing a move on a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedMove {
    pub next: Position,
    pub change: BoardChange,
}

/// Relocates the moving piece and performs the side effects that live on
/// the board: en-passant removal, castling rook relocation, promotion.
/// Rights, en-passant target and turn are left alone.
///
/// A promoting move without a role places a queen; the legality filter
/// relies on this because the promoted role never affects king safety.
/// Callers playing a real move validate the choice first.
pub fn apply_to_board(
    board: &mut Board,
    mv: Move,
    en_passant: Option<Square>,
) -> ChessResult<BoardChange> {
    let moved = board.take_piece(mv.from).ok_or(ChessError::InvalidMove {
        from: mv.from,
        to: mv.to,
    })?;
    let (from_row, from_col) = square_to_row_col(mv.from);
    let (to_row, to_col) = square_to_row_col(mv.to);

    let mut captured = board.take_piece(mv.to);
    let mut kind = if captured.is_some() {
        MoveKind::Capture
    } else {
        MoveKind::Quiet
    };

    match moved.kind {
        PieceKind::Pawn => {
            if captured.is_none() && from_col != to_col && en_passant == Some(mv.to) {
                captured = board.take_piece(en_passant_victim_square(mv.from, mv.to));
                kind = MoveKind::EnPassant;
            } else if from_row.abs_diff(to_row) == 2 {
                kind = MoveKind::DoublePawnPush;
            }
        }
        PieceKind::King if from_col.abs_diff(to_col) == 2 => {
            let (rook_from, rook_to, castle) = if to_col > from_col {
                (kingside_rook_home(moved.color), mv.to - 1, MoveKind::CastleKingside)
            } else {
                (queenside_rook_home(moved.color), mv.to + 1, MoveKind::CastleQueenside)
            };
            let rook = board.take_piece(rook_from);
            board.set_piece(rook_to, rook);
            kind = castle;
        }
        _ => {}
    }

    let placed = if moved.kind == PieceKind::Pawn && to_row == moved.color.promotion_row() {
        kind = if captured.is_some() {
            MoveKind::PromotionCapture
        } else {
            MoveKind::Promotion
        };
        Piece::new(moved.color, mv.promotion.unwrap_or(PieceKind::Queen))
    } else {
        moved
    };
    board.set_piece(mv.to, Some(placed));

    Ok(BoardChange {
        moved,
        captured,
        kind,
    })
}

/// Plays `mv` on a copy of `position`: board, castling rights, en-passant
/// target and side to move. No legality check is made.
pub fn apply_move(position: &Position, mv: Move) -> ChessResult<AppliedMove> {
    let mut next = *position;
    let change = apply_to_board(&mut next.board, mv, position.en_passant)?;

    update_castling_rights(&mut next.castling_rights, mv, change.moved);

    next.en_passant = if change.kind == MoveKind::DoublePawnPush {
        Some((mv.from + mv.to) / 2)
    } else {
        None
    };
    next.side_to_move = position.side_to_move.opposite();

    Ok(AppliedMove { next, change })
}

fn update_castling_rights(rights: &mut CastlingRights, mv: Move, moved: Piece) {
    if moved.kind == PieceKind::King {
        rights.clear_color(moved.color);
    }

    // Leaving a corner moves the rook; landing on one captures it.
    rights.clear_corner(mv.from);
    rights.clear_corner(mv.to);
}
