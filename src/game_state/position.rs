//! The slice of game state that move generation reads.
//!
//! A `Position` is small and `Copy`, so generators and the AI freely build
//! hypothetical positions without touching the live game.

use serde::{Deserialize, Serialize};

use crate::errors::ChessResult;
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{apply_move, AppliedMove};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub board: Board,
    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    /// Square passed over by the previous half-move's two-square pawn advance.
    pub en_passant: Option<Square>,
}

impl Position {
    pub fn standard() -> Self {
        Self {
            board: Board::standard(),
            side_to_move: Color::Light,
            castling_rights: CastlingRights::ALL,
            en_passant: None,
        }
    }

    /// Plays `mv` without any legality check. Board, rights, en-passant
    /// target and side to move are all updated.
    #[inline]
    pub fn play(&self, mv: Move) -> ChessResult<AppliedMove> {
        apply_move(self, mv)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::standard()
    }
}
