//! Crate-wide error type.
//!
//! Every failure in the rules core is recoverable: an invalid request is
//! rejected without touching state, and a corrupt persisted blob is reported
//! so the caller can fall back to a fresh game.

use crate::game_state::chess_types::{Color, PieceKind, Square};

#[derive(Debug, thiserror::Error)]
pub enum ChessError {
    /// The destination is not among the legal destinations of `from`.
    #[error("Invalid move: {from} -> {to}")]
    InvalidMove { from: Square, to: Square },

    /// A pawn reached the last row but no promotion role was supplied.
    #[error("Move {from} -> {to} promotes a pawn and needs a promotion choice")]
    PromotionRequired { from: Square, to: Square },

    /// Pawns may only promote to queen, rook, bishop or knight.
    #[error("Cannot promote to {kind:?}")]
    InvalidPromotion { kind: PieceKind },

    /// The game already ended in checkmate or stalemate.
    #[error("The game is over")]
    GameOver,

    /// The session expected the other side to move.
    #[error("It is not {color:?}'s turn")]
    OutOfTurn { color: Color },

    #[error("No {color:?} king on the board")]
    NoKingFound { color: Color },

    /// A mutation would leave a side with other than exactly one king.
    #[error("{color:?} would have {count} kings")]
    KingInvariant { color: Color, count: usize },

    #[error("Corrupt game state: {message}")]
    CorruptState { message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unsupported save format version {version}")]
    UnsupportedFormat { version: u32 },

    /// A FEN string or coordinate could not be interpreted.
    #[error("Invalid setup: {message}")]
    InvalidSetup { message: String },
}

impl ChessError {
    pub(crate) fn corrupt(message: impl Into<String>) -> Self {
        ChessError::CorruptState {
            message: message.into(),
        }
    }

    pub(crate) fn setup(message: impl Into<String>) -> Self {
        ChessError::InvalidSetup {
            message: message.into(),
        }
    }
}

pub type ChessResult<T> = Result<T, ChessError>;
