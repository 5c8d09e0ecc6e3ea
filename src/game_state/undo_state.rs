use serde::{Deserialize, Serialize};

use crate::game_state::captured::CapturedPieces;
use crate::game_state::chess_types::*;
use crate::game_state::position::Position;

/// Full snapshot pushed before each applied move and restored verbatim on undo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UndoState {
    pub position: Position,
    pub captured: CapturedPieces,
    pub status: GameStatus,
}

/// One entry of the move log, kept in lockstep with the history stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub mv: Move,
    pub piece: Piece,
    pub captured: Option<Piece>,
    pub kind: MoveKind,
}
