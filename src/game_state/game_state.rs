//! Game state controller.
//!
//! `GameState` owns the live position together with the captured pieces, the
//! terminal status, the snapshot history used by undo and the move log.
//! Every mutation goes through `apply_move`, which validates the request,
//! builds the next position on a copy and commits only once the king
//! invariant holds.

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use crate::errors::{ChessError, ChessResult};
use crate::game_state::captured::CapturedPieces;
use crate::game_state::chess_rules::en_passant_target_row;
use crate::game_state::chess_types::*;
use crate::game_state::geometry::square_to_row_col;
use crate::game_state::position::Position;
use crate::game_state::undo_state::MoveRecord;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::{
    evaluate_status, is_promotion_move, legal_destinations, legal_moves,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub position: Position,
    pub captured: CapturedPieces,
    pub status: GameStatus,
    pub history: Vec<UndoState>,
    pub move_log: Vec<MoveRecord>,
}

/// Result of a successfully applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub record: MoveRecord,
    pub status: GameStatus,
    /// The side now to move is in check.
    pub gives_check: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Standard initial arrangement, Light to move, all castling rights.
    pub fn new_game() -> Self {
        Self {
            position: Position::standard(),
            captured: CapturedPieces::default(),
            status: GameStatus::Ongoing,
            history: Vec::new(),
            move_log: Vec::new(),
        }
    }

    /// Starts a game from an arbitrary position. The position must hold
    /// exactly one king per color.
    pub fn from_position(position: Position) -> ChessResult<Self> {
        let mut state = Self {
            position,
            captured: CapturedPieces::default(),
            status: GameStatus::Ongoing,
            history: Vec::new(),
            move_log: Vec::new(),
        };
        state.validate()?;
        state.refresh_status();
        Ok(state)
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.position.side_to_move
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Legal destinations of the piece on `from`; empty once the game is over.
    pub fn legal_destinations(&self, from: Square) -> Vec<Square> {
        if self.is_over() {
            return Vec::new();
        }
        legal_destinations(&self.position, from)
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        if self.is_over() {
            return Vec::new();
        }
        legal_moves(&self.position)
    }

    pub fn is_in_check(&self) -> bool {
        is_king_in_check(&self.position.board, self.position.side_to_move)
    }

    /// Recomputes the terminal status from the live position.
    pub fn refresh_status(&mut self) -> GameStatus {
        self.status = evaluate_status(&self.position);
        self.status
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// Applies one move. A rejected request leaves the state untouched.
    pub fn apply_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> ChessResult<MoveOutcome> {
        if self.is_over() {
            warn!(from, to, "move rejected: game is over");
            return Err(ChessError::GameOver);
        }
        if from >= 64 || to >= 64 || !legal_destinations(&self.position, from).contains(&to) {
            warn!(from, to, "move rejected: not a legal destination");
            return Err(ChessError::InvalidMove { from, to });
        }

        let promotes = is_promotion_move(&self.position, from, to);
        match (promotes, promotion) {
            (true, None) => {
                warn!(from, to, "move rejected: promotion choice missing");
                return Err(ChessError::PromotionRequired { from, to });
            }
            (true, Some(kind)) if !kind.is_promotion_choice() => {
                warn!(from, to, ?kind, "move rejected: invalid promotion role");
                return Err(ChessError::InvalidPromotion { kind });
            }
            (false, Some(_)) => {
                warn!(from, to, "move rejected: promotion on a non-promoting move");
                return Err(ChessError::InvalidMove { from, to });
            }
            _ => {}
        }

        let mv = Move {
            from,
            to,
            promotion,
        };
        let applied = self.position.play(mv)?;
        for color in [Color::Light, Color::Dark] {
            let count = applied.next.board.king_count(color);
            if count != 1 {
                error!(?mv, ?color, count, "king invariant violated by move");
                return Err(ChessError::KingInvariant { color, count });
            }
        }

        self.history.push(UndoState {
            position: self.position,
            captured: self.captured.clone(),
            status: self.status,
        });
        let record = MoveRecord {
            mv,
            piece: applied.change.moved,
            captured: applied.change.captured,
            kind: applied.change.kind,
        };
        self.move_log.push(record);
        if let Some(piece) = record.captured {
            self.captured.add_capture(piece);
        }
        self.position = applied.next;
        let status = self.refresh_status();
        let gives_check = self.is_in_check();

        debug!(?mv, kind = ?record.kind, gives_check, "applied move");
        if status.is_over() {
            info!(?status, plies = self.move_log.len(), "game finished");
        }

        Ok(MoveOutcome {
            record,
            status,
            gives_check,
        })
    }

    #[inline]
    pub fn play_move(&mut self, mv: Move) -> ChessResult<MoveOutcome> {
        self.apply_move(mv.from, mv.to, mv.promotion)
    }

    /// Pops one snapshot. Returns false when there is nothing to undo.
    pub fn undo_ply(&mut self) -> bool {
        let Some(snapshot) = self.history.pop() else {
            return false;
        };
        self.move_log.pop();
        self.position = snapshot.position;
        self.captured = snapshot.captured;
        self.status = snapshot.status;
        true
    }

    /// Undoes a human and computer ply pair, or a single ply when only one
    /// exists. Returns the number of plies undone.
    pub fn undo(&mut self) -> usize {
        let plies = self.history.len().min(2);
        for _ in 0..plies {
            self.undo_ply();
        }
        if plies > 0 {
            info!(plies, "undo");
        }
        plies
    }

    /// Structural checks on the live position and every snapshot.
    pub fn validate(&self) -> ChessResult<()> {
        validate_position(&self.position)?;
        for snapshot in &self.history {
            validate_position(&snapshot.position)?;
        }
        if self.history.len() != self.move_log.len() {
            return Err(ChessError::corrupt(format!(
                "history has {} snapshots but the move log has {} entries",
                self.history.len(),
                self.move_log.len()
            )));
        }
        Ok(())
    }
}

fn validate_position(position: &Position) -> ChessResult<()> {
    for color in [Color::Light, Color::Dark] {
        match position.board.king_count(color) {
            0 => return Err(ChessError::NoKingFound { color }),
            1 => {}
            count => return Err(ChessError::KingInvariant { color, count }),
        }
    }

    if let Some(target) = position.en_passant {
        if target >= 64 {
            return Err(ChessError::corrupt(format!(
                "en-passant target {target} is off the board"
            )));
        }
        let mover = position.side_to_move.opposite();
        if square_to_row_col(target).0 != en_passant_target_row(mover) {
            return Err(ChessError::corrupt(format!(
                "en-passant target {target} is on the wrong row"
            )));
        }
        if !position.board.is_empty(target) {
            return Err(ChessError::corrupt(format!(
                "en-passant target {target} is occupied"
            )));
        }
    }

    Ok(())
}
