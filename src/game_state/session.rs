//! A game against the computer.
//!
//! `GameSession` pairs a `GameState` with the human's color, the chosen
//! difficulty and a cumulative score that survives new-game resets.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::engines::ai_move_selector::AiMoveSelector;
use crate::engines::engine_trait::{AiConfig, Difficulty};
use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;
use crate::game_state::game_state::{GameState, MoveOutcome};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub human_color: Color,
    pub difficulty: Difficulty,
    pub ai: AiConfig,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub human_wins: u32,
    pub computer_wins: u32,
    pub draws: u32,
}

impl Scoreboard {
    fn tally(&mut self, status: GameStatus, human: Color) -> Option<&mut u32> {
        match status {
            GameStatus::Ongoing => None,
            GameStatus::Stalemate => Some(&mut self.draws),
            GameStatus::Checkmate { winner } if winner == human => Some(&mut self.human_wins),
            GameStatus::Checkmate { .. } => Some(&mut self.computer_wins),
        }
    }

    pub fn record(&mut self, status: GameStatus, human: Color) {
        if let Some(count) = self.tally(status, human) {
            *count += 1;
        }
    }

    /// Takes back a result previously passed to `record`.
    pub fn retract(&mut self, status: GameStatus, human: Color) {
        if let Some(count) = self.tally(status, human) {
            *count = count.saturating_sub(1);
        }
    }

    pub fn games_played(&self) -> u32 {
        self.human_wins + self.computer_wins + self.draws
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    pub config: SessionConfig,
    pub game: GameState,
    pub score: Scoreboard,
}

impl GameSession {
    pub fn new(config: SessionConfig) -> Self {
        info!(
            human = ?config.human_color,
            difficulty = %config.difficulty,
            "new session"
        );
        Self {
            config,
            game: GameState::new_game(),
            score: Scoreboard::default(),
        }
    }

    /// Resets the board and keeps the score.
    pub fn new_game(&mut self) {
        self.game = GameState::new_game();
        info!(games_played = self.score.games_played(), "new game");
    }

    #[inline]
    pub fn is_computer_turn(&self) -> bool {
        !self.game.is_over() && self.game.side_to_move() != self.config.human_color
    }

    pub fn human_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> ChessResult<MoveOutcome> {
        if self.game.is_over() {
            return Err(ChessError::GameOver);
        }
        if self.game.side_to_move() != self.config.human_color {
            return Err(ChessError::OutOfTurn {
                color: self.config.human_color,
            });
        }
        let outcome = self.game.apply_move(from, to, promotion)?;
        self.score.record(outcome.status, self.config.human_color);
        Ok(outcome)
    }

    /// Lets `selector` play for the computer. `None` when it is not the
    /// computer's turn or the game is over.
    pub fn computer_move(
        &mut self,
        selector: &mut AiMoveSelector,
    ) -> ChessResult<Option<MoveOutcome>> {
        if !self.is_computer_turn() {
            return Ok(None);
        }
        let Some(mv) = selector.choose_move(&self.game)? else {
            return Ok(None);
        };
        let outcome = self.game.play_move(mv)?;
        self.score.record(outcome.status, self.config.human_color);
        Ok(Some(outcome))
    }

    /// Rewinds until the human is to move again, at most two plies. A result
    /// recorded for the abandoned terminal position is retracted.
    pub fn undo(&mut self) -> usize {
        let human = self.config.human_color;
        let final_status = self.game.status;
        let mut plies = 0;
        while plies < 2 && self.game.undo_ply() {
            plies += 1;
            if self.game.side_to_move() == human {
                break;
            }
        }
        if plies > 0 {
            self.score.retract(final_status, human);
            info!(plies, "session undo");
        }
        plies
    }
}
