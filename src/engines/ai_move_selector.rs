//! Difficulty dispatch for the computer side.

use tracing::debug;

use crate::engines::engine_greedy::GreedyEngine;
use crate::engines::engine_lookahead::LookaheadEngine;
use crate::engines::engine_random::RandomEngine;
use crate::engines::engine_trait::{AiConfig, Difficulty, Engine};
use crate::errors::ChessResult;
use crate::game_state::chess_types::Move;
use crate::game_state::game_state::GameState;

pub struct AiMoveSelector {
    difficulty: Difficulty,
    engine: Box<dyn Engine>,
}

impl AiMoveSelector {
    pub fn new(difficulty: Difficulty, config: &AiConfig) -> Self {
        let engine: Box<dyn Engine> = match difficulty {
            Difficulty::Easy => Box::new(RandomEngine::new(config.seed)),
            Difficulty::Medium => Box::new(GreedyEngine::new(config.medium_noise, config.seed)),
            Difficulty::Hard => Box::new(LookaheadEngine::new(config.hard_reply_weight)),
            Difficulty::VeryHard => Box::new(LookaheadEngine::new(config.very_hard_reply_weight)),
        };
        Self { difficulty, engine }
    }

    #[inline]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn engine_name(&self) -> &str {
        self.engine.name()
    }

    /// A legal move for the side to move, or `None` when the game is over.
    pub fn choose_move(&mut self, state: &GameState) -> ChessResult<Option<Move>> {
        if state.is_over() {
            return Ok(None);
        }
        let picked = self.engine.choose_move(&state.position)?;
        debug!(
            difficulty = %self.difficulty,
            engine = self.engine.name(),
            ?picked,
            "ai move chosen"
        );
        Ok(picked)
    }
}

/// One-shot selection with a freshly built selector.
pub fn choose_ai_move(
    state: &GameState,
    difficulty: Difficulty,
    config: &AiConfig,
) -> ChessResult<Option<Move>> {
    AiMoveSelector::new(difficulty, config).choose_move(state)
}
