//! Engine abstraction layer used by the AI move selector.
//!
//! Defines the difficulty tiers, their tuning knobs and the common trait so
//! the session can pick a strategy at runtime behind a single interface.

use std::fmt;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::Move;
use crate::game_state::position::Position;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
    VeryHard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::VeryHard,
    ];
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::VeryHard => "very-hard",
        };
        f.write_str(name)
    }
}

impl FromStr for Difficulty {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            "very-hard" | "very_hard" | "veryhard" => Ok(Difficulty::VeryHard),
            other => Err(ChessError::setup(format!("Unknown difficulty: {other}"))),
        }
    }
}

/// Tuning for the move selectors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AiConfig {
    /// Upper bound of the random noise added to Medium scores, in centipawns.
    pub medium_noise: f32,
    /// Weight of the opponent's best reply capture for Hard.
    pub hard_reply_weight: f32,
    /// Weight of the opponent's best reply capture for VeryHard.
    pub very_hard_reply_weight: f32,
    /// Fixed RNG seed; OS entropy when unset.
    pub seed: Option<u64>,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            medium_noise: 50.0,
            hard_reply_weight: 0.5,
            very_hard_reply_weight: 1.0,
            seed: None,
        }
    }
}

pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    /// Picks one legal move for the side to move, or `None` when it has none.
    fn choose_move(&mut self, position: &Position) -> ChessResult<Option<Move>>;
}
