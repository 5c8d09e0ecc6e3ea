//! Medium tier: best immediate capture, jittered by small random noise.

use rand::rngs::StdRng;
use rand::Rng;

use crate::engines::engine_trait::{make_rng, Engine};
use crate::errors::ChessResult;
use crate::game_state::chess_types::Move;
use crate::game_state::position::Position;
use crate::move_generation::legal_move_generator::legal_moves;
use crate::search::board_scoring::capture_value;

pub struct GreedyEngine {
    rng: StdRng,
    noise: f32,
}

impl GreedyEngine {
    pub fn new(noise: f32, seed: Option<u64>) -> Self {
        Self {
            rng: make_rng(seed),
            noise: noise.max(0.0),
        }
    }
}

impl Engine for GreedyEngine {
    fn name(&self) -> &str {
        "Greedy"
    }

    fn choose_move(&mut self, position: &Position) -> ChessResult<Option<Move>> {
        let mut best: Option<(Move, f32)> = None;
        for mv in legal_moves(position) {
            let jitter = self.rng.random::<f32>() * self.noise;
            let score = capture_value(position, mv) as f32 + jitter;
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((mv, score));
            }
        }
        Ok(best.map(|(mv, _)| mv))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::fen_parser::parse_fen;

    #[test]
    fn takes_a_hanging_queen() {
        let position = parse_fen("4k3/8/8/3q4/8/8/8/3RK3 w - - 0 1").expect("FEN should parse");
        for seed in 0..8 {
            let mut engine = GreedyEngine::new(50.0, Some(seed));
            let picked = engine.choose_move(&position).expect("engine should run");
            assert_eq!(picked, Some(Move::new(3, 35)));
        }
    }

    #[test]
    fn no_moves_means_none() {
        let position = parse_fen("7k/6Q1/6K1/8/8/8/8/8 b - - 0 1").expect("FEN should parse");
        let mut engine = GreedyEngine::new(50.0, Some(1));
        assert_eq!(engine.choose_move(&position).expect("engine should run"), None);
    }
}
