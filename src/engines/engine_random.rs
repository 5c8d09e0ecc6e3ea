//! Easy tier: uniform choice among legal moves.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;

use crate::engines::engine_trait::{make_rng, Engine};
use crate::errors::ChessResult;
use crate::game_state::chess_types::Move;
use crate::game_state::position::Position;
use crate::move_generation::legal_move_generator::legal_moves;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            rng: make_rng(seed),
        }
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Random"
    }

    fn choose_move(&mut self, position: &Position) -> ChessResult<Option<Move>> {
        let moves = legal_moves(position);
        Ok(moves.as_slice().choose(&mut self.rng).copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_choice() {
        let start = Position::standard();
        let first = RandomEngine::new(Some(7))
            .choose_move(&start)
            .expect("engine should run");
        let second = RandomEngine::new(Some(7))
            .choose_move(&start)
            .expect("engine should run");
        assert_eq!(first, second);
        assert!(first.is_some_and(|mv| legal_moves(&start).contains(&mv)));
    }
}
