//! Hard and VeryHard tiers: one ply of opponent reply.
//!
//! A move scores its capture value minus the weighted value of the best
//! capture the opponent can answer with. Ties keep the first move in
//! generation order.

use crate::engines::engine_trait::Engine;
use crate::errors::ChessResult;
use crate::game_state::chess_types::Move;
use crate::game_state::position::Position;
use crate::move_generation::legal_move_generator::legal_moves;
use crate::search::board_scoring::capture_value;

pub struct LookaheadEngine {
    reply_weight: f32,
}

impl LookaheadEngine {
    pub fn new(reply_weight: f32) -> Self {
        Self { reply_weight }
    }

    /// Largest capture available to the side to move in `position`.
    fn best_reply_capture(position: &Position) -> i32 {
        legal_moves(position)
            .into_iter()
            .map(|reply| capture_value(position, reply))
            .max()
            .unwrap_or(0)
    }

    pub fn score_move(&self, position: &Position, mv: Move) -> ChessResult<f32> {
        let gained = capture_value(position, mv);
        let applied = position.play(mv)?;
        let exposed = Self::best_reply_capture(&applied.next);
        Ok(gained as f32 - self.reply_weight * exposed as f32)
    }
}

impl Engine for LookaheadEngine {
    fn name(&self) -> &str {
        "Lookahead"
    }

    fn choose_move(&mut self, position: &Position) -> ChessResult<Option<Move>> {
        let mut best: Option<(Move, f32)> = None;
        for mv in legal_moves(position) {
            let score = self.score_move(position, mv)?;
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((mv, score));
            }
        }
        Ok(best.map(|(mv, _)| mv))
    }
}
