//! Captured pieces per capturing side.
//!
//! Positive material advantage means Light is ahead.

use serde::{Deserialize, Serialize};

use crate::game_state::chess_types::*;
use crate::search::board_scoring::piece_value;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapturedPieces {
    /// Dark pieces taken by Light.
    pub by_light: Vec<PieceKind>,
    /// Light pieces taken by Dark.
    pub by_dark: Vec<PieceKind>,
}

impl CapturedPieces {
    /// Credit the capture of `piece` to its opponent.
    pub fn add_capture(&mut self, piece: Piece) {
        match piece.color {
            Color::Light => self.by_dark.push(piece.kind),
            Color::Dark => self.by_light.push(piece.kind),
        }
    }

    pub fn taken_by(&self, color: Color) -> &[PieceKind] {
        match color {
            Color::Light => &self.by_light,
            Color::Dark => &self.by_dark,
        }
    }

    /// Material difference in centipawns. Kings never count.
    pub fn material_advantage(&self) -> i32 {
        let score = |kinds: &[PieceKind]| -> i32 {
            kinds
                .iter()
                .filter(|kind| **kind != PieceKind::King)
                .map(|kind| piece_value(*kind))
                .sum()
        };
        score(&self.by_light) - score(&self.by_dark)
    }

    pub fn clear(&mut self) {
        self.by_light.clear();
        self.by_dark.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_are_credited_to_the_opponent() {
        let mut captured = CapturedPieces::default();
        captured.add_capture(Piece::new(Color::Dark, PieceKind::Queen));
        captured.add_capture(Piece::new(Color::Light, PieceKind::Pawn));

        assert_eq!(captured.taken_by(Color::Light), &[PieceKind::Queen]);
        assert_eq!(captured.taken_by(Color::Dark), &[PieceKind::Pawn]);
        assert_eq!(captured.material_advantage(), 800);
    }

    #[test]
    fn dark_ahead_is_negative_and_clear_resets() {
        let mut captured = CapturedPieces::default();
        captured.add_capture(Piece::new(Color::Light, PieceKind::Rook));
        captured.add_capture(Piece::new(Color::Dark, PieceKind::Bishop));
        assert_eq!(captured.material_advantage(), -170);

        captured.clear();
        assert_eq!(captured, CapturedPieces::default());
        assert_eq!(captured.material_advantage(), 0);
    }
}
