//! Flat 64-cell board model.
//!
//! Pure data: each cell is empty or holds one piece. Callers guarantee that
//! square indices are in bounds.

use serde::{Deserialize, Serialize};

use crate::game_state::chess_types::*;

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Option<Piece>>", into = "Vec<Option<Piece>>")]
pub struct Board {
    cells: [Option<Piece>; 64],
}

impl Board {
    pub const fn empty() -> Self {
        Self { cells: [None; 64] }
    }

    /// Standard initial arrangement.
    pub fn standard() -> Self {
        let mut board = Self::empty();
        for (col, kind) in BACK_RANK.iter().enumerate() {
            let col = col as u8;
            board.set_piece(col, Some(Piece::new(Color::Light, *kind)));
            board.set_piece(8 + col, Some(Piece::new(Color::Light, PieceKind::Pawn)));
            board.set_piece(48 + col, Some(Piece::new(Color::Dark, PieceKind::Pawn)));
            board.set_piece(56 + col, Some(Piece::new(Color::Dark, *kind)));
        }
        board
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.cells[square as usize]
    }

    #[inline]
    pub fn set_piece(&mut self, square: Square, piece: Option<Piece>) {
        self.cells[square as usize] = piece;
    }

    /// Empties `square` and returns whatever stood there.
    #[inline]
    pub fn take_piece(&mut self, square: Square) -> Option<Piece> {
        self.cells[square as usize].take()
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.cells[square as usize].is_none()
    }

    #[inline]
    pub fn color_at(&self, square: Square) -> Option<Color> {
        self.cells[square as usize].map(|piece| piece.color)
    }

    /// Occupied squares with their pieces, in index order.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(square, cell)| cell.map(|piece| (square as Square, piece)))
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        let king = Piece::new(color, PieceKind::King);
        self.occupied()
            .find(|(_, piece)| *piece == king)
            .map(|(square, _)| square)
    }

    pub fn king_count(&self, color: Color) -> usize {
        let king = Piece::new(color, PieceKind::King);
        self.occupied().filter(|(_, piece)| *piece == king).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl From<Board> for Vec<Option<Piece>> {
    fn from(board: Board) -> Self {
        board.cells.to_vec()
    }
}

impl TryFrom<Vec<Option<Piece>>> for Board {
    type Error = String;

    fn try_from(cells: Vec<Option<Piece>>) -> Result<Self, Self::Error> {
        let len = cells.len();
        let cells: [Option<Piece>; 64] = cells
            .try_into()
            .map_err(|_| format!("board must have 64 cells, got {len}"))?;
        Ok(Self { cells })
    }
}

#[cfg(test)]
mod tests {
    use super::Board;
    use crate::game_state::chess_types::*;

    #[test]
    fn standard_board_has_thirty_two_pieces_and_one_king_each() {
        let board = Board::standard();
        assert_eq!(board.occupied().count(), 32);
        assert_eq!(board.king_count(Color::Light), 1);
        assert_eq!(board.king_count(Color::Dark), 1);
        assert_eq!(board.king_square(Color::Light), Some(4));
        assert_eq!(board.king_square(Color::Dark), Some(60));
        assert_eq!(
            board.piece_at(3),
            Some(Piece::new(Color::Light, PieceKind::Queen))
        );
    }

    #[test]
    fn take_piece_leaves_square_empty() {
        let mut board = Board::standard();
        let taken = board.take_piece(12);
        assert_eq!(taken, Some(Piece::new(Color::Light, PieceKind::Pawn)));
        assert!(board.is_empty(12));
    }

    #[test]
    fn wrong_cell_count_is_rejected() {
        let result = Board::try_from(vec![None; 63]);
        assert!(result.is_err());
    }
}
