//! Square conversions for file-rank coordinates (`a1`..`h8`).
//!
//! For display, logging and test setup only; the rules core works in flat
//! indices and never calls into this module.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{Move, PieceKind, Square};

/// Convert a coordinate such as "e4" to a square index.
pub fn algebraic_to_square(square: &str) -> ChessResult<Square> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::setup(format!("Invalid algebraic square: {square}")));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(ChessError::setup(format!(
            "Invalid algebraic file: {}",
            file as char
        )));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::setup(format!(
            "Invalid algebraic rank: {}",
            rank as char
        )));
    }

    Ok((rank - b'1') * 8 + (file - b'a'))
}

/// Convert a square index (`0..=63`) to a coordinate such as "e4".
pub fn square_to_algebraic(square: Square) -> ChessResult<String> {
    if square > 63 {
        return Err(ChessError::setup(format!(
            "Square index out of bounds: {square}"
        )));
    }

    let file_char = char::from(b'a' + square % 8);
    let rank_char = char::from(b'1' + square / 8);
    Ok(format!("{file_char}{rank_char}"))
}

/// Coordinate form of a move, e.g. "e2e4" or "a7a8q".
pub fn move_to_coordinates(mv: Move) -> ChessResult<String> {
    let mut out = square_to_algebraic(mv.from)?;
    out.push_str(&square_to_algebraic(mv.to)?);
    if let Some(kind) = mv.promotion {
        out.push(match kind {
            PieceKind::Queen => 'q',
            PieceKind::Rook => 'r',
            PieceKind::Bishop => 'b',
            PieceKind::Knight => 'n',
            other => return Err(ChessError::InvalidPromotion { kind: other }),
        });
    }
    Ok(out)
}

/// Parse the coordinate form produced by `move_to_coordinates`.
pub fn coordinates_to_move(text: &str) -> ChessResult<Move> {
    if text.len() != 4 && text.len() != 5 {
        return Err(ChessError::setup(format!("Invalid coordinate move: {text}")));
    }
    if !text.is_ascii() {
        return Err(ChessError::setup(format!("Invalid coordinate move: {text}")));
    }

    let from = algebraic_to_square(&text[0..2])?;
    let to = algebraic_to_square(&text[2..4])?;
    let promotion = match text.as_bytes().get(4) {
        None => None,
        Some(b'q') => Some(PieceKind::Queen),
        Some(b'r') => Some(PieceKind::Rook),
        Some(b'b') => Some(PieceKind::Bishop),
        Some(b'n') => Some(PieceKind::Knight),
        Some(other) => {
            return Err(ChessError::setup(format!(
                "Invalid promotion character: {}",
                *other as char
            )))
        }
    };

    Ok(Move {
        from,
        to,
        promotion,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_square_conversions() {
        assert_eq!(algebraic_to_square("a1").expect("a1 should parse"), 0);
        assert_eq!(algebraic_to_square("h8").expect("h8 should parse"), 63);
        assert_eq!(square_to_algebraic(0).expect("0 should convert"), "a1");
        assert_eq!(square_to_algebraic(63).expect("63 should convert"), "h8");
        assert!(algebraic_to_square("i1").is_err());
        assert!(square_to_algebraic(64).is_err());
    }

    #[test]
    fn coordinate_moves_carry_promotion() {
        let mv = coordinates_to_move("a7a8n").expect("promotion should parse");
        assert_eq!(mv, Move::with_promotion(48, 56, PieceKind::Knight));
        assert_eq!(move_to_coordinates(mv).expect("move should print"), "a7a8n");
        assert!(coordinates_to_move("e2e9").is_err());
    }
}
