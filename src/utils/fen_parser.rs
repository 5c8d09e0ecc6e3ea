//! FEN-to-Position parser.
//!
//! Builds positions for tests, benchmarks and diagnostics. Clock fields are
//! optional and ignored since the engine keeps no move clocks.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::position::Position;
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> ChessResult<Position> {
    let mut parts = fen.split_whitespace();

    let board_part = parts
        .next()
        .ok_or_else(|| ChessError::setup("Missing board layout in FEN"))?;
    let side_part = parts
        .next()
        .ok_or_else(|| ChessError::setup("Missing side-to-move in FEN"))?;
    let castling_part = parts
        .next()
        .ok_or_else(|| ChessError::setup("Missing castling rights in FEN"))?;
    let en_passant_part = parts
        .next()
        .ok_or_else(|| ChessError::setup("Missing en-passant square in FEN"))?;

    for clock in parts.by_ref().take(2) {
        clock
            .parse::<u32>()
            .map_err(|_| ChessError::setup(format!("Invalid move clock: {clock}")))?;
    }
    if parts.next().is_some() {
        return Err(ChessError::setup("FEN has extra trailing fields"));
    }

    Ok(Position {
        board: parse_board(board_part)?,
        side_to_move: parse_side_to_move(side_part)?,
        castling_rights: parse_castling_rights(castling_part)?,
        en_passant: parse_en_passant_square(en_passant_part)?,
    })
}

fn parse_board(board_part: &str) -> ChessResult<Board> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(ChessError::setup("Board layout must contain 8 ranks"));
    }

    let mut board = Board::empty();
    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let row = 7 - fen_rank_idx;
        let mut col = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessError::setup(format!(
                        "Invalid empty-square count '{ch}'"
                    )));
                }
                col += empty_count as usize;
                if col > 8 {
                    return Err(ChessError::setup("Board rank has too many files"));
                }
                continue;
            }

            let piece = piece_from_fen_char(ch).ok_or_else(|| {
                ChessError::setup(format!("Invalid piece character '{ch}' in board layout"))
            })?;

            if col >= 8 {
                return Err(ChessError::setup("Board rank has too many files"));
            }

            board.set_piece((row * 8 + col) as Square, Some(piece));
            col += 1;
        }

        if col != 8 {
            return Err(ChessError::setup("Board rank does not sum to 8 files"));
        }
    }

    Ok(board)
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    match side_part {
        "w" => Ok(Color::Light),
        "b" => Ok(Color::Dark),
        _ => Err(ChessError::setup(format!(
            "Invalid side-to-move field: {side_part}"
        ))),
    }
}

fn parse_castling_rights(castling_part: &str) -> ChessResult<CastlingRights> {
    let mut rights = CastlingRights::NONE;
    if castling_part == "-" {
        return Ok(rights);
    }

    for ch in castling_part.chars() {
        match ch {
            'K' => rights.light_kingside = true,
            'Q' => rights.light_queenside = true,
            'k' => rights.dark_kingside = true,
            'q' => rights.dark_queenside = true,
            _ => {
                return Err(ChessError::setup(format!(
                    "Invalid castling rights character: {ch}"
                )))
            }
        }
    }

    Ok(rights)
}

fn parse_en_passant_square(en_passant_part: &str) -> ChessResult<Option<Square>> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    Ok(Some(algebraic_to_square(en_passant_part)?))
}

fn piece_from_fen_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::Light
    } else if ch.is_ascii_lowercase() {
        Color::Dark
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some(Piece::new(color, kind))
}

#[cfg(test)]
mod tests {
    use super::parse_fen;
    use crate::errors::ChessError;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::position::Position;

    #[test]
    fn starting_fen_matches_standard_position() {
        let position = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");
        assert_eq!(position, Position::standard());
    }

    #[test]
    fn clocks_are_optional_but_checked() {
        assert!(parse_fen("4k3/8/8/8/8/8/8/4K3 w - -").is_ok());
        assert!(parse_fen("4k3/8/8/8/8/8/8/4K3 w - - x 1").is_err());
        assert!(parse_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1 extra").is_err());
    }

    #[test]
    fn malformed_layouts_are_rejected() {
        assert!(parse_fen("4k3/8/8/8/8/8/8 w - - 0 1").is_err());
        assert!(parse_fen("4k4/8/8/8/8/8/8/4K3 w - - 0 1").is_err());
        assert!(parse_fen("4x3/8/8/8/8/8/8/4K3 w - - 0 1").is_err());
        assert!(parse_fen("4k3/8/8/8/8/8/8/4K3 x - - 0 1").is_err());
    }

    #[test]
    fn long_runs_of_empty_counts_are_rejected() {
        let crowded = format!("{}/8/8/8/8/8/8/4K3 w - - 0 1", "8".repeat(40));
        assert!(matches!(
            parse_fen(&crowded),
            Err(ChessError::InvalidSetup { .. })
        ));
        assert!(parse_fen("4k3/8/8/8/8/8/8/4K35 w - - 0 1").is_err());
    }
}
