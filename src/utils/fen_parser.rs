//! FEN-to-GameState parser.
//!
//! Builds a position from Forsyth-Edwards Notation through the
//! hash-maintaining setters, so the Zobrist key is exact on return. The
//! castling, en-passant and clock fields may be omitted.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::utils::algebraic::algebraic_to_square;
use crate::utils::notation_error::{NotationError, NotationResult};

pub fn parse_fen(fen: &str) -> NotationResult<GameState> {
    let mut parts = fen.split_whitespace();

    let board_part = parts
        .next()
        .ok_or(NotationError::MissingField { field: "board layout" })?;
    let side_part = parts
        .next()
        .ok_or(NotationError::MissingField { field: "side to move" })?;
    let castling_part = parts.next().unwrap_or("-");
    let en_passant_part = parts.next().unwrap_or("-");
    for counter in parts.by_ref().take(2) {
        counter
            .parse::<u16>()
            .map_err(|_| NotationError::InvalidCounter {
                value: counter.to_owned(),
            })?;
    }
    if parts.next().is_some() {
        return Err(NotationError::TrailingFields);
    }

    let mut game_state = GameState::new_empty();
    parse_board(board_part, &mut game_state)?;
    game_state.set_side_to_move(parse_side_to_move(side_part)?);
    parse_castling_rights(castling_part, &mut game_state)?;
    game_state.set_en_passant_square(parse_en_passant_square(en_passant_part)?);

    Ok(game_state)
}

fn parse_board(board_part: &str, game_state: &mut GameState) -> NotationResult<()> {
    let invalid = |message: &str| NotationError::InvalidBoard {
        message: message.to_owned(),
    };

    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(invalid("board layout must contain 8 ranks"));
    }

    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let rank = 7 - fen_rank_idx as i8;
        let mut file = 0i8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(invalid(&format!("invalid empty-square count '{ch}'")));
                }
                file += empty_count as i8;
                if file > 8 {
                    return Err(invalid("rank has too many files"));
                }
                continue;
            }

            let tile = Tile::from_fen_char(ch).ok_or(NotationError::InvalidPiece { ch })?;
            if file >= 8 {
                return Err(invalid("rank has too many files"));
            }
            game_state.set_tile(TileCoords::new(file, rank), tile);
            file += 1;
        }

        if file != 8 {
            return Err(invalid("rank does not sum to 8 files"));
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> NotationResult<Color> {
    match side_part {
        "w" => Ok(Color::Light),
        "b" => Ok(Color::Dark),
        _ => Err(NotationError::InvalidSideToMove {
            value: side_part.to_owned(),
        }),
    }
}

fn parse_castling_rights(castling_part: &str, game_state: &mut GameState) -> NotationResult<()> {
    if castling_part == "-" {
        return Ok(());
    }

    for ch in castling_part.chars() {
        let (color, side) = match ch {
            'K' => (Color::Light, CastleSide::KingSide),
            'Q' => (Color::Light, CastleSide::QueenSide),
            'k' => (Color::Dark, CastleSide::KingSide),
            'q' => (Color::Dark, CastleSide::QueenSide),
            _ => return Err(NotationError::InvalidCastlingRights { ch }),
        };
        game_state.set_castle_right(color, side, true);
    }

    Ok(())
}

/// FEN names the square the pawn passed over; the position stores the pawn.
fn parse_en_passant_square(en_passant_part: &str) -> NotationResult<TileCoords> {
    if en_passant_part == "-" {
        return Ok(TileCoords::INVALID);
    }

    let invalid = || NotationError::InvalidEnPassant {
        value: en_passant_part.to_owned(),
    };
    let target = algebraic_to_square(en_passant_part).map_err(|_| invalid())?;
    match target.rank() {
        2 => Ok(TileCoords::new(target.file(), 3)),
        5 => Ok(TileCoords::new(target.file(), 4)),
        _ => Err(invalid()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::search::zobrist::compute_zobrist_key;
    use crate::utils::render_game_state::render_game_state;

    #[test]
    fn parse_starting_fen_and_render_board() {
        let game_state = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");

        println!("\n{}", render_game_state(&game_state));

        assert_eq!(game_state.side_to_move(), Color::Light);
        assert_eq!(game_state.castling_rights(), CASTLE_ALL);
        assert_eq!(game_state.zobrist_key(), compute_zobrist_key(&game_state));
    }

    #[test]
    fn en_passant_target_maps_to_pawn_square() {
        let game = parse_fen("4k3/8/8/8/4P3/8/8/4K3 b - e3 0 1").expect("FEN should parse");
        assert_eq!(game.en_passant_square(), TileCoords::new(4, 3));
        let game = parse_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6").expect("FEN should parse");
        assert_eq!(game.en_passant_square(), TileCoords::new(3, 4));
    }

    #[test]
    fn trailing_fields_are_optional() {
        let game = parse_fen("8/2p5/3p4/1P5r/KR3p1k/8/4P1P1/8 b").expect("short FEN should parse");
        assert_eq!(game.side_to_move(), Color::Dark);
        assert_eq!(game.castling_rights(), 0);
        assert!(!game.en_passant_square().is_valid());
    }

    #[test]
    fn malformed_fens_report_the_failing_field() {
        assert_eq!(parse_fen(""), Err(NotationError::MissingField { field: "board layout" }));
        assert!(matches!(
            parse_fen("8/8/8/8/8/8/8 w - -"),
            Err(NotationError::InvalidBoard { .. })
        ));
        assert!(matches!(
            parse_fen("8/8/8/8/8/8/8/7X w - -"),
            Err(NotationError::InvalidPiece { ch: 'X' })
        ));
        assert!(matches!(
            parse_fen("8/8/8/8/8/8/8/8 x - -"),
            Err(NotationError::InvalidSideToMove { .. })
        ));
        assert!(matches!(
            parse_fen("8/8/8/8/8/8/8/8 w KZ -"),
            Err(NotationError::InvalidCastlingRights { ch: 'Z' })
        ));
        assert!(matches!(
            parse_fen("8/8/8/8/8/8/8/8 w - e4"),
            Err(NotationError::InvalidEnPassant { .. })
        ));
        assert!(matches!(
            parse_fen("8/8/8/8/8/8/8/8 w - - x 1"),
            Err(NotationError::InvalidCounter { .. })
        ));
        assert_eq!(parse_fen("8/8/8/8/8/8/8/8 w - - 0 1 7"), Err(NotationError::TrailingFields));
    }
}
