use crate::game_state::{chess_types::*, game_state::GameState};

/// Position to FEN. Clocks are not tracked and are written as `0 1`.
pub fn generate_fen(game_state: &GameState) -> String {
    let board = generate_board_field(game_state);
    let side_to_move = match game_state.side_to_move() {
        Color::Light => "w",
        Color::Dark => "b",
    };
    let castling = generate_castling_field(game_state.castling_rights());
    let en_passant = generate_en_passant_field(game_state.en_passant_square());

    format!("{board} {side_to_move} {castling} {en_passant} 0 1")
}

fn generate_board_field(game_state: &GameState) -> String {
    let mut out = String::new();

    for rank in (0..8).rev() {
        let mut empty_count = 0u8;

        for file in 0..8 {
            match game_state.tile_at(file, rank).to_fen_char() {
                Some(ch) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    out.push(ch);
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if rank > 0 {
            out.push('/');
        }
    }

    out
}

fn generate_castling_field(rights: CastlingRights) -> String {
    let out: String = [
        (CASTLE_LIGHT_KINGSIDE, 'K'),
        (CASTLE_LIGHT_QUEENSIDE, 'Q'),
        (CASTLE_DARK_KINGSIDE, 'k'),
        (CASTLE_DARK_QUEENSIDE, 'q'),
    ]
    .iter()
    .filter(|(flag, _)| rights & flag != 0)
    .map(|&(_, letter)| letter)
    .collect();

    if out.is_empty() {
        "-".to_owned()
    } else {
        out
    }
}

/// The stored square is the pawn; FEN wants the square behind it.
fn generate_en_passant_field(pawn: TileCoords) -> String {
    if !pawn.is_valid() {
        return "-".to_owned();
    }
    let behind_rank = if pawn.rank() == 3 { 2 } else { 5 };
    TileCoords::new(pawn.file(), behind_rank).to_string()
}

#[cfg(test)]
mod tests {
    use super::generate_fen;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::{CASTLE_DARK_KINGSIDE, CASTLE_DARK_QUEENSIDE, Color};
    use crate::utils::fen_parser::parse_fen;

    #[test]
    fn round_trip_starting_position_fen() {
        let parsed = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");
        let generated = generate_fen(&parsed);

        assert_eq!(generated, STARTING_POSITION_FEN);

        let reparsed = parse_fen(&generated).expect("generated FEN should parse");
        assert_eq!(reparsed, parsed);
        assert_eq!(reparsed.zobrist_key(), parsed.zobrist_key());
    }

    #[test]
    fn round_trip_custom_position_fen() {
        let fen = "r1bqk2r/pppp1ppp/2n2n2/2b1p3/2B1P3/2N2N2/PPPP1PPP/R1BQ1RK1 b kq - 0 1";
        let parsed = parse_fen(fen).expect("custom FEN should parse");
        let generated = generate_fen(&parsed);
        let reparsed = parse_fen(&generated).expect("generated FEN should parse");

        assert_eq!(generated, fen);
        assert_eq!(reparsed, parsed);
        assert_eq!(reparsed.side_to_move(), Color::Dark);
        assert_eq!(
            reparsed.castling_rights(),
            CASTLE_DARK_KINGSIDE | CASTLE_DARK_QUEENSIDE
        );
    }

    #[test]
    fn en_passant_and_clocks_round_trip() {
        let parsed = parse_fen("rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq e6 0 2")
            .expect("FEN should parse");
        assert_eq!(
            generate_fen(&parsed),
            "rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq e6 0 1"
        );
    }
}
