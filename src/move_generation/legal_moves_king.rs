use crate::game_state::chess_rules::{
    home_rank, KING_LONG_CASTLE_FILE, KING_SHORT_CASTLE_FILE, KING_START_FILE,
    ROOK_LONG_START_FILE, ROOK_SHORT_START_FILE,
};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::push_step_moves;
use crate::moves::king_moves::king_targets;
use crate::moves::move_descriptions::{BoardMove, MoveList};

/// King steps plus castling candidates.
///
/// Castling is only checked for rights, rook presence and empty squares here;
/// the attacked-square rules are applied by the legality filter.
pub fn generate_king_moves(game_state: &GameState, color: Color, from: TileCoords, out: &mut MoveList) {
    push_step_moves(game_state, color, from, king_targets(from), out);
    generate_castling_moves(game_state, color, from, out);
}

fn generate_castling_moves(game_state: &GameState, color: Color, from: TileCoords, out: &mut MoveList) {
    let rank = home_rank(color);
    if from != TileCoords::new(KING_START_FILE, rank) {
        return;
    }

    for side in CastleSide::BOTH {
        if !game_state.can_castle(color, side) {
            continue;
        }

        let (rook_file, king_to_file) = match side {
            CastleSide::KingSide => (ROOK_SHORT_START_FILE, KING_SHORT_CASTLE_FILE),
            CastleSide::QueenSide => (ROOK_LONG_START_FILE, KING_LONG_CASTLE_FILE),
        };
        if !game_state
            .tile_at(rook_file, rank)
            .is(color, PieceKind::Rook)
        {
            continue;
        }

        let (low, high) = if rook_file < KING_START_FILE {
            (rook_file + 1, KING_START_FILE - 1)
        } else {
            (KING_START_FILE + 1, rook_file - 1)
        };
        if (low..=high).all(|file| game_state.tile_at(file, rank).is_empty()) {
            out.push(BoardMove::new(from, TileCoords::new(king_to_file, rank)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn castles(fen: &str, color: Color) -> usize {
        let game = GameState::from_fen(fen).expect("FEN should parse");
        let from = game.king_square(color);
        let mut out = MoveList::new();
        generate_king_moves(&game, color, from, &mut out);
        out.iter().filter(|mv| mv.is_castle(PieceKind::King)).count()
    }

    #[test]
    fn both_castles_offered_when_path_is_clear() {
        assert_eq!(castles("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1", Color::Light), 2);
        assert_eq!(castles("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1", Color::Dark), 2);
    }

    #[test]
    fn queenside_needs_b_file_empty() {
        assert_eq!(castles("r3k2r/8/8/8/8/8/8/RN2K2R w KQkq - 0 1", Color::Light), 1);
    }

    #[test]
    fn no_castle_without_rights() {
        assert_eq!(castles("r3k2r/8/8/8/8/8/8/R3K2R w kq - 0 1", Color::Light), 0);
    }
}
