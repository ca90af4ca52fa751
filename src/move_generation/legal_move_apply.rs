//! In-place move application with incremental hash maintenance.

use crate::game_state::chess_rules::{
    KING_LONG_CASTLE_FILE, ROOK_LONG_CASTLE_FILE, ROOK_LONG_START_FILE, ROOK_SHORT_CASTLE_FILE,
    ROOK_SHORT_START_FILE,
};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::move_descriptions::BoardMove;

/// Play `mv` on `game_state`.
///
/// `mv` must come from the move generator for this position. Every field
/// change goes through the hash-maintaining setters, so the Zobrist key is
/// still exact afterwards.
pub fn apply_move(game_state: &mut GameState, mv: &BoardMove) {
    assert!(
        game_state.tile(mv.to).kind() != PieceKind::King,
        "move {mv} would capture a king in {}",
        game_state.get_fen()
    );

    let mut moving = game_state.tile(mv.from);
    debug_assert!(!moving.is_empty(), "no piece on {} for move {mv}", mv.from);
    let color = moving.color();
    let original_kind = moving.kind();
    if mv.is_promotion() {
        moving = Tile::new(color, mv.promotion);
    }

    game_state.set_en_passant_square(TileCoords::INVALID);

    if mv.is_en_passant() {
        debug_assert!(game_state.tile(mv.en_passant_pawn).kind() == PieceKind::Pawn);
        game_state.set_tile(mv.en_passant_pawn, Tile::EMPTY);
    } else if original_kind == PieceKind::Pawn && (mv.from.rank() - mv.to.rank()).abs() == 2 {
        game_state.set_en_passant_square(mv.to);
    } else if original_kind == PieceKind::King {
        for side in CastleSide::BOTH {
            game_state.set_castle_right(color, side, false);
        }
        if mv.is_castle(original_kind) {
            move_castling_rook(game_state, mv);
        }
    } else if original_kind == PieceKind::Rook {
        game_state.clear_corner_right(mv.from);
    }

    // Landing on a rook corner drops that corner's right.
    game_state.clear_corner_right(mv.to);

    game_state.set_tile(mv.from, Tile::EMPTY);
    game_state.set_tile(mv.to, moving);
    game_state.set_side_to_move(color.opposite());

    debug_assert_eq!(
        game_state.zobrist_key(),
        crate::search::zobrist::compute_zobrist_key(game_state),
        "incremental hash drifted after {mv}"
    );
}

fn move_castling_rook(game_state: &mut GameState, mv: &BoardMove) {
    let rank = mv.from.rank();
    let (rook_from, rook_to) = if mv.to.file() == KING_LONG_CASTLE_FILE {
        (ROOK_LONG_START_FILE, ROOK_LONG_CASTLE_FILE)
    } else {
        (ROOK_SHORT_START_FILE, ROOK_SHORT_CASTLE_FILE)
    };
    let rook_from = TileCoords::new(rook_from, rank);
    let rook_to = TileCoords::new(rook_to, rank);

    let rook = game_state.tile(rook_from);
    debug_assert_eq!(rook.kind(), PieceKind::Rook);
    debug_assert!(game_state.tile(rook_to).is_empty());
    game_state.set_tile(rook_from, Tile::EMPTY);
    game_state.set_tile(rook_to, rook);
}
