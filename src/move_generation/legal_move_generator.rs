//! Full legal move generation pipeline.
//!
//! Collects per-piece pseudo-legal moves, then keeps the ones that do not
//! leave the mover's king attacked. Castling additionally requires the king
//! not to be in check now nor on the square it passes over.

use crate::game_state::chess_rules::{KING_LONG_CASTLE_FILE, ROOK_LONG_CASTLE_FILE, ROOK_SHORT_CASTLE_FILE};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::moves::move_descriptions::{BoardMove, MoveList};

/// Moves obeying piece movement rules, possibly leaving the king in check.
pub fn generate_pseudo_legal_moves(game_state: &GameState, color: Color) -> MoveList {
    let mut out = MoveList::new();
    for (from, tile) in game_state.occupied_tiles() {
        if tile.color() != color {
            continue;
        }
        match tile.kind() {
            PieceKind::Pawn => generate_pawn_moves(game_state, color, from, &mut out),
            PieceKind::Knight => generate_knight_moves(game_state, color, from, &mut out),
            PieceKind::Bishop => generate_bishop_moves(game_state, color, from, &mut out),
            PieceKind::Rook => generate_rook_moves(game_state, color, from, &mut out),
            PieceKind::Queen => generate_queen_moves(game_state, color, from, &mut out),
            PieceKind::King => generate_king_moves(game_state, color, from, &mut out),
            PieceKind::Empty => {}
        }
    }
    out
}

/// Exactly the legal moves for `color`.
pub fn generate_moves(game_state: &GameState, color: Color) -> MoveList {
    let mut moves = generate_pseudo_legal_moves(game_state, color);
    moves.retain(|mv| is_move_legal(game_state, mv));
    moves
}

/// Legal moves for the side to move.
#[inline]
pub fn generate_legal_moves(game_state: &GameState) -> MoveList {
    generate_moves(game_state, game_state.side_to_move())
}

/// Legality of a pseudo-legal move for the piece standing on `mv.from`.
pub fn is_move_legal(game_state: &GameState, mv: &BoardMove) -> bool {
    let moving = game_state.tile(mv.from);
    let color = moving.color();

    if mv.is_castle(moving.kind()) {
        if is_king_in_check(game_state, color) {
            return false;
        }
        let passed_file = if mv.to.file() == KING_LONG_CASTLE_FILE {
            ROOK_LONG_CASTLE_FILE
        } else {
            ROOK_SHORT_CASTLE_FILE
        };
        let mut passing = *game_state;
        apply_move(&mut passing, &BoardMove::new(mv.from, TileCoords::new(passed_file, mv.from.rank())));
        if is_king_in_check(&passing, color) {
            return false;
        }
    }

    let mut next = *game_state;
    apply_move(&mut next, mv);
    !is_king_in_check(&next, color)
}
