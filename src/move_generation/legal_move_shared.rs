//! Helpers shared by the per-piece pseudo-legal generators.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::move_descriptions::{BoardMove, MoveList};
use crate::moves::sliding_moves::ray;

/// Whether a piece of `color` may land on `tile`: empty, or an enemy other
/// than the king. Kings are never captured.
#[inline]
pub fn is_landing_tile(tile: Tile, color: Color) -> bool {
    !tile.is_color(color) && tile.kind() != PieceKind::King
}

/// Push a move to every target that is empty or holds a capturable enemy.
#[inline]
pub fn push_step_moves(
    game_state: &GameState,
    color: Color,
    from: TileCoords,
    targets: impl Iterator<Item = TileCoords>,
    out: &mut MoveList,
) {
    for to in targets {
        if is_landing_tile(game_state.tile(to), color) {
            out.push(BoardMove::new(from, to));
        }
    }
}

/// Walk each ray until the first occupied square, keeping it only if it is a
/// capturable enemy.
#[inline]
pub fn push_ray_moves(
    game_state: &GameState,
    color: Color,
    from: TileCoords,
    directions: &[(i8, i8)],
    out: &mut MoveList,
) {
    for &direction in directions {
        for to in ray(from, direction) {
            let tile = game_state.tile(to);
            if tile.is_empty() {
                out.push(BoardMove::new(from, to));
                continue;
            }
            if is_landing_tile(tile, color) {
                out.push(BoardMove::new(from, to));
            }
            break;
        }
    }
}

/// Whether the destination of `mv` currently holds a piece, en passant
/// included.
#[inline]
pub fn is_capture(game_state: &GameState, mv: &BoardMove) -> bool {
    mv.is_en_passant() || !game_state.tile(mv.to).is_empty()
}
