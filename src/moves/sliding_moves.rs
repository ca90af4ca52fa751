//! Ray walking for bishops, rooks and queens.
//!
//! The tile board has no occupancy bitboards, so rays are walked square by
//! square and the caller decides what to do with the first occupied square.

use crate::game_state::chess_types::{Tile, TileCoords};
use crate::game_state::game_state::GameState;

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];
pub const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (-1, 1),
    (1, -1),
    (-1, -1),
];

/// Squares from `from` (exclusive) to the board edge along `direction`.
#[inline]
pub fn ray(from: TileCoords, direction: (i8, i8)) -> impl Iterator<Item = TileCoords> {
    let (d_file, d_rank) = direction;
    std::iter::successors(from.offset(d_file, d_rank), move |sq| sq.offset(d_file, d_rank))
}

/// First occupied square along a ray, with its occupant.
#[inline]
pub fn first_blocker(
    game_state: &GameState,
    from: TileCoords,
    direction: (i8, i8),
) -> Option<(TileCoords, Tile)> {
    ray(from, direction)
        .map(|sq| (sq, game_state.tile(sq)))
        .find(|(_, tile)| !tile.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rook_rays_from_d4_cover_fourteen_squares() {
        let d4 = TileCoords::new(3, 3);
        let total: usize = ROOK_DIRECTIONS.iter().map(|&dir| ray(d4, dir).count()).sum();
        assert_eq!(total, 14);
    }

    #[test]
    fn bishop_rays_from_corner() {
        let a1 = TileCoords::new(0, 0);
        let total: usize = BISHOP_DIRECTIONS.iter().map(|&dir| ray(a1, dir).count()).sum();
        assert_eq!(total, 7);
    }

    #[test]
    fn blocker_stops_ray() {
        let game = GameState::new_game();
        let (sq, tile) = first_blocker(&game, TileCoords::new(0, 0), (0, 1)).expect("a2 pawn");
        assert_eq!(sq, TileCoords::new(0, 1));
        assert_eq!(tile.to_fen_char(), Some('P'));
        assert_eq!(first_blocker(&game, TileCoords::new(4, 3), (1, 0)), None);
    }
}
