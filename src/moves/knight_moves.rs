use crate::game_state::chess_types::TileCoords;
use crate::moves::move_descriptions::{bit_if_on_board, mask_squares};

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

/// Knight targets per square as `rank * 8 + file` masks.
pub const KNIGHT_ATTACKS: [u64; 64] = generate_knight_attacks();

#[inline]
pub fn knight_targets(from: TileCoords) -> impl Iterator<Item = TileCoords> {
    mask_squares(KNIGHT_ATTACKS[from.index()])
}

const fn generate_knight_attacks() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let file = (sq % 8) as i32;
        let rank = (sq / 8) as i32;
        let mut attacks = 0u64;
        let mut i = 0;
        while i < KNIGHT_OFFSETS.len() {
            let (d_file, d_rank) = KNIGHT_OFFSETS[i];
            attacks |= bit_if_on_board(file + d_file as i32, rank + d_rank as i32);
            i += 1;
        }
        table[sq] = attacks;
        sq += 1;
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn knight_on_d4_has_eight_targets() {
        assert_eq!(knight_targets(TileCoords::new(3, 3)).count(), 8);
    }

    #[test]
    fn knight_in_corner_has_two_targets() {
        let targets: Vec<_> = knight_targets(TileCoords::new(0, 0)).collect();
        assert_eq!(targets, vec![TileCoords::new(2, 1), TileCoords::new(1, 2)]);
    }
}
