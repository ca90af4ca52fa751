//! King step tables.
//!
//! Castling is not a step and is produced by the king generator in
//! `move_generation::legal_moves_king`.

use crate::game_state::chess_types::TileCoords;
use crate::moves::move_descriptions::{bit_if_on_board, mask_squares};

pub const KING_ATTACKS: [u64; 64] = generate_king_attacks();

#[inline]
pub fn king_targets(from: TileCoords) -> impl Iterator<Item = TileCoords> {
    mask_squares(KING_ATTACKS[from.index()])
}

const fn generate_king_attacks() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let file = (sq % 8) as i32;
        let rank = (sq / 8) as i32;
        let mut attacks = 0u64;
        let mut d_rank = -1;
        while d_rank <= 1 {
            let mut d_file = -1;
            while d_file <= 1 {
                if d_file != 0 || d_rank != 0 {
                    attacks |= bit_if_on_board(file + d_file, rank + d_rank);
                }
                d_file += 1;
            }
            d_rank += 1;
        }
        table[sq] = attacks;
        sq += 1;
    }

    table
}
