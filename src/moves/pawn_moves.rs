use crate::game_state::chess_rules::pawn_direction;
use crate::game_state::chess_types::{Color, TileCoords};
use crate::moves::move_descriptions::{bit_if_on_board, mask_squares};

/// Diagonal capture targets of a pawn standing on each square.
pub const LIGHT_PAWN_ATTACKS: [u64; 64] = generate_pawn_attacks(1);
pub const DARK_PAWN_ATTACKS: [u64; 64] = generate_pawn_attacks(-1);

#[inline]
pub const fn pawn_attack_mask(color: Color, from: TileCoords) -> u64 {
    match color {
        Color::Light => LIGHT_PAWN_ATTACKS[from.index()],
        Color::Dark => DARK_PAWN_ATTACKS[from.index()],
    }
}

#[inline]
pub fn pawn_capture_targets(color: Color, from: TileCoords) -> impl Iterator<Item = TileCoords> {
    mask_squares(pawn_attack_mask(color, from))
}

/// Square one push ahead of `from`, `None` past the last rank.
#[inline]
pub const fn pawn_push_target(color: Color, from: TileCoords) -> Option<TileCoords> {
    from.offset(0, pawn_direction(color))
}

const fn generate_pawn_attacks(direction: i32) -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let file = (sq % 8) as i32;
        let rank = (sq / 8) as i32;
        table[sq] = bit_if_on_board(file - 1, rank + direction)
            | bit_if_on_board(file + 1, rank + direction);
        sq += 1;
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_pawn_attacks_from_e2() {
        let expected = (1u64 << 19) | (1u64 << 21);
        assert_eq!(pawn_attack_mask(Color::Light, TileCoords::new(4, 1)), expected);
    }

    #[test]
    fn dark_pawn_attacks_from_a7() {
        let targets: Vec<_> = pawn_capture_targets(Color::Dark, TileCoords::new(0, 6)).collect();
        assert_eq!(targets, vec![TileCoords::new(1, 5)]);
    }

    #[test]
    fn push_target_follows_color() {
        let e4 = TileCoords::new(4, 3);
        assert_eq!(pawn_push_target(Color::Light, e4), Some(TileCoords::new(4, 4)));
        assert_eq!(pawn_push_target(Color::Dark, e4), Some(TileCoords::new(4, 2)));
        assert_eq!(pawn_push_target(Color::Light, TileCoords::new(0, 7)), None);
    }
}
