//! Canonical chess-rule constants.
//!
//! This module stores static rule-related literals such as the standard
//! starting position FEN and the fixed files/ranks the irregular rules
//! (castling, double pawn pushes, promotion) are anchored to.

use crate::game_state::chess_types::Color;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

pub const BOARD_SIZE: i8 = 8;

/// File the king starts on and castles from.
pub const KING_START_FILE: i8 = 4;
pub const KING_LONG_CASTLE_FILE: i8 = 2;
pub const KING_SHORT_CASTLE_FILE: i8 = 6;
pub const ROOK_LONG_CASTLE_FILE: i8 = 3;
pub const ROOK_SHORT_CASTLE_FILE: i8 = 5;
pub const ROOK_LONG_START_FILE: i8 = 0;
pub const ROOK_SHORT_START_FILE: i8 = 7;

#[inline]
pub const fn home_rank(color: Color) -> i8 {
    match color {
        Color::Light => 0,
        Color::Dark => 7,
    }
}

#[inline]
pub const fn pawn_start_rank(color: Color) -> i8 {
    match color {
        Color::Light => 1,
        Color::Dark => 6,
    }
}

#[inline]
pub const fn promotion_rank(color: Color) -> i8 {
    match color {
        Color::Light => 7,
        Color::Dark => 0,
    }
}

/// Rank delta of a single pawn push.
#[inline]
pub const fn pawn_direction(color: Color) -> i8 {
    match color {
        Color::Light => 1,
        Color::Dark => -1,
    }
}
