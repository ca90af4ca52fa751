//! Square conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and `TileCoords`,
//! reused by the FEN and long-algebraic components.

use crate::game_state::chess_types::TileCoords;
use crate::utils::notation_error::{NotationError, NotationResult};

/// Convert algebraic notation (for example: "e4") to coordinates.
#[inline]
pub fn algebraic_to_square(square: &str) -> NotationResult<TileCoords> {
    let invalid = || NotationError::InvalidSquare {
        value: square.to_owned(),
    };

    let &[file, rank] = square.as_bytes() else {
        return Err(invalid());
    };
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(invalid());
    }

    Ok(TileCoords::new((file - b'a') as i8, (rank - b'1') as i8))
}

/// Convert coordinates to algebraic notation, `None` for the invalid sentinel.
#[inline]
pub fn square_to_algebraic(square: TileCoords) -> Option<String> {
    square.is_valid().then(|| square.to_string())
}
