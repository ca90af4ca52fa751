//! Long algebraic move text (`e2e4`, `e7e8q`).
//!
//! Parsing resolves the text against the legal moves of the position, so the
//! returned move carries any en-passant data the generator attached.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::moves::move_descriptions::BoardMove;
use crate::utils::algebraic::algebraic_to_square;
use crate::utils::notation_error::{NotationError, NotationResult};

#[inline]
pub fn move_to_long_algebraic(mv: &BoardMove) -> String {
    mv.to_string()
}

pub fn long_algebraic_to_move(long_algebraic: &str, game_state: &GameState) -> NotationResult<BoardMove> {
    let invalid = |message: &str| NotationError::InvalidMove {
        value: long_algebraic.to_owned(),
        message: message.to_owned(),
    };

    if !long_algebraic.is_ascii() || !(4..=5).contains(&long_algebraic.len()) {
        return Err(invalid("expected 4 or 5 characters"));
    }

    let from = algebraic_to_square(&long_algebraic[0..2])?;
    let to = algebraic_to_square(&long_algebraic[2..4])?;
    let promotion = match long_algebraic[4..].chars().next() {
        None => PieceKind::Empty,
        Some(letter) => match PieceKind::from_fen_letter(letter) {
            Some(kind) if PROMOTION_KINDS.contains(&kind) && letter.is_ascii_lowercase() => kind,
            _ => return Err(invalid("unknown promotion piece")),
        },
    };

    generate_legal_moves(game_state)
        .into_iter()
        .find(|mv| mv.from == from && mv.to == to && mv.promotion == promotion)
        .ok_or_else(|| invalid("not a legal move in this position"))
}
