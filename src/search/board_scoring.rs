//! Pluggable board evaluation interfaces and the baseline material evaluator.
//!
//! Search remains modular by delegating leaf scoring to this trait, so an
//! alternative evaluator (a learned one, say) can be swapped in without
//! touching the search code. Scores are always from White's point of view:
//! White maximizes, Black minimizes.

use std::fmt::Debug;

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::moves::move_descriptions::MoveList;

pub trait BoardEvaluator: Send + Sync {
    type Score: Copy + Ord + Send + Sync + Debug;

    /// Score of a position where Black has won.
    const MIN_SCORE: Self::Score;
    /// Score of a position where White has won.
    const MAX_SCORE: Self::Score;
    /// Score of a drawn position.
    const NEUTRAL_SCORE: Self::Score;

    /// Pure function of the position. `moves` holds the legal moves of the
    /// side to move and is empty at checkmate or stalemate.
    fn evaluate(&self, game_state: &GameState, moves: &MoveList) -> Self::Score;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialEvaluator;

impl MaterialEvaluator {
    #[inline]
    pub const fn piece_value(kind: PieceKind) -> i16 {
        match kind {
            PieceKind::Pawn => 10,
            PieceKind::Knight => 30,
            PieceKind::Bishop => 35,
            PieceKind::Rook => 50,
            PieceKind::Queen => 100,
            PieceKind::King | PieceKind::Empty => 0,
        }
    }

    /// White material minus Black material.
    pub fn material_balance(game_state: &GameState) -> i16 {
        game_state
            .occupied_tiles()
            .map(|(_, tile)| match tile.color() {
                Color::Light => Self::piece_value(tile.kind()),
                Color::Dark => -Self::piece_value(tile.kind()),
            })
            .sum()
    }
}

impl BoardEvaluator for MaterialEvaluator {
    type Score = i16;

    const MIN_SCORE: i16 = -10_000;
    const MAX_SCORE: i16 = 10_000;
    const NEUTRAL_SCORE: i16 = 0;

    fn evaluate(&self, game_state: &GameState, moves: &MoveList) -> i16 {
        if !moves.is_empty() {
            return Self::material_balance(game_state);
        }

        let side = game_state.side_to_move();
        if !is_king_in_check(game_state, side) {
            return Self::NEUTRAL_SCORE;
        }
        match side {
            Color::Light => Self::MIN_SCORE,
            Color::Dark => Self::MAX_SCORE,
        }
    }
}
