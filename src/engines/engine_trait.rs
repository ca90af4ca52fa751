//! Move-choice strategy interface.
//!
//! Engines only consume the public position API (legal move generation and
//! move application), so a caller can swap strategies behind one trait object.

use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::BoardMove;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngineOutput {
    /// `None` when the side to move has no legal move.
    pub best_move: Option<BoardMove>,
    /// White-relative score of `best_move`, when the engine computed one.
    pub score: Option<i64>,
    pub nodes: u64,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn choose_move(&mut self, game_state: &GameState) -> EngineOutput;
}
