//! Uniform random-move engine.
//!
//! Used for diagnostics, integration testing and as a weak sparring partner.

use rand::prelude::IndexedRandom;

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::generate_legal_moves;

#[derive(Debug, Clone, Copy, Default)]
pub struct RandomEngine;

impl RandomEngine {
    pub fn new() -> Self {
        Self
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Alder Random"
    }

    fn choose_move(&mut self, game_state: &GameState) -> EngineOutput {
        let legal_moves = generate_legal_moves(game_state);
        let mut rng = rand::rng();
        EngineOutput {
            best_move: legal_moves.as_slice().choose(&mut rng).copied(),
            score: None,
            nodes: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_a_legal_move() {
        let game = GameState::new_game();
        let legal = generate_legal_moves(&game);
        let mut engine = RandomEngine::new();
        for _ in 0..20 {
            let output = engine.choose_move(&game);
            let mv = output.best_move.expect("start has moves");
            assert!(legal.contains(&mv));
            assert_eq!(output.nodes, 0);
            assert_eq!(output.score, None);
        }
    }

    #[test]
    fn no_move_when_mated() {
        let mated = GameState::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3")
            .expect("FEN should parse");
        assert_eq!(RandomEngine.choose_move(&mated).best_move, None);
    }
}
