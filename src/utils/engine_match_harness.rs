//! Single-game driver pitting two engines against each other.
//!
//! The players alternate from a start position until the game reaches a
//! terminal [`GameStatus`] or the ply cap runs out. No UCI I/O, no clocks.

use log::{debug, info, warn};

use crate::engines::engine_trait::Engine;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::{game_status, GameStatus};
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::moves::move_descriptions::BoardMove;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    WhiteWins,
    BlackWins,
    /// Stalemate or bare kings.
    Draw,
    /// The ply cap was reached with the game still going.
    DrawNoMoves,
}

impl GameResult {
    #[inline]
    pub fn winner(color: Color) -> Self {
        match color {
            Color::Light => GameResult::WhiteWins,
            Color::Dark => GameResult::BlackWins,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GameRecord {
    pub result: GameResult,
    /// Status of `final_state` when the game stopped.
    pub status: GameStatus,
    pub final_state: GameState,
    pub moves: Vec<BoardMove>,
}

/// Play a game from the standard start. `max_plies == 0` means no cap.
pub fn play_game(white: &mut dyn Engine, black: &mut dyn Engine, max_plies: usize) -> GameResult {
    play_game_from(GameState::new_game(), white, black, max_plies).result
}

/// Play a game from `start`, the side to move in `start` going first.
///
/// An engine that answers without a move, or with one that is not legal,
/// while legal moves exist forfeits the game.
pub fn play_game_from(
    start: GameState,
    white: &mut dyn Engine,
    black: &mut dyn Engine,
    max_plies: usize,
) -> GameRecord {
    white.new_game();
    black.new_game();

    let mut game = start;
    let mut moves = Vec::new();

    loop {
        let status = game_status(&game);
        let side = game.side_to_move();
        let result = match status {
            GameStatus::Checkmate => Some(GameResult::winner(side.opposite())),
            GameStatus::Stalemate | GameStatus::InsufficientMaterial => Some(GameResult::Draw),
            GameStatus::Ongoing if max_plies != 0 && moves.len() >= max_plies => Some(GameResult::DrawNoMoves),
            GameStatus::Ongoing => None,
        };
        if let Some(result) = result {
            info!("game over after {} plies: {result:?} ({status:?})", moves.len());
            return GameRecord {
                result,
                status,
                final_state: game,
                moves,
            };
        }

        let engine: &mut dyn Engine = match side {
            Color::Light => &mut *white,
            Color::Dark => &mut *black,
        };
        let chosen = engine.choose_move(&game).best_move;
        let legal = generate_legal_moves(&game);
        let Some(mv) = chosen.and_then(|mv| legal.iter().copied().find(|legal_mv| *legal_mv == mv)) else {
            warn!("{} gave no legal move in {}, forfeiting", engine.name(), game.get_fen());
            return GameRecord {
                result: GameResult::winner(side.opposite()),
                status,
                final_state: game,
                moves,
            };
        };

        debug!("ply {}: {} plays {mv}", moves.len() + 1, engine.name());
        game = game.play_move(&mv);
        moves.push(mv);
    }
}
