//! Fixed-depth min-max engine over any [`BoardEvaluator`].
//!
//! Root moves are scored in parallel by [`search_root_parallel`]. With
//! `randomize_ties` the engine picks uniformly among the root moves that share
//! the best score; otherwise the first one in generation order wins.

use std::time::Duration;

use log::info;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::search::board_scoring::{BoardEvaluator, MaterialEvaluator};
use crate::search::min_max_tree::SearchConfig;
use crate::search::threading::{search_root_parallel, SearchLimits, ThreadingConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinMaxEngineConfig {
    pub depth: u8,
    pub threads: usize,
    pub time_budget: Option<Duration>,
    pub randomize_ties: bool,
}

impl Default for MinMaxEngineConfig {
    fn default() -> Self {
        Self {
            depth: 3,
            threads: 1,
            time_budget: None,
            randomize_ties: false,
        }
    }
}

impl MinMaxEngineConfig {
    pub fn with_depth(mut self, depth: u8) -> Self {
        self.depth = depth.max(1);
        self
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads.max(1);
        self
    }

    pub fn with_time_budget(mut self, time_budget: Duration) -> Self {
        self.time_budget = Some(time_budget);
        self
    }

    pub fn with_randomized_ties(mut self, randomize_ties: bool) -> Self {
        self.randomize_ties = randomize_ties;
        self
    }

    fn search_config(&self) -> SearchConfig {
        SearchConfig {
            max_depth: self.depth,
            ..SearchConfig::default()
        }
    }
}

pub struct MinMaxEngine<E: BoardEvaluator + Clone = MaterialEvaluator> {
    evaluator: E,
    config: MinMaxEngineConfig,
    rng: StdRng,
}

impl MinMaxEngine<MaterialEvaluator> {
    pub fn material(config: MinMaxEngineConfig) -> Self {
        Self::new(MaterialEvaluator, config)
    }
}

impl<E: BoardEvaluator + Clone> MinMaxEngine<E> {
    pub fn new(evaluator: E, config: MinMaxEngineConfig) -> Self {
        Self {
            evaluator,
            config,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible tie-breaking.
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    #[inline]
    pub fn config(&self) -> MinMaxEngineConfig {
        self.config
    }
}

impl<E> Engine for MinMaxEngine<E>
where
    E: BoardEvaluator + Clone,
    E::Score: Into<i64>,
{
    fn name(&self) -> &str {
        "Alder MinMax"
    }

    fn choose_move(&mut self, game_state: &GameState) -> EngineOutput {
        let legal_moves = generate_legal_moves(game_state);
        if legal_moves.len() <= 1 {
            return EngineOutput {
                best_move: legal_moves.first().copied(),
                score: None,
                nodes: 0,
            };
        }

        let result = search_root_parallel(
            game_state,
            &self.evaluator,
            self.config.search_config(),
            ThreadingConfig {
                requested_threads: self.config.threads,
            },
            SearchLimits {
                time_budget: self.config.time_budget,
            },
        );

        let best_move = if self.config.randomize_ties {
            result
                .tied_best_moves()
                .choose(&mut self.rng)
                .copied()
                .or(result.best_move)
        } else {
            result.best_move
        };
        let score = result.best_score.map(Into::into);

        if let Some(mv) = best_move {
            info!(
                "chose {mv} score {score:?} after {}/{} root moves, {} nodes",
                result.searched_moves,
                legal_moves.len(),
                result.nodes
            );
        }

        EngineOutput {
            best_move,
            score,
            nodes: result.nodes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(fen: &str) -> GameState {
        GameState::from_fen(fen).expect("FEN should parse")
    }

    #[test]
    fn config_builder_clamps_values() {
        let config = MinMaxEngineConfig::default()
            .with_depth(0)
            .with_threads(0)
            .with_randomized_ties(true);
        assert_eq!(config.depth, 1);
        assert_eq!(config.threads, 1);
        assert!(config.randomize_ties);
        assert_eq!(config.time_budget, None);
    }

    #[test]
    fn plays_mate_in_one() {
        let game = parse("r1bqkbnr/pppp1ppp/2n5/4p3/2B1P3/5Q2/PPPP1PPP/RNB1K1NR w KQkq - 4 4");
        let mut engine = MinMaxEngine::material(MinMaxEngineConfig::default().with_depth(2).with_threads(2));
        let output = engine.choose_move(&game);
        assert_eq!(output.best_move.map(|mv| mv.to_string()).as_deref(), Some("f3f7"));
        assert_eq!(output.score, Some(i64::from(MaterialEvaluator::MAX_SCORE)));
    }

    #[test]
    fn single_reply_skips_the_search() {
        // The rook on a2 covers the second rank, leaving only Kg1.
        let game = parse("6k1/8/8/8/8/8/r7/7K w - - 0 1");
        let mut engine = MinMaxEngine::material(MinMaxEngineConfig::default());
        let output = engine.choose_move(&game);
        assert_eq!(output.nodes, 0);
        assert!(output.best_move.is_some());
    }

    #[test]
    fn randomized_ties_stay_among_best_moves() {
        let game = GameState::new_game();
        let mut engine = MinMaxEngine::material(
            MinMaxEngineConfig::default()
                .with_depth(1)
                .with_randomized_ties(true),
        )
        .with_rng_seed(7);
        let legal = generate_legal_moves(&game);
        for _ in 0..5 {
            let output = engine.choose_move(&game);
            assert!(legal.contains(&output.best_move.expect("start has moves")));
            assert_eq!(output.score, Some(0));
        }
    }

    #[test]
    fn no_move_when_stalemated() {
        let stalemate = parse("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
        let mut engine = MinMaxEngine::material(MinMaxEngineConfig::default());
        assert_eq!(engine.choose_move(&stalemate).best_move, None);
    }
}
