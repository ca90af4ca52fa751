//! Generic depth-limited min-max search with alpha-beta pruning and memoization.
//!
//! Scores come from a [`BoardEvaluator`] and are always from White's point of
//! view: White nodes maximize, Black nodes minimize. Positions are explored by
//! copying, never by unmaking moves.
//!
//! With `memoize` on, a position already searched deeper is not searched
//! again at a smaller depth (see [`TranspositionTable`]), so from depth 5 on a
//! memoized value may differ from plain minimax where transpositions occur.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::search::board_scoring::BoardEvaluator;
use crate::search::transposition_table::{Bound, TTEntry, TTStats, TranspositionTable};

/// Stored depth of checkmate, stalemate and insufficient-material leaves.
/// Their score does not depend on the remaining depth.
const TERMINAL_DEPTH: u8 = u8::MAX;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub max_depth: u8,
    pub alpha_beta: bool,
    pub memoize: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: 4,
            alpha_beta: true,
            memoize: true,
        }
    }
}

impl SearchConfig {
    /// Exhaustive minimax, no pruning and no memo. Used as a reference.
    pub fn plain(max_depth: u8) -> Self {
        Self {
            max_depth,
            alpha_beta: false,
            memoize: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MinMaxTree<E: BoardEvaluator> {
    evaluator: E,
    config: SearchConfig,
    memo: TranspositionTable<E::Score>,
    nodes: u64,
}

impl<E: BoardEvaluator> MinMaxTree<E> {
    pub fn new(evaluator: E, config: SearchConfig) -> Self {
        Self {
            evaluator,
            config,
            memo: TranspositionTable::new(),
            nodes: 0,
        }
    }

    #[inline]
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    #[inline]
    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    /// Nodes visited since construction or the last [`clear`](Self::clear).
    #[inline]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    #[inline]
    pub fn memo_stats(&self) -> TTStats {
        self.memo.stats()
    }

    #[inline]
    pub fn memo_len(&self) -> usize {
        self.memo.len()
    }

    pub fn clear(&mut self) {
        self.memo.clear();
        self.nodes = 0;
    }

    /// Min-max value of `game_state` searched `depth` plies deep.
    pub fn expand(&mut self, game_state: &GameState, depth: u8) -> E::Score {
        self.expand_node(game_state, depth, E::MIN_SCORE, E::MAX_SCORE)
    }

    /// Search with an explicit `(alpha, beta)` window. The result is exact
    /// when it falls strictly inside the window and a bound otherwise.
    pub fn expand_window(&mut self, game_state: &GameState, depth: u8, alpha: E::Score, beta: E::Score) -> E::Score {
        self.expand_node(game_state, depth, alpha, beta)
    }

    fn expand_node(&mut self, game_state: &GameState, depth: u8, mut alpha: E::Score, mut beta: E::Score) -> E::Score {
        self.nodes += 1;
        let (alpha0, beta0) = (alpha, beta);

        if self.config.memoize {
            if let Some(score) = self
                .memo
                .probe(game_state)
                .and_then(|entry| entry.usable_score(depth, alpha, beta))
            {
                return score;
            }
        }

        let moves = generate_legal_moves(game_state);
        let terminal = moves.is_empty() || game_state.is_draw();
        if depth == 0 || terminal {
            let score = self.evaluator.evaluate(game_state, &moves);
            let stored_depth = if terminal { TERMINAL_DEPTH } else { 0 };
            self.remember(game_state, stored_depth, score, Bound::Exact);
            return score;
        }

        let maximizing = game_state.side_to_move() == Color::Light;
        let mut best = if maximizing { E::MIN_SCORE } else { E::MAX_SCORE };

        for mv in &moves {
            let child = game_state.play_move(mv);
            let score = if self.config.alpha_beta {
                self.expand_node(&child, depth - 1, alpha, beta)
            } else {
                self.expand_node(&child, depth - 1, E::MIN_SCORE, E::MAX_SCORE)
            };

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }

            if self.config.alpha_beta && alpha >= beta {
                break;
            }
        }

        let bound = if !self.config.alpha_beta {
            Bound::Exact
        } else if best <= alpha0 {
            Bound::Upper
        } else if best >= beta0 {
            Bound::Lower
        } else {
            Bound::Exact
        };
        self.remember(game_state, depth, best, bound);
        best
    }

    #[inline]
    fn remember(&mut self, game_state: &GameState, depth: u8, score: E::Score, bound: Bound) {
        if self.config.memoize {
            self.memo.store(game_state, TTEntry { depth, score, bound });
        }
    }
}
