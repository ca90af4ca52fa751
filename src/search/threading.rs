//! Root-parallel min-max search.
//!
//! Root moves are handed out through a shared atomic cursor. Each worker owns
//! a private [`MinMaxTree`] (and so a private memo table), keeps its best root
//! move locally, and merges once into a mutex-guarded reduction when it runs
//! out of work. The time budget is only consulted before a newly claimed root
//! move is searched; a started subtree always runs to completion.

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Mutex, PoisonError,
};
use std::thread;
use std::time::{Duration, Instant};

use log::debug;

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::moves::move_descriptions::BoardMove;
use crate::search::board_scoring::BoardEvaluator;
use crate::search::min_max_tree::{MinMaxTree, SearchConfig};

/// Threading configuration owned by the engine instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThreadingConfig {
    pub requested_threads: usize,
}

impl Default for ThreadingConfig {
    fn default() -> Self {
        Self { requested_threads: 1 }
    }
}

impl ThreadingConfig {
    /// One worker per available core.
    pub fn all_cores() -> Self {
        Self {
            requested_threads: thread::available_parallelism().map_or(1, |n| n.get()),
        }
    }

    #[inline]
    pub fn normalized_threads(self) -> usize {
        self.requested_threads.max(1)
    }

    /// Worker count for a root with `root_moves` moves. Never more workers
    /// than moves, never fewer than one.
    #[inline]
    pub fn effective_threads(self, root_moves: usize) -> usize {
        self.normalized_threads().min(root_moves.max(1))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchLimits {
    /// `None` searches every root move.
    pub time_budget: Option<Duration>,
}

impl SearchLimits {
    pub fn with_time_budget(time_budget: Duration) -> Self {
        Self {
            time_budget: Some(time_budget),
        }
    }

    #[inline]
    fn expired(&self, started: Instant) -> bool {
        self.time_budget.is_some_and(|budget| started.elapsed() >= budget)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootSearchResult<S> {
    pub best_move: Option<BoardMove>,
    pub best_index: Option<usize>,
    pub best_score: Option<S>,
    /// Every root move in generation order; `None` when the time budget ran
    /// out before the move was searched.
    pub scores: Vec<(BoardMove, Option<S>)>,
    pub nodes: u64,
    pub searched_moves: usize,
}

impl<S: Copy + Ord> RootSearchResult<S> {
    fn empty() -> Self {
        Self {
            best_move: None,
            best_index: None,
            best_score: None,
            scores: Vec::new(),
            nodes: 0,
            searched_moves: 0,
        }
    }

    /// Searched root moves sharing the best score, in generation order.
    pub fn tied_best_moves(&self) -> Vec<BoardMove> {
        let Some(best) = self.best_score else {
            return Vec::new();
        };
        self.scores
            .iter()
            .filter(|(_, score)| *score == Some(best))
            .map(|(mv, _)| *mv)
            .collect()
    }
}

struct WorkerReport<S> {
    best: Option<(usize, S)>,
    scores: Vec<(usize, S)>,
    nodes: u64,
}

struct Reduction<S> {
    best: Option<(usize, S)>,
    scores: Vec<Option<S>>,
    nodes: u64,
}

impl<S: Copy + Ord> Reduction<S> {
    fn merge(&mut self, report: WorkerReport<S>, side: Color) {
        self.nodes += report.nodes;
        for (index, score) in report.scores {
            self.scores[index] = Some(score);
        }
        if let Some(candidate) = report.best {
            if self.best.map_or(true, |incumbent| prefers(side, candidate, incumbent)) {
                self.best = Some(candidate);
            }
        }
    }
}

/// Whether `candidate` beats `incumbent` for `side`. Equal scores go to the
/// lower root-move index so the result does not depend on thread timing.
#[inline]
fn prefers<S: Ord>(side: Color, candidate: (usize, S), incumbent: (usize, S)) -> bool {
    if candidate.1 == incumbent.1 {
        return candidate.0 < incumbent.0;
    }
    match side {
        Color::Light => candidate.1 > incumbent.1,
        Color::Dark => candidate.1 < incumbent.1,
    }
}

/// Score every root move of `game_state` to `search.max_depth` plies and pick
/// the best one for the side to move.
pub fn search_root_parallel<E>(
    game_state: &GameState,
    evaluator: &E,
    search: SearchConfig,
    threading: ThreadingConfig,
    limits: SearchLimits,
) -> RootSearchResult<E::Score>
where
    E: BoardEvaluator + Clone,
{
    let started = Instant::now();
    let root_moves = generate_legal_moves(game_state);
    if root_moves.is_empty() {
        return RootSearchResult::empty();
    }

    let side = game_state.side_to_move();
    let depth = search.max_depth.max(1);
    let cursor = AtomicUsize::new(0);
    let reduction = Mutex::new(Reduction {
        best: None,
        scores: vec![None; root_moves.len()],
        nodes: 0,
    });

    let run_worker = || {
        let report = search_worker(game_state, &root_moves, evaluator, search, depth, limits, started, &cursor);
        reduction
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .merge(report, side);
    };

    let threads = threading.effective_threads(root_moves.len());
    if threads == 1 {
        run_worker();
    } else {
        thread::scope(|scope| {
            for _ in 0..threads {
                scope.spawn(run_worker);
            }
        });
    }

    let reduction = reduction.into_inner().unwrap_or_else(PoisonError::into_inner);
    let searched_moves = reduction.scores.iter().filter(|score| score.is_some()).count();
    RootSearchResult {
        best_move: reduction.best.map(|(index, _)| root_moves[index]),
        best_index: reduction.best.map(|(index, _)| index),
        best_score: reduction.best.map(|(_, score)| score),
        scores: root_moves.iter().copied().zip(reduction.scores).collect(),
        nodes: reduction.nodes,
        searched_moves,
    }
}

#[allow(clippy::too_many_arguments)]
fn search_worker<E>(
    game_state: &GameState,
    root_moves: &[BoardMove],
    evaluator: &E,
    search: SearchConfig,
    depth: u8,
    limits: SearchLimits,
    started: Instant,
    cursor: &AtomicUsize,
) -> WorkerReport<E::Score>
where
    E: BoardEvaluator + Clone,
{
    let side = game_state.side_to_move();
    let mut tree = MinMaxTree::new(evaluator.clone(), search);
    let mut report = WorkerReport {
        best: None,
        scores: Vec::new(),
        nodes: 0,
    };

    loop {
        let index = cursor.fetch_add(1, Ordering::Relaxed);
        if index >= root_moves.len() {
            break;
        }
        // The first root move is always searched so there is a move to play.
        if index > 0 && limits.expired(started) {
            break;
        }

        let mv = root_moves[index];
        let score = tree.expand(&game_state.play_move(&mv), depth - 1);
        debug!("root move {mv} -> {score:?}");

        report.scores.push((index, score));
        if report.best.map_or(true, |incumbent| prefers(side, (index, score), incumbent)) {
            report.best = Some((index, score));
        }
    }

    report.nodes = tree.nodes();
    report
}
