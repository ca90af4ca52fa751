//! Memo table for the min-max search, keyed by position.
//!
//! Positions hash to their Zobrist key and compare with full equality, so a
//! key collision between two different positions never returns the wrong
//! entry. Replacement is depth-preferred: a shallower result never evicts a
//! deeper one for the same position.
//!
//! A stored result answers any query of equal or smaller depth. When the same
//! position is reached with different remaining depths (a transposition that
//! needs at least two extra plies, so searches of depth 5 and more), the
//! memoized value can come from the deeper search and differ from a strict
//! fixed-depth minimax of that subtree.

use std::collections::HashMap;
use std::hash::{BuildHasherDefault, Hasher};

use crate::game_state::game_state::GameState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Exact,
    /// The true score is at least `score`.
    Lower,
    /// The true score is at most `score`.
    Upper,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TTEntry<S> {
    pub depth: u8,
    pub score: S,
    pub bound: Bound,
}

impl<S: Copy + Ord> TTEntry<S> {
    /// Score to reuse for a search of `depth` plies in the `(alpha, beta)`
    /// window, if this entry decides it.
    #[inline]
    pub fn usable_score(&self, depth: u8, alpha: S, beta: S) -> Option<S> {
        if self.depth < depth {
            return None;
        }
        match self.bound {
            Bound::Exact => Some(self.score),
            Bound::Lower if self.score >= beta => Some(self.score),
            Bound::Upper if self.score <= alpha => Some(self.score),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TTStats {
    pub probes: u64,
    pub hits: u64,
    pub stores: u64,
}

/// Pass-through hasher: `GameState` already feeds a well-mixed 64-bit key.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZobristHasher(u64);

impl Hasher for ZobristHasher {
    #[inline]
    fn finish(&self) -> u64 {
        self.0
    }

    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.0 = self.0.rotate_left(8) ^ u64::from(byte);
        }
    }

    #[inline]
    fn write_u64(&mut self, key: u64) {
        self.0 ^= key;
    }
}

pub type ZobristBuildHasher = BuildHasherDefault<ZobristHasher>;

#[derive(Debug, Clone)]
pub struct TranspositionTable<S> {
    entries: HashMap<GameState, TTEntry<S>, ZobristBuildHasher>,
    stats: TTStats,
}

impl<S: Copy> Default for TranspositionTable<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Copy> TranspositionTable<S> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::default(),
            stats: TTStats::default(),
        }
    }

    #[inline]
    pub fn clear(&mut self) {
        self.entries.clear();
        self.stats = TTStats::default();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn stats(&self) -> TTStats {
        self.stats
    }

    pub fn probe(&mut self, game_state: &GameState) -> Option<TTEntry<S>> {
        self.stats.probes += 1;
        let hit = self.entries.get(game_state).copied();
        if hit.is_some() {
            self.stats.hits += 1;
        }
        hit
    }

    pub fn store(&mut self, game_state: &GameState, entry: TTEntry<S>) {
        self.stats.stores += 1;
        self.entries
            .entry(*game_state)
            .and_modify(|existing| {
                if entry.depth >= existing.depth {
                    *existing = entry;
                }
            })
            .or_insert(entry);
    }
}
