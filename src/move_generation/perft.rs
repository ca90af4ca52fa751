//! Perft node counting for move-generator validation.

use std::thread;

use log::trace;

use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::move_generation::legal_move_shared::is_capture;
use crate::moves::move_descriptions::BoardMove;

/// Leaf statistics gathered by [`perft_detailed`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
    pub checks: u64,
    pub checkmates: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Number of leaf positions `depth` plies below `game_state`.
pub fn perft(game_state: &GameState, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = generate_legal_moves(game_state);
    if depth == 1 {
        return moves.len() as u64;
    }

    moves
        .iter()
        .map(|mv| perft(&game_state.play_move(mv), depth - 1))
        .sum()
}

/// Per-root-move node counts, in generation order.
pub fn perft_divide(game_state: &GameState, depth: u8) -> Vec<(BoardMove, u64)> {
    if depth == 0 {
        return Vec::new();
    }

    generate_legal_moves(game_state)
        .into_iter()
        .map(|mv| {
            let nodes = perft(&game_state.play_move(&mv), depth - 1);
            trace!("perft divide {mv}: {nodes}");
            (mv, nodes)
        })
        .collect()
}

/// Same count as [`perft`], one scoped worker per root move.
pub fn perft_multi_threaded(game_state: &GameState, depth: u8) -> u64 {
    if depth <= 1 {
        return perft(game_state, depth);
    }

    let root_moves = generate_legal_moves(game_state);
    thread::scope(|scope| {
        let handles: Vec<_> = root_moves
            .iter()
            .map(|mv| {
                let child = game_state.play_move(mv);
                scope.spawn(move || perft(&child, depth - 1))
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| match handle.join() {
                Ok(nodes) => nodes,
                Err(panic) => std::panic::resume_unwind(panic),
            })
            .sum()
    })
}

/// Perft that also classifies the moves leading to each leaf.
pub fn perft_detailed(game_state: &GameState, depth: u8) -> PerftCounts {
    let mut counts = PerftCounts::default();
    if depth == 0 {
        counts.nodes = 1;
        return counts;
    }
    detailed_recurse(game_state, depth, &mut counts);
    counts
}

fn detailed_recurse(game_state: &GameState, depth: u8, counts: &mut PerftCounts) {
    for mv in generate_legal_moves(game_state) {
        let next = game_state.play_move(&mv);
        if depth > 1 {
            detailed_recurse(&next, depth - 1, counts);
            continue;
        }

        let mut leaf = PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
        let moved_kind = game_state.tile(mv.from).kind();
        if is_capture(game_state, &mv) {
            leaf.captures = 1;
        }
        if mv.is_en_passant() {
            leaf.en_passant = 1;
        }
        if mv.is_castle(moved_kind) {
            leaf.castles = 1;
        }
        if mv.is_promotion() {
            leaf.promotions = 1;
        }
        if is_king_in_check(&next, next.side_to_move()) {
            leaf.checks = 1;
            if generate_legal_moves(&next).is_empty() {
                leaf.checkmates = 1;
            }
        }
        counts.merge(leaf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perft_depth_zero_counts_single_node() {
        let game = GameState::new_game();
        assert_eq!(perft(&game, 0), 1);
        assert_eq!(perft_detailed(&game, 0).nodes, 1);
        assert!(perft_divide(&game, 0).is_empty());
    }

    #[test]
    fn start_position_shallow_counts() {
        let game = GameState::new_game();
        assert_eq!(perft(&game, 1), 20);
        assert_eq!(perft(&game, 2), 400);
        assert_eq!(perft(&game, 3), 8_902);
    }

    #[test]
    fn divide_sums_to_perft() {
        let game = GameState::new_game();
        let divide = perft_divide(&game, 3);
        assert_eq!(divide.len(), 20);
        assert_eq!(divide.iter().map(|(_, n)| n).sum::<u64>(), 8_902);
    }

    #[test]
    fn multi_threaded_matches_single_threaded() {
        let game = GameState::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -")
            .expect("FEN should parse");
        assert_eq!(perft_multi_threaded(&game, 2), 2_039);
        assert_eq!(perft_multi_threaded(&game, 1), 48);
    }

    #[test]
    fn start_position_depth_three_details() {
        let counts = perft_detailed(&GameState::new_game(), 3);
        assert_eq!(
            counts,
            PerftCounts {
                nodes: 8_902,
                captures: 34,
                en_passant: 0,
                castles: 0,
                promotions: 0,
                checks: 12,
                checkmates: 0,
            }
        );
    }

    #[test]
    fn kiwipete_depth_two_details() {
        let game = GameState::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -")
            .expect("FEN should parse");
        let counts = perft_detailed(&game, 2);
        assert_eq!(counts.nodes, 2_039);
        assert_eq!(counts.captures, 351);
        assert_eq!(counts.en_passant, 1);
        assert_eq!(counts.castles, 91);
        assert_eq!(counts.promotions, 0);
        assert_eq!(counts.checks, 3);
        assert_eq!(counts.checkmates, 0);
    }
}
