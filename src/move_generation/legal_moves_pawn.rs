use crate::game_state::chess_rules::{pawn_direction, pawn_start_rank, promotion_rank};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::is_landing_tile;
use crate::moves::move_descriptions::{BoardMove, MoveList};
use crate::moves::pawn_moves::{pawn_capture_targets, pawn_push_target};

pub fn generate_pawn_moves(game_state: &GameState, color: Color, from: TileCoords, out: &mut MoveList) {
    if let Some(one_step) = pawn_push_target(color, from) {
        if game_state.tile(one_step).is_empty() {
            push_pawn_move(color, from, one_step, out);

            if from.rank() == pawn_start_rank(color) {
                if let Some(two_step) = pawn_push_target(color, one_step) {
                    if game_state.tile(two_step).is_empty() {
                        out.push(BoardMove::new(from, two_step));
                    }
                }
            }
        }
    }

    for to in pawn_capture_targets(color, from) {
        let target = game_state.tile(to);
        if !target.is_empty() && is_landing_tile(target, color) {
            push_pawn_move(color, from, to, out);
        }
    }

    generate_en_passant(game_state, color, from, out);
}

/// Plain pawn move, expanded into the four promotions on the last rank.
fn push_pawn_move(color: Color, from: TileCoords, to: TileCoords, out: &mut MoveList) {
    if to.rank() == promotion_rank(color) {
        for kind in PROMOTION_KINDS {
            out.push(BoardMove::with_promotion(from, to, kind));
        }
    } else {
        out.push(BoardMove::new(from, to));
    }
}

fn generate_en_passant(game_state: &GameState, color: Color, from: TileCoords, out: &mut MoveList) {
    let victim = game_state.en_passant_square();
    if !victim.is_valid()
        || victim.rank() != from.rank()
        || (victim.file() - from.file()).abs() != 1
    {
        return;
    }
    if !game_state.tile(victim).is(color.opposite(), PieceKind::Pawn) {
        return;
    }
    let Some(to) = victim.offset(0, pawn_direction(color)) else {
        return;
    };
    if game_state.tile(to).is_empty() {
        out.push(BoardMove::en_passant(from, to, victim));
    }
}
