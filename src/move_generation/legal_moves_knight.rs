use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::push_step_moves;
use crate::moves::knight_moves::knight_targets;
use crate::moves::move_descriptions::MoveList;

pub fn generate_knight_moves(game_state: &GameState, color: Color, from: TileCoords, out: &mut MoveList) {
    push_step_moves(game_state, color, from, knight_targets(from), out);
}
