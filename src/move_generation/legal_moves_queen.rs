use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::push_ray_moves;
use crate::moves::move_descriptions::MoveList;
use crate::moves::sliding_moves::QUEEN_DIRECTIONS;

pub fn generate_queen_moves(game_state: &GameState, color: Color, from: TileCoords, out: &mut MoveList) {
    push_ray_moves(game_state, color, from, &QUEEN_DIRECTIONS, out);
}
