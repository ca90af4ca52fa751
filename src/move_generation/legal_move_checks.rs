//! Attack detection and terminal-state classification.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::moves::king_moves::king_targets;
use crate::moves::knight_moves::knight_targets;
use crate::moves::pawn_moves::pawn_capture_targets;
use crate::moves::sliding_moves::{first_blocker, BISHOP_DIRECTIONS, ROOK_DIRECTIONS};

/// Outcome of a position for the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Checkmate,
    Stalemate,
    InsufficientMaterial,
}

impl GameStatus {
    #[inline]
    pub fn is_terminal(self) -> bool {
        self != GameStatus::Ongoing
    }
}

/// Whether any piece of `color`'s opponent attacks `square`.
///
/// Works backwards from the square: a knight of the enemy sitting a knight
/// jump away attacks it, and so on for each piece kind.
pub fn is_attacked(game_state: &GameState, color: Color, square: TileCoords) -> bool {
    let enemy = color.opposite();

    if knight_targets(square).any(|sq| game_state.tile(sq).is(enemy, PieceKind::Knight)) {
        return true;
    }
    if king_targets(square).any(|sq| game_state.tile(sq).is(enemy, PieceKind::King)) {
        return true;
    }
    // An enemy pawn attacks us from the squares our own pawn would capture on.
    if pawn_capture_targets(color, square).any(|sq| game_state.tile(sq).is(enemy, PieceKind::Pawn)) {
        return true;
    }

    let slider_hits = |directions: &[(i8, i8)], kind: PieceKind| {
        directions.iter().any(|&direction| {
            matches!(
                first_blocker(game_state, square, direction),
                Some((_, tile)) if tile.is(enemy, kind) || tile.is(enemy, PieceKind::Queen)
            )
        })
    };

    slider_hits(&ROOK_DIRECTIONS, PieceKind::Rook) || slider_hits(&BISHOP_DIRECTIONS, PieceKind::Bishop)
}

#[inline]
pub fn is_king_in_check(game_state: &GameState, color: Color) -> bool {
    is_attacked(game_state, color, game_state.king_square(color))
}

pub fn game_status(game_state: &GameState) -> GameStatus {
    if game_state.is_draw() {
        return GameStatus::InsufficientMaterial;
    }
    if !generate_legal_moves(game_state).is_empty() {
        return GameStatus::Ongoing;
    }
    if is_king_in_check(game_state, game_state.side_to_move()) {
        GameStatus::Checkmate
    } else {
        GameStatus::Stalemate
    }
}

#[inline]
pub fn is_checkmate(game_state: &GameState) -> bool {
    game_status(game_state) == GameStatus::Checkmate
}

#[inline]
pub fn is_stalemate(game_state: &GameState) -> bool {
    game_status(game_state) == GameStatus::Stalemate
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(fen: &str) -> GameState {
        GameState::from_fen(fen).expect("FEN should parse")
    }

    #[test]
    fn start_position_is_ongoing_and_quiet() {
        let game = GameState::new_game();
        assert_eq!(game_status(&game), GameStatus::Ongoing);
        assert!(!is_king_in_check(&game, Color::Light));
        assert!(!is_king_in_check(&game, Color::Dark));
    }

    #[test]
    fn pawn_attacks_are_directional() {
        let game = parse("4k3/8/8/8/3p4/8/8/4K3 w - - 0 1");
        assert!(is_attacked(&game, Color::Light, TileCoords::new(4, 2)));
        assert!(is_attacked(&game, Color::Light, TileCoords::new(2, 2)));
        assert!(!is_attacked(&game, Color::Light, TileCoords::new(3, 2)));
        assert!(!is_attacked(&game, Color::Light, TileCoords::new(4, 4)));
    }

    #[test]
    fn sliders_are_blocked_by_first_piece() {
        let game = parse("4k3/8/8/8/r2P3K/8/8/8 w - - 0 1");
        assert!(is_attacked(&game, Color::Light, TileCoords::new(2, 3)));
        assert!(!is_king_in_check(&game, Color::Light));
    }

    #[test]
    fn fools_mate_is_checkmate() {
        let game = parse("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3");
        assert!(is_king_in_check(&game, Color::Light));
        assert_eq!(game_status(&game), GameStatus::Checkmate);
        assert!(is_checkmate(&game));
    }

    #[test]
    fn cornered_king_is_stalemated() {
        let game = parse("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
        assert!(!is_king_in_check(&game, Color::Dark));
        assert_eq!(game_status(&game), GameStatus::Stalemate);
        assert!(is_stalemate(&game));
    }

    #[test]
    fn bare_kings_are_insufficient_material() {
        let game = parse("8/8/4k3/8/8/3K4/8/8 w - - 0 1");
        assert_eq!(game_status(&game), GameStatus::InsufficientMaterial);
        assert!(game_status(&game).is_terminal());
    }
}
