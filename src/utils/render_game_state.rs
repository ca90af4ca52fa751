//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view for debugging, tests and the perft
//! binary. An optional move is highlighted by bracketing its two squares.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::move_descriptions::BoardMove;

/// Render the board to a Unicode string for terminal output, rank 8 on top.
pub fn render_game_state(game_state: &GameState) -> String {
    render_with_highlight(game_state, None)
}

/// Render the board with the origin and destination of `mv` bracketed.
pub fn render_move(game_state: &GameState, mv: &BoardMove) -> String {
    render_with_highlight(game_state, Some(mv))
}

fn render_with_highlight(game_state: &GameState, highlight: Option<&BoardMove>) -> String {
    let mut out = String::new();

    out.push_str("   a  b  c  d  e  f  g  h\n");

    for rank in (0..8).rev() {
        let rank_char = char::from(b'1' + rank as u8);
        out.push(rank_char);
        out.push(' ');

        for file in 0..8 {
            let coords = TileCoords::new(file, rank);
            let marked = highlight.is_some_and(|mv| mv.from == coords || mv.to == coords);
            let (open, close) = if marked { ('[', ']') } else { (' ', ' ') };
            out.push(open);
            out.push(tile_to_unicode(game_state.tile(coords)));
            out.push(close);
        }

        out.push(' ');
        out.push(rank_char);
        out.push('\n');
    }

    out.push_str("   a  b  c  d  e  f  g  h");

    out
}

fn tile_to_unicode(tile: Tile) -> char {
    match (tile.color(), tile.kind()) {
        (_, PieceKind::Empty) => '·',
        (Color::Light, PieceKind::Pawn) => '♙',
        (Color::Light, PieceKind::Knight) => '♘',
        (Color::Light, PieceKind::Bishop) => '♗',
        (Color::Light, PieceKind::Rook) => '♖',
        (Color::Light, PieceKind::Queen) => '♕',
        (Color::Light, PieceKind::King) => '♔',
        (Color::Dark, PieceKind::Pawn) => '♟',
        (Color::Dark, PieceKind::Knight) => '♞',
        (Color::Dark, PieceKind::Bishop) => '♝',
        (Color::Dark, PieceKind::Rook) => '♜',
        (Color::Dark, PieceKind::Queen) => '♛',
        (Color::Dark, PieceKind::King) => '♚',
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_start_position_rows() {
        let text = render_game_state(&GameState::new_game());
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[1], "8  ♜  ♞  ♝  ♛  ♚  ♝  ♞  ♜  8");
        assert_eq!(lines[5], "4  ·  ·  ·  ·  ·  ·  ·  ·  4");
    }

    #[test]
    fn highlights_both_move_squares() {
        let mv = BoardMove::new(TileCoords::new(4, 1), TileCoords::new(4, 3));
        let text = render_move(&GameState::new_game(), &mv);
        assert_eq!(text.matches('[').count(), 2);
        assert!(text.contains("[♙]"));
        assert!(text.contains("[·]"));
    }
}
