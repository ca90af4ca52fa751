//! Core packed board state representation.
//!
//! `GameState` is the central model for the engine. It stores 64 tiles at
//! 4 bits each, the side to move, castling rights, the en-passant square and
//! an incrementally maintained Zobrist key. The whole value is `Copy`: search
//! explores the tree by copying positions instead of making/unmaking moves.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::game_state::chess_rules::{
    home_rank, STARTING_POSITION_FEN, ROOK_LONG_START_FILE, ROOK_SHORT_START_FILE,
};
use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::BoardMove;
use crate::search::zobrist::{self, compute_zobrist_key};
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;
use crate::utils::notation_error::NotationResult;

const TILES_PER_WORD: usize = 16;
const BITS_PER_TILE: usize = 4;
const TILE_MASK: u64 = 0xF;

/// Packed position. Equality compares every field; hashing feeds only the
/// Zobrist key, so hash maps keyed by `GameState` fall back to full equality
/// when two positions collide.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    // Two ranks per word, tile `i` at bits `(i % 16) * 4`.
    tiles: [u64; 4],

    side_to_move: Color,
    castling_rights: CastlingRights,
    // Square of the pawn that just advanced two ranks, INVALID otherwise.
    en_passant_square: TileCoords,

    zobrist_key: u64,
}

impl GameState {
    /// Empty board, light to move, no rights.
    pub fn new_empty() -> Self {
        let mut state = Self {
            tiles: [0; 4],
            side_to_move: Color::Light,
            castling_rights: 0,
            en_passant_square: TileCoords::INVALID,
            zobrist_key: 0,
        };
        state.zobrist_key = compute_zobrist_key(&state);
        state
    }

    #[inline]
    pub fn new_game() -> Self {
        parse_fen(STARTING_POSITION_FEN).expect("starting FEN should always parse")
    }

    #[inline]
    pub fn from_fen(fen: &str) -> NotationResult<Self> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn zobrist_key(&self) -> u64 {
        self.zobrist_key
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    pub fn can_castle(&self, color: Color, side: CastleSide) -> bool {
        self.castling_rights & castle_flag(color, side) != 0
    }

    /// Square of the pawn capturable en passant, `TileCoords::INVALID` if none.
    #[inline]
    pub fn en_passant_square(&self) -> TileCoords {
        self.en_passant_square
    }

    #[inline]
    pub fn tile(&self, coords: TileCoords) -> Tile {
        debug_assert!(coords.is_valid());
        let index = coords.index();
        let shift = (index % TILES_PER_WORD) * BITS_PER_TILE;
        Tile::from_bits(((self.tiles[index / TILES_PER_WORD] >> shift) & TILE_MASK) as u8)
    }

    #[inline]
    pub fn tile_at(&self, file: i8, rank: i8) -> Tile {
        self.tile(TileCoords::new(file, rank))
    }

    /// Occupied squares with their tiles, a1 first.
    pub fn occupied_tiles(&self) -> impl Iterator<Item = (TileCoords, Tile)> + '_ {
        TileCoords::all()
            .map(move |coords| (coords, self.tile(coords)))
            .filter(|(_, tile)| !tile.is_empty())
    }

    /// Square of `color`'s king.
    ///
    /// Panics unless exactly one such king is on the board.
    pub fn king_square(&self, color: Color) -> TileCoords {
        let king = Tile::new(color, PieceKind::King);
        let mut found = TileCoords::INVALID;
        let mut count = 0;
        for coords in TileCoords::all() {
            if self.tile(coords) == king {
                found = coords;
                count += 1;
            }
        }
        assert_eq!(count, 1, "expected exactly one {color:?} king in {}", self.get_fen());
        found
    }

    /// Insufficient material: nothing but the two kings is left.
    pub fn is_draw(&self) -> bool {
        self.occupied_tiles()
            .all(|(_, tile)| tile.kind() == PieceKind::King)
    }

    /// Copy of this position with `mv` applied.
    #[inline]
    pub fn play_move(&self, mv: &BoardMove) -> Self {
        let mut next = *self;
        crate::move_generation::legal_move_apply::apply_move(&mut next, mv);
        next
    }

    // --- Hash-maintaining mutators. Every field change goes through these. ---

    pub(crate) fn set_tile(&mut self, coords: TileCoords, tile: Tile) {
        let old = self.tile(coords);
        if old == tile {
            return;
        }
        let table = zobrist::default_hash_table();
        self.zobrist_key ^= table.tile_key(old, coords) ^ table.tile_key(tile, coords);

        let index = coords.index();
        let shift = (index % TILES_PER_WORD) * BITS_PER_TILE;
        let word = &mut self.tiles[index / TILES_PER_WORD];
        *word = (*word & !(TILE_MASK << shift)) | (u64::from(tile.bits()) << shift);
    }

    pub(crate) fn set_side_to_move(&mut self, color: Color) {
        if self.side_to_move == color {
            return;
        }
        let table = zobrist::default_hash_table();
        self.zobrist_key ^= table.side_to_move_key(self.side_to_move) ^ table.side_to_move_key(color);
        self.side_to_move = color;
    }

    pub(crate) fn set_castle_right(&mut self, color: Color, side: CastleSide, available: bool) {
        let was_available = self.can_castle(color, side);
        if was_available == available {
            return;
        }
        let table = zobrist::default_hash_table();
        self.zobrist_key ^= table.castle_key(was_available, color, side.is_long())
            ^ table.castle_key(available, color, side.is_long());
        if available {
            self.castling_rights |= castle_flag(color, side);
        } else {
            self.castling_rights &= !castle_flag(color, side);
        }
    }

    pub(crate) fn set_en_passant_square(&mut self, coords: TileCoords) {
        if self.en_passant_square == coords {
            return;
        }
        let table = zobrist::default_hash_table();
        if self.en_passant_square.is_valid() {
            self.zobrist_key ^= table.en_passant_key(self.en_passant_square);
        }
        if coords.is_valid() {
            self.zobrist_key ^= table.en_passant_key(coords);
        }
        self.en_passant_square = coords;
    }

    /// Drop the castling right anchored to `coords` if it is a rook corner.
    pub(crate) fn clear_corner_right(&mut self, coords: TileCoords) {
        for color in [Color::Light, Color::Dark] {
            if coords.rank() != home_rank(color) {
                continue;
            }
            match coords.file() {
                ROOK_LONG_START_FILE => self.set_castle_right(color, CastleSide::QueenSide, false),
                ROOK_SHORT_START_FILE => self.set_castle_right(color, CastleSide::KingSide, false),
                _ => {}
            }
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl Hash for GameState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.zobrist_key);
    }
}

impl fmt::Debug for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameState")
            .field("fen", &self.get_fen())
            .field("zobrist_key", &format_args!("{:#018x}", self.zobrist_key))
            .finish()
    }
}
