//! Packed primitive types shared by the whole engine.
//!
//! Every type here is a thin wrapper over a small integer with a documented
//! bit layout and explicit accessors, so positions stay compact enough to be
//! copied freely during search.

use std::fmt;

pub use crate::game_state::game_state::GameState;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::Light => 0,
            Color::Dark => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    #[inline]
    pub const fn from_bit(bit: u8) -> Self {
        if bit & 1 == 0 {
            Color::Light
        } else {
            Color::Dark
        }
    }
}

/// Occupant kind of a tile. `Empty` is part of the 3-bit code space so that a
/// tile is always exactly one `(Color, PieceKind)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Empty,
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

pub const PROMOTION_KINDS: [PieceKind; 4] = [
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
];

impl PieceKind {
    pub const COUNT: usize = 7;

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Empty => 0,
            PieceKind::Pawn => 1,
            PieceKind::Knight => 2,
            PieceKind::Bishop => 3,
            PieceKind::Rook => 4,
            PieceKind::Queen => 5,
            PieceKind::King => 6,
        }
    }

    #[inline]
    pub const fn from_code(code: u8) -> Self {
        match code & 0x7 {
            1 => PieceKind::Pawn,
            2 => PieceKind::Knight,
            3 => PieceKind::Bishop,
            4 => PieceKind::Rook,
            5 => PieceKind::Queen,
            6 => PieceKind::King,
            _ => PieceKind::Empty,
        }
    }

    /// Lowercase FEN letter, `None` for `Empty`.
    #[inline]
    pub const fn fen_letter(self) -> Option<char> {
        match self {
            PieceKind::Empty => None,
            PieceKind::Pawn => Some('p'),
            PieceKind::Knight => Some('n'),
            PieceKind::Bishop => Some('b'),
            PieceKind::Rook => Some('r'),
            PieceKind::Queen => Some('q'),
            PieceKind::King => Some('k'),
        }
    }

    #[inline]
    pub const fn from_fen_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }
}

/// Compact castling rights bitmask.
pub type CastlingRights = u8;
pub const CASTLE_LIGHT_KINGSIDE: CastlingRights = 1 << 0;
pub const CASTLE_LIGHT_QUEENSIDE: CastlingRights = 1 << 1;
pub const CASTLE_DARK_KINGSIDE: CastlingRights = 1 << 2;
pub const CASTLE_DARK_QUEENSIDE: CastlingRights = 1 << 3;
pub const CASTLE_ALL: CastlingRights = 0x0F;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    pub const BOTH: [CastleSide; 2] = [CastleSide::KingSide, CastleSide::QueenSide];

    #[inline]
    pub const fn is_long(self) -> bool {
        matches!(self, CastleSide::QueenSide)
    }
}

#[inline]
pub const fn castle_flag(color: Color, side: CastleSide) -> CastlingRights {
    match (color, side) {
        (Color::Light, CastleSide::KingSide) => CASTLE_LIGHT_KINGSIDE,
        (Color::Light, CastleSide::QueenSide) => CASTLE_LIGHT_QUEENSIDE,
        (Color::Dark, CastleSide::KingSide) => CASTLE_DARK_KINGSIDE,
        (Color::Dark, CastleSide::QueenSide) => CASTLE_DARK_QUEENSIDE,
    }
}

/// Board coordinate packed into one byte.
///
/// Layout: bits 0-3 hold the file, bits 4-7 the rank, both as 4-bit signed
/// values in `0..=7`. [`TileCoords::INVALID`] stores `-1` in both nibbles; a
/// coordinate is never half valid.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileCoords(u8);

impl TileCoords {
    pub const INVALID: TileCoords = TileCoords(0xFF);

    #[inline]
    pub const fn new(file: i8, rank: i8) -> Self {
        assert!(file >= 0 && file < 8 && rank >= 0 && rank < 8);
        TileCoords((file as u8) | ((rank as u8) << 4))
    }

    /// Build from a `rank * 8 + file` index (`0 == a1`, `63 == h8`).
    #[inline]
    pub const fn from_index(index: usize) -> Self {
        assert!(index < 64);
        Self::new((index % 8) as i8, (index / 8) as i8)
    }

    #[inline]
    pub const fn file(self) -> i8 {
        ((self.0 << 4) as i8) >> 4
    }

    #[inline]
    pub const fn rank(self) -> i8 {
        (self.0 as i8) >> 4
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        let file_valid = self.file() >= 0;
        let rank_valid = self.rank() >= 0;
        debug_assert_eq!(file_valid, rank_valid, "half-valid coordinate {:#04x}", self.0);
        file_valid
    }

    #[inline]
    pub const fn index(self) -> usize {
        (self.rank() as usize) * 8 + self.file() as usize
    }

    /// Step by `(d_file, d_rank)`, `None` when the target leaves the board.
    #[inline]
    pub const fn offset(self, d_file: i8, d_rank: i8) -> Option<Self> {
        let file = self.file() + d_file;
        let rank = self.rank() + d_rank;
        if file < 0 || file > 7 || rank < 0 || rank > 7 {
            None
        } else {
            Some(Self::new(file, rank))
        }
    }

    /// All 64 squares in index order.
    pub fn all() -> impl Iterator<Item = TileCoords> {
        (0..64).map(TileCoords::from_index)
    }
}

impl fmt::Debug for TileCoords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for TileCoords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_valid() {
            return f.write_str("-");
        }
        write!(
            f,
            "{}{}",
            char::from(b'a' + self.file() as u8),
            char::from(b'1' + self.rank() as u8)
        )
    }
}

/// Occupant of one square packed into the low nibble of a byte.
///
/// Layout: bit 0 is the color, bits 1-3 the [`PieceKind`] code. The empty
/// tile is always stored with the `Light` color bit so that identical boards
/// have identical bit patterns.
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Tile(u8);

impl Tile {
    pub const EMPTY: Tile = Tile(0);

    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        if matches!(kind, PieceKind::Empty) {
            return Tile::EMPTY;
        }
        Tile((color.index() as u8) | ((kind.index() as u8) << 1))
    }

    #[inline]
    pub const fn from_bits(bits: u8) -> Self {
        let tile = Tile(bits & 0x0F);
        if matches!(tile.kind(), PieceKind::Empty) {
            Tile::EMPTY
        } else {
            tile
        }
    }

    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn color(self) -> Color {
        Color::from_bit(self.0)
    }

    #[inline]
    pub const fn kind(self) -> PieceKind {
        PieceKind::from_code(self.0 >> 1)
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Occupied by a piece of `color`.
    #[inline]
    pub const fn is_color(self, color: Color) -> bool {
        !self.is_empty() && self.color().index() == color.index()
    }

    #[inline]
    pub const fn is(self, color: Color, kind: PieceKind) -> bool {
        self.0 == Tile::new(color, kind).0
    }

    /// FEN piece letter (uppercase for `Light`), `None` when empty.
    pub fn to_fen_char(self) -> Option<char> {
        let letter = self.kind().fen_letter()?;
        Some(match self.color() {
            Color::Light => letter.to_ascii_uppercase(),
            Color::Dark => letter,
        })
    }

    pub fn from_fen_char(ch: char) -> Option<Self> {
        let kind = PieceKind::from_fen_letter(ch)?;
        let color = if ch.is_ascii_uppercase() {
            Color::Light
        } else {
            Color::Dark
        };
        Some(Tile::new(color, kind))
    }
}

impl fmt::Debug for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_fen_char() {
            Some(ch) => write!(f, "Tile({ch})"),
            None => f.write_str("Tile(empty)"),
        }
    }
}
