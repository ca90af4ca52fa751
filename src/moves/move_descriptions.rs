use std::fmt;

use arrayvec::ArrayVec;

use crate::game_state::chess_types::{PieceKind, TileCoords};

/// Upper bound on legal moves from any reachable position (218 is the known
/// maximum), rounded up.
pub const MAX_MOVES: usize = 256;

/// Fixed-capacity move buffer. Pushing past `MAX_MOVES` panics.
pub type MoveList = ArrayVec<BoardMove, MAX_MOVES>;

/// A move as the generator emits it.
///
/// `promotion` is `PieceKind::Empty` unless a pawn reaches its last rank.
/// `en_passant_pawn` is the square of the pawn removed by an en-passant
/// capture and `TileCoords::INVALID` for every other move.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardMove {
    pub from: TileCoords,
    pub to: TileCoords,
    pub promotion: PieceKind,
    pub en_passant_pawn: TileCoords,
}

impl BoardMove {
    #[inline]
    pub const fn new(from: TileCoords, to: TileCoords) -> Self {
        Self {
            from,
            to,
            promotion: PieceKind::Empty,
            en_passant_pawn: TileCoords::INVALID,
        }
    }

    #[inline]
    pub const fn with_promotion(from: TileCoords, to: TileCoords, promotion: PieceKind) -> Self {
        Self {
            from,
            to,
            promotion,
            en_passant_pawn: TileCoords::INVALID,
        }
    }

    #[inline]
    pub const fn en_passant(from: TileCoords, to: TileCoords, captured_pawn: TileCoords) -> Self {
        Self {
            from,
            to,
            promotion: PieceKind::Empty,
            en_passant_pawn: captured_pawn,
        }
    }

    #[inline]
    pub const fn is_promotion(&self) -> bool {
        !matches!(self.promotion, PieceKind::Empty)
    }

    #[inline]
    pub fn is_en_passant(&self) -> bool {
        self.en_passant_pawn.is_valid()
    }

    /// Castling is encoded as a two-file king step.
    #[inline]
    pub fn is_castle(&self, moved_kind: PieceKind) -> bool {
        moved_kind == PieceKind::King && (self.from.file() - self.to.file()).abs() == 2
    }
}

impl fmt::Display for BoardMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(letter) = self.promotion.fen_letter() {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for BoardMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_en_passant() {
            write!(f, "BoardMove({self} ep {})", self.en_passant_pawn)
        } else {
            write!(f, "BoardMove({self})")
        }
    }
}

/// Iterate the squares whose bits are set in a 64-bit `rank * 8 + file` mask.
#[inline]
pub fn mask_squares(mut mask: u64) -> impl Iterator<Item = TileCoords> {
    std::iter::from_fn(move || {
        if mask == 0 {
            return None;
        }
        let index = mask.trailing_zeros() as usize;
        mask &= mask - 1;
        Some(TileCoords::from_index(index))
    })
}

/// Bit for `(file, rank)` or 0 when off the board. Used by the const table
/// generators.
pub(crate) const fn bit_if_on_board(file: i32, rank: i32) -> u64 {
    if file < 0 || file > 7 || rank < 0 || rank > 7 {
        return 0;
    }
    1u64 << (rank * 8 + file)
}
