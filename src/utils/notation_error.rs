//! Error types for text notation parsing.
//!
//! Covers FEN, algebraic squares and long-algebraic moves. Invariant
//! violations inside the engine are not errors and panic instead.

/// Errors raised while reading positions or moves from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotationError {
    /// A required FEN field is absent
    #[error("Missing {field} in FEN")]
    MissingField { field: &'static str },

    /// FEN board layout is malformed
    #[error("Invalid board layout: {message}")]
    InvalidBoard { message: String },

    /// Unknown piece letter in the board layout
    #[error("Invalid piece character '{ch}' in board layout")]
    InvalidPiece { ch: char },

    #[error("Invalid side-to-move field: {value}")]
    InvalidSideToMove { value: String },

    #[error("Invalid castling rights character: {ch}")]
    InvalidCastlingRights { ch: char },

    /// En-passant target not on the third or sixth rank
    #[error("Invalid en-passant target: {value}")]
    InvalidEnPassant { value: String },

    #[error("Invalid move counter: {value}")]
    InvalidCounter { value: String },

    #[error("FEN has extra trailing fields")]
    TrailingFields,

    /// Square text is not `[a-h][1-8]`
    #[error("Invalid algebraic square: {value}")]
    InvalidSquare { value: String },

    /// Move text is malformed or matches no legal move
    #[error("Invalid move '{value}': {message}")]
    InvalidMove { value: String, message: String },
}

/// Result type alias for notation parsing
pub type NotationResult<T> = Result<T, NotationError>;
