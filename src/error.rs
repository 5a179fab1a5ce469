//! Error type shared by the crate's fallible entry points.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    #[error("invalid FEN ({0})")]
    InvalidFen(String),

    #[error("invalid square '{0}'")]
    InvalidSquare(String),

    #[error("illegal move '{0}'")]
    IllegalMove(String),

    #[error("no legal moves")]
    NoLegalMoves,
}
