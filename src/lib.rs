pub mod core;
pub mod engine;
pub mod error;
pub mod uci;

pub use crate::core::{Bitboard, Board, Color, Move, MoveType, Piece, PieceType, Square};
pub use engine::{GameController, GameStatus, SearchConfig, Searcher};
pub use error::ChessError;
pub use uci::UCI;
