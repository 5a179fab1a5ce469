//! Core chess types and representations
//!
//! This module contains the fundamental building blocks of the chess engine:
//! - Bitboard representation and wraparound-safe shifts
//! - Board state (twelve occupancy sets, en passant, castling)
//! - Move records
//! - FEN import/export

pub mod bitboard;
pub mod board;
pub mod fen;
pub mod moves;

pub use bitboard::{Bitboard, BitboardIter};
pub use board::{Board, CastlingRights, Color, Piece, PieceType, Square};
pub use fen::STARTPOS_FEN;
pub use moves::{Move, MoveType};
