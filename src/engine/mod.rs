//! Chess engine components
//!
//! This module contains the engine functionality:
//! - Attack and pseudo-legal move generation
//! - The game controller (legality, move application, undo)
//! - Material evaluation
//! - Fixed-depth alpha-beta search, sequential and root-parallel

pub mod controller;
pub mod eval;
pub mod movegen;
pub mod search;

pub use controller::{apply_move, legal_moves, perft, GameController, GameStatus};
pub use eval::evaluate;
pub use movegen::MoveGen;
pub use search::{alpha_beta, minimax, ScoredMove, SearchConfig, SearchStats, Searcher, INFINITY};
