//! Search configuration, stats, and constants.

use crate::core::moves::Move;

/// Fixed-depth search settings
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// Plies searched below each root move
    pub depth: u32,
    /// Root workers; 0 or 1 runs the single-threaded search
    pub threads: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 3,
            threads: 8,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct SearchStats {
    pub nodes: u64,
    pub elapsed_ms: u128,
}

/// A root move with the score its subtree returned
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoredMove {
    pub mv: Move,
    pub score: i32,
}

/// Stands in for the unbounded score at the edges of the window
pub const INFINITY: i32 = 30000;
