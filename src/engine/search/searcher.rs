//! Searcher: root move selection at a fixed depth.

use std::time::Instant;

use tracing::{info, trace};

use crate::core::board::{Board, Color};
use crate::core::moves::Move;
use crate::engine::controller::{apply_move, legal_moves};

use super::alphabeta::search_node;
use super::types::{ScoredMove, SearchConfig, SearchStats, INFINITY};

pub struct Searcher {
    pub(super) config: SearchConfig,
    pub(super) stats: SearchStats,
}

/// Whether `score` beats `best` for the side choosing at the root
#[inline]
pub(super) fn is_better(color: Color, score: i32, best: i32) -> bool {
    match color {
        Color::Black => score > best,
        Color::White => score < best,
    }
}

impl Searcher {
    pub fn new(config: SearchConfig) -> Self {
        Searcher {
            config,
            stats: SearchStats::default(),
        }
    }

    #[inline]
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Node count and timing of the most recent search
    #[inline]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Score every legal root move for `color` and keep the best one.
    /// Ties keep the move generated first. `None` when `color` has no legal move.
    pub fn determine_move(&mut self, board: &Board, color: Color) -> Option<ScoredMove> {
        let start = Instant::now();
        self.stats = SearchStats::default();

        let maximizing = color == Color::Black;
        let mut alpha = -INFINITY;
        let mut beta = INFINITY;
        let mut best: Option<ScoredMove> = None;

        for mv in legal_moves(board, color) {
            let child = apply_move(&mv, board);
            let score = search_node(
                &child,
                self.config.depth,
                alpha,
                beta,
                !maximizing,
                &mut self.stats,
            );
            trace!(mv = %mv, score, "root move");

            if best.is_none_or(|b| is_better(color, score, b.score)) {
                best = Some(ScoredMove { mv, score });
            }
            if maximizing {
                alpha = alpha.max(score);
            } else {
                beta = beta.min(score);
            }
        }

        self.stats.elapsed_ms = start.elapsed().as_millis();
        best
    }

    /// Pick a move for `color` with the configured strategy
    pub fn search(&mut self, board: &Board, color: Color) -> Option<ScoredMove> {
        let best = if self.config.threads > 1 {
            self.determine_move_parallel(board, color)
        } else {
            self.determine_move(board, color)
        };

        match &best {
            Some(scored) => info!(
                depth = self.config.depth,
                threads = self.config.threads,
                mv = %scored.mv,
                score = scored.score,
                nodes = self.stats.nodes,
                elapsed_ms = self.stats.elapsed_ms as u64,
                "engine move chosen"
            ),
            None => info!(?color, "no legal moves"),
        }
        best
    }

    /// Like [`Searcher::search`] without the score
    pub fn select_move(&mut self, board: &Board, color: Color) -> Option<Move> {
        self.search(board, color).map(|scored| scored.mv)
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}
