//! Root-parallel move selection.
//!
//! Root moves are dealt round-robin to scoped worker threads. Each worker owns a
//! copy of the position and searches its moves with a full window, then offers
//! each result to a shared best guarded by a mutex. Equal scores go to the lower
//! root index, so the answer matches the single-threaded search.

use std::sync::atomic::{AtomicU64, Ordering};
use std::thread;
use std::time::Instant;

use parking_lot::Mutex;
use tracing::trace;

use crate::core::board::{Board, Color};
use crate::engine::controller::{apply_move, legal_moves};

use super::alphabeta::search_node;
use super::searcher::{is_better, Searcher};
use super::types::{ScoredMove, SearchStats, INFINITY};

impl Searcher {
    /// Root-parallel counterpart of [`Searcher::determine_move`]
    pub fn determine_move_parallel(&mut self, board: &Board, color: Color) -> Option<ScoredMove> {
        let start = Instant::now();
        self.stats = SearchStats::default();

        let moves = legal_moves(board, color);
        if moves.is_empty() {
            return None;
        }

        let workers = self.config.threads.clamp(1, moves.len());
        let depth = self.config.depth;
        let maximizing = color == Color::Black;
        let best: Mutex<Option<(usize, ScoredMove)>> = Mutex::new(None);
        let nodes = AtomicU64::new(0);

        thread::scope(|scope| {
            for worker in 0..workers {
                let moves = &moves;
                let best = &best;
                let nodes = &nodes;
                let root = *board;

                scope.spawn(move || {
                    let mut stats = SearchStats::default();
                    for (index, mv) in moves.iter().enumerate().skip(worker).step_by(workers) {
                        let child = apply_move(mv, &root);
                        let score =
                            search_node(&child, depth, -INFINITY, INFINITY, !maximizing, &mut stats);
                        trace!(worker, mv = %mv, score, "root move");

                        let mut shared = best.lock();
                        let replace = match *shared {
                            None => true,
                            Some((best_index, current)) => {
                                is_better(color, score, current.score)
                                    || (score == current.score && index < best_index)
                            }
                        };
                        if replace {
                            *shared = Some((index, ScoredMove { mv: *mv, score }));
                        }
                    }
                    nodes.fetch_add(stats.nodes, Ordering::Relaxed);
                });
            }
        });

        self.stats.nodes = nodes.into_inner();
        self.stats.elapsed_ms = start.elapsed().as_millis();
        best.into_inner().map(|(_, scored)| scored)
    }
}
