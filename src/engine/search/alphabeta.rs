//! Alpha-beta and plain minimax over the legal move tree.
//!
//! Black maximizes, White minimizes. A node without legal moves returns the
//! initial best score of its side (`-INFINITY` for Black, `INFINITY` for White),
//! so checkmate and stalemate are not told apart here.

use crate::core::board::{Board, Color};
use crate::engine::controller::{apply_move, legal_moves};
use crate::engine::eval::evaluate;

use super::types::{SearchStats, INFINITY};

#[inline]
fn side_to_move(maximizing: bool) -> Color {
    if maximizing { Color::Black } else { Color::White }
}

/// Alpha-beta score of `board` searched `depth` plies deep
pub fn alpha_beta(board: &Board, depth: u32, alpha: i32, beta: i32, maximizing: bool) -> i32 {
    let mut stats = SearchStats::default();
    search_node(board, depth, alpha, beta, maximizing, &mut stats)
}

pub(super) fn search_node(
    board: &Board,
    depth: u32,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    stats: &mut SearchStats,
) -> i32 {
    stats.nodes += 1;

    if depth == 0 {
        return evaluate(board);
    }

    let moves = legal_moves(board, side_to_move(maximizing));

    if maximizing {
        let mut best = -INFINITY;
        for mv in &moves {
            let child = apply_move(mv, board);
            let score = search_node(&child, depth - 1, alpha, beta, false, stats);
            best = best.max(score);
            alpha = alpha.max(best);
            if beta <= alpha {
                break;
            }
        }
        best
    } else {
        let mut best = INFINITY;
        for mv in &moves {
            let child = apply_move(mv, board);
            let score = search_node(&child, depth - 1, alpha, beta, true, stats);
            best = best.min(score);
            beta = beta.min(best);
            if beta <= alpha {
                break;
            }
        }
        best
    }
}

/// Unpruned minimax, the reference the pruned search must agree with
pub fn minimax(board: &Board, depth: u32, maximizing: bool) -> i32 {
    if depth == 0 {
        return evaluate(board);
    }

    let moves = legal_moves(board, side_to_move(maximizing));
    let scores = moves
        .iter()
        .map(|mv| minimax(&apply_move(mv, board), depth - 1, !maximizing));

    if maximizing {
        scores.fold(-INFINITY, i32::max)
    } else {
        scores.fold(INFINITY, i32::min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_zero_is_static_eval() {
        let board = Board::startpos();
        assert_eq!(alpha_beta(&board, 0, -INFINITY, INFINITY, true), 0);
        assert_eq!(minimax(&board, 0, false), 0);
    }

    #[test]
    fn test_no_moves_returns_window_surrogate() {
        // Black to move is checkmated
        let (board, _) = Board::from_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1").unwrap();
        assert_eq!(alpha_beta(&board, 2, -INFINITY, INFINITY, true), -INFINITY);
        assert_eq!(minimax(&board, 2, true), -INFINITY);
    }

    #[test]
    fn test_pruning_visits_fewer_nodes() {
        let board = Board::startpos();
        let mut stats = SearchStats::default();
        let score = search_node(&board, 3, -INFINITY, INFINITY, false, &mut stats);
        assert_eq!(score, minimax(&board, 3, false));
        // 1 + 20 + 400 + 8902 nodes without pruning
        assert!(stats.nodes < 9323);
    }
}
