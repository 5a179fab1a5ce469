//! Game controller: legal move filtering, the move transition function, and
//! undo history.
//!
//! Legality is decided by applying each pseudo-legal move and rejecting those that
//! leave the mover's king attacked. That one test covers moving into check, moving
//! a pinned piece and ignoring an existing check.

use tracing::debug;

use crate::core::bitboard::Bitboard;
use crate::core::board::{Board, CastlingRights, Color, Piece, PieceType};
use crate::core::moves::{Move, MoveType};
use crate::engine::movegen::castle_rook_squares;
use crate::engine::search::{ScoredMove, SearchConfig, SearchStats, Searcher};
use crate::error::ChessError;

/// Outcome for the side to move
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameStatus {
    Ongoing,
    Checkmate,
    Stalemate,
}

/// All legal moves for `color` on `board`
pub fn legal_moves(board: &Board, color: Color) -> Vec<Move> {
    let enemy = color.opposite();
    board
        .pseudo_legal_moves(color)
        .into_iter()
        .filter(|mv| {
            let next = apply_move(mv, board);
            !next.is_attacked(enemy, next.king(color))
        })
        .collect()
}

/// Move `piece` off `from` and place `placed` (the same piece, or its promotion) on `to`
fn relocate(board: &mut Board, piece: Piece, placed: Piece, from: Bitboard, to: Bitboard) {
    *board.pieces_mut(piece) &= !from;
    *board.pieces_mut(placed) |= to;
}

/// Apply `mv` to `board` and return the resulting board. The move is trusted to
/// come from the legal move list of that board.
pub fn apply_move(mv: &Move, board: &Board) -> Board {
    let mut next = *board;
    next.set_en_passant(Bitboard::EMPTY);

    let color = mv.color();
    let placed = match mv.promotion {
        Some(promo) => Piece::new(promo, color),
        None => mv.piece,
    };

    match mv.move_type {
        MoveType::SinglePush | MoveType::Slide => {
            relocate(&mut next, mv.piece, placed, mv.from, mv.to);
        }
        MoveType::DoublePush => {
            relocate(&mut next, mv.piece, placed, mv.from, mv.to);
            next.set_en_passant(mv.to);
        }
        MoveType::Capture => {
            next.remove_pieces(mv.to);
            relocate(&mut next, mv.piece, placed, mv.from, mv.to);
        }
        MoveType::EnPassant => {
            // The captured pawn sits on the previous target, not on our destination
            next.remove_pieces(board.en_passant());
            relocate(&mut next, mv.piece, placed, mv.from, mv.to);
        }
        MoveType::CastleWhiteKingside
        | MoveType::CastleWhiteQueenside
        | MoveType::CastleBlackKingside
        | MoveType::CastleBlackQueenside => {
            relocate(&mut next, mv.piece, placed, mv.from, mv.to);
            if let Some((rook_from, rook_to)) = castle_rook_squares(mv.move_type) {
                let rook = Piece::new(PieceType::Rook, color);
                relocate(&mut next, rook, rook, rook_from.bitboard(), rook_to.bitboard());
            }
            next.castling_mut().remove(CastlingRights::both(color));
        }
    }

    // A king move forfeits both rights; touching a rook corner forfeits that one
    let mut lost = CastlingRights::rights_for_squares(mv.from | mv.to);
    if mv.piece.piece_type == PieceType::King {
        lost |= CastlingRights::both(color);
    }
    next.castling_mut().remove(lost);

    next
}

/// Count leaf nodes of the legal move tree to `depth` plies
pub fn perft(board: &Board, color: Color, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    let moves = legal_moves(board, color);
    if depth == 1 {
        return moves.len() as u64;
    }
    moves
        .iter()
        .map(|mv| perft(&apply_move(mv, board), color.opposite(), depth - 1))
        .sum()
}

/// Owns the current position, its undo history and the engine used for
/// computer moves. Single-threaded, turn-by-turn use only.
pub struct GameController {
    board: Board,
    history: Vec<Board>,
    searcher: Searcher,
}

impl GameController {
    pub fn new() -> Self {
        Self::with_config(SearchConfig::default())
    }

    pub fn with_config(config: SearchConfig) -> Self {
        GameController {
            board: Board::startpos(),
            history: Vec::new(),
            searcher: Searcher::new(config),
        }
    }

    /// Current position
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Twelve occupancy sets of the current position, for rendering
    #[inline]
    pub fn occupancy(&self) -> &[Bitboard; Piece::COUNT] {
        self.board.occupancy()
    }

    #[inline]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn config(&self) -> SearchConfig {
        self.searcher.config()
    }

    pub fn set_config(&mut self, config: SearchConfig) {
        self.searcher = Searcher::new(config);
    }

    /// Restore the starting position and forget the history
    pub fn reset(&mut self) {
        self.board = Board::startpos();
        self.history.clear();
        debug!("board reset");
    }

    /// Replace the current position (e.g. from FEN) and forget the history
    pub fn set_board(&mut self, board: Board) {
        self.board = board;
        self.history.clear();
    }

    pub fn get_legal_moves(&self, color: Color) -> Vec<Move> {
        legal_moves(&self.board, color)
    }

    /// Commit a move taken from `get_legal_moves`. Not validated.
    pub fn make_move(&mut self, mv: &Move) {
        let next = apply_move(mv, &self.board);
        self.history.push(self.board);
        self.board = next;
        debug!(mv = %mv, ply = self.history.len(), "move made");
    }

    /// Revert to the previous position. Returns false if there was none.
    pub fn undo_move(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                self.board = previous;
                debug!(ply = self.history.len(), "move undone");
                true
            }
            None => false,
        }
    }

    /// Engine choice for `color` on the current position, not committed
    pub fn best_move(&mut self, color: Color) -> Option<ScoredMove> {
        self.searcher.search(&self.board, color)
    }

    /// Stats of the most recent engine search
    pub fn search_stats(&self) -> &SearchStats {
        self.searcher.stats()
    }

    /// Let the engine pick a move for `color` and commit it
    pub fn make_engine_move(&mut self, color: Color) -> Result<Move, ChessError> {
        let mv = self
            .searcher
            .select_move(&self.board, color)
            .ok_or(ChessError::NoLegalMoves)?;
        self.make_move(&mv);
        Ok(mv)
    }

    /// Commit the legal move for `color` written in UCI notation
    pub fn play_uci(&mut self, color: Color, uci: &str) -> Result<Move, ChessError> {
        let mv = self
            .get_legal_moves(color)
            .into_iter()
            .find(|mv| mv.to_uci() == uci)
            .ok_or_else(|| ChessError::IllegalMove(uci.to_string()))?;
        self.make_move(&mv);
        Ok(mv)
    }

    pub fn status(&self, color: Color) -> GameStatus {
        if !self.get_legal_moves(color).is_empty() {
            GameStatus::Ongoing
        } else if self.board.in_check(color) {
            GameStatus::Checkmate
        } else {
            GameStatus::Stalemate
        }
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new()
    }
}
