//! Static material evaluation.
//!
//! Scores are from Black's point of view: positive means Black is ahead.

use crate::core::board::{Board, Color, PieceType};

pub const WEIGHT_KING: i32 = 200;
pub const WEIGHT_QUEEN: i32 = 9;
pub const WEIGHT_ROOK: i32 = 5;
pub const WEIGHT_BISHOP: i32 = 3;
pub const WEIGHT_KNIGHT: i32 = 3;
pub const WEIGHT_PAWN: i32 = 1;

pub const fn piece_weight(piece_type: PieceType) -> i32 {
    match piece_type {
        PieceType::Pawn => WEIGHT_PAWN,
        PieceType::Knight => WEIGHT_KNIGHT,
        PieceType::Bishop => WEIGHT_BISHOP,
        PieceType::Rook => WEIGHT_ROOK,
        PieceType::Queen => WEIGHT_QUEEN,
        PieceType::King => WEIGHT_KING,
    }
}

/// `Σ weight(kind) × (count_black(kind) − count_white(kind))`
pub fn evaluate(board: &Board) -> i32 {
    PieceType::ALL
        .iter()
        .map(|&piece_type| {
            let black = board.pieces_of(piece_type, Color::Black).count() as i32;
            let white = board.pieces_of(piece_type, Color::White).count() as i32;
            piece_weight(piece_type) * (black - white)
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::board::{Piece, Square};

    #[test]
    fn test_startpos_is_balanced() {
        assert_eq!(evaluate(&Board::startpos()), 0);
    }

    #[test]
    fn test_missing_white_queen_favours_black() {
        let mut board = Board::startpos();
        board.remove_pieces(Square::D1.bitboard());
        assert_eq!(evaluate(&board), WEIGHT_QUEEN);
    }

    #[test]
    fn test_extra_white_pawn_favours_white() {
        let mut board = Board::startpos();
        board.put_piece(Piece::new(PieceType::Pawn, Color::White), Square::E4);
        assert_eq!(evaluate(&board), -WEIGHT_PAWN);
    }
}
