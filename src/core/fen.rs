//! FEN import and export
//!
//! The board does not store the side to move, so parsing returns it alongside the
//! board and exporting takes it as a parameter. Halfmove and fullmove counters are
//! not tracked; export writes `0 1`.
//!
//! FEN names the square a double-pushed pawn skipped over, while the board keeps
//! the square the pawn landed on. The conversion happens here.

use super::bitboard::Bitboard;
use super::board::{Board, CastlingRights, Color, Piece, Square};
use crate::error::ChessError;

pub const STARTPOS_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl Board {
    /// Parse a board and the side to move from FEN notation
    pub fn from_fen(fen: &str) -> Result<(Self, Color), ChessError> {
        let invalid = |reason: &str| ChessError::InvalidFen(format!("{reason}: {fen}"));
        let mut board = Board::empty();
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.len() < 4 {
            return Err(invalid("too few fields"));
        }

        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(invalid("expected 8 ranks"));
        }
        for (row, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - row as u8;
            let mut file = 0u8;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file += skip as u8;
                    if file > 8 {
                        return Err(invalid("rank overflow"));
                    }
                } else {
                    let piece =
                        Piece::from_char(c).ok_or_else(|| invalid("unknown piece"))?;
                    if file >= 8 {
                        return Err(invalid("rank overflow"));
                    }
                    board.put_piece(piece, Square::from_file_rank(file, rank));
                    file += 1;
                }
            }
            if file != 8 {
                return Err(invalid("rank does not cover 8 files"));
            }
        }

        let side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            _ => return Err(invalid("invalid side to move")),
        };

        let mut castling = 0u8;
        for c in parts[2].chars() {
            match c {
                'K' => castling |= CastlingRights::WHITE_KINGSIDE,
                'Q' => castling |= CastlingRights::WHITE_QUEENSIDE,
                'k' => castling |= CastlingRights::BLACK_KINGSIDE,
                'q' => castling |= CastlingRights::BLACK_QUEENSIDE,
                '-' => {}
                _ => return Err(invalid("unknown castling right")),
            }
        }
        *board.castling_mut() = CastlingRights::new(castling);

        if parts[3] != "-" {
            let skipped = Square::from_algebraic(parts[3])?.bitboard();
            // The pawn that skipped belongs to the side that just moved
            let landing = match side_to_move {
                Color::White => skipped.south(),
                Color::Black => skipped.north(),
            };
            board.set_en_passant(landing);
        }

        Ok((board, side_to_move))
    }

    /// Convert the board to FEN notation
    pub fn to_fen(&self, side_to_move: Color) -> String {
        let mut fen = String::new();

        for rank in (0..8).rev() {
            let mut empty = 0;
            for file in 0..8 {
                match self.piece_at(Square::from_file_rank(file, rank)) {
                    Some(piece) => {
                        if empty > 0 {
                            fen.push_str(&empty.to_string());
                            empty = 0;
                        }
                        fen.push(piece.to_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                fen.push_str(&empty.to_string());
            }
            if rank > 0 {
                fen.push('/');
            }
        }

        fen.push(' ');
        fen.push(match side_to_move {
            Color::White => 'w',
            Color::Black => 'b',
        });

        fen.push(' ');
        let castling = self.castling();
        if castling.raw() == 0 {
            fen.push('-');
        } else {
            for (right, c) in [
                (CastlingRights::WHITE_KINGSIDE, 'K'),
                (CastlingRights::WHITE_QUEENSIDE, 'Q'),
                (CastlingRights::BLACK_KINGSIDE, 'k'),
                (CastlingRights::BLACK_QUEENSIDE, 'q'),
            ] {
                if castling.has(right) {
                    fen.push(c);
                }
            }
        }

        fen.push(' ');
        let landing = self.en_passant();
        if landing.is_empty() {
            fen.push('-');
        } else {
            let skipped: Bitboard = match side_to_move {
                Color::White => landing.north(),
                Color::Black => landing.south(),
            };
            fen.push_str(&skipped.lsb().to_algebraic());
        }

        fen.push_str(" 0 1");
        fen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_startpos_fen_matches_startpos() {
        let (board, side) = Board::from_fen(STARTPOS_FEN).unwrap();
        assert_eq!(board, Board::startpos());
        assert_eq!(side, Color::White);
        assert_eq!(board.to_fen(Color::White), STARTPOS_FEN);
    }

    #[test]
    fn test_en_passant_field_converts_to_landing_square() {
        let fen = "rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 1";
        let (board, _) = Board::from_fen(fen).unwrap();
        assert_eq!(board.en_passant(), Square::from_algebraic("d5").unwrap().bitboard());
        assert_eq!(board.to_fen(Color::White), fen);
    }

    #[test]
    fn test_rejects_malformed() {
        assert!(Board::from_fen("").is_err());
        assert!(Board::from_fen("8/8/8 w - -").is_err());
        assert!(Board::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNX w KQkq - 0 1").is_err());
        assert!(Board::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1").is_err());
        assert!(Board::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq z9 0 1").is_err());
    }
}
