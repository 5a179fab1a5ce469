//! Core Module Tests
//!
//! Tests for squares, pieces, board state, moves and FEN.

use bitboard_chess::core::bitboard::Bitboard;
use bitboard_chess::core::board::{Board, CastlingRights, Color, Piece, PieceType, Square};
use bitboard_chess::core::fen::STARTPOS_FEN;
use bitboard_chess::core::moves::{Move, MoveType};
use bitboard_chess::error::ChessError;

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

// ============================================================================
// Square Tests
// ============================================================================

#[test]
fn test_square_algebraic_round_trip() {
    for index in 0..64u8 {
        let sq = Square(index);
        assert_eq!(Square::from_algebraic(&sq.to_algebraic()), Ok(sq));
    }
    assert_eq!(Square::from_algebraic("e4"), Ok(Square::E4));
    assert_eq!(Square::E4.index(), 28);
}

#[test]
fn test_square_rejects_garbage() {
    for bad in ["", "e", "i1", "a9", "e44", "E4x"] {
        assert!(matches!(
            Square::from_algebraic(bad),
            Err(ChessError::InvalidSquare(_))
        ));
    }
}

#[test]
fn test_square_file_rank() {
    let sq = Square::from_file_rank(4, 3);
    assert_eq!(sq, Square::E4);
    assert_eq!(sq.file(), 4);
    assert_eq!(sq.rank(), 3);
    assert_eq!(sq.bitboard(), Bitboard::new(1 << 28));
}

// ============================================================================
// Piece Tests
// ============================================================================

#[test]
fn test_piece_index_covers_twelve_sets() {
    let mut seen = [false; Piece::COUNT];
    for color in Color::ALL {
        for piece_type in PieceType::ALL {
            let piece = Piece::new(piece_type, color);
            assert!(!seen[piece.index()]);
            seen[piece.index()] = true;
            assert_eq!(Piece::from_index(piece.index()), piece);
        }
    }
    assert!(seen.iter().all(|&s| s));
}

#[test]
fn test_piece_chars() {
    let white_knight = Piece::new(PieceType::Knight, Color::White);
    assert_eq!(white_knight.to_char(), 'N');
    assert_eq!(Piece::from_char('N'), Some(white_knight));
    assert_eq!(Piece::from_char('q'), Some(Piece::new(PieceType::Queen, Color::Black)));
    assert_eq!(Piece::from_char('x'), None);
}

#[test]
fn test_color_opposite() {
    assert_eq!(Color::White.opposite(), Color::Black);
    assert_eq!(!Color::Black, Color::White);
}

// ============================================================================
// Board Tests
// ============================================================================

#[test]
fn test_startpos_layout() {
    let board = Board::startpos();
    assert_eq!(board.occupied().count(), 32);
    assert_eq!(board.color(Color::White).count(), 16);
    assert_eq!(board.color(Color::Black).count(), 16);
    assert_eq!(board.pieces_of(PieceType::Pawn, Color::White), Bitboard::RANK_2);
    assert_eq!(board.pieces_of(PieceType::Pawn, Color::Black), Bitboard::RANK_7);
    assert_eq!(board.king(Color::White), Square::E1.bitboard());
    assert_eq!(board.king(Color::Black), Square::E8.bitboard());
    assert_eq!(board.castling(), CastlingRights::ALL);
    assert!(board.en_passant().is_empty());
}

#[test]
fn test_startpos_sets_are_disjoint() {
    let board = Board::startpos();
    let sets = board.occupancy();
    for i in 0..Piece::COUNT {
        for j in (i + 1)..Piece::COUNT {
            assert!((sets[i] & sets[j]).is_empty());
        }
    }
}

#[test]
fn test_piece_at() {
    let board = Board::startpos();
    assert_eq!(
        board.piece_at(Square::E1),
        Some(Piece::new(PieceType::King, Color::White))
    );
    assert_eq!(
        board.piece_at(Square::D8),
        Some(Piece::new(PieceType::Queen, Color::Black))
    );
    assert_eq!(board.piece_at(Square::E4), None);
}

#[test]
fn test_remove_pieces_clears_all_sets() {
    let mut board = Board::startpos();
    board.remove_pieces(Bitboard::RANK_1 | Bitboard::RANK_8);
    assert_eq!(board.occupied().count(), 16);
    assert!(board.king(Color::White).is_empty());
}

#[test]
fn test_startpos_not_in_check() {
    let board = Board::startpos();
    assert!(!board.in_check(Color::White));
    assert!(!board.in_check(Color::Black));
}

#[test]
fn test_castling_rights_for_corners() {
    assert_eq!(
        CastlingRights::rights_for_squares(Square::H1.bitboard() | Square::A8.bitboard()),
        CastlingRights::WHITE_KINGSIDE | CastlingRights::BLACK_QUEENSIDE
    );
    assert_eq!(CastlingRights::rights_for_squares(Square::E4.bitboard()), 0);

    let mut rights = CastlingRights::ALL;
    rights.remove(CastlingRights::both(Color::White));
    assert!(!rights.has(CastlingRights::WHITE_KINGSIDE));
    assert!(!rights.has(CastlingRights::WHITE_QUEENSIDE));
    assert!(rights.has(CastlingRights::BLACK_KINGSIDE));
}

// ============================================================================
// Move Tests
// ============================================================================

#[test]
fn test_move_flags() {
    let knight = Piece::new(PieceType::Knight, Color::Black);
    let capture = Move::new(
        MoveType::Capture,
        knight,
        Square::from_algebraic("f6").unwrap().bitboard(),
        Square::E4.bitboard(),
    );
    assert!(capture.is_capture());
    assert!(!capture.is_castle());
    assert_eq!(capture.color(), Color::Black);
    assert_eq!(capture.to_string(), "f6e4");

    let pawn = Piece::new(PieceType::Pawn, Color::White);
    let promo = Move::new(
        MoveType::SinglePush,
        pawn,
        Square::from_algebraic("a7").unwrap().bitboard(),
        Square::A8.bitboard(),
    )
    .with_promotion(PieceType::Knight);
    assert!(promo.is_promotion());
    assert_eq!(promo.to_uci(), "a7a8n");
}

// ============================================================================
// FEN Tests
// ============================================================================

#[test]
fn test_fen_startpos() {
    let (board, side) = Board::from_fen(STARTPOS_FEN).unwrap();
    assert_eq!(board, Board::startpos());
    assert_eq!(side, Color::White);
    assert_eq!(board.to_fen(side), STARTPOS_FEN);
}

#[test]
fn test_fen_kiwipete_round_trip() {
    let (board, side) = Board::from_fen(KIWIPETE).unwrap();
    assert_eq!(board.to_fen(side), KIWIPETE);
    assert_eq!(board.occupied().count(), 32);
}

#[test]
fn test_fen_partial_castling() {
    let fen = "r3k2r/8/8/8/8/8/8/R3K2R b Kq - 0 1";
    let (board, side) = Board::from_fen(fen).unwrap();
    assert_eq!(side, Color::Black);
    assert!(board.castling().has(CastlingRights::WHITE_KINGSIDE));
    assert!(!board.castling().has(CastlingRights::WHITE_QUEENSIDE));
    assert!(!board.castling().has(CastlingRights::BLACK_KINGSIDE));
    assert!(board.castling().has(CastlingRights::BLACK_QUEENSIDE));
    assert_eq!(board.to_fen(side), fen);
}

#[test]
fn test_fen_black_to_move_en_passant() {
    // White just played e2e4
    let fen = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1";
    let (board, side) = Board::from_fen(fen).unwrap();
    assert_eq!(board.en_passant(), Square::E4.bitboard());
    assert_eq!(board.to_fen(side), fen);
}

#[test]
fn test_fen_errors() {
    for bad in [
        "",
        "8/8/8/8/8/8/8 w - - 0 1",
        "9/8/8/8/8/8/8/8 w - - 0 1",
        "8/8/8/8/8/8/8/8 x - - 0 1",
        "8/8/8/8/8/8/8/8 w X - 0 1",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNZ w KQkq - 0 1",
    ] {
        assert!(
            matches!(Board::from_fen(bad), Err(ChessError::InvalidFen(_))),
            "accepted {bad:?}"
        );
    }
}

#[test]
fn test_board_display_shows_pieces() {
    let text = Board::startpos().to_string();
    assert!(text.contains("r n b q k b n r"));
    assert!(text.contains("R N B Q K B N R"));
}
