//! Attack and pseudo-legal move generation
//!
//! All generation works directly on bitboards:
//! - Knight, king and pawn attacks are unions of masked shifts
//! - Sliding pieces walk one step at a time along each ray, stopping on the first
//!   occupied square (which is included, so it can be captured)
//! - Pawn moves add pushes, double pushes, en passant and promotions
//! - King moves add castling
//!
//! Nothing here checks that the mover's own king is safe afterwards; the
//! controller filters for that.

use crate::core::bitboard::Bitboard;
use crate::core::board::{Board, CastlingRights, Color, Piece, PieceType, Square};
use crate::core::moves::{Move, MoveType};

/// One step along a ray
type Step = fn(Bitboard) -> Bitboard;

const ROOK_STEPS: [Step; 4] = [
    Bitboard::north,
    Bitboard::south,
    Bitboard::east,
    Bitboard::west,
];

const BISHOP_STEPS: [Step; 4] = [
    Bitboard::north_east,
    Bitboard::north_west,
    Bitboard::south_east,
    Bitboard::south_west,
];

/// Fixed squares for one castling option
struct CastleSpec {
    move_type: MoveType,
    color: Color,
    right: u8,
    king_to: Square,
    rook_from: Square,
    /// Squares between king and rook that must be empty
    between: Bitboard,
    /// King start, transit and destination squares that must not be attacked
    king_path: Bitboard,
}

const CASTLES: [CastleSpec; 4] = [
    CastleSpec {
        move_type: MoveType::CastleWhiteKingside,
        color: Color::White,
        right: CastlingRights::WHITE_KINGSIDE,
        king_to: Square::G1,
        rook_from: Square::H1,
        between: Bitboard(0x0000000000000060),
        king_path: Bitboard(0x0000000000000070),
    },
    CastleSpec {
        move_type: MoveType::CastleWhiteQueenside,
        color: Color::White,
        right: CastlingRights::WHITE_QUEENSIDE,
        king_to: Square::C1,
        rook_from: Square::A1,
        between: Bitboard(0x000000000000000E),
        king_path: Bitboard(0x000000000000001C),
    },
    CastleSpec {
        move_type: MoveType::CastleBlackKingside,
        color: Color::Black,
        right: CastlingRights::BLACK_KINGSIDE,
        king_to: Square::G8,
        rook_from: Square::H8,
        between: Bitboard(0x6000000000000000),
        king_path: Bitboard(0x7000000000000000),
    },
    CastleSpec {
        move_type: MoveType::CastleBlackQueenside,
        color: Color::Black,
        right: CastlingRights::BLACK_QUEENSIDE,
        king_to: Square::C8,
        rook_from: Square::A8,
        between: Bitboard(0x0E00000000000000),
        king_path: Bitboard(0x1C00000000000000),
    },
];

/// Rook relocation (from, to) performed by a castle move
pub fn castle_rook_squares(move_type: MoveType) -> Option<(Square, Square)> {
    match move_type {
        MoveType::CastleWhiteKingside => Some((Square::H1, Square::F1)),
        MoveType::CastleWhiteQueenside => Some((Square::A1, Square::D1)),
        MoveType::CastleBlackKingside => Some((Square::H8, Square::F8)),
        MoveType::CastleBlackQueenside => Some((Square::A8, Square::D8)),
        _ => None,
    }
}

/// Stateless attack and move generator
pub struct MoveGen;

impl MoveGen {
    /// Walk every ray from `pieces` until the ray leaves the board or lands on a
    /// non-empty square. Works for several pieces at once.
    fn slide(pieces: Bitboard, empty: Bitboard, steps: &[Step; 4]) -> Bitboard {
        let mut attacks = Bitboard::EMPTY;
        for step in steps {
            let mut ray = pieces;
            while ray.is_not_empty() {
                ray = step(ray);
                attacks |= ray;
                ray &= empty;
            }
        }
        attacks
    }

    #[inline]
    pub fn rook_attacks(pieces: Bitboard, empty: Bitboard) -> Bitboard {
        Self::slide(pieces, empty, &ROOK_STEPS)
    }

    #[inline]
    pub fn bishop_attacks(pieces: Bitboard, empty: Bitboard) -> Bitboard {
        Self::slide(pieces, empty, &BISHOP_STEPS)
    }

    #[inline]
    pub fn queen_attacks(pieces: Bitboard, empty: Bitboard) -> Bitboard {
        Self::rook_attacks(pieces, empty) | Self::bishop_attacks(pieces, empty)
    }

    pub fn knight_attacks(knights: Bitboard) -> Bitboard {
        knights.north_north_east()
            | knights.north_north_west()
            | knights.north_east_east()
            | knights.north_west_west()
            | knights.south_south_east()
            | knights.south_south_west()
            | knights.south_east_east()
            | knights.south_west_west()
    }

    pub fn king_attacks(kings: Bitboard) -> Bitboard {
        kings.north()
            | kings.south()
            | kings.east()
            | kings.west()
            | kings.north_east()
            | kings.north_west()
            | kings.south_east()
            | kings.south_west()
    }

    /// Diagonal-forward squares of `pawns` of the given color
    pub fn pawn_attacks(pawns: Bitboard, color: Color) -> Bitboard {
        match color {
            Color::White => pawns.north_east() | pawns.north_west(),
            Color::Black => pawns.south_east() | pawns.south_west(),
        }
    }

    /// Every square attacked by `color` on this board
    pub fn attacks(board: &Board, color: Color) -> Bitboard {
        let empty = board.empty_squares();
        let of = |piece_type| board.pieces_of(piece_type, color);

        Self::pawn_attacks(of(PieceType::Pawn), color)
            | Self::knight_attacks(of(PieceType::Knight))
            | Self::bishop_attacks(of(PieceType::Bishop) | of(PieceType::Queen), empty)
            | Self::rook_attacks(of(PieceType::Rook) | of(PieceType::Queen), empty)
            | Self::king_attacks(of(PieceType::King))
    }

    /// Generate all pseudo-legal moves for `color`
    pub fn generate_pseudo_legal_moves(board: &Board, color: Color) -> Vec<Move> {
        let mut moves = Vec::with_capacity(64);
        let enemy = board.color(color.opposite());
        let empty = board.empty_squares();

        Self::generate_pawn_moves(board, color, enemy, empty, &mut moves);

        for piece_type in [
            PieceType::Knight,
            PieceType::Bishop,
            PieceType::Rook,
            PieceType::Queen,
            PieceType::King,
        ] {
            let piece = Piece::new(piece_type, color);
            for from in board.pieces(piece).singles() {
                let attacks = match piece_type {
                    PieceType::Knight => Self::knight_attacks(from),
                    PieceType::Bishop => Self::bishop_attacks(from, empty),
                    PieceType::Rook => Self::rook_attacks(from, empty),
                    PieceType::Queen => Self::queen_attacks(from, empty),
                    _ => Self::king_attacks(from),
                };
                Self::push_targets(piece, from, attacks, enemy, empty, &mut moves);
            }
        }

        Self::generate_castling_moves(board, color, &mut moves);
        moves
    }

    /// Empty targets become slides, enemy-occupied targets captures
    fn push_targets(
        piece: Piece,
        from: Bitboard,
        attacks: Bitboard,
        enemy: Bitboard,
        empty: Bitboard,
        moves: &mut Vec<Move>,
    ) {
        for to in (attacks & empty).singles() {
            moves.push(Move::new(MoveType::Slide, piece, from, to));
        }
        for to in (attacks & enemy).singles() {
            moves.push(Move::new(MoveType::Capture, piece, from, to));
        }
    }

    /// Push `mv`, or its four promotion variants if it lands on the last rank
    fn push_pawn_move(mv: Move, moves: &mut Vec<Move>) {
        if mv.to.intersects(mv.piece.color.promotion_rank()) {
            for promo in PieceType::PROMOTIONS {
                moves.push(mv.with_promotion(promo));
            }
        } else {
            moves.push(mv);
        }
    }

    fn generate_pawn_moves(
        board: &Board,
        color: Color,
        enemy: Bitboard,
        empty: Bitboard,
        moves: &mut Vec<Move>,
    ) {
        let pawn = Piece::new(PieceType::Pawn, color);
        let en_passant = board.en_passant();

        let (forward, double_rank, ep_rank, east_capture, west_capture): (
            Step,
            Bitboard,
            Bitboard,
            Step,
            Step,
        ) = match color {
            Color::White => (
                Bitboard::north,
                Bitboard::RANK_4,
                Bitboard::RANK_5,
                Bitboard::north_east,
                Bitboard::north_west,
            ),
            Color::Black => (
                Bitboard::south,
                Bitboard::RANK_5,
                Bitboard::RANK_4,
                Bitboard::south_east,
                Bitboard::south_west,
            ),
        };

        for from in board.pieces(pawn).singles() {
            let single = forward(from) & empty;
            if single.is_not_empty() {
                Self::push_pawn_move(Move::new(MoveType::SinglePush, pawn, from, single), moves);

                let double = forward(single) & empty & double_rank;
                if double.is_not_empty() {
                    moves.push(Move::new(MoveType::DoublePush, pawn, from, double));
                }
            }

            for capture in [east_capture(from), west_capture(from)] {
                let target = capture & enemy;
                if target.is_not_empty() {
                    Self::push_pawn_move(Move::new(MoveType::Capture, pawn, from, target), moves);
                }
            }

            // The en passant mask holds the enemy pawn beside us; we land behind it
            if from.intersects(ep_rank) && en_passant.is_not_empty() {
                if from.east().intersects(en_passant) {
                    moves.push(Move::new(MoveType::EnPassant, pawn, from, east_capture(from)));
                }
                if from.west().intersects(en_passant) {
                    moves.push(Move::new(MoveType::EnPassant, pawn, from, west_capture(from)));
                }
            }
        }
    }

    fn generate_castling_moves(board: &Board, color: Color, moves: &mut Vec<Move>) {
        let king = Piece::new(PieceType::King, color);
        let rook = Piece::new(PieceType::Rook, color);
        let occupied = board.occupied();
        let castling = board.castling();

        for castle in CASTLES.iter().filter(|castle| castle.color == color) {
            if !castling.has(castle.right)
                || !board.pieces(rook).contains(castle.rook_from)
                || occupied.intersects(castle.between)
                || board.is_attacked(color.opposite(), castle.king_path)
            {
                continue;
            }
            moves.push(Move::new(
                castle.move_type,
                king,
                board.pieces(king),
                castle.king_to.bitboard(),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Bitboard {
        Square::from_algebraic(name).unwrap().bitboard()
    }

    #[test]
    fn test_knight_attacks() {
        assert_eq!(MoveGen::knight_attacks(sq("e4")).count(), 8);
        assert_eq!(MoveGen::knight_attacks(sq("a1")).count(), 2);
        assert_eq!(MoveGen::knight_attacks(sq("h8")).count(), 2);
        assert_eq!(MoveGen::knight_attacks(sq("b1")), sq("a3") | sq("c3") | sq("d2"));
    }

    #[test]
    fn test_king_attacks() {
        assert_eq!(MoveGen::king_attacks(sq("e4")).count(), 8);
        assert_eq!(MoveGen::king_attacks(sq("a1")).count(), 3);
        assert_eq!(MoveGen::king_attacks(sq("h5")).count(), 5);
    }

    #[test]
    fn test_rook_attacks_empty_board() {
        let attacks = MoveGen::rook_attacks(sq("e4"), Bitboard::ALL ^ sq("e4"));
        assert_eq!(attacks.count(), 14);
    }

    #[test]
    fn test_bishop_attacks_empty_board() {
        let attacks = MoveGen::bishop_attacks(sq("e4"), Bitboard::ALL ^ sq("e4"));
        assert_eq!(attacks.count(), 13);
    }

    #[test]
    fn test_slider_stops_on_blocker() {
        let blocker = sq("e6");
        let empty = !(sq("e4") | blocker);
        let attacks = MoveGen::rook_attacks(sq("e4"), empty);
        assert!(attacks.intersects(blocker));
        assert!(!attacks.intersects(sq("e7")));
    }

    #[test]
    fn test_rook_on_h_file_does_not_wrap() {
        let attacks = MoveGen::rook_attacks(sq("h4"), !sq("h4"));
        assert!(!attacks.intersects(sq("a5")));
        assert!(attacks.intersects(sq("a4")));
        assert_eq!(attacks.count(), 14);
    }

    #[test]
    fn test_pawn_attacks_edge_files() {
        assert_eq!(MoveGen::pawn_attacks(sq("a2"), Color::White), sq("b3"));
        assert_eq!(MoveGen::pawn_attacks(sq("h7"), Color::Black), sq("g6"));
    }

    #[test]
    fn test_startpos_pseudo_legal_count() {
        let board = Board::startpos();
        assert_eq!(board.pseudo_legal_moves(Color::White).len(), 20);
        assert_eq!(board.pseudo_legal_moves(Color::Black).len(), 20);
    }

    #[test]
    fn test_startpos_attacks() {
        let board = Board::startpos();
        // Rank 3 is fully covered by white pawns
        assert_eq!(board.attacks(Color::White) & Bitboard::RANK_3, Bitboard::RANK_3);
        assert!(!board.is_attacked(Color::Black, Bitboard::RANK_4));
    }

    #[test]
    fn test_castle_rook_squares() {
        assert_eq!(
            castle_rook_squares(MoveType::CastleWhiteQueenside),
            Some((Square::A1, Square::D1))
        );
        assert_eq!(castle_rook_squares(MoveType::Slide), None);
    }
}
