//! Chess board representation
//!
//! A position is twelve disjoint occupancy bitboards, one per (color, piece type),
//! plus an en passant mask and the castling rights. Boards are plain values: applying
//! a move produces a new board and leaves the old one untouched.

use super::bitboard::Bitboard;
use super::moves::Move;
use crate::error::ChessError;
use std::fmt;

/// Square representation (0-63, a1=0, h8=63)
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Square(pub u8);

impl Square {
    pub const A1: Square = Square(0);
    pub const C1: Square = Square(2);
    pub const D1: Square = Square(3);
    pub const E1: Square = Square(4);
    pub const F1: Square = Square(5);
    pub const G1: Square = Square(6);
    pub const H1: Square = Square(7);
    pub const E2: Square = Square(12);
    pub const E4: Square = Square(28);
    pub const A8: Square = Square(56);
    pub const C8: Square = Square(58);
    pub const D8: Square = Square(59);
    pub const E8: Square = Square(60);
    pub const F8: Square = Square(61);
    pub const G8: Square = Square(62);
    pub const H8: Square = Square(63);

    #[inline]
    pub const fn from_file_rank(file: u8, rank: u8) -> Self {
        Square(rank * 8 + file)
    }

    #[inline]
    pub const fn file(self) -> u8 {
        self.0 & 7
    }

    #[inline]
    pub const fn rank(self) -> u8 {
        self.0 >> 3
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn bitboard(self) -> Bitboard {
        Bitboard::from_square(self)
    }

    /// Parse a square from algebraic notation (e.g., "e4")
    pub fn from_algebraic(s: &str) -> Result<Self, ChessError> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(ChessError::InvalidSquare(s.to_string()));
        }
        let file = bytes[0].wrapping_sub(b'a');
        let rank = bytes[1].wrapping_sub(b'1');
        if file < 8 && rank < 8 {
            Ok(Square::from_file_rank(file, rank))
        } else {
            Err(ChessError::InvalidSquare(s.to_string()))
        }
    }

    /// Convert to algebraic notation
    pub fn to_algebraic(self) -> String {
        let file = (b'a' + self.file()) as char;
        let rank = (b'1' + self.rank()) as char;
        format!("{}{}", file, rank)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}

/// Piece color
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
#[repr(u8)]
pub enum Color {
    White = 0,
    Black = 1,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Rank a pawn of this color promotes on
    #[inline]
    pub const fn promotion_rank(self) -> Bitboard {
        match self {
            Color::White => Bitboard::RANK_8,
            Color::Black => Bitboard::RANK_1,
        }
    }
}

impl std::ops::Not for Color {
    type Output = Color;
    fn not(self) -> Self::Output {
        self.opposite()
    }
}

/// Piece type
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
#[repr(u8)]
pub enum PieceType {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

impl PieceType {
    pub const ALL: [PieceType; 6] = [
        PieceType::Pawn,
        PieceType::Knight,
        PieceType::Bishop,
        PieceType::Rook,
        PieceType::Queen,
        PieceType::King,
    ];

    /// Promotion choices, in the order they are generated
    pub const PROMOTIONS: [PieceType; 4] = [
        PieceType::Queen,
        PieceType::Rook,
        PieceType::Bishop,
        PieceType::Knight,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn to_char(self) -> char {
        match self {
            PieceType::Pawn => 'p',
            PieceType::Knight => 'n',
            PieceType::Bishop => 'b',
            PieceType::Rook => 'r',
            PieceType::Queen => 'q',
            PieceType::King => 'k',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceType::Pawn),
            'n' => Some(PieceType::Knight),
            'b' => Some(PieceType::Bishop),
            'r' => Some(PieceType::Rook),
            'q' => Some(PieceType::Queen),
            'k' => Some(PieceType::King),
            _ => None,
        }
    }
}

/// A colored piece; also the index of its occupancy set
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct Piece {
    pub piece_type: PieceType,
    pub color: Color,
}

impl Piece {
    pub const COUNT: usize = 12;

    #[inline]
    pub const fn new(piece_type: PieceType, color: Color) -> Self {
        Piece { piece_type, color }
    }

    /// Index into the twelve occupancy sets: white pieces 0-5, black pieces 6-11
    #[inline]
    pub const fn index(self) -> usize {
        self.color.index() * 6 + self.piece_type.index()
    }

    #[inline]
    pub const fn from_index(index: usize) -> Self {
        let color = if index < 6 { Color::White } else { Color::Black };
        Piece::new(PieceType::ALL[index % 6], color)
    }

    /// Uppercase for white, lowercase for black
    pub fn to_char(self) -> char {
        let c = self.piece_type.to_char();
        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        let piece_type = PieceType::from_char(c)?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Piece::new(piece_type, color))
    }
}

/// Castling rights
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct CastlingRights(u8);

impl CastlingRights {
    pub const NONE: CastlingRights = CastlingRights(0);
    pub const WHITE_KINGSIDE: u8 = 1;
    pub const WHITE_QUEENSIDE: u8 = 2;
    pub const BLACK_KINGSIDE: u8 = 4;
    pub const BLACK_QUEENSIDE: u8 = 8;
    pub const ALL: CastlingRights = CastlingRights(0xF);

    #[inline]
    pub const fn new(rights: u8) -> Self {
        CastlingRights(rights & 0xF)
    }

    #[inline]
    pub const fn has(self, right: u8) -> bool {
        (self.0 & right) != 0
    }

    #[inline]
    pub fn remove(&mut self, right: u8) {
        self.0 &= !right;
    }

    #[inline]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Both rights of one color
    #[inline]
    pub const fn both(color: Color) -> u8 {
        match color {
            Color::White => Self::WHITE_KINGSIDE | Self::WHITE_QUEENSIDE,
            Color::Black => Self::BLACK_KINGSIDE | Self::BLACK_QUEENSIDE,
        }
    }

    /// Rights lost when a move leaves from or lands on one of these squares
    pub fn rights_for_squares(squares: Bitboard) -> u8 {
        let mut rights = 0;
        if squares.contains(Square::A1) {
            rights |= Self::WHITE_QUEENSIDE;
        }
        if squares.contains(Square::H1) {
            rights |= Self::WHITE_KINGSIDE;
        }
        if squares.contains(Square::A8) {
            rights |= Self::BLACK_QUEENSIDE;
        }
        if squares.contains(Square::H8) {
            rights |= Self::BLACK_KINGSIDE;
        }
        rights
    }
}

/// The chess position: occupancy, en passant target and castling rights
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    /// Occupancy per piece, indexed by `Piece::index`
    pieces: [Bitboard; Piece::COUNT],
    /// Square of the pawn that just made a double push, if any
    en_passant: Bitboard,
    castling: CastlingRights,
}

impl Board {
    pub fn empty() -> Self {
        Board {
            pieces: [Bitboard::EMPTY; Piece::COUNT],
            en_passant: Bitboard::EMPTY,
            castling: CastlingRights::NONE,
        }
    }

    /// The standard starting position
    pub fn startpos() -> Self {
        let mut board = Board::empty();
        let setup: [(PieceType, u64); 6] = [
            (PieceType::Pawn, 0x000000000000FF00),
            (PieceType::Knight, 0x0000000000000042),
            (PieceType::Bishop, 0x0000000000000024),
            (PieceType::Rook, 0x0000000000000081),
            (PieceType::Queen, 0x0000000000000008),
            (PieceType::King, 0x0000000000000010),
        ];
        for (piece_type, white) in setup {
            // Black mirrors white across the middle of the board
            board.pieces[Piece::new(piece_type, Color::White).index()] = Bitboard(white);
            board.pieces[Piece::new(piece_type, Color::Black).index()] =
                Bitboard(white.swap_bytes());
        }
        board.castling = CastlingRights::ALL;
        board
    }

    /// Build a board from raw parts. The caller is responsible for disjointness.
    pub fn from_parts(
        pieces: [Bitboard; Piece::COUNT],
        en_passant: Bitboard,
        castling: CastlingRights,
    ) -> Self {
        Board {
            pieces,
            en_passant,
            castling,
        }
    }

    /// All twelve occupancy sets, indexed by `Piece::index`
    #[inline]
    pub fn occupancy(&self) -> &[Bitboard; Piece::COUNT] {
        &self.pieces
    }

    #[inline]
    pub fn pieces(&self, piece: Piece) -> Bitboard {
        self.pieces[piece.index()]
    }

    #[inline]
    pub fn pieces_of(&self, piece_type: PieceType, color: Color) -> Bitboard {
        self.pieces[Piece::new(piece_type, color).index()]
    }

    /// Mutable access to one occupancy set
    #[inline]
    pub fn pieces_mut(&mut self, piece: Piece) -> &mut Bitboard {
        &mut self.pieces[piece.index()]
    }

    /// Union of all pieces of one color
    pub fn color(&self, color: Color) -> Bitboard {
        let start = color.index() * 6;
        self.pieces[start..start + 6]
            .iter()
            .fold(Bitboard::EMPTY, |acc, &bb| acc | bb)
    }

    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.pieces.iter().fold(Bitboard::EMPTY, |acc, &bb| acc | bb)
    }

    #[inline]
    pub fn empty_squares(&self) -> Bitboard {
        !self.occupied()
    }

    #[inline]
    pub fn king(&self, color: Color) -> Bitboard {
        self.pieces_of(PieceType::King, color)
    }

    #[inline]
    pub fn en_passant(&self) -> Bitboard {
        self.en_passant
    }

    #[inline]
    pub fn set_en_passant(&mut self, target: Bitboard) {
        self.en_passant = target;
    }

    #[inline]
    pub fn castling(&self) -> CastlingRights {
        self.castling
    }

    #[inline]
    pub fn castling_mut(&mut self) -> &mut CastlingRights {
        &mut self.castling
    }

    /// Occupant of a square, testing the sets in index order
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.pieces
            .iter()
            .position(|bb| bb.contains(sq))
            .map(Piece::from_index)
    }

    pub fn put_piece(&mut self, piece: Piece, sq: Square) {
        self.pieces[piece.index()] |= sq.bitboard();
    }

    /// Clear every occupancy bit in `squares`, whatever piece sits there
    pub fn remove_pieces(&mut self, squares: Bitboard) {
        for bb in self.pieces.iter_mut() {
            *bb &= !squares;
        }
    }

    /// Squares attacked by every piece of `color`
    pub fn attacks(&self, color: Color) -> Bitboard {
        crate::engine::movegen::MoveGen::attacks(self, color)
    }

    /// Check whether any of `squares` is attacked by `by_color`
    pub fn is_attacked(&self, by_color: Color, squares: Bitboard) -> bool {
        self.attacks(by_color).intersects(squares)
    }

    /// True if the king of `color` is attacked
    pub fn in_check(&self, color: Color) -> bool {
        self.is_attacked(color.opposite(), self.king(color))
    }

    /// Pseudo-legal moves: piece movement rules only, king safety unchecked
    pub fn pseudo_legal_moves(&self, color: Color) -> Vec<Move> {
        crate::engine::movegen::MoveGen::generate_pseudo_legal_moves(self, color)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::startpos()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        for rank in (0..8).rev() {
            write!(f, "  {} ", rank + 1)?;
            for file in 0..8 {
                match self.piece_at(Square::from_file_rank(file, rank)) {
                    Some(piece) => write!(f, "{} ", piece.to_char())?,
                    None => write!(f, ". ")?,
                }
            }
            writeln!(f)?;
        }
        writeln!(f, "    a b c d e f g h")?;
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)?;
        writeln!(
            f,
            "  en passant: {:#018x}  castling: {:#06b}",
            self.en_passant.0,
            self.castling.raw()
        )
    }
}
