//! Move representation
//!
//! A move records what kind of transition it is, which piece moves, and the
//! single-bit from/to masks. Promotions carry the piece type the pawn becomes.
//! Moves are generated per query and never mutated.

use super::bitboard::Bitboard;
use super::board::{Color, Piece, PieceType};
use std::fmt;

/// Move kinds; drives the branching in the transition function
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum MoveType {
    /// Pawn one square forward
    SinglePush,
    /// Pawn two squares forward from its home rank
    DoublePush,
    /// Non-capturing move of any other piece
    Slide,
    Capture,
    EnPassant,
    CastleWhiteKingside,
    CastleWhiteQueenside,
    CastleBlackKingside,
    CastleBlackQueenside,
}

impl MoveType {
    #[inline]
    pub const fn is_castle(self) -> bool {
        matches!(
            self,
            MoveType::CastleWhiteKingside
                | MoveType::CastleWhiteQueenside
                | MoveType::CastleBlackKingside
                | MoveType::CastleBlackQueenside
        )
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct Move {
    pub move_type: MoveType,
    /// The moving piece (for castles, the king)
    pub piece: Piece,
    pub from: Bitboard,
    pub to: Bitboard,
    pub promotion: Option<PieceType>,
}

impl Move {
    #[inline]
    pub const fn new(move_type: MoveType, piece: Piece, from: Bitboard, to: Bitboard) -> Self {
        Move {
            move_type,
            piece,
            from,
            to,
            promotion: None,
        }
    }

    #[inline]
    pub const fn with_promotion(self, promotion: PieceType) -> Self {
        Move {
            promotion: Some(promotion),
            ..self
        }
    }

    #[inline]
    pub const fn color(&self) -> Color {
        self.piece.color
    }

    #[inline]
    pub const fn is_capture(&self) -> bool {
        matches!(self.move_type, MoveType::Capture | MoveType::EnPassant)
    }

    #[inline]
    pub const fn is_promotion(&self) -> bool {
        self.promotion.is_some()
    }

    #[inline]
    pub const fn is_castle(&self) -> bool {
        self.move_type.is_castle()
    }

    /// Convert to UCI notation (e.g., "e2e4", "e7e8q", "e1g1")
    pub fn to_uci(&self) -> String {
        let promo = self.promotion.map(PieceType::to_char);
        let mut uci = format!(
            "{}{}",
            self.from.lsb().to_algebraic(),
            self.to.lsb().to_algebraic()
        );
        if let Some(c) = promo {
            uci.push(c);
        }
        uci
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_uci())
    }
}
