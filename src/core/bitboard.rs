//! Bitboard representation and directional shifts
//!
//! A bitboard is a 64-bit integer where each bit represents a square on the chess board
//! (bit 0 = a1, bit 7 = h1, bit 63 = h8). Every shift that moves pieces sideways is
//! masked so nothing wraps from the H-file to the A-file or back.

use super::board::Square;
use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

/// A 64-bit bitboard representing squares on the chess board
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bitboard(pub u64);

impl Bitboard {
    pub const EMPTY: Bitboard = Bitboard(0);
    pub const ALL: Bitboard = Bitboard(!0u64);

    // File masks
    pub const FILE_A: Bitboard = Bitboard(0x0101010101010101);
    pub const FILE_B: Bitboard = Bitboard(0x0202020202020202);
    pub const FILE_G: Bitboard = Bitboard(0x4040404040404040);
    pub const FILE_H: Bitboard = Bitboard(0x8080808080808080);

    // Wraparound guards
    pub const NOT_A_FILE: Bitboard = Bitboard(0xFEFEFEFEFEFEFEFE);
    pub const NOT_H_FILE: Bitboard = Bitboard(0x7F7F7F7F7F7F7F7F);
    pub const NOT_AB_FILE: Bitboard = Bitboard(0xFCFCFCFCFCFCFCFC);
    pub const NOT_GH_FILE: Bitboard = Bitboard(0x3F3F3F3F3F3F3F3F);

    // Rank masks
    pub const RANK_1: Bitboard = Bitboard(0x00000000000000FF);
    pub const RANK_2: Bitboard = Bitboard(0x000000000000FF00);
    pub const RANK_3: Bitboard = Bitboard(0x0000000000FF0000);
    pub const RANK_4: Bitboard = Bitboard(0x00000000FF000000);
    pub const RANK_5: Bitboard = Bitboard(0x000000FF00000000);
    pub const RANK_6: Bitboard = Bitboard(0x0000FF0000000000);
    pub const RANK_7: Bitboard = Bitboard(0x00FF000000000000);
    pub const RANK_8: Bitboard = Bitboard(0xFF00000000000000);

    #[inline]
    pub const fn new(value: u64) -> Self {
        Bitboard(value)
    }

    /// Single-bit bitboard for a square
    #[inline]
    pub const fn from_square(sq: Square) -> Self {
        Bitboard(1u64 << sq.0)
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_not_empty(self) -> bool {
        self.0 != 0
    }

    /// Count the number of set bits (population count)
    #[inline]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Square of the least significant set bit. Meaningless on an empty board.
    #[inline]
    pub const fn lsb(self) -> Square {
        Square(self.0.trailing_zeros() as u8)
    }

    /// Bitboard holding only the least significant set bit
    #[inline]
    pub const fn isolate_lsb(self) -> Self {
        Bitboard(self.0 & self.0.wrapping_neg())
    }

    #[inline]
    pub const fn contains(self, sq: Square) -> bool {
        (self.0 & (1u64 << sq.0)) != 0
    }

    /// True if the two sets share at least one square
    #[inline]
    pub const fn intersects(self, other: Bitboard) -> bool {
        (self.0 & other.0) != 0
    }

    #[inline]
    pub fn set(&mut self, sq: Square) {
        self.0 |= 1u64 << sq.0;
    }

    #[inline]
    pub fn clear(&mut self, sq: Square) {
        self.0 &= !(1u64 << sq.0);
    }

    // King-step shifts

    #[inline]
    pub const fn north(self) -> Self {
        Bitboard(self.0 << 8)
    }

    #[inline]
    pub const fn south(self) -> Self {
        Bitboard(self.0 >> 8)
    }

    #[inline]
    pub const fn east(self) -> Self {
        Bitboard((self.0 << 1) & Self::NOT_A_FILE.0)
    }

    #[inline]
    pub const fn west(self) -> Self {
        Bitboard((self.0 >> 1) & Self::NOT_H_FILE.0)
    }

    #[inline]
    pub const fn north_east(self) -> Self {
        Bitboard((self.0 << 9) & Self::NOT_A_FILE.0)
    }

    #[inline]
    pub const fn north_west(self) -> Self {
        Bitboard((self.0 << 7) & Self::NOT_H_FILE.0)
    }

    #[inline]
    pub const fn south_east(self) -> Self {
        Bitboard((self.0 >> 7) & Self::NOT_A_FILE.0)
    }

    #[inline]
    pub const fn south_west(self) -> Self {
        Bitboard((self.0 >> 9) & Self::NOT_H_FILE.0)
    }

    // Knight jumps. The two-file jumps need the wider AB/GH guards.

    #[inline]
    pub const fn north_north_east(self) -> Self {
        Bitboard((self.0 << 17) & Self::NOT_A_FILE.0)
    }

    #[inline]
    pub const fn north_north_west(self) -> Self {
        Bitboard((self.0 << 15) & Self::NOT_H_FILE.0)
    }

    #[inline]
    pub const fn north_east_east(self) -> Self {
        Bitboard((self.0 << 10) & Self::NOT_AB_FILE.0)
    }

    #[inline]
    pub const fn north_west_west(self) -> Self {
        Bitboard((self.0 << 6) & Self::NOT_GH_FILE.0)
    }

    #[inline]
    pub const fn south_south_east(self) -> Self {
        Bitboard((self.0 >> 15) & Self::NOT_A_FILE.0)
    }

    #[inline]
    pub const fn south_south_west(self) -> Self {
        Bitboard((self.0 >> 17) & Self::NOT_H_FILE.0)
    }

    #[inline]
    pub const fn south_east_east(self) -> Self {
        Bitboard((self.0 >> 6) & Self::NOT_AB_FILE.0)
    }

    #[inline]
    pub const fn south_west_west(self) -> Self {
        Bitboard((self.0 >> 10) & Self::NOT_GH_FILE.0)
    }

    /// Get file mask for a given file index (0-7)
    #[inline]
    pub const fn file_mask(file: u8) -> Self {
        Bitboard(Self::FILE_A.0 << file)
    }

    /// Get rank mask for a given rank index (0-7)
    #[inline]
    pub const fn rank_mask(rank: u8) -> Self {
        Bitboard(Self::RANK_1.0 << (rank * 8))
    }

    /// Iterate over the squares of all set bits, lowest first
    pub fn iter(self) -> BitboardIter {
        BitboardIter(self)
    }

    /// Iterate over the set bits as single-bit bitboards, lowest first
    pub fn singles(self) -> impl Iterator<Item = Bitboard> {
        self.iter().map(Bitboard::from_square)
    }
}

/// Iterator over set bits in a bitboard
pub struct BitboardIter(Bitboard);

impl Iterator for BitboardIter {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.0.is_empty() {
            None
        } else {
            let sq = self.0.lsb();
            self.0.0 &= self.0.0 - 1;
            Some(sq)
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.0.count() as usize;
        (count, Some(count))
    }
}

impl ExactSizeIterator for BitboardIter {}

impl BitAnd for Bitboard {
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self::Output {
        Bitboard(self.0 & rhs.0)
    }
}

impl BitAndAssign for Bitboard {
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl BitOr for Bitboard {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        Bitboard(self.0 | rhs.0)
    }
}

impl BitOrAssign for Bitboard {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitXor for Bitboard {
    type Output = Self;
    #[inline]
    fn bitxor(self, rhs: Self) -> Self::Output {
        Bitboard(self.0 ^ rhs.0)
    }
}

impl BitXorAssign for Bitboard {
    #[inline]
    fn bitxor_assign(&mut self, rhs: Self) {
        self.0 ^= rhs.0;
    }
}

impl Not for Bitboard {
    type Output = Self;
    #[inline]
    fn not(self) -> Self::Output {
        Bitboard(!self.0)
    }
}

impl fmt::Debug for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        for rank in (0..8).rev() {
            write!(f, "  {} ", rank + 1)?;
            for file in 0..8 {
                if self.contains(Square::from_file_rank(file, rank)) {
                    write!(f, "X ")?;
                } else {
                    write!(f, ". ")?;
                }
            }
            writeln!(f)?;
        }
        writeln!(f, "    a b c d e f g h")?;
        Ok(())
    }
}

impl fmt::Display for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
