//! Bitboard type and operations.

use super::square::{Square, SquareIdx};

/// A 64-bit mask over the board; bit `i` is square `i` (a1 = 0, h8 = 63).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Bitboard(pub u64);

impl Bitboard {
    pub const FILE_A: Bitboard = Bitboard(0x0101010101010101);
    pub const FILE_H: Bitboard = Bitboard(0x8080808080808080);

    pub const RANK_1: Bitboard = Bitboard(0x00000000000000FF);
    pub const RANK_2: Bitboard = Bitboard(0x000000000000FF00);
    pub const RANK_3: Bitboard = Bitboard(0x0000000000FF0000);
    pub const RANK_6: Bitboard = Bitboard(0x0000FF0000000000);
    pub const RANK_7: Bitboard = Bitboard(0x00FF000000000000);
    pub const RANK_8: Bitboard = Bitboard(0xFF00000000000000);

    pub const EMPTY: Bitboard = Bitboard(0);
    pub const ALL: Bitboard = Bitboard(!0);

    /// Create a bitboard with a single square set
    #[inline]
    #[must_use]
    pub const fn from_square(sq: Square) -> Self {
        Bitboard(1 << (sq.0 * 8 + sq.1))
    }

    /// Returns an iterator over the square indices set in this bitboard
    #[inline]
    #[must_use]
    pub fn iter(self) -> BitboardIter {
        BitboardIter(self)
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the number of set bits (population count)
    #[inline]
    #[must_use]
    pub const fn popcount(self) -> u32 {
        self.0.count_ones()
    }

    /// Returns true if the given square is set
    #[inline]
    #[must_use]
    pub const fn contains(self, sq: Square) -> bool {
        (self.0 & (1 << (sq.0 * 8 + sq.1))) != 0
    }

    /// Shift all bits north (toward rank 8)
    #[inline]
    #[must_use]
    pub const fn shift_north(self) -> Self {
        Bitboard(self.0 << 8)
    }

    /// Shift all bits south (toward rank 1)
    #[inline]
    #[must_use]
    pub const fn shift_south(self) -> Self {
        Bitboard(self.0 >> 8)
    }

    /// Shift all bits east (toward file h), masking off file a wraparound
    #[inline]
    #[must_use]
    pub const fn shift_east(self) -> Self {
        Bitboard((self.0 << 1) & !Self::FILE_A.0)
    }

    /// Shift all bits west (toward file a), masking off file h wraparound
    #[inline]
    #[must_use]
    pub const fn shift_west(self) -> Self {
        Bitboard((self.0 >> 1) & !Self::FILE_H.0)
    }

    #[inline]
    #[must_use]
    pub const fn and(self, other: Self) -> Self {
        Bitboard(self.0 & other.0)
    }

    #[inline]
    #[must_use]
    pub const fn or(self, other: Self) -> Self {
        Bitboard(self.0 | other.0)
    }

    #[inline]
    #[must_use]
    pub const fn not(self) -> Self {
        Bitboard(!self.0)
    }
}

pub(crate) fn bit_for_square(sq: Square) -> Bitboard {
    Bitboard(1u64 << sq.index().as_usize())
}

/// Pop the least-significant set bit, returning its index.
///
/// Returns `None` when the mask is zero and leaves it unchanged;
/// `trailing_zeros` on zero would give a width-dependent answer and the
/// clearing step would underflow, so the empty case is handled explicitly.
#[inline]
pub(crate) fn pop_lsb(bb: &mut Bitboard) -> Option<SquareIdx> {
    if bb.0 == 0 {
        return None;
    }
    let idx = bb.0.trailing_zeros() as u8;
    bb.0 &= bb.0 - 1;
    Some(SquareIdx(idx))
}

/// Iterator over set bits in a Bitboard
pub struct BitboardIter(Bitboard);

impl Iterator for BitboardIter {
    type Item = SquareIdx;

    fn next(&mut self) -> Option<Self::Item> {
        pop_lsb(&mut self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pop_lsb_empty() {
        let mut bb = Bitboard::EMPTY;
        assert_eq!(pop_lsb(&mut bb), None);
        assert_eq!(bb, Bitboard::EMPTY);
    }

    #[test]
    fn test_pop_lsb_order() {
        let mut bb = Bitboard(0b1010_0001);
        assert_eq!(pop_lsb(&mut bb), Some(SquareIdx(0)));
        assert_eq!(pop_lsb(&mut bb), Some(SquareIdx(5)));
        assert_eq!(pop_lsb(&mut bb), Some(SquareIdx(7)));
        assert_eq!(pop_lsb(&mut bb), None);
    }

    #[test]
    fn test_shift_east_drops_h_file() {
        let h4 = Bitboard::from_square(Square(3, 7));
        assert!(h4.shift_east().is_empty());
    }

    #[test]
    fn test_shift_west_drops_a_file() {
        let a4 = Bitboard::from_square(Square(3, 0));
        assert!(a4.shift_west().is_empty());
    }

    #[test]
    fn test_iter_visits_every_square() {
        let squares: Vec<SquareIdx> = Bitboard::RANK_2.iter().collect();
        assert_eq!(squares.len(), 8);
        assert_eq!(squares[0], SquareIdx(8));
        assert_eq!(squares[7], SquareIdx(15));
    }
}
