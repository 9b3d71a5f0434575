//! Packed move encoding and fixed-capacity move lists.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Piece;
use super::square::Square;

pub(crate) const MAX_MOVES: usize = 256;

const FROM_SHIFT: u32 = 0;
const TO_SHIFT: u32 = 6;
const MOVER_SHIFT: u32 = 12;
const CAPTURED_SHIFT: u32 = 15;
const PROMOTION_SHIFT: u32 = 18;

const SQUARE_MASK: u32 = 0x3F;
const PIECE_MASK: u32 = 0x7;

const FLAG_CASTLE: u32 = 1 << 21;
const FLAG_EN_PASSANT: u32 = 1 << 22;
const FLAG_CHECK: u32 = 1 << 23;
const FLAG_DOUBLE_PAWN: u32 = 1 << 24;

/// A chess move packed into 32 bits.
///
/// Layout: from square (6), to square (6), moving piece (3), captured piece
/// plus one (3, zero means no capture), promotion piece plus one (3, zero
/// means no promotion), then one bit each for castle, en passant, check and
/// double pawn push.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move(u32);

impl Move {
    /// A quiet move of `mover` from one square to another
    #[inline]
    #[must_use]
    pub fn new(from: Square, to: Square, mover: Piece) -> Self {
        Move(
            (from.index().as_usize() as u32) << FROM_SHIFT
                | (to.index().as_usize() as u32) << TO_SHIFT
                | (mover.index() as u32) << MOVER_SHIFT,
        )
    }

    /// Record the piece this move captures
    #[inline]
    #[must_use]
    pub fn with_capture(self, captured: Piece) -> Self {
        Move(self.0 | ((captured.index() as u32 + 1) << CAPTURED_SHIFT))
    }

    /// Record the piece a pawn promotes to
    #[inline]
    #[must_use]
    pub fn with_promotion(self, promotion: Piece) -> Self {
        Move(self.0 | ((promotion.index() as u32 + 1) << PROMOTION_SHIFT))
    }

    #[inline]
    #[must_use]
    pub(crate) fn as_castle(self) -> Self {
        Move(self.0 | FLAG_CASTLE)
    }

    #[inline]
    #[must_use]
    pub(crate) fn as_en_passant(self) -> Self {
        Move(self.0 | FLAG_EN_PASSANT)
    }

    #[inline]
    #[must_use]
    pub(crate) fn as_double_pawn_push(self) -> Self {
        Move(self.0 | FLAG_DOUBLE_PAWN)
    }

    /// Mark whether this move gives check to the opponent
    #[inline]
    #[must_use]
    pub(crate) fn with_check(self, gives_check: bool) -> Self {
        if gives_check {
            Move(self.0 | FLAG_CHECK)
        } else {
            Move(self.0 & !FLAG_CHECK)
        }
    }

    /// Origin square
    #[inline]
    #[must_use]
    pub fn from(self) -> Square {
        let idx = (self.0 >> FROM_SHIFT) & SQUARE_MASK;
        Square(idx as usize / 8, idx as usize % 8)
    }

    /// Destination square
    #[inline]
    #[must_use]
    pub fn to(self) -> Square {
        let idx = (self.0 >> TO_SHIFT) & SQUARE_MASK;
        Square(idx as usize / 8, idx as usize % 8)
    }

    /// The piece being moved
    #[inline]
    #[must_use]
    pub fn mover(self) -> Piece {
        Piece::from_index(((self.0 >> MOVER_SHIFT) & PIECE_MASK) as usize)
    }

    /// The piece captured by this move, if any
    #[inline]
    #[must_use]
    pub fn captured(self) -> Option<Piece> {
        match (self.0 >> CAPTURED_SHIFT) & PIECE_MASK {
            0 => None,
            n => Some(Piece::from_index(n as usize - 1)),
        }
    }

    /// The piece a pawn promotes to, if any
    #[inline]
    #[must_use]
    pub fn promotion(self) -> Option<Piece> {
        match (self.0 >> PROMOTION_SHIFT) & PIECE_MASK {
            0 => None,
            n => Some(Piece::from_index(n as usize - 1)),
        }
    }

    #[inline]
    #[must_use]
    pub fn is_capture(self) -> bool {
        (self.0 >> CAPTURED_SHIFT) & PIECE_MASK != 0 || self.is_en_passant()
    }

    #[inline]
    #[must_use]
    pub fn is_castle(self) -> bool {
        self.0 & FLAG_CASTLE != 0
    }

    #[inline]
    #[must_use]
    pub fn is_en_passant(self) -> bool {
        self.0 & FLAG_EN_PASSANT != 0
    }

    #[inline]
    #[must_use]
    pub fn gives_check(self) -> bool {
        self.0 & FLAG_CHECK != 0
    }

    #[inline]
    #[must_use]
    pub fn is_double_pawn_push(self) -> bool {
        self.0 & FLAG_DOUBLE_PAWN != 0
    }

    /// Placeholder used to fill unused move list slots
    #[inline]
    #[must_use]
    pub(crate) const fn null() -> Self {
        Move(0)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_castle() {
            let notation = if self.to().file() > self.from().file() {
                "O-O"
            } else {
                "O-O-O"
            };
            write!(f, "{notation}")?;
        } else {
            let separator = if self.is_capture() { "x" } else { "-" };
            write!(f, "{}{}{}", self.from(), separator, self.to())?;
            if let Some(promotion) = self.promotion() {
                write!(f, "({})", promotion.to_char().to_ascii_uppercase())?;
            }
        }
        if self.gives_check() {
            write!(f, "+")?;
        }
        Ok(())
    }
}

/// A stack-allocated list of moves with fixed capacity.
///
/// No legal position has more than 218 moves, so 256 slots never overflow.
#[derive(Clone)]
pub struct MoveList {
    moves: [Move; MAX_MOVES],
    len: usize,
}

impl MoveList {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        MoveList {
            moves: [Move::null(); MAX_MOVES],
            len: 0,
        }
    }

    #[inline]
    pub fn push(&mut self, mv: Move) {
        debug_assert!(self.len < MAX_MOVES);
        self.moves[self.len] = mv;
        self.len += 1;
    }

    /// Remove the move at `idx`, shifting later moves down to fill the gap
    #[inline]
    pub fn remove(&mut self, idx: usize) {
        debug_assert!(idx < self.len);
        self.moves.copy_within(idx + 1..self.len, idx);
        self.len -= 1;
    }

    /// Replace the move at `idx`
    #[inline]
    pub(crate) fn set(&mut self, idx: usize, mv: Move) {
        debug_assert!(idx < self.len);
        self.moves[idx] = mv;
    }

    #[inline]
    #[must_use]
    pub fn get(&self, idx: usize) -> Option<Move> {
        if idx < self.len {
            Some(self.moves[idx])
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves[..self.len].iter()
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len]
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, mv: Move) -> bool {
        self.as_slice().contains(&mv)
    }
}

impl Default for MoveList {
    fn default() -> Self {
        MoveList::new()
    }
}

impl PartialEq for MoveList {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for MoveList {}

impl fmt::Debug for MoveList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, idx: usize) -> &Move {
        &self.as_slice()[idx]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = MoveListIntoIter;

    fn into_iter(self) -> Self::IntoIter {
        MoveListIntoIter { list: self, pos: 0 }
    }
}

/// Owning iterator over a [`MoveList`]
pub struct MoveListIntoIter {
    list: MoveList,
    pos: usize,
}

impl Iterator for MoveListIntoIter {
    type Item = Move;

    fn next(&mut self) -> Option<Self::Item> {
        let mv = self.list.get(self.pos)?;
        self.pos += 1;
        Some(mv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_fields() {
        let mv = Move::new(Square(1, 4), Square(3, 4), Piece::Pawn).as_double_pawn_push();
        assert_eq!(mv.from(), Square(1, 4));
        assert_eq!(mv.to(), Square(3, 4));
        assert_eq!(mv.mover(), Piece::Pawn);
        assert_eq!(mv.captured(), None);
        assert_eq!(mv.promotion(), None);
        assert!(mv.is_double_pawn_push());
        assert!(!mv.is_castle());
    }

    #[test]
    fn test_capture_and_promotion_fields() {
        let mv = Move::new(Square(6, 0), Square(7, 1), Piece::Pawn)
            .with_capture(Piece::Rook)
            .with_promotion(Piece::Queen);
        assert_eq!(mv.captured(), Some(Piece::Rook));
        assert_eq!(mv.promotion(), Some(Piece::Queen));
        assert!(mv.is_capture());
    }

    #[test]
    fn test_display_quiet_and_capture() {
        let quiet = Move::new(Square(1, 4), Square(3, 4), Piece::Pawn);
        assert_eq!(quiet.to_string(), "e2-e4");

        let capture = Move::new(Square(3, 4), Square(4, 3), Piece::Pawn).with_capture(Piece::Pawn);
        assert_eq!(capture.to_string(), "e4xd5");
    }

    #[test]
    fn test_display_promotion_with_check() {
        let mv = Move::new(Square(6, 0), Square(7, 0), Piece::Pawn)
            .with_promotion(Piece::Queen)
            .with_check(true);
        assert_eq!(mv.to_string(), "a7-a8(Q)+");
    }

    #[test]
    fn test_display_castling() {
        let kingside = Move::new(Square(0, 4), Square(0, 6), Piece::King).as_castle();
        assert_eq!(kingside.to_string(), "O-O");

        let queenside = Move::new(Square(7, 4), Square(7, 2), Piece::King).as_castle();
        assert_eq!(queenside.to_string(), "O-O-O");
    }

    #[test]
    fn test_move_list_push_and_remove() {
        let mut list = MoveList::new();
        let a = Move::new(Square(0, 0), Square(0, 1), Piece::King);
        let b = Move::new(Square(0, 0), Square(1, 0), Piece::King);
        let c = Move::new(Square(0, 0), Square(1, 1), Piece::King);
        list.push(a);
        list.push(b);
        list.push(c);
        assert_eq!(list.len(), 3);

        list.remove(1);
        assert_eq!(list.len(), 2);
        assert_eq!(list[0], a);
        assert_eq!(list[1], c);
    }

    #[test]
    fn test_move_list_get_out_of_bounds() {
        let list = MoveList::new();
        assert_eq!(list.get(0), None);
    }
}
