//! Castling rights representation.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::Square;

pub(crate) const CASTLE_WHITE_K: u8 = 0b0001;
pub(crate) const CASTLE_WHITE_Q: u8 = 0b0010;
pub(crate) const CASTLE_BLACK_K: u8 = 0b0100;
pub(crate) const CASTLE_BLACK_Q: u8 = 0b1000;

pub(crate) const ALL_CASTLING_RIGHTS: u8 =
    CASTLE_WHITE_K | CASTLE_WHITE_Q | CASTLE_BLACK_K | CASTLE_BLACK_Q;

/// Castling availability for both sides, packed into four bits.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingRights(pub(crate) u8);

impl CastlingRights {
    #[inline]
    #[must_use]
    pub const fn none() -> Self {
        CastlingRights(0)
    }

    #[inline]
    #[must_use]
    pub const fn all() -> Self {
        CastlingRights(ALL_CASTLING_RIGHTS)
    }

    #[inline]
    #[must_use]
    pub const fn white_kingside(self) -> bool {
        self.0 & CASTLE_WHITE_K != 0
    }

    #[inline]
    #[must_use]
    pub const fn white_queenside(self) -> bool {
        self.0 & CASTLE_WHITE_Q != 0
    }

    #[inline]
    #[must_use]
    pub const fn black_kingside(self) -> bool {
        self.0 & CASTLE_BLACK_K != 0
    }

    #[inline]
    #[must_use]
    pub const fn black_queenside(self) -> bool {
        self.0 & CASTLE_BLACK_Q != 0
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub(crate) fn set(&mut self, flag: u8) {
        self.0 |= flag;
    }

    /// Keep only the rights present in `mask`
    #[inline]
    pub(crate) fn retain(&mut self, mask: u8) {
        self.0 &= mask;
    }
}

impl Default for CastlingRights {
    fn default() -> Self {
        CastlingRights::all()
    }
}

impl std::fmt::Display for CastlingRights {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "-");
        }
        if self.white_kingside() {
            write!(f, "K")?;
        }
        if self.white_queenside() {
            write!(f, "Q")?;
        }
        if self.black_kingside() {
            write!(f, "k")?;
        }
        if self.black_queenside() {
            write!(f, "q")?;
        }
        Ok(())
    }
}

/// Per-square masks ANDed into the rights whenever a move touches the square.
/// Moving the e1 king strips both White rights; moving or capturing the a8
/// rook strips Black's queenside right; most squares leave rights alone.
const CASTLE_RIGHTS_MASK: [u8; 64] = {
    let mut table = [ALL_CASTLING_RIGHTS; 64];
    table[0] = ALL_CASTLING_RIGHTS & !CASTLE_WHITE_Q; // a1
    table[4] = ALL_CASTLING_RIGHTS & !(CASTLE_WHITE_K | CASTLE_WHITE_Q); // e1
    table[7] = ALL_CASTLING_RIGHTS & !CASTLE_WHITE_K; // h1
    table[56] = ALL_CASTLING_RIGHTS & !CASTLE_BLACK_Q; // a8
    table[60] = ALL_CASTLING_RIGHTS & !(CASTLE_BLACK_K | CASTLE_BLACK_Q); // e8
    table[63] = ALL_CASTLING_RIGHTS & !CASTLE_BLACK_K; // h8
    table
};

#[inline]
pub(crate) fn castle_rights_mask(sq: Square) -> u8 {
    CASTLE_RIGHTS_MASK[sq.index().as_usize()]
}
