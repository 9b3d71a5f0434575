//! Zobrist hashing keys.
//!
//! Every position maps to a 64-bit hash built by XORing one key per piece
//! placement, one per castling right, one for the en passant target and one
//! for the side to move. The keys are drawn from a seeded RNG so that
//! independently constructed key sets agree, which lets hashes computed by
//! different boards index into a shared cache.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::{Color, Piece, Square};

const DEFAULT_SEED: u64 = 1234567890;

/// Random keys for Zobrist hashing.
pub struct ZobristKeys {
    piece: [[[u64; 64]; 6]; 2],
    castling: [u64; 4],
    en_passant: [u64; 64],
    white_to_move: u64,
}

impl ZobristKeys {
    /// Generate a key set from an explicit seed
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);

        let mut piece = [[[0u64; 64]; 6]; 2];
        for color in &mut piece {
            for kind in color.iter_mut() {
                for key in kind.iter_mut() {
                    *key = rng.gen();
                }
            }
        }

        let mut castling = [0u64; 4];
        for key in &mut castling {
            *key = rng.gen();
        }

        let mut en_passant = [0u64; 64];
        for key in &mut en_passant {
            *key = rng.gen();
        }

        ZobristKeys {
            piece,
            castling,
            en_passant,
            white_to_move: rng.gen(),
        }
    }

    /// Key for a piece of the given color on the given square
    #[inline]
    #[must_use]
    pub fn piece_key(&self, color: Color, piece: Piece, sq: Square) -> u64 {
        self.piece[color.index()][piece.index()][sq.index().as_usize()]
    }

    /// Key for one castling right bit (0..4)
    #[inline]
    #[must_use]
    pub(crate) fn castling_key(&self, right: usize) -> u64 {
        self.castling[right]
    }

    /// Key for the en passant target square
    #[inline]
    #[must_use]
    pub fn en_passant_key(&self, sq: Square) -> u64 {
        self.en_passant[sq.index().as_usize()]
    }

    /// Key toggled when White is to move
    #[inline]
    #[must_use]
    pub fn side_key(&self) -> u64 {
        self.white_to_move
    }
}

impl Default for ZobristKeys {
    fn default() -> Self {
        ZobristKeys::from_seed(DEFAULT_SEED)
    }
}
