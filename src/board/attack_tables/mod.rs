//! Precomputed attack lookups.
//!
//! Sliding pieces use Hyperbola Quintessence, the branch-free `o^(o-2r)`
//! trick with a byteswap for the reverse ray. Ranks do not byteswap cleanly,
//! so horizontal attacks come from a small 512-entry lookup instead.

mod tables;

pub(crate) use tables::{KING_ATTACKS, KNIGHT_ATTACKS, PAWN_ATTACKS};

use once_cell::sync::Lazy;

use super::types::{Bitboard, SquareIdx};

const FILE_A: u64 = 0x0101010101010101;

/// Full diagonal (southwest to northeast) through each square
static DIAG_MASKS: Lazy<[u64; 64]> = Lazy::new(|| {
    let mut masks = [0u64; 64];
    for (sq, slot) in masks.iter_mut().enumerate() {
        let rank = (sq / 8) as isize;
        let file = (sq % 8) as isize;
        let mut mask = 0u64;
        let (mut r, mut f) = (rank, file);
        while r < 8 && f < 8 {
            mask |= 1u64 << (r * 8 + f);
            r += 1;
            f += 1;
        }
        let (mut r, mut f) = (rank - 1, file - 1);
        while r >= 0 && f >= 0 {
            mask |= 1u64 << (r * 8 + f);
            r -= 1;
            f -= 1;
        }
        *slot = mask;
    }
    masks
});

/// Full anti-diagonal (northwest to southeast) through each square
static ANTI_MASKS: Lazy<[u64; 64]> = Lazy::new(|| {
    let mut masks = [0u64; 64];
    for (sq, slot) in masks.iter_mut().enumerate() {
        let rank = (sq / 8) as isize;
        let file = (sq % 8) as isize;
        let mut mask = 0u64;
        let (mut r, mut f) = (rank, file);
        while r < 8 && f >= 0 {
            mask |= 1u64 << (r * 8 + f);
            r += 1;
            f -= 1;
        }
        let (mut r, mut f) = (rank - 1, file + 1);
        while r >= 0 && f < 8 {
            mask |= 1u64 << (r * 8 + f);
            r -= 1;
            f += 1;
        }
        *slot = mask;
    }
    masks
});

/// Full file through each square
static FILE_MASKS: Lazy<[u64; 64]> = Lazy::new(|| {
    let mut masks = [0u64; 64];
    for (sq, slot) in masks.iter_mut().enumerate() {
        *slot = FILE_A << (sq % 8);
    }
    masks
});

/// Rank attacks indexed by `8 * inner_occupancy + file`, computed on rank 1.
/// Only the six inner files matter for blocking, hence the 6-bit occupancy.
static RANK_ATTACKS: Lazy<[u64; 512]> = Lazy::new(|| {
    let mut attacks = [0u64; 512];
    for occ_6bit in 0..64 {
        for file in 0..8 {
            let mut attack = 0u64;
            for f in (file + 1)..8 {
                attack |= 1u64 << f;
                if (1..=6).contains(&f) && (occ_6bit & (1 << (f - 1))) != 0 {
                    break;
                }
            }
            for f in (0..file).rev() {
                attack |= 1u64 << f;
                if (1..=6).contains(&f) && (occ_6bit & (1 << (f - 1))) != 0 {
                    break;
                }
            }
            attacks[8 * occ_6bit + file] = attack;
        }
    }
    attacks
});

/// One ray pair along `mask` via o^(o-2r), byteswapped for the reverse ray
#[inline(always)]
fn hyp_quint(occupied: u64, mask: u64, square: usize) -> u64 {
    let piece_bit = 1u64 << square;
    let forward = occupied & mask;
    let backward = forward.swap_bytes();
    let forward_attacks = forward.wrapping_sub(piece_bit.wrapping_mul(2));
    let backward_attacks = backward
        .wrapping_sub(piece_bit.swap_bytes().wrapping_mul(2))
        .swap_bytes();
    (forward_attacks ^ backward_attacks) & mask
}

#[inline(always)]
fn rank_attacks(occupied: u64, square: usize) -> u64 {
    let rank = square / 8;
    let file = square % 8;
    let rank_occ = occupied >> (rank * 8);
    let occ_6bit = ((rank_occ >> 1) & 63) as usize;
    RANK_ATTACKS[8 * occ_6bit + file] << (rank * 8)
}

/// Squares a bishop on `sq` attacks given the occupancy
#[inline]
#[must_use]
pub(crate) fn bishop_attacks(sq: SquareIdx, occupied: Bitboard) -> Bitboard {
    let sq = sq.as_usize();
    Bitboard(
        hyp_quint(occupied.0, DIAG_MASKS[sq], sq) | hyp_quint(occupied.0, ANTI_MASKS[sq], sq),
    )
}

/// Squares a rook on `sq` attacks given the occupancy
#[inline]
#[must_use]
pub(crate) fn rook_attacks(sq: SquareIdx, occupied: Bitboard) -> Bitboard {
    let idx = sq.as_usize();
    Bitboard(hyp_quint(occupied.0, FILE_MASKS[idx], idx) | rank_attacks(occupied.0, idx))
}

/// Squares a queen on `sq` attacks given the occupancy
#[inline]
#[must_use]
pub(crate) fn queen_attacks(sq: SquareIdx, occupied: Bitboard) -> Bitboard {
    Bitboard(bishop_attacks(sq, occupied).0 | rook_attacks(sq, occupied).0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const E4: SquareIdx = SquareIdx(28);

    #[test]
    fn test_rook_attacks_empty_board() {
        let attacks = rook_attacks(E4, Bitboard::EMPTY);
        let expected_rank = 0xFFu64 << 24;
        let expected_file = FILE_A << 4;
        let expected = (expected_rank | expected_file) & !(1u64 << 28);
        assert_eq!(attacks.0, expected);
    }

    #[test]
    fn test_bishop_attacks_empty_board() {
        let attacks = bishop_attacks(E4, Bitboard::EMPTY);
        assert!(attacks.0 & (1u64 << 1) != 0); // b1
        assert!(attacks.0 & (1u64 << 55) != 0); // h7
        assert!(attacks.0 & (1u64 << 7) != 0); // h1
        assert!(attacks.0 & (1u64 << 56) != 0); // a8
        assert!(attacks.0 & (1u64 << 28) == 0); // not e4 itself
    }

    #[test]
    fn test_rook_attacks_with_blockers() {
        // blockers on e6 and c4
        let blockers = Bitboard((1u64 << 44) | (1u64 << 26));
        let attacks = rook_attacks(E4, blockers);
        assert!(attacks.0 & (1u64 << 44) != 0); // e6 capturable
        assert!(attacks.0 & (1u64 << 52) == 0); // e7 blocked
        assert!(attacks.0 & (1u64 << 26) != 0); // c4 capturable
        assert!(attacks.0 & (1u64 << 25) == 0); // b4 blocked
    }

    #[test]
    fn test_bishop_attacks_with_blockers() {
        let blockers = Bitboard(1u64 << 46); // g6
        let attacks = bishop_attacks(E4, blockers);
        assert!(attacks.0 & (1u64 << 46) != 0); // g6 capturable
        assert!(attacks.0 & (1u64 << 55) == 0); // h7 blocked
    }

    #[test]
    fn test_queen_is_rook_plus_bishop() {
        for sq in 0..64 {
            for occ in [0u64, 0xFF00FF00FF00FF00, 0x00FF00FF00FF00FF] {
                let sq = SquareIdx(sq);
                let occ = Bitboard(occ);
                assert_eq!(
                    queen_attacks(sq, occ).0,
                    rook_attacks(sq, occ).0 | bishop_attacks(sq, occ).0
                );
            }
        }
    }
}
