//! Leaper attack tables for knights, kings and pawns.

use once_cell::sync::Lazy;

pub(crate) static KNIGHT_ATTACKS: Lazy<[u64; 64]> = Lazy::new(|| {
    let deltas = [
        (2, 1),
        (1, 2),
        (-1, 2),
        (-2, 1),
        (-2, -1),
        (-1, -2),
        (1, -2),
        (2, -1),
    ];
    leaper_table(&deltas)
});

pub(crate) static KING_ATTACKS: Lazy<[u64; 64]> = Lazy::new(|| {
    let deltas = [
        (1, 0),
        (-1, 0),
        (0, 1),
        (0, -1),
        (1, 1),
        (1, -1),
        (-1, 1),
        (-1, -1),
    ];
    leaper_table(&deltas)
});

/// `PAWN_ATTACKS[color][sq]` is the set of squares a pawn of `color` attacks
/// from `sq`. White pawns attack up the board, Black pawns down.
pub(crate) static PAWN_ATTACKS: Lazy<[[u64; 64]; 2]> = Lazy::new(|| {
    let white = leaper_table(&[(1, -1), (1, 1)]);
    let black = leaper_table(&[(-1, -1), (-1, 1)]);
    [white, black]
});

fn leaper_table(deltas: &[(isize, isize)]) -> [u64; 64] {
    let mut attacks = [0u64; 64];
    for (sq, slot) in attacks.iter_mut().enumerate() {
        let rank = (sq / 8) as isize;
        let file = (sq % 8) as isize;
        let mut mask = 0u64;
        for &(dr, df) in deltas {
            let nr = rank + dr;
            let nf = file + df;
            if (0..8).contains(&nr) && (0..8).contains(&nf) {
                mask |= 1u64 << (nr * 8 + nf);
            }
        }
        *slot = mask;
    }
    attacks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_knight_attack_counts() {
        assert_eq!(KNIGHT_ATTACKS[0].count_ones(), 2); // a1
        assert_eq!(KNIGHT_ATTACKS[28].count_ones(), 8); // e4
        assert_eq!(KNIGHT_ATTACKS[1].count_ones(), 3); // b1
    }

    #[test]
    fn test_king_attack_counts() {
        assert_eq!(KING_ATTACKS[0].count_ones(), 3); // a1
        assert_eq!(KING_ATTACKS[28].count_ones(), 8); // e4
        assert_eq!(KING_ATTACKS[4].count_ones(), 5); // e1
    }

    #[test]
    fn test_pawn_attacks_direction() {
        // White pawn on e2 attacks d3 and f3
        let white_e2 = PAWN_ATTACKS[0][12];
        assert_eq!(white_e2, (1u64 << 19) | (1u64 << 21));
        // Black pawn on e7 attacks d6 and f6
        let black_e7 = PAWN_ATTACKS[1][52];
        assert_eq!(black_e7, (1u64 << 43) | (1u64 << 45));
    }

    #[test]
    fn test_pawn_attacks_no_wraparound() {
        // White pawn on a2 attacks only b3
        assert_eq!(PAWN_ATTACKS[0][8].count_ones(), 1);
        // White pawn on rank 8 attacks nothing
        assert_eq!(PAWN_ATTACKS[0][60], 0);
    }
}
