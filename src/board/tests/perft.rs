//! Perft node counts against published reference values.

use crate::board::{Board, START_FEN};

fn assert_perft(fen: &str, expected: &[u64]) {
    let board = Board::try_from_fen(fen).unwrap();
    for (depth, &nodes) in expected.iter().enumerate() {
        let depth = depth as u32 + 1;
        assert_eq!(
            board.perft(depth),
            nodes,
            "perft({depth}) mismatch for {fen}"
        );
    }
}

#[test]
fn test_perft_startpos() {
    assert_perft(START_FEN, &[20, 400, 8_902]);
}

#[test]
fn test_perft_kiwipete() {
    let fen = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
    assert_perft(fen, &[48, 2_039]);
}

#[test]
fn test_perft_endgame() {
    let fen = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";
    assert_perft(fen, &[14, 191, 2_812]);
}

#[test]
fn test_perft_promotion_heavy() {
    let fen = "n1n5/PPPk4/8/8/8/8/4Kppp/5N1N b - - 0 1";
    assert_perft(fen, &[24, 496, 9_483]);
}

#[test]
fn test_perft_mirrored_position() {
    // color-mirrored positions must count identically
    let fen = "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1";
    let mirrored = "r2q1rk1/pP1p2pp/Q4n2/bbp1p3/Np6/1B3NBn/pPPP1PPP/R3K2R b KQ - 0 1";
    assert_perft(fen, &[6, 264, 9_467]);
    assert_perft(mirrored, &[6, 264, 9_467]);
}
