use criterion::{black_box, criterion_group, criterion_main, Criterion};

use chess_core::{Board, MoveCache};

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

fn bench_movegen(c: &mut Criterion) {
    let startpos = Board::new();
    let midgame = Board::try_from_fen(KIWIPETE).unwrap();

    c.bench_function("pseudo_legal_startpos", |b| {
        b.iter(|| black_box(&startpos).pseudo_legal_moves())
    });
    c.bench_function("legal_moves_startpos", |b| {
        b.iter(|| black_box(&startpos).generate_moves())
    });
    c.bench_function("legal_moves_midgame", |b| {
        b.iter(|| black_box(&midgame).generate_moves())
    });
}

fn bench_perft(c: &mut Criterion) {
    let startpos = Board::new();
    c.bench_function("perft_3_startpos", |b| {
        b.iter(|| black_box(&startpos).perft(3))
    });
}

fn bench_apply(c: &mut Criterion) {
    let board = Board::new();
    let mv = board.parse_move("e2e4").unwrap();
    c.bench_function("apply_move", |b| {
        b.iter(|| {
            let mut next = board.clone();
            next.apply_move(black_box(mv));
            next
        })
    });
}

fn bench_cache(c: &mut Criterion) {
    let board = Board::new();
    c.bench_function("legal_moves_cached_hit", |b| {
        let mut cache = MoveCache::new();
        let _ = board.legal_moves_cached(&mut cache);
        b.iter(|| board.legal_moves_cached(black_box(&mut cache)))
    });
}

criterion_group!(benches, bench_movegen, bench_perft, bench_apply, bench_cache);
criterion_main!(benches);
