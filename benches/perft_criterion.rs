use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use bitboard_chess::core::board::{Board, Color};
use bitboard_chess::core::fen::STARTPOS_FEN;
use bitboard_chess::engine::controller::perft;
use bitboard_chess::engine::search::{SearchConfig, Searcher};

struct BenchCase {
    name: &'static str,
    fen: &'static str,
    expected_nodes: &'static [u64],
}

const CASES: &[BenchCase] = &[
    BenchCase {
        name: "startpos",
        fen: STARTPOS_FEN,
        expected_nodes: &[20, 400, 8902],
    },
    BenchCase {
        name: "kiwipete",
        fen: "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        expected_nodes: &[48, 2039],
    },
    BenchCase {
        name: "endgame",
        fen: "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        expected_nodes: &[14, 191, 2812],
    },
];

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");
    group.measurement_time(Duration::from_secs(5));

    for case in CASES {
        let (board, color) = Board::from_fen(case.fen).expect("bench FEN parses");
        for (i, &expected) in case.expected_nodes.iter().enumerate() {
            let depth = i as u32 + 1;
            assert_eq!(perft(&board, color, depth), expected, "{} depth {}", case.name, depth);

            group.throughput(Throughput::Elements(expected));
            group.bench_with_input(BenchmarkId::new(case.name, depth), &depth, |b, &depth| {
                b.iter(|| perft(black_box(&board), color, depth))
            });
        }
    }
    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(10);

    let board = Board::startpos();
    let color = Color::White;
    for threads in [1, 8] {
        let config = SearchConfig { depth: 2, threads };
        group.bench_with_input(BenchmarkId::new("startpos_depth2", threads), &config, |b, &config| {
            let mut searcher = Searcher::new(config);
            b.iter(|| searcher.search(black_box(&board), color))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_perft, bench_search);
criterion_main!(benches);
