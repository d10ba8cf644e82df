use std::hint::black_box;
use std::time::Duration;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use othello_core::board::Board;
use othello_core::disc::Disc;
use othello_core::perft::{perft, perft_root};

const REFERENCE_COUNTS: &[(u32, u64)] = &[(7, 55_092), (8, 390_216), (9, 3_005_320)];

const ENDGAME: &str = "XXXXXXXO\
                       XOOXXXXO\
                       XOXXXOXO\
                       XOOXOXXO\
                       XOXOOOXO\
                       XOOOOOOO\
                       X-X-O---\
                       X--X----";

fn perft_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft_root");
    group.sample_size(10);
    group.measurement_time(Duration::from_secs(8));

    for &(depth, expected) in REFERENCE_COUNTS {
        assert_eq!(
            perft_root(depth),
            expected,
            "reference node count mismatch at depth {depth}"
        );

        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            b.iter(|| black_box(perft_root(black_box(depth))));
        });
    }

    group.finish();
}

fn perft_endgame_benchmark(c: &mut Criterion) {
    let mut board = Board::from_string(ENDGAME, Disc::Black).unwrap();

    c.bench_function("perft_endgame", |b| {
        b.iter(|| black_box(perft(&mut board, black_box(12))))
    });
}

criterion_group!(benches, perft_benchmark, perft_endgame_benchmark);
criterion_main!(benches);
