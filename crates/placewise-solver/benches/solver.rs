//! End-to-end solver benchmarks.
//!
//! Measures `solve` on representative puzzles: one finished by
//! propagation alone, one that forces backtracking, and the blank grid.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench solver
//! ```

use std::hint;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use placewise_solver::solve;

const EASY: &str =
    "003020600900305001001806400008102900700000008006708200002609500800203009005010300";
const HARD: &str =
    "4.....8.5.3..........7......2.....6.....8.4......1.......6.3.7.5..2.....1.4......";

fn bench_solve(c: &mut Criterion) {
    let blank = ".".repeat(81);
    let puzzles = [
        ("propagation_only", EASY),
        ("backtracking", HARD),
        ("blank", blank.as_str()),
    ];

    let mut group = c.benchmark_group("solve");
    for (param, puzzle) in puzzles {
        group.bench_with_input(BenchmarkId::from_parameter(param), puzzle, |b, puzzle| {
            b.iter(|| {
                let solution = solve(hint::black_box(puzzle)).unwrap();
                hint::black_box(solution)
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_solve);
criterion_main!(benches);
