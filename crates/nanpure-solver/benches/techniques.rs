//! Hint engine benchmarks.

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use nanpure_core::{Board, Candidates};
use nanpure_solver::{DEFAULT_MAX_STEPS, get_hint, solve_with_hints};

const EASY: &str =
    "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79";

fn bench_get_hint(c: &mut Criterion) {
    let board = Board::from_line(EASY);
    let candidates = Candidates::from_board(&board);

    c.bench_function("get_hint_first", |b| {
        b.iter(|| get_hint(black_box(&board), black_box(&candidates), None));
    });
}

fn bench_solve_with_hints(c: &mut Criterion) {
    let board = Board::from_line(EASY);

    c.bench_function("solve_with_hints_easy", |b| {
        b.iter(|| solve_with_hints(black_box(&board), DEFAULT_MAX_STEPS));
    });
}

criterion_group!(benches, bench_get_hint, bench_solve_with_hints);
criterion_main!(benches);
