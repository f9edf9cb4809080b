//! Puzzle generation benchmarks.
//!
//! Fixed seeds keep the measurements reproducible while covering several
//! carving orders.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use nanpure_generator::{Generator, GeneratorOptions, GeneratorSeed};
use nanpure_solver::Grade;

const SEEDS: [[u8; 32]; 3] = [[1; 32], [64; 32], [200; 32]];

fn bench_with_clues(c: &mut Criterion) {
    for (i, seed) in SEEDS.into_iter().enumerate() {
        c.bench_with_input(
            BenchmarkId::new("with_clues_30", format!("seed_{i}")),
            &seed,
            |b, seed| {
                b.iter(|| {
                    Generator::with_seed(GeneratorSeed(black_box(*seed))).with_clues(30)
                });
            },
        );
    }
}

fn bench_by_grade_basic(c: &mut Criterion) {
    let options = GeneratorOptions {
        max_attempts: 200,
        ..GeneratorOptions::default()
    };
    c.bench_function("by_grade_basic", |b| {
        b.iter(|| {
            Generator::with_seed(GeneratorSeed(black_box(SEEDS[0])))
                .by_grade(Grade::Basic, &options)
        });
    });
}

criterion_group!(benches, bench_with_clues, bench_by_grade_basic);
criterion_main!(benches);
