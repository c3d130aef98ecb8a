//! Benchmarks for puzzle generation.
//!
//! - **`generator_english`**: Generates an English puzzle from a fixed seed,
//!   covering RNG setup and sampling all 81 faces.
//! - **`daily_challenge`**: Derives a daily challenge seed and generates its
//!   puzzle, including the SHA-256 label hash.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench generator
//! ```

use std::{hint, str::FromStr as _, time::Duration};

use criterion::{
    BatchSize, BenchmarkId, Criterion, PlottingBackend, criterion_group, criterion_main,
};
use isowords_core::Language;
use isowords_generator::{DailyChallenge, GameMode, PuzzleGenerator, PuzzleSeed};

const SEEDS: [&str; 3] = [
    "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1",
    "a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3",
    "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef",
];

fn bench_generator_english(c: &mut Criterion) {
    let generator = PuzzleGenerator::new(Language::English);

    for (i, seed) in SEEDS.into_iter().enumerate() {
        let seed = PuzzleSeed::from_str(seed).unwrap();
        c.bench_with_input(
            BenchmarkId::new("generator_english", format!("seed_{i}")),
            &seed,
            |b, seed| {
                b.iter_batched(
                    || hint::black_box(*seed),
                    |seed| generator.generate_with_seed(seed),
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

fn bench_daily_challenge(c: &mut Criterion) {
    let challenge = DailyChallenge {
        date: "2026-10-17".parse().unwrap(),
        mode: GameMode::Timed,
        language: Language::English,
    };
    c.bench_function("daily_challenge", |b| {
        b.iter(|| hint::black_box(challenge).generate());
    });
}

criterion_group!(
    name = benches;
    config =
        Criterion::default()
            .plotting_backend(PlottingBackend::Plotters)
            .measurement_time(Duration::from_secs(5));
    targets =
        bench_generator_english,
        bench_daily_challenge
);
criterion_main!(benches);
