//! Move generation and execution throughput.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chameleon::core::{Difficulty, GameConfig};
use chameleon::engine::GameEngine;
use chameleon::persistence::codec;

fn engine(size: usize) -> GameEngine {
    GameEngine::new(GameConfig::new().with_board_size(size)).unwrap()
}

fn bench_valid_steps(c: &mut Criterion) {
    let mut group = c.benchmark_group("valid_steps");
    for difficulty in Difficulty::ALL {
        let size = difficulty.board_size();
        let engine = engine(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &engine, |b, engine| {
            b.iter(|| black_box(engine.valid_steps()))
        });
    }
    group.finish();
}

fn bench_playout(c: &mut Criterion) {
    let mut group = c.benchmark_group("playout_40_moves");
    for difficulty in Difficulty::ALL {
        let size = difficulty.board_size();
        group.bench_function(BenchmarkId::from_parameter(size), |b| {
            b.iter(|| {
                let mut engine = engine(size);
                for _ in 0..40 {
                    let steps = engine.valid_steps();
                    let Some(&(src, dest)) = steps.first() else {
                        break;
                    };
                    black_box(engine.step(src, dest).unwrap());
                }
                engine
            })
        });
    }
    group.finish();
}

fn bench_codec(c: &mut Criterion) {
    let engine = engine(Difficulty::Hard.board_size());
    let bytes = codec::encode(engine.board());

    c.bench_function("encode_7x7", |b| b.iter(|| codec::encode(black_box(engine.board()))));
    c.bench_function("decode_7x7", |b| b.iter(|| codec::decode(black_box(&bytes)).unwrap()));
}

criterion_group!(benches, bench_valid_steps, bench_playout, bench_codec);
criterion_main!(benches);
