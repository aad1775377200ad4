use criterion::{black_box, criterion_group, criterion_main, Criterion};

use snakes_ladders::core::BoardConfig;
use snakes_ladders::engine::{play_game, resolve_turn, RandomDice};

fn bench_build_standard_board(c: &mut Criterion) {
    let config = BoardConfig::standard();
    c.bench_function("build_standard_board", |b| {
        b.iter(|| black_box(&config).build().unwrap())
    });
}

fn bench_resolve_turn(c: &mut Criterion) {
    let board = BoardConfig::standard().build().unwrap();
    c.bench_function("resolve_turn_ladder", |b| {
        b.iter(|| resolve_turn(black_box(&board), black_box(0), black_box(2)))
    });
}

fn bench_full_game(c: &mut Criterion) {
    let board = BoardConfig::standard().build().unwrap();
    let mut seed = 0u64;
    c.bench_function("play_standard_game", |b| {
        b.iter(|| {
            seed = seed.wrapping_add(1);
            play_game(black_box(&board), RandomDice::seeded(seed))
                .run()
                .unwrap()
        })
    });
}

criterion_group!(
    benches,
    bench_build_standard_board,
    bench_resolve_turn,
    bench_full_game,
);
criterion_main!(benches);
