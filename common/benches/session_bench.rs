use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use std::sync::Arc;
use common::games::{Difficulty, GameConfig, GameMode, GridSize, PiMode, SequenceSession, SessionRng};
use common::scores::{ScoreKey, ScoreStore};
use common::storage::MemoryStorage;

const LEVELS: usize = 50;

fn play_perfect_run(config: GameConfig, seed: u64) -> usize {
    let mut session = SequenceSession::new(config, SessionRng::new(seed)).unwrap();
    for _ in 1..LEVELS {
        session.finish_showing().unwrap();
        let target = session.target().to_vec();
        for element in target {
            session.submit(element).unwrap();
        }
        session.advance().unwrap();
    }
    session.level()
}

fn bench_free_typing() -> u32 {
    let config = GameConfig {
        mode: GameMode::Pi,
        pi_mode: Some(PiMode::Free),
        difficulty: Difficulty::Normal,
        grid_size: GridSize::Three,
    };
    let mut session = SequenceSession::new(config, SessionRng::new(0)).unwrap();
    for &digit in common::games::pi::prefix(200).iter() {
        session.submit(digit).unwrap();
    }
    session.finish_run().unwrap();
    session.score().unwrap_or(0)
}

fn bench_score_updates() {
    let mut store = ScoreStore::new(Arc::new(MemoryStorage::new()));
    store.load();
    let keys = ScoreKey::all();
    for score in 0..200u32 {
        let key = keys[score as usize % keys.len()];
        store.update(key, score);
    }
}

fn session_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("session");

    let colors = GameConfig {
        mode: GameMode::Colors,
        pi_mode: None,
        difficulty: Difficulty::Hard,
        grid_size: GridSize::Five,
    };
    group.bench_function("colors_50_levels", |b| {
        b.iter(|| play_perfect_run(black_box(colors), 42))
    });

    let pi = GameConfig {
        mode: GameMode::Pi,
        pi_mode: Some(PiMode::Sequence),
        difficulty: Difficulty::Hard,
        grid_size: GridSize::Three,
    };
    group.bench_function("pi_50_levels", |b| {
        b.iter(|| play_perfect_run(black_box(pi), 0))
    });

    group.bench_function("pi_free_200_digits", |b| {
        b.iter(bench_free_typing)
    });

    group.bench_function("score_updates", |b| {
        b.iter(bench_score_updates)
    });

    group.finish();
}

criterion_group!(benches, session_bench);
criterion_main!(benches);
