use std::time::Duration;

use criterion::{Criterion, criterion_group, criterion_main};
use snake_engine::{GameEngine, GamePhase, SessionSettings};

fn run_ticks(grid_count: i32, initial_snake_length: usize, ticks: u32) {
    let settings = SessionSettings {
        grid_count,
        initial_snake_length,
        tick_interval: Duration::from_millis(1),
        seed: Some(42),
    };
    let mut engine = GameEngine::new(settings).unwrap();
    engine.start().unwrap();

    for _ in 0..ticks {
        if engine.phase() != GamePhase::Running {
            break;
        }
        engine.tick().unwrap();
        engine.take_events();
    }
}

fn bench_small_grid(c: &mut Criterion) {
    c.bench_function("tick_1000_grid_13", |b| {
        b.iter(|| run_ticks(13, 5, 1000));
    });
}

fn bench_large_grid_long_snake(c: &mut Criterion) {
    c.bench_function("tick_1000_grid_100_len_50", |b| {
        b.iter(|| run_ticks(100, 50, 1000));
    });
}

criterion_group!(benches, bench_small_grid, bench_large_grid_long_snake);
criterion_main!(benches);
