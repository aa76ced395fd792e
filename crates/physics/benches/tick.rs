use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use level::{GeneratorConfig, LevelGenerator};
use physics::{tick, Action, PhysParams, PlayerState};

fn bench_tick(c: &mut Criterion) {
    let level = LevelGenerator::new(GeneratorConfig::default()).unwrap().generate(7).unwrap();
    let params = PhysParams::default();

    c.bench_function("tick_noop", |b| {
        let mut player = PlayerState::spawn(&level);
        b.iter(|| {
            let outcome = tick(&player, Action::NoOp, &level, &params);
            player = if outcome.state.is_frozen() {
                PlayerState::spawn(&level)
            } else {
                outcome.state
            };
            black_box(outcome.collided)
        });
    });

    c.bench_function("tick_jumping", |b| {
        let mut player = PlayerState::spawn(&level);
        b.iter(|| {
            let outcome = tick(&player, Action::Jump, &level, &params);
            player = if outcome.state.is_frozen() {
                PlayerState::spawn(&level)
            } else {
                outcome.state
            };
            black_box(outcome.collided)
        });
    });
}

criterion_group!(benches, bench_tick);
criterion_main!(benches);
