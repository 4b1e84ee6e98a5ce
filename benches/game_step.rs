use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_breakout::core::{BrickGrid, GameState, NullSink, SimpleRng};
use tui_breakout::term::{GameView, Viewport};
use tui_breakout::types::GameAction;

fn bench_step(c: &mut Criterion) {
    let mut game = GameState::new(12345, 0);
    game.apply_action(GameAction::Launch);
    let mut sink = NullSink;

    c.bench_function("step_in_flight", |b| {
        b.iter(|| {
            if game.outcome().is_some() {
                game = GameState::new(12345, 0);
                game.apply_action(GameAction::Launch);
            }
            black_box(game.step(&mut sink));
        })
    });
}

fn bench_grid_generate(c: &mut Criterion) {
    let mut seed: u32 = 0;

    c.bench_function("grid_generate", |b| {
        b.iter(|| {
            seed = seed.wrapping_add(1);
            let mut rng = SimpleRng::new(black_box(seed));
            BrickGrid::generate(&mut rng)
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let game = GameState::new(12345, 0);
    let view = GameView::default();

    c.bench_function("render_80x24", |b| {
        b.iter(|| view.render(black_box(&game), Viewport::new(80, 24)))
    });
}

criterion_group!(benches, bench_step, bench_grid_generate, bench_render);
criterion_main!(benches);
