use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tetrissy::core::{Board, GameState, PieceQueue};
use tetrissy::types::{GameAction, GameMode, PieceKind, Point};

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(GameMode::Chaos, 12345);

    c.bench_function("game_tick", |b| {
        b.iter(|| {
            if state.game_over() {
                state.restart();
            }
            black_box(state.tick());
            state.take_events();
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for y in 16..20 {
                for x in 0..10 {
                    board.set_cell(Point::new(x, y), Some(PieceKind::I));
                }
            }
            black_box(board.clear_full_rows());
        })
    });
}

fn bench_hard_drop(c: &mut Criterion) {
    let mut state = GameState::new(GameMode::Zen, 12345);

    c.bench_function("hard_drop", |b| {
        b.iter(|| {
            black_box(state.apply_action(GameAction::HardDrop));
            state.take_events();
        })
    });
}

fn bench_bag_draw(c: &mut Criterion) {
    let mut queue = PieceQueue::from_seed(12345);

    c.bench_function("bag_draw", |b| b.iter(|| black_box(queue.draw())));
}

fn bench_snapshot(c: &mut Criterion) {
    let state = GameState::new(GameMode::Marathon, 12345);

    c.bench_function("snapshot", |b| b.iter(|| black_box(state.snapshot())));
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_hard_drop,
    bench_bag_draw,
    bench_snapshot
);
criterion_main!(benches);
