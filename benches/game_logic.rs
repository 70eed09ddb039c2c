use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{generate_bag, Board, GameState, SimpleRng};
use blockfall::term::{GameView, Viewport};
use blockfall::types::{BoardSize, Color, Command, Direction};

const SIZE: BoardSize = BoardSize::new(12, 24);

fn bench_tick(c: &mut Criterion) {
    let state = GameState::start(SIZE, 12345);

    c.bench_function("reduce_tick", |b| {
        b.iter(|| black_box(state.reduce(black_box(Command::Tick))))
    });
}

fn bench_hard_drop_and_lock(c: &mut Criterion) {
    let state = GameState::start(SIZE, 12345);

    c.bench_function("hard_drop_then_lock", |b| {
        b.iter(|| {
            black_box(
                state
                    .reduce(black_box(Command::hard_drop()))
                    .reduce(Command::Tick),
            )
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    let mut board = Board::new(SIZE);
    for y in 20..24 {
        for x in 0..12 {
            board.set(x, y, Some(Color(0xFF00FF00)));
        }
    }

    c.bench_function("clear_4_lines", |b| {
        b.iter(|| black_box(board.clone().clear_completed_rows()))
    });
}

fn bench_generate_bag(c: &mut Criterion) {
    let mut rng = SimpleRng::new(12345);

    c.bench_function("generate_bag", |b| {
        b.iter(|| black_box(generate_bag(SIZE, &mut rng)))
    });
}

fn bench_move(c: &mut Criterion) {
    let state = GameState::start(SIZE, 12345);

    c.bench_function("reduce_move_left", |b| {
        b.iter(|| black_box(state.reduce(black_box(Command::step(Direction::Left)))))
    });
}

fn bench_rotate(c: &mut Criterion) {
    let state = GameState::start(SIZE, 12345);

    c.bench_function("reduce_rotate", |b| {
        b.iter(|| black_box(state.reduce(black_box(Command::Rotate))))
    });
}

fn bench_render(c: &mut Criterion) {
    let snap = GameState::start(SIZE, 12345).snapshot();
    let view = GameView::default();
    let mut fb = view.render(&snap, Viewport::new(80, 30));

    c.bench_function("render_snapshot", |b| {
        b.iter(|| view.render_into(black_box(&snap), Viewport::new(80, 30), &mut fb))
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_hard_drop_and_lock,
    bench_line_clear,
    bench_generate_bag,
    bench_move,
    bench_rotate,
    bench_render
);
criterion_main!(benches);
