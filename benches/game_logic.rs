use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_blockfall::core::{clear_lines, collides, shape_of, Board, GameState};
use tui_blockfall::types::{GameConfig, PieceKind};

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(GameConfig::default());
    state.start();

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| {
            if state.game_over() {
                state.reset();
            }
            state.tick(black_box(16));
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::default();
            for row in 14..18 {
                for col in 0..10 {
                    board.set(row, col);
                }
            }
            clear_lines(&mut board, black_box(10))
        })
    });
}

fn bench_collides(c: &mut Criterion) {
    let mut board = Board::default();
    for col in (0..10).step_by(2) {
        board.set(17, col);
    }
    let shape = shape_of(PieceKind::T);

    c.bench_function("collides", |b| {
        b.iter(|| collides(&board, black_box(&shape), black_box(3), black_box(15)))
    });
}

fn bench_piece_spawn(c: &mut Criterion) {
    let mut state = GameState::new(GameConfig::default());

    c.bench_function("spawn_piece", |b| {
        b.iter(|| {
            state.spawn();
        })
    });
}

fn bench_move(c: &mut Criterion) {
    let mut state = GameState::new(GameConfig::default());

    c.bench_function("move", |b| {
        b.iter(|| {
            state.move_by(1, 0);
            state.move_by(-1, 0);
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut state = GameState::new(GameConfig::default());

    c.bench_function("rotate", |b| {
        b.iter(|| {
            state.rotate();
        })
    });
}

fn bench_hard_drop(c: &mut Criterion) {
    let mut state = GameState::new(GameConfig::default());

    c.bench_function("hard_drop", |b| {
        b.iter(|| {
            if state.game_over() {
                state.reset();
            }
            state.hard_drop()
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_collides,
    bench_piece_spawn,
    bench_move,
    bench_rotate,
    bench_hard_drop
);
criterion_main!(benches);
