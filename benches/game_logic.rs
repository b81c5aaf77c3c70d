use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{Board, Engine, Piece};
use blockfall::types::PieceKind;

fn bench_tick(c: &mut Criterion) {
    let mut engine = Engine::new(12345);

    c.bench_function("engine_tick", |b| {
        b.iter(|| {
            if engine.is_game_over() {
                engine = Engine::new(12345);
            }
            black_box(engine.tick());
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for y in 16..20 {
                board.fill_row(y);
            }
            black_box(board.clear_complete_lines());
        })
    });
}

fn bench_can_place(c: &mut Criterion) {
    let board = Board::from_rows(&["#.#.#.#.#.", "##.##.##.#", "#########."]);
    let piece = Piece::spawn(PieceKind::T);

    c.bench_function("can_place", |b| {
        b.iter(|| black_box(board.can_place(black_box(&piece), black_box(3), black_box(15))))
    });
}

fn bench_move(c: &mut Criterion) {
    let mut engine = Engine::new(12345);

    c.bench_function("move_left_right", |b| {
        b.iter(|| {
            engine.move_left();
            engine.move_right();
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut engine = Engine::new(12345);

    c.bench_function("rotate", |b| {
        b.iter(|| {
            black_box(engine.rotate());
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_can_place,
    bench_move,
    bench_rotate
);
criterion_main!(benches);
