use criterion::{black_box, criterion_group, criterion_main, Criterion};
use triple_tiles::core::{generate_board, wash, GameState, SimpleRng, TileIds};
use triple_tiles::sim::play_game;

fn bench_generate(c: &mut Criterion) {
    let mut rng = SimpleRng::new(12345);
    let mut ids = TileIds::new();

    c.bench_function("generate_level_50", |b| {
        b.iter(|| generate_board(black_box(50), &mut rng, &mut ids))
    });
}

fn bench_analyze_cover(c: &mut Criterion) {
    let mut rng = SimpleRng::new(12345);
    let mut ids = TileIds::new();
    let mut board = generate_board(50, &mut rng, &mut ids);

    c.bench_function("analyze_cover_600_tiles", |b| {
        b.iter(|| {
            board.analyze_cover();
            black_box(board.covered_count())
        })
    });
}

fn bench_wash(c: &mut Criterion) {
    let mut rng = SimpleRng::new(12345);
    let mut ids = TileIds::new();
    let mut board = generate_board(50, &mut rng, &mut ids);

    c.bench_function("wash_level_50", |b| {
        b.iter(|| {
            wash(&mut board, 50, &mut rng);
            board.analyze_cover();
        })
    });
}

fn bench_click_settle(c: &mut Criterion) {
    let mut state = GameState::new_at_level(12345, 20);

    c.bench_function("click_and_settle", |b| {
        b.iter(|| {
            let idx = state.board().clickable_indices()[0];
            state.click_tile(idx);
            state.settle();
            state.undo();
        })
    });
}

fn bench_autoplay(c: &mut Criterion) {
    c.bench_function("autoplay_level_1", |b| {
        b.iter(|| {
            let mut state = GameState::new(black_box(7));
            play_game(&mut state, 200)
        })
    });
}

criterion_group!(
    benches,
    bench_generate,
    bench_analyze_cover,
    bench_wash,
    bench_click_settle,
    bench_autoplay
);
criterion_main!(benches);
