use criterion::{black_box, criterion_group, criterion_main, Criterion};
use grid_arcade::core::{GridGame, GridSnapshot, MazeGame, SnakeGame, TicTacToe};
use grid_arcade::term::{FrameBuffer, GridView, Viewport};
use grid_arcade::types::{Direction, Intent};

fn bench_snake_tick(c: &mut Criterion) {
    let mut game = SnakeGame::new(40, 30, 12345);
    let mut step = 0usize;

    c.bench_function("snake_tick_40x30", |b| {
        b.iter(|| {
            if game.status().is_terminal() {
                game.reset(40, 30);
            }
            // Circle in place so the snake survives long stretches.
            game.set_intent(Intent::Steer(
                [Direction::Down, Direction::Left, Direction::Up, Direction::Right][step % 4],
            ));
            step += 1;
            black_box(game.tick());
        })
    });
}

fn bench_tictactoe_commit(c: &mut Criterion) {
    c.bench_function("tictactoe_full_game", |b| {
        b.iter(|| {
            let mut game = TicTacToe::new();
            for _ in 0..9 {
                game.set_intent(Intent::Commit);
                game.tick();
                game.set_intent(Intent::Steer(Direction::Right));
                game.tick();
            }
            black_box(game.status())
        })
    });
}

fn bench_maze_generation(c: &mut Criterion) {
    let mut game = MazeGame::new(64, 64, 7);

    c.bench_function("maze_reset_64x64", |b| {
        b.iter(|| {
            game.reset(black_box(64), black_box(64));
        })
    });
}

fn bench_snapshot_into(c: &mut Criterion) {
    let game = MazeGame::new(64, 64, 7);
    let mut snap = GridSnapshot::default();

    c.bench_function("snapshot_into_64x64", |b| {
        b.iter(|| {
            game.snapshot_into(black_box(&mut snap));
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let snap = SnakeGame::new(40, 30, 1).snapshot();
    let view = GridView::default();
    let viewport = Viewport::new(120, 40);
    let mut fb = FrameBuffer::new(120, 40);

    c.bench_function("render_snake_40x30", |b| {
        b.iter(|| {
            view.render_into(black_box(&snap), viewport, &mut fb);
        })
    });
}

criterion_group!(
    benches,
    bench_snake_tick,
    bench_tictactoe_commit,
    bench_maze_generation,
    bench_snapshot_into,
    bench_render
);
criterion_main!(benches);
