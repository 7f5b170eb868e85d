use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use grid_arcade::core::{GridGame, GridSnapshot, MazeGame, SnakeGame, TicTacToe};
use grid_arcade::term::{FrameBuffer, GridView, Viewport};
use grid_arcade::types::{Direction, Intent};

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

// One test per binary: the counter is process-wide and tests run in parallel.
#[test]
fn game_and_render_hot_paths_do_not_allocate() {
    // Setup (outside counting) so one-time allocations don't trip the gate.
    let mut snake = SnakeGame::new(20, 15, 1);
    let mut maze = MazeGame::new(15, 10, 1);
    let mut ttt = TicTacToe::new();
    let mut snap = GridSnapshot::default();
    let view = GridView::default();
    let viewport = Viewport::new(80, 24);
    let mut fb = FrameBuffer::new(80, 24);

    // Warm-up sizes the reusable buffers; the snake may grow while counting.
    snap.entity.reserve(64);
    snake.snapshot_into(&mut snap);
    maze.snapshot_into(&mut snap);
    view.render_into(&snap, viewport, &mut fb);

    let circle = [
        Direction::Down,
        Direction::Left,
        Direction::Up,
        Direction::Right,
    ];

    let allocs = with_alloc_counting(|| {
        for i in 0..200 {
            snake.set_intent(Intent::Steer(circle[i % 4]));
            let _ = snake.tick();
            maze.set_intent(Intent::Steer(circle[(i / 3) % 4]));
            let _ = maze.tick();
            ttt.set_intent(if i % 2 == 0 {
                Intent::Commit
            } else {
                Intent::Steer(circle[i % 4])
            });
            let _ = ttt.tick();
        }

        for _ in 0..20 {
            snake.snapshot_into(&mut snap);
            view.render_into(&snap, viewport, &mut fb);
            maze.snapshot_into(&mut snap);
            view.render_into(&snap, viewport, &mut fb);
        }
    });

    assert_eq!(allocs, 0);
}
