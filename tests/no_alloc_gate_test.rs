use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent};

use tui_raycaster::core::World;
use tui_raycaster::engine::GameLoop;
use tui_raycaster::input::KeyTracker;
use tui_raycaster::term::{FrameBuffer, HudStats, SceneView, Viewport};
use tui_raycaster::types::{HeldKey, InputFrame};

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            let _ = layout;
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            let _ = (layout, new_size);
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

fn busy_input(i: usize) -> InputFrame {
    let mut frame = InputFrame::default().with_held(HeldKey::TurnRight);
    if i % 2 == 0 {
        frame.press(HeldKey::Forward);
    }
    frame.fire = i % 3 == 0;
    frame
}

#[test]
fn world_step_is_allocation_free() {
    let mut world = World::new();
    let allocs = with_alloc_counting(|| {
        for i in 0..300 {
            let events = world.step(&busy_input(i), 1.0 / 30.0);
            std::hint::black_box(events);
        }
    });
    assert_eq!(allocs, 0, "expected world step to be allocation-free");
}

#[test]
fn scene_render_into_is_allocation_free_after_warmup() {
    let mut world = World::new();
    let view = SceneView::default();
    let hud = HudStats { fps: 30 };
    let vp = Viewport::new(120, 40);
    let mut fb = FrameBuffer::new(vp.width, vp.height);

    // Warm up: first render sizes the buffer.
    view.render_into(&world, &hud, vp, &mut fb);

    let allocs = with_alloc_counting(|| {
        for i in 0..60 {
            world.step(&busy_input(i), 1.0 / 30.0);
            view.render_into(&world, &hud, vp, &mut fb);
        }
    });
    assert_eq!(allocs, 0, "expected render_into to be allocation-free");
}

#[test]
fn game_loop_tick_is_allocation_free_after_warmup() {
    let mut game = GameLoop::default();
    let vp = Viewport::new(100, 30);
    let input = |i: usize| {
        let mut frame = busy_input(i);
        frame.toggle_minimap = i % 10 == 0;
        frame
    };

    // Warm up with the same sequence so every log callsite has been hit once.
    for i in 0..60 {
        game.tick(&input(i), 1.0 / 30.0, vp);
    }

    let allocs = with_alloc_counting(|| {
        for i in 0..60 {
            std::hint::black_box(game.tick(&input(i), 1.0 / 30.0, vp));
        }
    });
    assert_eq!(allocs, 0, "expected game loop tick to be allocation-free");
}

#[test]
fn key_tracker_is_allocation_free() {
    let mut tracker = KeyTracker::new();
    let t0 = Instant::now();
    let keys = [
        KeyEvent::from(KeyCode::Char('w')),
        KeyEvent::from(KeyCode::Char(' ')),
        KeyEvent::from(KeyCode::Left),
        KeyEvent::from(KeyCode::Char('m')),
    ];

    let allocs = with_alloc_counting(|| {
        for (i, key) in keys.iter().cycle().take(200).enumerate() {
            tracker.handle_key(*key, t0);
            std::hint::black_box(tracker.snapshot(t0 + std::time::Duration::from_millis(i as u64)));
        }
    });
    assert_eq!(allocs, 0, "expected key tracking to be allocation-free");
}
