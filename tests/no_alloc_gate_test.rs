use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use tui_blockfall::core::{
    EngineConfig, GameEngine, IntervalScheduler, RecordingFrontend, SimpleRng,
};
use tui_blockfall::types::GameAction;

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

#[test]
fn core_hot_paths_do_not_allocate() {
    // Setup (outside counting) so one-time allocations don't trip the gate.
    let mut engine = GameEngine::new(
        EngineConfig::default(),
        RecordingFrontend::new(),
        SimpleRng::new(1),
        IntervalScheduler::new(),
    );
    engine.start();

    // Warm-up.
    engine.apply(GameAction::MoveLeft);
    engine.apply(GameAction::TogglePause);
    engine.apply(GameAction::TogglePause);

    let allocs = with_alloc_counting(|| {
        // Common actions should be allocation-free.
        for _ in 0..50 {
            engine.apply(GameAction::MoveLeft);
            engine.apply(GameAction::MoveRight);
            engine.apply(GameAction::RotateCw);
            engine.apply(GameAction::RotateCcw);
        }

        // Pausing cancels and reschedules the gravity timer in place.
        for _ in 0..20 {
            engine.apply(GameAction::TogglePause);
            engine.apply(GameAction::TogglePause);
        }

        // Gravity drives lock, line clear and piece spawning paths.
        for _ in 0..75 {
            let fired = engine.scheduler_mut().advance(Duration::from_millis(1000));
            for _ in 0..fired {
                engine.gravity_tick();
            }
        }
    });

    assert!(engine.frontend().game_overs.is_empty());
    assert!(allocs == 0);
}
