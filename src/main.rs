//! Terminal block-fall runner (default binary).
//!
//! One cooperative loop feeds the engine from two sources: crossterm key events and
//! the gravity scheduler, which is advanced by real elapsed time once per frame.

use std::fs::OpenOptions;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use log::info;

use tui_blockfall::clock::FrameClock;
use tui_blockfall::config::GameConfig;
use tui_blockfall::core::{GameEngine, IntervalScheduler, SimpleRng};
use tui_blockfall::input::{handle_key_event, is_key_down, should_quit};
use tui_blockfall::term::{GameView, TermFrontend, TerminalRenderer};
use tui_blockfall::types::FRAME_MS;

type TermEngine = GameEngine<TermFrontend, SimpleRng, IntervalScheduler>;

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    init_logging(&config)?;
    config.validate()?;

    let seed = config.seed_or_clock();
    info!("seed {}", seed);

    let mut frontend = TermFrontend::new(TerminalRenderer::new(), GameView::default());
    frontend.enter()?;

    let mut engine = GameEngine::new(
        config.engine_config(),
        frontend,
        SimpleRng::new(seed),
        IntervalScheduler::new(),
    );
    let result = run(&mut engine);

    // Always try to restore terminal state.
    let _ = engine.frontend_mut().exit();
    result
}

/// Log to `TETRIS_LOG_PATH` when set; otherwise stay silent unless `RUST_LOG` asks,
/// since stderr shares the screen with the game.
fn init_logging(config: &GameConfig) -> Result<()> {
    let default_filter = if config.log_path.is_some() { "info" } else { "off" };
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter));

    if let Some(path) = &config.log_path {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening log file {}", path))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.init();
    Ok(())
}

fn run(engine: &mut TermEngine) -> Result<()> {
    engine.start();

    let frame = Duration::from_millis(FRAME_MS as u64);
    let mut clock = FrameClock::new(frame, Instant::now(), engine.rounds_finished());

    loop {
        if let Some(err) = engine.frontend_mut().take_error() {
            return Err(err);
        }
        if engine.frontend().quit_requested() {
            info!("quit from game-over alert");
            return Ok(());
        }

        // Input with timeout until next frame.
        if event::poll(clock.poll_timeout(Instant::now()))? {
            match event::read()? {
                Event::Key(key) if is_key_down(&key) => {
                    if should_quit(key) {
                        info!("quit requested, score {}", engine.score());
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        engine.apply(action);
                    }
                }
                Event::Resize(_, _) => {
                    engine.frontend_mut().invalidate();
                    engine.redraw();
                }
                _ => {}
            }
        }

        // Gravity. A game-over alert may have blocked above; the clock drops that time.
        if let Some(elapsed) = clock.tick(Instant::now(), engine.rounds_finished()) {
            let fired = engine.scheduler_mut().advance(elapsed);
            for _ in 0..fired {
                engine.gravity_tick();
            }
        }
    }
}
