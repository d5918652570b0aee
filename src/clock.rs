//! Frame pacing for the event loop.
//!
//! The loop waits for input until the current frame is over and then credits the
//! elapsed time to the gravity scheduler. The game-over alert blocks inside an engine
//! call, and the round that follows starts with a fresh gravity timer, so time spent
//! before that round began is never credited to it.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct FrameClock {
    frame: Duration,
    last_tick: Instant,
    /// Engine round counter seen at the last tick
    round: u64,
}

impl FrameClock {
    pub fn new(frame: Duration, now: Instant, round: u64) -> Self {
        Self {
            frame,
            last_tick: now,
            round,
        }
    }

    /// How long to wait for input before the current frame is over
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        self.frame
            .saturating_sub(now.saturating_duration_since(self.last_tick))
    }

    /// Time to credit to gravity, once at least a frame has passed.
    ///
    /// `round` is the engine's game-over count. When it moved since the last tick a
    /// new round began in between: the clock restarts at `now` and nothing is
    /// credited.
    pub fn tick(&mut self, now: Instant, round: u64) -> Option<Duration> {
        if round != self.round {
            self.round = round;
            self.last_tick = now;
            return None;
        }
        let elapsed = now.saturating_duration_since(self.last_tick);
        if elapsed < self.frame {
            return None;
        }
        self.last_tick = now;
        Some(elapsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{
        EngineConfig, GameEngine, IntervalScheduler, RecordingFrontend, SimpleRng,
    };
    use crate::types::Rgb;

    const FRAME: Duration = Duration::from_millis(16);

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn engine() -> GameEngine<RecordingFrontend> {
        let mut engine = GameEngine::new(
            EngineConfig::default(),
            RecordingFrontend::new(),
            SimpleRng::new(12345),
            IntervalScheduler::new(),
        );
        engine.start();
        engine
    }

    /// What the event loop does once input handling for a frame is done.
    fn run_gravity(engine: &mut GameEngine<RecordingFrontend>, clock: &mut FrameClock, now: Instant) {
        if let Some(elapsed) = clock.tick(now, engine.rounds_finished()) {
            let fired = engine.scheduler_mut().advance(elapsed);
            for _ in 0..fired {
                engine.gravity_tick();
            }
        }
    }

    #[test]
    fn credits_whole_frames_only() {
        let t0 = Instant::now();
        let mut clock = FrameClock::new(FRAME, t0, 0);

        assert_eq!(clock.poll_timeout(t0 + ms(10)), ms(6));
        assert_eq!(clock.tick(t0 + ms(10), 0), None);
        assert_eq!(clock.tick(t0 + ms(20), 0), Some(ms(20)));
        assert_eq!(clock.poll_timeout(t0 + ms(50)), Duration::ZERO);
    }

    #[test]
    fn round_change_restarts_without_credit() {
        let t0 = Instant::now();
        let mut clock = FrameClock::new(FRAME, t0, 0);

        assert_eq!(clock.tick(t0 + ms(5000), 1), None);
        assert_eq!(clock.tick(t0 + ms(5016), 1), Some(ms(16)));
    }

    #[test]
    fn game_over_alert_does_not_drop_the_next_piece_early() {
        let mut engine = engine();
        let t0 = Instant::now();
        let mut clock = FrameClock::new(FRAME, t0, engine.rounds_finished());

        run_gravity(&mut engine, &mut clock, t0 + ms(500));
        assert_eq!(engine.active().unwrap().y, 0);

        // Block the spawn rows; the alert then holds the loop for five seconds.
        engine.grid_mut().fill_row(0, Rgb::new(9, 9, 9));
        engine.grid_mut().fill_row(1, Rgb::new(9, 9, 9));
        engine.spawn_piece();
        assert_eq!(engine.frontend().game_overs.len(), 1);
        let resumed = t0 + ms(5500);

        run_gravity(&mut engine, &mut clock, resumed);
        run_gravity(&mut engine, &mut clock, resumed + ms(16));
        run_gravity(&mut engine, &mut clock, resumed + ms(999));
        assert_eq!(engine.active().unwrap().y, 0);

        // A full interval after the new round began, gravity resumes.
        run_gravity(&mut engine, &mut clock, resumed + ms(1016));
        assert_eq!(engine.active().unwrap().y, 1);
    }
}
