//! Gravity scheduler - cancellable repeating timers
//!
//! The engine never owns a clock. It asks a [`Scheduler`] for a repeating timer and
//! keeps the returned [`TimerId`] as its one gravity handle; pausing cancels it and
//! resuming asks for a fresh one.
//!
//! [`IntervalScheduler`] is the deterministic implementation used by both the binary
//! and the tests: callers feed it elapsed time through [`IntervalScheduler::advance`]
//! and it reports how many timers fired.

use std::time::Duration;

use log::debug;

/// Opaque handle for a scheduled repeating timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

/// Creates and cancels repeating timers
pub trait Scheduler {
    /// Start a timer that fires every `period`
    fn schedule_repeating(&mut self, period: Duration) -> TimerId;

    /// Stop a timer. Cancelling an unknown or already cancelled id is a no-op.
    fn cancel(&mut self, id: TimerId);
}

#[derive(Debug, Clone)]
struct Interval {
    id: TimerId,
    period: Duration,
    elapsed: Duration,
}

/// Repeating timers driven by explicit elapsed time
#[derive(Debug, Clone, Default)]
pub struct IntervalScheduler {
    timers: Vec<Interval>,
    next_id: u64,
}

impl IntervalScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance every live timer by `elapsed` and return how many fired.
    ///
    /// A timer fires at most once per call; whole periods missed during a long
    /// stall collapse into that single fire.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        let mut fired = 0;
        for timer in &mut self.timers {
            timer.elapsed += elapsed;
            if timer.elapsed >= timer.period {
                fired += 1;
                let period_ns = timer.period.as_nanos().max(1);
                let rem = timer.elapsed.as_nanos() % period_ns;
                timer.elapsed = Duration::from_nanos(rem as u64);
            }
        }
        fired
    }

    /// Number of timers that have not been cancelled
    pub fn live_timers(&self) -> usize {
        self.timers.len()
    }

    pub fn is_live(&self, id: TimerId) -> bool {
        self.timers.iter().any(|t| t.id == id)
    }

    /// Time until the earliest live timer fires, or None when nothing is scheduled
    pub fn time_until_next_fire(&self) -> Option<Duration> {
        self.timers
            .iter()
            .map(|t| t.period.saturating_sub(t.elapsed))
            .min()
    }
}

impl Scheduler for IntervalScheduler {
    fn schedule_repeating(&mut self, period: Duration) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.timers.push(Interval {
            id,
            period,
            elapsed: Duration::ZERO,
        });
        debug!("timer {} scheduled every {:?}", id.0, period);
        id
    }

    fn cancel(&mut self, id: TimerId) {
        let before = self.timers.len();
        self.timers.retain(|t| t.id != id);
        if self.timers.len() != before {
            debug!("timer {} cancelled", id.0);
        }
    }
}
