use std::time::Duration;

/// Upper bound on ticks replayed after a long frame.
const MAX_CATCH_UP_TICKS: u32 = 3;

/// Receives the tick period whenever the game changes its speed.
pub trait Scheduler {
    fn set_period(&mut self, period: Duration);
}

/// Period between ticks for `rate` ticks per second.
pub fn tick_period(rate: u32) -> Duration {
    Duration::from_millis(1000 / u64::from(rate.max(1)))
}

/// Frame-time accumulator driving `tick()` from the render loop.
#[derive(Clone, Debug)]
pub struct FrameTimer {
    period: Duration,
    elapsed: Duration,
}

impl FrameTimer {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            elapsed: Duration::ZERO,
        }
    }

    /// Feeds `dt` seconds of frame time and returns how many ticks are due.
    pub fn advance(&mut self, dt: f32) -> u32 {
        if self.period.is_zero() {
            return 0;
        }
        self.elapsed += Duration::from_secs_f32(dt.max(0.0));

        let mut due = 0;
        while self.elapsed >= self.period {
            self.elapsed -= self.period;
            due += 1;
        }
        if due > MAX_CATCH_UP_TICKS {
            due = MAX_CATCH_UP_TICKS;
        }
        due
    }

    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }
}

impl Scheduler for FrameTimer {
    fn set_period(&mut self, period: Duration) {
        tracing::debug!(period_ms = period.as_millis() as u64, "tick period changed");
        self.period = period;
    }
}

/// A scheduler that only remembers the periods it was given.
#[derive(Clone, Debug, Default)]
pub struct RecordingScheduler {
    pub periods: Vec<Duration>,
}

impl Scheduler for RecordingScheduler {
    fn set_period(&mut self, period: Duration) {
        self.periods.push(period);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn period_from_rate() {
        assert_eq!(tick_period(10), Duration::from_millis(100));
        assert_eq!(tick_period(20), Duration::from_millis(50));
        assert_eq!(tick_period(30), Duration::from_millis(33));
    }

    #[test]
    fn accumulates_partial_frames() {
        let mut timer = FrameTimer::new(Duration::from_millis(100));
        assert_eq!(timer.advance(0.06), 0);
        assert_eq!(timer.advance(0.06), 1);
        assert_eq!(timer.advance(0.09), 1);
    }

    #[test]
    fn caps_catch_up_after_stall() {
        let mut timer = FrameTimer::new(Duration::from_millis(50));
        assert_eq!(timer.advance(2.0), MAX_CATCH_UP_TICKS);
        // the backlog is dropped, not replayed next frame
        assert_eq!(timer.advance(0.0), 0);
    }

    #[test]
    fn new_period_applies_to_next_tick() {
        let mut timer = FrameTimer::new(Duration::from_millis(100));
        assert_eq!(timer.advance(0.05), 0);
        timer.set_period(Duration::from_millis(40));
        assert_eq!(timer.advance(0.0), 1);
    }
}
