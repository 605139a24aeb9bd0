//! Fixed-rate frame pacing

use std::thread;
use std::time::{Duration, Instant};

/// Blocks the loop so ticks happen no faster than the target rate
#[derive(Debug, Clone)]
pub struct FrameClock {
    interval: Duration,
    last_tick: Instant,
}

impl FrameClock {
    /// Clock for `tick_rate` ticks per second, starting now
    pub fn new(tick_rate: u32) -> Self {
        Self::with_interval(Duration::from_secs(1) / tick_rate.max(1))
    }

    pub fn with_interval(interval: Duration) -> Self {
        Self {
            interval,
            last_tick: Instant::now(),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Sleep until at least one interval has passed since the previous tick.
    ///
    /// Returns the real time since the previous tick. A late frame does not
    /// bank time: the next interval is measured from when this call returns.
    pub fn wait(&mut self) -> Duration {
        let target = self.last_tick + self.interval;
        let now = Instant::now();
        if now < target {
            thread::sleep(target - now);
        }
        let now = Instant::now();
        let elapsed = now - self.last_tick;
        self.last_tick = now;
        elapsed
    }
}
