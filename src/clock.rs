use std::time::{Duration, Instant};

/// Fixed-rate frame limiter, called once at the end of every tick
#[derive(Debug)]
pub struct FrameClock {
    frame_budget: Duration,
    last_tick: Instant,
}

impl FrameClock {
    pub fn new(ticks_per_second: u32) -> Self {
        Self {
            frame_budget: Duration::from_secs(1) / ticks_per_second.max(1),
            last_tick: Instant::now(),
        }
    }

    pub fn frame_budget(&self) -> Duration {
        self.frame_budget
    }

    /// Time left to wait after a frame that took `elapsed`
    pub fn remaining(&self, elapsed: Duration) -> Duration {
        self.frame_budget.saturating_sub(elapsed)
    }

    /// Sleeps out the rest of the frame budget and returns the full frame time
    pub fn tick(&mut self) -> Duration {
        let wait = self.remaining(self.last_tick.elapsed());
        if !wait.is_zero() {
            std::thread::sleep(wait);
        }

        let now = Instant::now();
        let frame_time = now.duration_since(self.last_tick);
        self.last_tick = now;
        frame_time
    }
}
