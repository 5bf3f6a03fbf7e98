/// Millisecond stopwatch and frame pacing.
///
/// Timers never read the wall clock themselves: callers pass the current
/// time in milliseconds, taken from a [`Clock`].  The game loop uses
/// [`SystemClock`]; tests pass plain numbers.

use std::time::{Duration, Instant};

/// Monotonic millisecond source.
pub trait Clock {
    fn now_millis(&self) -> u64;
}

/// Wall-clock milliseconds since the clock was created.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

/// Stopwatch: `start` pins the origin, `update` refreshes the reading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Timer {
    started_at: u64,
    last_update: u64,
}

impl Timer {
    pub fn start(&mut self, now: u64) {
        self.started_at = now;
        self.last_update = now;
    }

    pub fn update(&mut self, now: u64) {
        self.last_update = now;
    }

    /// Milliseconds between `start` and the latest `update`.
    pub fn elapsed_millis(&self) -> u64 {
        self.last_update.saturating_sub(self.started_at)
    }
}

// ── Frame pacing ─────────────────────────────────────────────────────────────

/// Minimum frame length for the target rate (integer millis, like 1000/60 = 16).
pub fn min_frame_millis(target_fps: u32) -> u64 {
    1000 / u64::from(target_fps.max(1))
}

/// How long to sleep so a frame that took `elapsed_ms` fills its budget.
pub fn remaining_budget(elapsed_ms: u64, target_fps: u32) -> Option<Duration> {
    let min = min_frame_millis(target_fps);
    (elapsed_ms < min).then(|| Duration::from_millis(min - elapsed_ms))
}

/// Tracks the time between frames and turns it into a simulation step.
#[derive(Debug, Clone, Copy)]
pub struct FramePacer {
    timer: Timer,
    target_fps: u32,
    frame_time: f32,
}

impl FramePacer {
    pub fn new(now: u64, target_fps: u32) -> Self {
        let mut timer = Timer::default();
        timer.start(now);
        Self {
            timer,
            target_fps,
            frame_time: 0.0,
        }
    }

    /// Seconds the last frame lasted; zero before the first frame completes.
    pub fn frame_time(&self) -> f32 {
        self.frame_time
    }

    /// Time left in the current frame's budget, measured at `now`.
    pub fn sleep_for(&mut self, now: u64) -> Option<Duration> {
        self.timer.update(now);
        remaining_budget(self.timer.elapsed_millis(), self.target_fps)
    }

    /// Close the frame at `now` (after sleeping) and restart the stopwatch.
    pub fn finish_frame(&mut self, now: u64) {
        self.timer.update(now);
        let elapsed = self.timer.elapsed_millis();
        if elapsed > 0 {
            self.frame_time = elapsed as f32 * 0.001;
        }
        self.timer.start(now);
    }
}
