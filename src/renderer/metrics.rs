//! Frame timing for the window title.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Number of recent frames averaged
const WINDOW: usize = 120;

/// Tracks the interval between frame starts over the last [`WINDOW`] frames.
pub struct RenderMetrics {
    frame_times: VecDeque<Duration>,
    last_frame_start: Option<Instant>,
}

impl Default for RenderMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderMetrics {
    pub fn new() -> Self {
        Self {
            frame_times: VecDeque::with_capacity(WINDOW),
            last_frame_start: None,
        }
    }

    /// Call at the start of each frame.
    pub fn begin_frame(&mut self) {
        self.begin_frame_at(Instant::now());
    }

    fn begin_frame_at(&mut self, now: Instant) {
        if let Some(previous) = self.last_frame_start.replace(now) {
            self.record(now.saturating_duration_since(previous));
        }
    }

    fn record(&mut self, elapsed: Duration) {
        self.frame_times.push_back(elapsed);
        if self.frame_times.len() > WINDOW {
            self.frame_times.pop_front();
        }
    }

    /// Average frame time in milliseconds.
    pub fn avg_frame_time_ms(&self) -> f32 {
        if self.frame_times.is_empty() {
            return 0.0;
        }
        let sum: Duration = self.frame_times.iter().sum();
        sum.as_secs_f32() * 1000.0 / self.frame_times.len() as f32
    }

    /// FPS derived from the average frame time.
    pub fn fps(&self) -> f32 {
        let ms = self.avg_frame_time_ms();
        if ms > 0.0 {
            1000.0 / ms
        } else {
            0.0
        }
    }
}
