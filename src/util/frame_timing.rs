//! Frame cadence for render loops that tick the animator.

use web_time::{Duration, Instant};

/// Frame cadence for driving [`SmoothLayout::advance`] with FPS tracking.
///
/// [`SmoothLayout::advance`]: crate::animation::SmoothLayout::advance
#[derive(Debug, Clone)]
pub struct FrameTiming {
    /// Minimum duration between frames (zero = unlimited)
    min_frame_duration: Duration,
    /// Timestamp of the last completed frame
    last_frame: Instant,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
    /// Frames completed so far
    frames: u64,
}

impl FrameTiming {
    /// Create a frame timer with the given FPS target (0 = unlimited),
    /// starting its first frame at `now`.
    #[must_use]
    pub fn new(target_fps: u32, now: Instant) -> Self {
        let min_frame_duration = if target_fps > 0 {
            Duration::from_secs_f64(1.0 / f64::from(target_fps))
        } else {
            Duration::ZERO
        };

        Self {
            min_frame_duration,
            last_frame: now,
            smoothed_fps: 60.0,
            smoothing: 0.05,
            frames: 0,
        }
    }

    /// Whether enough time has passed since the last frame to tick again.
    #[must_use]
    pub fn is_due(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.last_frame) >= self.min_frame_duration
    }

    /// Time left until the next frame is due.
    #[must_use]
    pub fn until_due(&self, now: Instant) -> Duration {
        self.min_frame_duration
            .saturating_sub(now.saturating_duration_since(self.last_frame))
    }

    /// Record a completed frame at `now`.
    pub fn end_frame(&mut self, now: Instant) {
        let frame_time =
            now.saturating_duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;
        self.frames += 1;

        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
    }

    /// Current smoothed FPS.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }

    /// Number of frames recorded with [`end_frame`](Self::end_frame).
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }
}
