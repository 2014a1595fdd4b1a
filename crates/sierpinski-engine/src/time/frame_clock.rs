use std::time::{Duration, Instant};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Monotonic frame counter, starting at 0.
    pub frame_index: u64,
}

/// Frame clock producing `FrameTime` snapshots.
#[derive(Debug, Clone)]
pub struct FrameClock {
    start: Instant,
    frame_index: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            frame_index: 0,
        }
    }

    /// Number of frames ticked so far.
    pub fn frames(&self) -> u64 {
        self.frame_index
    }

    /// Wall time since the clock was created.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Advances the clock and returns a new `FrameTime`.
    pub fn tick(&mut self) -> FrameTime {
        let ft = FrameTime {
            frame_index: self.frame_index,
        };
        self.frame_index = self.frame_index.wrapping_add(1);
        ft
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
