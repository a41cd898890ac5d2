use std::time::Duration;

/// Optional cap on frames per second.
#[derive(Debug, Clone, Copy)]
pub struct FrameLimiter {
    target_frame_time: Option<Duration>,
}

impl FrameLimiter {
    pub fn new(max_fps: Option<u32>) -> Self {
        Self {
            target_frame_time: max_fps
                .filter(|&fps| fps > 0)
                .map(|fps| Duration::from_secs_f64(1.0 / f64::from(fps))),
        }
    }

    pub fn unlimited() -> Self {
        Self::new(None)
    }

    pub fn target_frame_time(&self) -> Option<Duration> {
        self.target_frame_time
    }

    /// Time left to wait after a frame that took `frame_elapsed`.
    ///
    /// - Uncapped: always `None`.
    /// - Capped: `Some(target - elapsed)` when the frame finished early,
    ///   otherwise `None`.
    pub fn remaining(&self, frame_elapsed: Duration) -> Option<Duration> {
        let target = self.target_frame_time?;
        target
            .checked_sub(frame_elapsed)
            .filter(|left| !left.is_zero())
    }
}

impl Default for FrameLimiter {
    fn default() -> Self {
        Self::unlimited()
    }
}
