//! Windowed frames-per-second estimator.
//!
//! Frames are counted over a ~500ms window; the displayed rate is recomputed
//! only when a window closes, which keeps per-frame jitter out of the readout.
//!
//! The first window starts at timestamp 0 rather than at the first frame, so
//! the first reading divides by the full clock value and comes out close to
//! zero. Later windows measure normally.

use tracing::debug;

use crate::types::{FPS_UPDATE_INTERVAL_NS, NANOS_PER_SEC};

#[derive(Debug, Clone, PartialEq)]
pub struct FpsEstimator {
    frame_count: u32,
    window_start_ns: u64,
    current_fps: f64,
    highest_fps: f64,
}

impl FpsEstimator {
    pub fn new() -> Self {
        Self {
            frame_count: 0,
            window_start_ns: 0,
            current_fps: 0.0,
            highest_fps: 0.0,
        }
    }

    /// Count one frame at `now_ns`, closing the window if it has run long enough.
    ///
    /// Returns `true` when the displayed rate was recomputed.
    pub fn update(&mut self, now_ns: u64) -> bool {
        self.frame_count += 1;

        let elapsed_ns = now_ns.saturating_sub(self.window_start_ns);
        if elapsed_ns < FPS_UPDATE_INTERVAL_NS {
            return false;
        }

        self.current_fps = f64::from(self.frame_count) / (elapsed_ns as f64 / NANOS_PER_SEC);
        if self.current_fps > self.highest_fps {
            self.highest_fps = self.current_fps;
        }
        debug!(
            frames = self.frame_count,
            elapsed_ns,
            fps = self.current_fps,
            "fps window closed"
        );
        self.frame_count = 0;
        self.window_start_ns = now_ns;
        true
    }

    /// Rate computed at the last window close.
    pub fn current_fps(&self) -> f64 {
        self.current_fps
    }

    /// Highest rate any window has reported.
    pub fn highest_fps(&self) -> f64 {
        self.highest_fps
    }

    /// Frames counted in the open window.
    pub fn frame_count(&self) -> u32 {
        self.frame_count
    }

    pub fn window_start_ns(&self) -> u64 {
        self.window_start_ns
    }
}

impl Default for FpsEstimator {
    fn default() -> Self {
        Self::new()
    }
}
