//! Process-wide render state, owned by the runner and passed explicitly.

use tracing::trace;

use crate::clock::FrameClock;
use crate::fps::FpsEstimator;
use crate::types::Ball;

#[derive(Debug, Clone)]
pub struct RenderState {
    pub ball: Ball,
    pub frame_clock: FrameClock,
    pub fps: FpsEstimator,
    /// Cap shown next to the FPS readout, if any.
    pub max_fps: Option<u32>,
    /// Seconds since the previous frame. Kept for inspection only; nothing
    /// reads it back into the ball or the buffer.
    pub delta_time: f64,
    frames: u64,
}

impl RenderState {
    pub fn new(width: u16, height: u16, start_ns: u64) -> Self {
        Self {
            ball: Ball::for_grid(width, height),
            frame_clock: FrameClock::new(start_ns),
            fps: FpsEstimator::new(),
            max_fps: None,
            delta_time: 0.0,
            frames: 0,
        }
    }

    pub fn with_max_fps(mut self, max_fps: Option<u32>) -> Self {
        self.max_fps = max_fps;
        self
    }

    /// Per-frame bookkeeping: delta time, then the FPS window.
    pub fn begin_frame(&mut self, now_ns: u64) {
        self.delta_time = self.frame_clock.tick(now_ns);
        self.fps.update(now_ns);
        self.frames += 1;
        trace!(frame = self.frames, delta_time = self.delta_time, "frame");
    }

    /// Frames begun so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}
