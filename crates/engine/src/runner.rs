//! The render loop.
//!
//! One iteration: read the clock, update delta time and the FPS window,
//! paint the buffer, print it followed by the clear sequence, then wait out
//! the frame cap if one is set. The loop has a single running state and only
//! stops when its [`CancelToken`] is cancelled or an error surfaces.

use std::io::{self, Write};
use std::thread;
use std::time::Instant;

use anyhow::{ensure, Result};
use tracing::info;

use crate::cancel::CancelToken;
use crate::core::{Clock, MonotonicClock, RenderState};
use crate::term::{FrameLimiter, FrameView, ScreenBuffer, TerminalRenderer};
use crate::types::{HEIGHT, WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunConfig {
    pub width: u16,
    pub height: u16,
    pub max_fps: Option<u32>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            max_fps: None,
        }
    }
}

impl RunConfig {
    pub fn validate(&self) -> Result<()> {
        ensure!(self.width > 0, "width must be a positive integer");
        ensure!(self.height > 0, "height must be a positive integer");
        ensure!(
            self.max_fps != Some(0),
            "max fps must be a positive integer"
        );
        Ok(())
    }
}

/// What a finished run reports.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    pub frames: u64,
    pub highest_fps: f64,
}

pub struct Runner<C: Clock = MonotonicClock, W: Write = io::Stdout> {
    clock: C,
    state: RenderState,
    view: FrameView,
    fb: ScreenBuffer,
    term: TerminalRenderer<W>,
    limiter: FrameLimiter,
}

impl Runner {
    /// Runner on the real clock writing to stdout.
    pub fn stdout(config: RunConfig) -> Result<Self> {
        Self::new(config, MonotonicClock::new(), TerminalRenderer::new())
    }
}

impl<C: Clock, W: Write> Runner<C, W> {
    pub fn new(config: RunConfig, clock: C, term: TerminalRenderer<W>) -> Result<Self> {
        config.validate()?;
        let state = RenderState::new(config.width, config.height, clock.now_ns())
            .with_max_fps(config.max_fps);
        Ok(Self {
            clock,
            state,
            view: FrameView::new(),
            fb: ScreenBuffer::new(config.width, config.height),
            term,
            limiter: FrameLimiter::new(config.max_fps),
        })
    }

    /// Run until `cancel` is cancelled.
    ///
    /// The token is checked before each iteration; with a token nobody
    /// cancels this never returns `Ok`.
    pub fn run(&mut self, cancel: &CancelToken) -> Result<RunSummary> {
        info!(
            width = self.fb.width(),
            height = self.fb.height(),
            max_fps = ?self.state.max_fps,
            "render loop started"
        );
        while !cancel.is_cancelled() {
            self.step()?;
        }
        let summary = self.summary();
        info!(
            frames = summary.frames,
            highest_fps = summary.highest_fps,
            "render loop stopped"
        );
        Ok(summary)
    }

    /// Run exactly one iteration.
    pub fn step(&mut self) -> Result<()> {
        let frame_start = Instant::now();

        let now = self.clock.now_ns();
        self.state.begin_frame(now);

        self.view.render_into(&self.state, &mut self.fb)?;
        self.term.present(&self.fb)?;

        if let Some(wait) = self.limiter.remaining(frame_start.elapsed()) {
            thread::sleep(wait);
        }
        Ok(())
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            frames: self.state.frames(),
            highest_fps: self.state.fps.highest_fps(),
        }
    }

    pub fn state(&self) -> &RenderState {
        &self.state
    }

    /// The buffer painted by the last iteration.
    pub fn frame(&self) -> &ScreenBuffer {
        &self.fb
    }

    pub fn terminal(&mut self) -> &mut TerminalRenderer<W> {
        &mut self.term
    }

    pub fn into_terminal(self) -> TerminalRenderer<W> {
        self.term
    }
}
