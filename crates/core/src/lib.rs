//! Core render-loop state: clocks, FPS estimation and the render state.
//!
//! No terminal I/O lives here, which keeps everything deterministic when
//! driven by a [`ManualClock`].
//!
//! # Module Structure
//!
//! - [`clock`]: monotonic timestamps and per-frame delta time
//! - [`fps`]: windowed frames-per-second estimator
//! - [`state`]: the single render state passed through each iteration
//!
//! # Example
//!
//! ```
//! use term_bounce_core::{Clock, ManualClock, RenderState};
//!
//! let clock = ManualClock::new(2_000_000_000);
//! let mut state = RenderState::new(40, 20, clock.now_ns());
//!
//! clock.advance_ms(16);
//! state.begin_frame(clock.now_ns());
//! assert_eq!(state.frames(), 1);
//! ```

pub mod clock;
pub mod fps;
pub mod state;

pub use term_bounce_types as types;

pub use clock::{Clock, FrameClock, ManualClock, MonotonicClock};
pub use fps::FpsEstimator;
pub use state::RenderState;
