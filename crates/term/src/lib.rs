//! Terminal rendering layer.
//!
//! Frames are painted into a plain character buffer by [`FrameView`] and
//! flushed to a writer by [`TerminalRenderer`]. Painting is pure and
//! unit-testable; only the renderer touches I/O.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Fail loudly on any write outside the grid
//! - Byte-exact output: rows, newlines, then the clear-screen sequence

pub mod fb;
pub mod frame_limiter;
pub mod frame_view;
pub mod renderer;

pub use term_bounce_core as core;
pub use term_bounce_types as types;

pub use fb::{draw_text, GridError, ScreenBuffer};
pub use frame_limiter::FrameLimiter;
pub use frame_view::{format_fps, format_fps_into, FrameView};
pub use renderer::{encode_frame_into, TerminalRenderer};
