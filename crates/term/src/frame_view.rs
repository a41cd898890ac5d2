//! FrameView: paints a `RenderState` into a screen buffer.
//!
//! This module is pure (no I/O). Paint order is fixed: FPS text, then the
//! ball, then the horizontal borders, then the vertical borders. Borders are
//! drawn last and win wherever they overlap the text or the ball.

use std::fmt::Write as _;

use crate::core::RenderState;
use crate::fb::{draw_text, GridError, ScreenBuffer};
use crate::types::{BALL_GLYPH, BLANK, HORIZONTAL_BORDER, VERTICAL_BORDER};

/// Format the FPS readout: one decimal place, then `" FPS"`.
///
/// With a cap the readout becomes `"<fps>/<cap> FPS"`.
pub fn format_fps(fps: f64, max_fps: Option<u32>) -> String {
    let mut s = String::new();
    format_fps_into(&mut s, fps, max_fps);
    s
}

/// Same as [`format_fps`], reusing `out`.
pub fn format_fps_into(out: &mut String, fps: f64, max_fps: Option<u32>) {
    out.clear();
    // Writing into a String cannot fail.
    let _ = match max_fps {
        Some(cap) => write!(out, "{fps:.1}/{cap} FPS"),
        None => write!(out, "{fps:.1} FPS"),
    };
}

#[derive(Debug, Default)]
pub struct FrameView {
    text: String,
}

impl FrameView {
    pub fn new() -> Self {
        Self {
            text: String::with_capacity(32),
        }
    }

    /// Paint a frame into a freshly allocated buffer.
    pub fn render(
        &mut self,
        state: &RenderState,
        width: u16,
        height: u16,
    ) -> Result<ScreenBuffer, GridError> {
        let mut fb = ScreenBuffer::new(width, height);
        self.render_into(state, &mut fb)?;
        Ok(fb)
    }

    /// Paint a frame into an existing buffer, clearing it first.
    ///
    /// Allocation-free once the text scratch has grown to fit the readout.
    pub fn render_into(&mut self, state: &RenderState, fb: &mut ScreenBuffer) -> Result<(), GridError> {
        fb.clear(BLANK);

        let width = fb.width();
        let height = fb.height();

        format_fps_into(&mut self.text, state.fps.current_fps(), state.max_fps);
        let text_len = self.text.chars().count() as i64;
        draw_text(fb, &self.text, 0, i64::from(width) - text_len)?;

        let (row, col) = state.ball.cell();
        fb.set(row, col, BALL_GLYPH)?;

        fb.fill_row(0, HORIZONTAL_BORDER);
        fb.fill_row(height.saturating_sub(1), HORIZONTAL_BORDER);

        fb.fill_col(0, VERTICAL_BORDER);
        fb.fill_col(width.saturating_sub(1), VERTICAL_BORDER);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> RenderState {
        RenderState::new(40, 20, 0)
    }

    #[test]
    fn fps_text_has_one_decimal() {
        assert_eq!(format_fps(0.0, None), "0.0 FPS");
        assert_eq!(format_fps(59.94, None), "59.9 FPS");
        assert_eq!(format_fps(1234.56, None), "1234.6 FPS");
        assert_eq!(format_fps(0.04, None), "0.0 FPS");
        assert_eq!(format_fps(30.0, Some(60)), "30.0/60 FPS");
    }

    #[test]
    fn format_fps_into_replaces_previous_text() {
        let mut s = String::from("stale text that is long");
        format_fps_into(&mut s, 12.0, None);
        assert_eq!(s, "12.0 FPS");
    }

    #[test]
    fn default_frame_has_ball_at_five_five() {
        let mut view = FrameView::new();
        let fb = view.render(&state(), 40, 20).unwrap();
        assert_eq!(fb.get(5, 5), Some('O'));
        assert_eq!(fb.cells().iter().filter(|&&c| c == 'O').count(), 1);
    }

    #[test]
    fn borders_win_over_text_and_ball() {
        let mut s = state();
        // Ball on the top border row.
        s.ball.y = 0.0;
        s.ball.x = 10.0;
        let mut view = FrameView::new();
        let fb = view.render(&s, 40, 20).unwrap();

        let lines = fb.lines();
        assert_eq!(lines[0], format!("|{}|", "-".repeat(38)));
        assert_eq!(lines[19], lines[0]);
        for line in &lines[1..19] {
            assert!(line.starts_with('|'));
            assert!(line.ends_with('|'));
        }
        assert!(!fb.cells().contains(&'O'));
        assert!(!fb.cells().contains(&'F'));
    }

    #[test]
    fn ball_outside_grid_is_an_error() {
        let mut s = state();
        s.ball.x = 40.0;
        let mut view = FrameView::new();
        let err = view.render(&s, 40, 20).unwrap_err();
        assert_eq!(
            err,
            GridError::IndexOutOfRange {
                row: 5,
                col: 40,
                width: 40,
                height: 20
            }
        );
    }

    #[test]
    fn narrow_grid_puts_fps_text_at_negative_column() {
        // "0.0 FPS" is 7 chars wide, the grid only 5.
        let s = RenderState::new(5, 20, 0);
        let mut view = FrameView::new();
        let err = view.render(&s, 5, 20).unwrap_err();
        assert!(matches!(err, GridError::IndexOutOfRange { row: 0, col: -2, .. }));
    }

    #[test]
    fn render_into_clears_previous_content() {
        let s = state();
        let mut view = FrameView::new();
        let mut fb = ScreenBuffer::new(40, 20);
        fb.set(10, 10, '#').unwrap();
        view.render_into(&s, &mut fb).unwrap();
        assert_eq!(fb.get(10, 10), Some(' '));
        assert_eq!(fb, view.render(&s, 40, 20).unwrap());
    }
}
