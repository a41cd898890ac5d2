//! Shared constants and plain data types.
//!
//! Everything here is pure data with no dependencies, usable from the core
//! state, the terminal layer and the runner alike.
//!
//! # Grid
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `WIDTH` | 40 | Default grid width in columns |
//! | `HEIGHT` | 20 | Default grid height in rows |
//! | `FPS_UPDATE_INTERVAL_MS` | 500 | FPS sampling window |
//! | `BALL_SPEED` | 30.0 | Declared ball speed (not applied) |
//!
//! # Examples
//!
//! ```
//! use term_bounce_types::{Ball, HEIGHT, WIDTH};
//!
//! let ball = Ball::for_grid(WIDTH, HEIGHT);
//! assert_eq!((ball.x, ball.y), (5.0, 5.0));
//! ```

/// Default grid width in columns.
pub const WIDTH: u16 = 40;

/// Default grid height in rows.
pub const HEIGHT: u16 = 20;

/// Ball speed in cells per second.
///
/// Declared for completeness; the ball is never integrated forward.
pub const BALL_SPEED: f64 = 30.0;

/// Length of one FPS sampling window in milliseconds.
pub const FPS_UPDATE_INTERVAL_MS: u64 = 500;

/// Same window expressed in clock nanoseconds.
pub const FPS_UPDATE_INTERVAL_NS: u64 = FPS_UPDATE_INTERVAL_MS * 1_000_000;

/// Nanoseconds per second, for clock-to-seconds conversion.
pub const NANOS_PER_SEC: f64 = 1_000_000_000.0;

pub const BALL_GLYPH: char = 'O';
pub const HORIZONTAL_BORDER: char = '-';
pub const VERTICAL_BORDER: char = '|';
pub const BLANK: char = ' ';

/// Home cursor, clear screen, followed by a literal `]]`.
///
/// The trailing `]]` is part of the established output and is kept verbatim.
pub const CLEAR_SCREEN: &str = "\x1b[H\x1b[2J]]";

/// The ball: a position in grid space and an (unused) velocity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub x: f64,
    pub y: f64,
    pub dx: f64,
    pub dy: f64,
}

impl Ball {
    /// Starting ball for a grid of the given size.
    ///
    /// An eighth of the way across and a quarter of the way down, which is
    /// `(5, 5)` on the default 40x20 grid.
    pub fn for_grid(width: u16, height: u16) -> Self {
        Self {
            x: f64::from(width) * 0.125,
            y: f64::from(height) * 0.25,
            dx: 1.0,
            dy: 0.5,
        }
    }

    /// Grid cell the ball occupies, as `(row, col)`.
    ///
    /// Coordinates are truncated toward zero, not rounded.
    pub fn cell(&self) -> (i64, i64) {
        (self.y as i64, self.x as i64)
    }
}

impl Default for Ball {
    fn default() -> Self {
        Self::for_grid(WIDTH, HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_constants() {
        assert_eq!(WIDTH, 40);
        assert_eq!(HEIGHT, 20);
        assert_eq!(FPS_UPDATE_INTERVAL_MS, 500);
        assert_eq!(FPS_UPDATE_INTERVAL_NS, 500_000_000);
        assert_eq!(BALL_SPEED, 30.0);
    }

    #[test]
    fn clear_screen_bytes_are_exact() {
        assert_eq!(
            CLEAR_SCREEN.as_bytes(),
            &[0x1b, b'[', b'H', 0x1b, b'[', b'2', b'J', b']', b']']
        );
    }

    #[test]
    fn default_ball_sits_at_five_five() {
        let ball = Ball::default();
        assert_eq!(ball.x, 5.0);
        assert_eq!(ball.y, 5.0);
        assert_eq!(ball.dx, 1.0);
        assert_eq!(ball.dy, 0.5);
        assert_eq!(ball.cell(), (5, 5));
    }

    #[test]
    fn ball_cell_truncates() {
        let ball = Ball {
            x: 7.9,
            y: 3.99,
            dx: 0.0,
            dy: 0.0,
        };
        assert_eq!(ball.cell(), (3, 7));

        let ball = Ball {
            x: -0.5,
            y: -1.5,
            dx: 0.0,
            dy: 0.0,
        };
        assert_eq!(ball.cell(), (-1, 0));
    }
}
