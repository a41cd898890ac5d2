//! Character screen buffer with bounds-checked writes.

use std::fmt;

use crate::types::BLANK;

/// A write landed outside the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    IndexOutOfRange {
        row: i64,
        col: i64,
        width: u16,
        height: u16,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::IndexOutOfRange {
                row,
                col,
                width,
                height,
            } => write!(
                f,
                "grid index out of range: row {row}, col {col} (grid is {width}x{height})"
            ),
        }
    }
}

impl std::error::Error for GridError {}

/// `height x width` grid of characters, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenBuffer {
    width: u16,
    height: u16,
    cells: Vec<char>,
}

impl ScreenBuffer {
    /// New buffer with every cell blank.
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![BLANK; len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn cells(&self) -> &[char] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, row: i64, col: i64) -> Option<usize> {
        if row < 0 || col < 0 || row >= i64::from(self.height) || col >= i64::from(self.width) {
            return None;
        }
        Some((row as usize) * (self.width as usize) + (col as usize))
    }

    pub fn get(&self, row: i64, col: i64) -> Option<char> {
        self.idx(row, col).map(|i| self.cells[i])
    }

    /// Write one cell. Anything outside the grid is an error, never clamped.
    pub fn set(&mut self, row: i64, col: i64, ch: char) -> Result<(), GridError> {
        match self.idx(row, col) {
            Some(i) => {
                self.cells[i] = ch;
                Ok(())
            }
            None => Err(GridError::IndexOutOfRange {
                row,
                col,
                width: self.width,
                height: self.height,
            }),
        }
    }

    pub fn clear(&mut self, ch: char) {
        self.cells.fill(ch);
    }

    /// Overwrite a whole row. No-op for rows outside the grid.
    pub fn fill_row(&mut self, row: u16, ch: char) {
        if row >= self.height {
            return;
        }
        let w = self.width as usize;
        let start = row as usize * w;
        self.cells[start..start + w].fill(ch);
    }

    /// Overwrite a whole column. No-op for columns outside the grid.
    pub fn fill_col(&mut self, col: u16, ch: char) {
        if col >= self.width {
            return;
        }
        let w = self.width as usize;
        for row in 0..self.height as usize {
            self.cells[row * w + col as usize] = ch;
        }
    }

    /// Cells of one row, or an empty slice past the bottom.
    pub fn row(&self, row: u16) -> &[char] {
        if row >= self.height {
            return &[];
        }
        let w = self.width as usize;
        let start = row as usize * w;
        &self.cells[start..start + w]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        (0..self.height).map(move |r| self.row(r))
    }

    /// Each row as a `String`, top to bottom.
    pub fn lines(&self) -> Vec<String> {
        self.rows().map(|r| r.iter().collect()).collect()
    }
}

/// Write `text` into `row` starting at `col`.
///
/// Characters at or past the right edge are dropped. A negative `col` (or a
/// row outside the grid) is an error.
pub fn draw_text(fb: &mut ScreenBuffer, text: &str, row: i64, col: i64) -> Result<(), GridError> {
    let width = i64::from(fb.width());
    for (i, ch) in text.chars().enumerate() {
        let c = col + i as i64;
        if c < width {
            fb.set(row, c, ch)?;
        }
    }
    Ok(())
}
