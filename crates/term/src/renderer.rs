//! TerminalRenderer: prints a screen buffer and repaints in place.
//!
//! Each frame goes out as plain text rows followed by the clear-screen
//! sequence, in one write and one flush. The encoded bytes are built in a
//! reusable buffer so steady-state frames do not allocate.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{cursor, QueueableCommand};

use crate::fb::ScreenBuffer;
use crate::types::CLEAR_SCREEN;

pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    buf: Vec<u8>,
}

impl TerminalRenderer<io::Stdout> {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for TerminalRenderer<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            buf: Vec::with_capacity(4 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(cursor::Hide)?;
        self.flush_buf()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(cursor::Show)?;
        self.flush_buf()
    }

    /// Print `fb` row by row, then clear the screen for the next frame.
    pub fn present(&mut self, fb: &ScreenBuffer) -> Result<()> {
        self.buf.clear();
        encode_frame_into(fb, &mut self.buf);
        self.buf.extend_from_slice(CLEAR_SCREEN.as_bytes());
        self.flush_buf()
    }

    /// Write raw text straight through, e.g. a closing summary line.
    pub fn write_line(&mut self, line: &str) -> Result<()> {
        self.buf.clear();
        self.buf.extend_from_slice(line.as_bytes());
        self.buf.push(b'\n');
        self.flush_buf()
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Encode every row of `fb` as a text line terminated by `\n`.
pub fn encode_frame_into(fb: &ScreenBuffer, out: &mut Vec<u8>) {
    let mut utf8 = [0u8; 4];
    for row in fb.rows() {
        for &ch in row {
            out.extend_from_slice(ch.encode_utf8(&mut utf8).as_bytes());
        }
        out.push(b'\n');
    }
}
