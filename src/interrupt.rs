use std::io::{self, Write};

use anyhow::{Context, Result};
use crossterm::{cursor, QueueableCommand};

use crate::engine::CancelToken;

/// Route Ctrl+C and SIGTERM into `cancel`.
///
/// The first signal asks the loop to stop after the current frame. A second
/// one restores the cursor and exits immediately with status 130.
pub fn install(cancel: CancelToken) -> Result<()> {
    ctrlc::set_handler(move || {
        if cancel.cancel() {
            restore_terminal();
            std::process::exit(130);
        }
    })
    .context("failed to install signal handler")
}

fn restore_terminal() {
    let mut stdout = io::stdout();
    let _ = stdout.queue(cursor::Show);
    let _ = stdout.flush();
}
