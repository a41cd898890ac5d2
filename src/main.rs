//! Terminal bouncing-ball runner (default binary).
//!
//! Prints a fixed-size box with the ball and an FPS readout every iteration,
//! then clears the screen, until interrupted.

use anyhow::Result;
use clap::Parser;
use tracing::error;

use term_bounce::cli::Args;
use term_bounce::engine::{CancelToken, RunSummary, Runner};
use term_bounce::{interrupt, logging};

fn main() -> Result<()> {
    let args = Args::parse();
    let _log_guard = logging::init(args.log_file.as_deref())?;

    let cancel = CancelToken::new();
    interrupt::install(cancel.clone())?;

    let mut runner = Runner::stdout(args.run_config())?;
    runner.terminal().enter()?;

    let result = runner.run(&cancel);

    // Always try to restore the cursor.
    let term = runner.terminal();
    let _ = term.exit();

    match result {
        Ok(RunSummary { highest_fps, .. }) => {
            term.write_line(&format!(
                "\x1b[H\x1b[JThe highest FPS reached were: {highest_fps:.6}"
            ))?;
            Ok(())
        }
        Err(err) => {
            error!(error = %err, "render loop failed");
            Err(err)
        }
    }
}
