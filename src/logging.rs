//! Log setup.
//!
//! Standard output carries the frames, so logs only ever go to a file. With
//! no log file nothing is installed and every `tracing` call is a no-op.

use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

/// Install a file subscriber when `log_file` is set.
///
/// Keep the returned guard alive until exit; dropping it flushes pending
/// lines.
pub fn init(log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let Some(path) = log_file else {
        return Ok(None);
    };

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;
    let (writer, guard) = tracing_appender::non_blocking(file);

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install log subscriber: {e}"))?;

    Ok(Some(guard))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_log_file_installs_nothing() {
        assert!(init(None).unwrap().is_none());
    }

    #[test]
    fn unopenable_log_file_is_an_error() {
        let err = init(Some(Path::new("/nonexistent-dir/term-bounce.log"))).unwrap_err();
        assert!(err.to_string().contains("failed to open log file"));
    }
}
