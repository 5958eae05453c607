use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

/// Sends `tracing` output to a log file, since stdout belongs to the UI.
///
/// The first of `candidates` that can be opened wins. Returns `None` when
/// none can, and the program runs without a log file. `RUST_LOG` wins when
/// set; otherwise the level is `info`, or `debug` with `--verbose`. The
/// returned guard flushes the writer on drop and must be held for the life
/// of the program.
pub fn init(candidates: &[PathBuf], verbose: bool) -> Option<(WorkerGuard, PathBuf)> {
    let (appender, path) = first_writable(candidates)?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("pico_hn={default_level},warn")));

    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .try_init()
    {
        eprintln!("Warning: failed to install log subscriber: {e}");
        return None;
    }

    Some((guard, path))
}

/// Where the log goes when the config directory is unusable.
pub fn fallback_log_path() -> PathBuf {
    std::env::temp_dir().join("pico-hn.log")
}

fn first_writable(candidates: &[PathBuf]) -> Option<(RollingFileAppender, PathBuf)> {
    candidates
        .iter()
        .find_map(|path| match open_appender(path) {
            Ok(appender) => Some((appender, path.clone())),
            Err(e) => {
                eprintln!("Warning: {e:#}");
                None
            }
        })
}

fn open_appender(log_path: &Path) -> Result<RollingFileAppender> {
    let dir = log_path.parent().unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
    let file_name = log_path
        .file_name()
        .and_then(OsStr::to_str)
        .context("Log path has no file name")?;

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(dir)
        .with_context(|| format!("Failed to open log file {}", log_path.display()))
}
