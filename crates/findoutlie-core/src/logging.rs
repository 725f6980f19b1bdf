//! Logging init. Events go to `~/.local/state/findoutlie/findoutlie.log`; if
//! that file cannot be opened, they go to stderr instead.

use anyhow::Result;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,findoutlie=debug,findoutlie_core=debug";
const LOG_FILE_NAME: &str = "findoutlie.log";

/// Where log events ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSink {
    File(PathBuf),
    Stderr,
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Create `dir` if needed and open its log file for appending.
fn open_log_file(dir: &Path) -> Result<(File, PathBuf)> {
    fs::create_dir_all(dir)?;
    let path = dir.join(LOG_FILE_NAME);
    let file = fs::OpenOptions::new().create(true).append(true).open(&path)?;
    Ok((file, path))
}

fn state_log_file() -> Result<(File, PathBuf)> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("findoutlie")?;
    open_log_file(&xdg_dirs.get_state_home())
}

/// Install the global subscriber and report which sink it writes to.
/// Calling it again after a subscriber is installed is a no-op.
pub fn init_logging() -> LogSink {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_ansi(false);

    match state_log_file() {
        Ok((file, path)) => {
            let _ = builder.with_writer(Mutex::new(file)).try_init();
            tracing::info!("findoutlie logging initialized at {}", path.display());
            LogSink::File(path)
        }
        Err(err) => {
            let _ = builder.with_writer(std::io::stderr).try_init();
            tracing::warn!("file logging unavailable ({:#}); logging to stderr", err);
            LogSink::Stderr
        }
    }
}
