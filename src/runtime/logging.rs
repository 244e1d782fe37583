use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::{LoggingSettings, default_log_path};

/// Install a file-backed `tracing` subscriber. The terminal belongs to the
/// TUI, so nothing is written to stdout/stderr once it is running.
///
/// `RUST_LOG` wins over `logging.level`. Returns the log path on success;
/// on failure the app runs without logs.
pub fn init(settings: &LoggingSettings) -> Option<PathBuf> {
    let path = settings.file.clone().or_else(default_log_path)?;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            eprintln!("musicverse: cannot create log dir {}: {e}", parent.display());
            return None;
        }
    }

    let file = match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("musicverse: cannot open log file {}: {e}", path.display());
            return None;
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_target(true)
        .with_ansi(false)
        .with_env_filter(filter)
        .try_init()
        .ok()
        .map(|()| path)
}
