// src/util/log.rs

//! File-based logging for the TUI binaries. The terminal belongs to the UI,
//! so nothing is ever logged to stdout or stderr while it runs.
use std::fmt;
use std::fs::{create_dir_all, File};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::Local;
use tracing::Level;
use tracing_subscriber::fmt::{format::Writer, time::FormatTime};

pub const LOG_DIR: &str = "./logs";
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Local wall-clock timestamps in the same shape as every other log line we write.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalTimestamp;

impl FormatTime for LocalTimestamp {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        write!(w, "{}", Local::now().format(TIMESTAMP_FORMAT))
    }
}

/// Creates (or truncates) `<dir>/<file_name>` and installs the global subscriber.
///
/// Returns the log path, or `None` when the file can't be created or a
/// subscriber is already installed. Either way the program keeps running.
pub fn init(dir: impl AsRef<Path>, file_name: &str) -> Option<PathBuf> {
    let dir = dir.as_ref();
    let path = dir.join(file_name);

    let file = create_dir_all(dir).and_then(|_| File::create(&path)).ok()?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_timer(LocalTimestamp)
        .with_max_level(Level::INFO)
        .try_init()
        .ok()?;

    tracing::info!(path = %path.display(), "logging started");
    Some(path)
}
