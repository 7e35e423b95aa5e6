//! Append-only operation log (`file_explorer_log.txt` by default).
//!
//! This is a product artifact, separate from `tracing` diagnostics: one line
//! per successful operation, never read back by the program.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use tracing::warn;

pub const DEFAULT_LOG_FILE: &str = "file_explorer_log.txt";

/// Timestamp layout of a record, e.g. `Fri Oct 16 14:57:02 2026`.
const TIMESTAMP_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpLog {
    path: PathBuf,
}

impl OpLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record stamped with the current local time. The file is
    /// created on first write.
    pub fn append(&self, description: &str) -> Result<()> {
        let line = format_record(&Local::now(), description);
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("open log {}", self.path.display()))?;
        file.write_all(line.as_bytes())
            .with_context(|| format!("append log {}", self.path.display()))?;
        Ok(())
    }

    /// Like [`OpLog::append`], but a failure only emits a warning.
    pub fn record(&self, description: &str) {
        if let Err(err) = self.append(description) {
            warn!(error = %format!("{err:#}"), "operation log write failed");
        }
    }
}

/// Render `[<timestamp>] <description>\n`.
pub fn format_record(timestamp: &DateTime<Local>, description: &str) -> String {
    format!("[{}] {}\n", timestamp.format(TIMESTAMP_FORMAT), description)
}
