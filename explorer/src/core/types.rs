//! Shared value types passed between the session and I/O helpers.

use std::path::Path;

use chrono::{DateTime, Local};

use crate::core::path::{MAX_PATH_BYTES, resolve_with_limit};

/// The session's current directory.
///
/// Owned by the session and replaced only after a successful change of
/// directory, so it always names a directory that existed when it was set.
/// Fragments typed by the user are resolved against it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkingDir {
    path: String,
    max_path_bytes: usize,
}

impl WorkingDir {
    /// Wrap an absolute directory path. No filesystem check is performed here;
    /// use `io::ops::open_working_dir` to validate first.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            max_path_bytes: MAX_PATH_BYTES,
        }
    }

    /// Override the resolved-path length limit (see [`resolve_with_limit`]).
    pub fn with_max_path_bytes(mut self, max_path_bytes: usize) -> Self {
        self.max_path_bytes = max_path_bytes;
        self
    }

    pub fn as_str(&self) -> &str {
        &self.path
    }

    pub fn as_path(&self) -> &Path {
        Path::new(&self.path)
    }

    pub fn max_path_bytes(&self) -> usize {
        self.max_path_bytes
    }

    /// Resolve a user fragment against this directory.
    pub fn resolve(&self, fragment: &str) -> String {
        resolve_with_limit(&self.path, fragment, self.max_path_bytes)
    }

    /// Same limit, different directory.
    pub fn replaced_by(&self, path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            max_path_bytes: self.max_path_bytes,
        }
    }
}

impl std::fmt::Display for WorkingDir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.path)
    }
}

/// One immediate child of a listed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntryInfo {
    pub name: String,
    pub is_directory: bool,
    /// Byte length for files; `None` for directories or unreadable metadata.
    pub size: Option<u64>,
    pub last_modified: Option<DateTime<Local>>,
}

/// Metadata reported by the properties operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileProperties {
    pub path: String,
    pub size: u64,
    pub is_directory: bool,
    pub last_modified: Option<DateTime<Local>>,
}
