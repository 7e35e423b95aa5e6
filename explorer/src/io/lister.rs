//! Enumeration of a directory's immediate children.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Local};
use tracing::debug;

use crate::core::types::DirEntryInfo;
use crate::error::OpError;

/// List the children of `dir` in host enumeration order.
///
/// `.` and `..` never appear. Entries whose metadata cannot be read are still
/// listed, classified as files with no size or timestamp.
pub fn list_dir(dir: &Path) -> Result<Vec<DirEntryInfo>, OpError> {
    let dir_label = dir.display().to_string();
    let reader = fs::read_dir(dir).map_err(|err| OpError::cannot_open(&dir_label, err))?;

    let mut entries = Vec::new();
    for entry in reader {
        let entry = entry.map_err(|err| OpError::cannot_open(&dir_label, err))?;
        entries.push(describe(&entry));
    }
    debug!(dir = %dir_label, count = entries.len(), "listed directory");
    Ok(entries)
}

fn describe(entry: &fs::DirEntry) -> DirEntryInfo {
    let name = entry.file_name().to_string_lossy().into_owned();
    // Follow symlinks so a link to a directory lists as a directory.
    let metadata = fs::metadata(entry.path()).or_else(|_| entry.metadata()).ok();
    let is_directory = metadata.as_ref().is_some_and(fs::Metadata::is_dir);
    let size = metadata
        .as_ref()
        .filter(|meta| !meta.is_dir())
        .map(fs::Metadata::len);
    let last_modified = metadata
        .as_ref()
        .and_then(|meta| meta.modified().ok())
        .map(DateTime::<Local>::from);
    DirEntryInfo {
        name,
        is_directory,
        size,
        last_modified,
    }
}
