//! Recursive, depth-first filename search.
//!
//! The root directory must be readable; anything below it that cannot be read
//! is skipped so one locked subdirectory does not spoil the whole search.

use std::fs;
use std::path::Path;

use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use crate::core::matcher::contains_ignore_case;
use crate::error::OpError;

/// Lazy iterator over matching file paths, produced by [`search`].
///
/// Paths are yielded in walk order as they are discovered. Directories are
/// never yielded.
pub struct Matches {
    walker: walkdir::IntoIter,
    pattern: String,
}

/// Start a search for files under `root` whose name contains `pattern`
/// (case-insensitive; an empty pattern matches every file).
///
/// Fails with [`OpError::CannotOpen`] only when `root` itself cannot be read.
/// Symbolic links are not followed.
pub fn search(root: &Path, pattern: &str) -> Result<Matches, OpError> {
    fs::read_dir(root).map_err(|err| OpError::cannot_open(&root.display().to_string(), err))?;
    let walker = WalkDir::new(root)
        .min_depth(1)
        .follow_links(false)
        .into_iter();
    Ok(Matches {
        walker,
        pattern: pattern.to_string(),
    })
}

impl Iterator for Matches {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            let entry = match self.walker.next()? {
                Ok(entry) => entry,
                Err(err) => {
                    debug!(error = %err, "skipping unreadable entry");
                    continue;
                }
            };
            if is_directory(&entry) {
                continue;
            }
            if contains_ignore_case(&entry.file_name().to_string_lossy(), &self.pattern) {
                return Some(entry.path().display().to_string());
            }
        }
    }
}

fn is_directory(entry: &DirEntry) -> bool {
    if entry.file_type().is_dir() {
        return true;
    }
    // Links to directories are neither descended into nor reported.
    entry.path_is_symlink() && fs::metadata(entry.path()).is_ok_and(|meta| meta.is_dir())
}
