//! Single-primitive filesystem operations on user fragments.
//!
//! Each function resolves its fragments against the working directory, makes
//! one host call, and returns the resolved path(s) on success so the caller
//! can report them. None of them write to the operation log; the session does
//! that after a success.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;

use chrono::{DateTime, Local};
use tracing::{debug, warn};

use crate::core::types::{FileProperties, WorkingDir};
use crate::error::OpError;

/// Validate `path` as a starting directory and wrap it as a [`WorkingDir`].
pub fn open_working_dir(path: &Path, max_path_bytes: usize) -> Result<WorkingDir, OpError> {
    let Some(target) = path.to_str() else {
        return Err(OpError::NotUtf8 {
            path: path.to_string_lossy().into_owned(),
        });
    };
    let canonical = enter_dir(target)?;
    Ok(WorkingDir::new(canonical).with_max_path_bytes(max_path_bytes))
}

/// Resolve `fragment` and return it as the new working directory.
///
/// `cwd` is left untouched on failure; the caller keeps using it.
pub fn change_dir(cwd: &WorkingDir, fragment: &str) -> Result<WorkingDir, OpError> {
    let target = cwd.resolve(fragment);
    let canonical = enter_dir(&target)?;
    debug!(from = %cwd, to = %canonical, "changed directory");
    Ok(cwd.replaced_by(canonical))
}

fn enter_dir(target: &str) -> Result<String, OpError> {
    let metadata =
        fs::metadata(target).map_err(|err| OpError::from_io("change directory", target, err))?;
    if !metadata.is_dir() {
        return Err(OpError::NotADirectory {
            path: target.to_string(),
        });
    }
    fs::read_dir(target).map_err(|err| OpError::cannot_open(target, err))?;
    let canonical = fs::canonicalize(target)
        .map_err(|err| OpError::from_io("change directory", target, err))?;
    canonical
        .into_os_string()
        .into_string()
        .map_err(|raw| OpError::NotUtf8 {
            path: raw.to_string_lossy().into_owned(),
        })
}

/// Resolve a user-typed name, rejecting blank input.
///
/// A blank fragment would resolve to the working directory itself.
fn resolve_name(cwd: &WorkingDir, fragment: &str) -> Result<String, OpError> {
    if fragment.trim().is_empty() {
        return Err(OpError::EmptyName);
    }
    Ok(cwd.resolve(fragment))
}

/// Refuse to remove or move `target` when it is the working directory or one
/// of its ancestors. Symbolic links are checked as links, not as their targets.
fn guard_working_dir(cwd: &WorkingDir, target: &str) -> Result<(), OpError> {
    let Ok(metadata) = fs::symlink_metadata(target) else {
        return Ok(());
    };
    if metadata.file_type().is_symlink() {
        return Ok(());
    }
    match fs::canonicalize(target) {
        Ok(canonical) if cwd.as_path().starts_with(&canonical) => {
            Err(OpError::ContainsWorkingDir {
                path: target.to_string(),
            })
        }
        _ => Ok(()),
    }
}

/// Create one empty directory. Fails if anything already exists at the path.
pub fn create_dir(cwd: &WorkingDir, fragment: &str) -> Result<String, OpError> {
    let target = resolve_name(cwd, fragment)?;
    fs::create_dir(&target).map_err(|err| OpError::from_io("create directory", &target, err))?;
    Ok(target)
}

/// Remove a file or directory.
///
/// Directories must be empty unless `recursive` is set. Symbolic links are
/// removed, never their targets. The working directory and its ancestors
/// are never removed.
pub fn delete(cwd: &WorkingDir, fragment: &str, recursive: bool) -> Result<String, OpError> {
    let target = resolve_name(cwd, fragment)?;
    let metadata =
        fs::symlink_metadata(&target).map_err(|err| OpError::from_io("delete", &target, err))?;
    guard_working_dir(cwd, &target)?;
    let removed = if !metadata.is_dir() {
        fs::remove_file(&target)
    } else if recursive {
        fs::remove_dir_all(&target)
    } else {
        fs::remove_dir(&target)
    };
    removed.map_err(|err| OpError::from_io("delete", &target, err))?;
    Ok(target)
}

/// Rename or move `from` to `to`, both resolved against `cwd`.
///
/// Never replaces an existing destination.
pub fn rename(cwd: &WorkingDir, from: &str, to: &str) -> Result<(String, String), OpError> {
    let source = resolve_name(cwd, from)?;
    let destination = resolve_name(cwd, to)?;
    fs::symlink_metadata(&source).map_err(|err| OpError::from_io("rename", &source, err))?;
    guard_working_dir(cwd, &source)?;
    if fs::symlink_metadata(&destination).is_ok() {
        return Err(OpError::AlreadyExists { path: destination });
    }
    fs::rename(&source, &destination)
        .map_err(|err| OpError::from_io("rename", &destination, err))?;
    Ok((source, destination))
}

/// Copy a regular file byte-for-byte. Never overwrites: the destination is
/// created exclusively, and a partially written destination is removed.
///
/// Returns the number of bytes copied.
pub fn copy_file(cwd: &WorkingDir, from: &str, to: &str) -> Result<u64, OpError> {
    let source = resolve_name(cwd, from)?;
    let destination = resolve_name(cwd, to)?;

    let metadata = fs::metadata(&source).map_err(|err| OpError::from_io("copy", &source, err))?;
    if metadata.is_dir() {
        return Err(OpError::NotAFile { path: source });
    }
    let mut reader = File::open(&source).map_err(|err| OpError::from_io("copy", &source, err))?;
    let mut writer = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&destination)
        .map_err(|err| OpError::from_io("copy", &destination, err))?;

    match io::copy(&mut reader, &mut writer) {
        Ok(bytes) => {
            drop(writer);
            if let Err(err) = fs::set_permissions(&destination, metadata.permissions()) {
                warn!(path = %destination, error = %err, "copy permissions");
            }
            Ok(bytes)
        }
        Err(err) => {
            drop(writer);
            if let Err(cleanup) = fs::remove_file(&destination) {
                warn!(path = %destination, error = %cleanup, "remove partial copy");
            }
            Err(OpError::from_io("copy", &destination, err))
        }
    }
}

/// Read size, kind, and modification time of a path.
pub fn properties(cwd: &WorkingDir, fragment: &str) -> Result<FileProperties, OpError> {
    let target = resolve_name(cwd, fragment)?;
    let metadata =
        fs::metadata(&target).map_err(|err| OpError::from_io("properties", &target, err))?;
    Ok(FileProperties {
        size: metadata.len(),
        is_directory: metadata.is_dir(),
        last_modified: metadata.modified().ok().map(DateTime::<Local>::from),
        path: target,
    })
}
