//! Test-only helpers for building directory fixtures and scripted sessions.

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use tempfile::TempDir;

use crate::core::path::MAX_PATH_BYTES;
use crate::io::console::{Console, ConsoleOptions};
use crate::io::op_log::OpLog;
use crate::io::ops::open_working_dir;
use crate::session::{Session, SessionOptions};

pub type ScriptedSession = Session<Cursor<Vec<u8>>, Vec<u8>>;

/// A temporary directory holding a file tree plus a log file next to it.
///
/// The log lives outside the tree so listings and searches never see it.
pub struct TestWorkspace {
    temp: TempDir,
}

impl TestWorkspace {
    pub fn new() -> Result<Self> {
        let temp = tempfile::tempdir().context("create tempdir")?;
        fs::create_dir(temp.path().join("tree")).context("create tree dir")?;
        Ok(Self { temp })
    }

    /// Root of the file tree the session starts in.
    pub fn root(&self) -> PathBuf {
        self.temp.path().join("tree")
    }

    pub fn log_path(&self) -> PathBuf {
        self.temp.path().join("ops.log")
    }

    pub fn build(&self, entries: &[&str]) -> Result<()> {
        build_tree(&self.root(), entries)
    }

    pub fn session(&self, script: &str) -> Result<ScriptedSession> {
        scripted_session(&self.root(), &self.log_path(), script)
    }

    pub fn logged(&self) -> Vec<String> {
        log_descriptions(&self.log_path())
    }
}

/// Create files under `root`. Entries ending in `/` become directories.
pub fn build_tree(root: &Path, entries: &[&str]) -> Result<()> {
    for entry in entries {
        let path = root.join(entry.trim_end_matches('/'));
        if entry.ends_with('/') {
            fs::create_dir_all(&path).with_context(|| format!("mkdir {}", path.display()))?;
            continue;
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| format!("mkdir {}", parent.display()))?;
        }
        fs::write(&path, entry.as_bytes()).with_context(|| format!("write {}", path.display()))?;
    }
    Ok(())
}

/// Session rooted at `dir`, fed `script` as stdin, without colors or pacing.
pub fn scripted_session(dir: &Path, log_path: &Path, script: &str) -> Result<ScriptedSession> {
    let cwd = open_working_dir(dir, MAX_PATH_BYTES).context("open working dir")?;
    let console = Console::new(
        Cursor::new(script.as_bytes().to_vec()),
        Vec::new(),
        ConsoleOptions {
            color: false,
            pacing: Duration::ZERO,
        },
    );
    Ok(Session::new(
        console,
        cwd,
        OpLog::new(log_path),
        SessionOptions::default(),
    ))
}

/// Everything the session printed so far.
pub fn transcript(session: &ScriptedSession) -> String {
    String::from_utf8_lossy(session.console().output()).into_owned()
}

/// Operation descriptions from a log file, timestamps stripped.
/// A missing log file reads as empty.
pub fn log_descriptions(path: &Path) -> Vec<String> {
    let Ok(contents) = fs::read_to_string(path) else {
        return Vec::new();
    };
    contents
        .lines()
        .filter_map(|line| line.split_once("] ").map(|(_, rest)| rest.to_string()))
        .collect()
}
