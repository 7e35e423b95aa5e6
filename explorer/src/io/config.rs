//! Explorer configuration stored in `explorer.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::core::path::MAX_PATH_BYTES;
use crate::io::op_log::DEFAULT_LOG_FILE;

/// Explorer configuration (TOML).
///
/// Missing fields default to an interactive, colored session with pacing.
/// Command-line flags are applied on top after loading.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ExplorerConfig {
    /// Operation log location. Relative paths are taken from the starting directory.
    pub log_file: PathBuf,

    /// Total length of the "Please wait" animation before delete, rename and
    /// copy, in milliseconds. Zero disables the delay.
    pub pacing_ms: u64,

    /// Emit ANSI colors.
    pub color: bool,

    /// Print the welcome banner and a quote at startup.
    pub show_banner: bool,

    /// Let delete remove non-empty directories.
    pub delete_recursive: bool,

    /// Resolved paths are truncated to `max_path_bytes - 1` bytes.
    pub max_path_bytes: usize,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            pacing_ms: 2_500,
            color: true,
            show_banner: true,
            delete_recursive: false,
            max_path_bytes: MAX_PATH_BYTES,
        }
    }
}

impl ExplorerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.log_file.as_os_str().is_empty() {
            return Err(anyhow!("log_file must not be empty"));
        }
        if self.max_path_bytes < 2 {
            return Err(anyhow!("max_path_bytes must be >= 2"));
        }
        if self.pacing_ms > 60_000 {
            return Err(anyhow!("pacing_ms must be <= 60000"));
        }
        Ok(())
    }

    /// Log location with relative paths anchored at `start_dir`.
    pub fn log_path(&self, start_dir: &Path) -> PathBuf {
        if self.log_file.is_absolute() {
            self.log_file.clone()
        } else {
            start_dir.join(&self.log_file)
        }
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `ExplorerConfig::default()`.
pub fn load_config(path: &Path) -> Result<ExplorerConfig> {
    if !path.exists() {
        let cfg = ExplorerConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: ExplorerConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}
