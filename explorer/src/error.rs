//! Typed failures for single filesystem operations.
//!
//! Every variant is reported to the user at the operation boundary and the
//! session keeps running. Startup and terminal failures use `anyhow` instead.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OpError {
    #[error("{path}: no such file or directory")]
    NotFound { path: String },

    #[error("{path}: access denied")]
    AccessDenied { path: String },

    #[error("cannot open directory {path}: {source}")]
    CannotOpen { path: String, source: io::Error },

    #[error("{path}: already exists")]
    AlreadyExists { path: String },

    #[error("{path}: not a directory")]
    NotADirectory { path: String },

    #[error("{path}: not a regular file")]
    NotAFile { path: String },

    #[error("name must not be empty")]
    EmptyName,

    #[error("{path}: contains the working directory")]
    ContainsWorkingDir { path: String },

    #[error("{path}: path is not valid UTF-8")]
    NotUtf8 { path: String },

    #[error("{op} {path}: {source}")]
    Io {
        op: &'static str,
        path: String,
        source: io::Error,
    },
}

impl OpError {
    /// Classify a host error raised while performing `op` on `path`.
    pub fn from_io(op: &'static str, path: &str, err: io::Error) -> Self {
        let path = path.to_string();
        match err.kind() {
            io::ErrorKind::NotFound => Self::NotFound { path },
            io::ErrorKind::PermissionDenied => Self::AccessDenied { path },
            io::ErrorKind::AlreadyExists => Self::AlreadyExists { path },
            _ => Self::Io {
                op,
                path,
                source: err,
            },
        }
    }

    pub fn cannot_open(path: &str, source: io::Error) -> Self {
        Self::CannotOpen {
            path: path.to_string(),
            source,
        }
    }
}
