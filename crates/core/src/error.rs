//! Errors surfaced to the command boundary.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::loader::ConfigError;
use crate::editor::EditorError;
use crate::notes::NoteError;

/// Exit code for configuration errors.
pub const EXIT_CONFIG: i32 = 2;
/// Exit code for every other error.
pub const EXIT_FAILURE: i32 = 1;

#[derive(Debug, Error)]
pub enum ZkError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Note(#[from] NoteError),

    /// Reserved for template processing; template reads never fail today.
    #[error("template error: {0}")]
    Template(String),

    #[error(transparent)]
    Editor(#[from] EditorError),

    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ZkError {
    pub fn io(path: &Path, source: io::Error) -> Self {
        ZkError::Io { path: path.to_path_buf(), source }
    }

    pub fn is_config(&self) -> bool {
        matches!(self, ZkError::Config(_))
    }

    pub fn exit_code(&self) -> i32 {
        if self.is_config() {
            EXIT_CONFIG
        } else {
            EXIT_FAILURE
        }
    }
}
