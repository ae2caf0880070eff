//! Launching the user's editor on a note.

use std::ffi::OsString;
use std::io;
use std::path::Path;
use std::process::{Command, ExitStatus};

use thiserror::Error;
use tracing::debug;

use crate::config::types::EditorConfig;

#[derive(Debug, Error)]
pub enum EditorError {
    #[error("Editor '{0}' not found. Make sure it's installed and in your PATH.")]
    NotFound(String),

    #[error("failed to launch editor '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("Editor exited with error: {0}")]
    ExitStatus(ExitStatus),
}

/// Something that can open a file for the user to edit.
pub trait Launcher {
    fn open(&self, path: &Path) -> Result<(), EditorError>;
}

/// Spawns the configured editor and waits for it to exit.
#[derive(Debug, Clone)]
pub struct SystemEditor {
    config: EditorConfig,
}

impl SystemEditor {
    pub fn new(config: EditorConfig) -> Self {
        Self { config }
    }
}

impl Launcher for SystemEditor {
    fn open(&self, path: &Path) -> Result<(), EditorError> {
        open_in_editor(path, &self.config)
    }
}

/// Build the argv for opening `path`.
///
/// Neovim gets the configured argument and `-c` commands; any other editor
/// only receives the file path.
pub fn build_command(path: &Path, config: &EditorConfig) -> Vec<OsString> {
    let mut argv: Vec<OsString> = vec![config.command.clone().into()];
    if config.is_nvim() {
        argv.push(config.args.clone().into());
        argv.push(path.as_os_str().to_owned());
        for cmd in &config.commands {
            argv.push("-c".into());
            argv.push(cmd.clone().into());
        }
    } else {
        argv.push(path.as_os_str().to_owned());
    }
    argv
}

pub fn open_in_editor(path: &Path, config: &EditorConfig) -> Result<(), EditorError> {
    let argv = build_command(path, config);
    debug!("Launching editor: {argv:?}");

    let status = Command::new(&argv[0]).args(&argv[1..]).status().map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            EditorError::NotFound(config.command.clone())
        } else {
            EditorError::Spawn { command: config.command.clone(), source: e }
        }
    })?;

    if status.success() {
        Ok(())
    } else {
        Err(EditorError::ExitStatus(status))
    }
}
