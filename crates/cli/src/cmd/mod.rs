pub mod doctor;
pub mod new;
pub mod output;
pub mod periodic;

use std::fmt;

use zk_core::config::loader::ConfigError;
use zk_core::editor::EditorError;
use zk_core::notes::NoteError;
use zk_core::ZkError;

use crate::prompt::PromptError;

/// Failure of a command, as reported at the process boundary.
#[derive(Debug)]
pub enum CommandError {
    Zk(ZkError),
    /// Anything the core does not classify.
    Unexpected(String),
}

impl CommandError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CommandError::Zk(e) => e.exit_code(),
            CommandError::Unexpected(_) => zk_core::error::EXIT_FAILURE,
        }
    }
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Zk(e @ ZkError::Config(_)) => write!(f, "Configuration error: {e}"),
            CommandError::Zk(e @ ZkError::Io { .. }) => write!(f, "Unexpected error: {e}"),
            CommandError::Zk(e) => write!(f, "{e}"),
            CommandError::Unexpected(msg) => write!(f, "Unexpected error: {msg}"),
        }
    }
}

impl std::error::Error for CommandError {}

impl From<ZkError> for CommandError {
    fn from(e: ZkError) -> Self {
        CommandError::Zk(e)
    }
}

impl From<ConfigError> for CommandError {
    fn from(e: ConfigError) -> Self {
        CommandError::Zk(e.into())
    }
}

impl From<NoteError> for CommandError {
    fn from(e: NoteError) -> Self {
        CommandError::Zk(e.into())
    }
}

impl From<EditorError> for CommandError {
    fn from(e: EditorError) -> Self {
        CommandError::Zk(e.into())
    }
}

impl From<PromptError> for CommandError {
    fn from(e: PromptError) -> Self {
        CommandError::Unexpected(e.to_string())
    }
}
