use crate::config::types::{
    Config, EditorConfig, LoggingConfig, PathConfig, DEFAULT_DAILY_DIR,
    DEFAULT_DAILY_TEMPLATE, DEFAULT_EDITOR, DEFAULT_INBOX_DIR, DEFAULT_LOG_LEVEL,
    DEFAULT_NVIM_ARGS, DEFAULT_NVIM_COMMAND, DEFAULT_WEEKLY_DIR, DEFAULT_WEEKLY_TEMPLATE,
};
use shellexpand::full;
use std::collections::HashMap;
use std::env;
use std::path::PathBuf;

use thiserror::Error;

pub const ROOT_VAR: &str = "ZETTELKASTEN";
pub const INBOX_DIR_VAR: &str = "ZETTELKASTEN_INBOX_DIR";
pub const DAILY_DIR_VAR: &str = "ZETTELKASTEN_DAILY_DIR";
pub const WEEKLY_DIR_VAR: &str = "ZETTELKASTEN_WEEKLY_DIR";
pub const DAILY_TEMPLATE_VAR: &str = "ZETTELKASTEN_DAILY_TEMPLATE";
pub const WEEKLY_TEMPLATE_VAR: &str = "ZETTELKASTEN_WEEKLY_TEMPLATE";
pub const EDITOR_VAR: &str = "ZETTELKASTEN_EDITOR";
pub const NVIM_ARGS_VAR: &str = "ZETTELKASTEN_NVIM_ARGS";
pub const NVIM_COMMANDS_VAR: &str = "ZETTELKASTEN_NVIM_COMMANDS";
pub const LOG_LEVEL_VAR: &str = "ZETTELKASTEN_LOG_LEVEL";
pub const LOG_FILE_VAR: &str = "ZETTELKASTEN_LOG_FILE";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(
        "Environment variable {0} is required. Set it to your Zettelkasten root directory."
    )]
    MissingVar(&'static str),

    #[error("Zettelkasten root directory does not exist: {0}")]
    RootNotFound(String),

    #[error("failed to expand '{0}'")]
    Expand(String),
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Config, ConfigError> {
        Self::load_with(|key| env::var(key).ok())
    }

    /// Load configuration from an explicit variable map instead of the
    /// process environment.
    pub fn from_map(vars: &HashMap<String, String>) -> Result<Config, ConfigError> {
        Self::load_with(|key| vars.get(key).cloned())
    }

    /// Load configuration using `lookup` to read variables. Empty values
    /// count as unset.
    pub fn load_with<F>(lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());
        let or_default = |key: &str, default: &str| get(key).unwrap_or_else(|| default.to_string());

        let raw_root = get(ROOT_VAR).ok_or(ConfigError::MissingVar(ROOT_VAR))?;
        let root = expand_path(&raw_root)?;
        if !root.exists() {
            return Err(ConfigError::RootNotFound(root.display().to_string()));
        }
        let root = root
            .canonicalize()
            .map_err(|_| ConfigError::RootNotFound(root.display().to_string()))?;

        let paths = PathConfig {
            root,
            inbox_dir: or_default(INBOX_DIR_VAR, DEFAULT_INBOX_DIR),
            daily_dir: or_default(DAILY_DIR_VAR, DEFAULT_DAILY_DIR),
            weekly_dir: or_default(WEEKLY_DIR_VAR, DEFAULT_WEEKLY_DIR),
            daily_template: or_default(DAILY_TEMPLATE_VAR, DEFAULT_DAILY_TEMPLATE),
            weekly_template: or_default(WEEKLY_TEMPLATE_VAR, DEFAULT_WEEKLY_TEMPLATE),
        };

        let editor = EditorConfig {
            command: or_default(EDITOR_VAR, DEFAULT_EDITOR),
            args: or_default(NVIM_ARGS_VAR, DEFAULT_NVIM_ARGS),
            commands: get(NVIM_COMMANDS_VAR)
                .map(|raw| parse_commands(&raw))
                .unwrap_or_else(|| vec![DEFAULT_NVIM_COMMAND.to_string()]),
        };

        let logging = LoggingConfig {
            level: or_default(LOG_LEVEL_VAR, DEFAULT_LOG_LEVEL),
            file: get(LOG_FILE_VAR).map(|f| expand_path(&f)).transpose()?,
        };

        Ok(Config { paths, editor, logging })
    }
}

/// Split a comma-separated command list, dropping blank entries.
pub fn parse_commands(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

fn expand_path(input: &str) -> Result<PathBuf, ConfigError> {
    let expanded = full(input).map_err(|_| ConfigError::Expand(input.to_string()))?;
    Ok(PathBuf::from(expanded.to_string()))
}
