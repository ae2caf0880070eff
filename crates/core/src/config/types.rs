use std::path::{Path, PathBuf};

pub const DEFAULT_INBOX_DIR: &str = "0 Inbox";
pub const DEFAULT_DAILY_DIR: &str = "periodic-notes/daily-notes";
pub const DEFAULT_WEEKLY_DIR: &str = "periodic-notes/weekly-notes";
pub const DEFAULT_DAILY_TEMPLATE: &str = "zk/daily.md";
pub const DEFAULT_WEEKLY_TEMPLATE: &str = "zk/weekly.md";
pub const DEFAULT_EDITOR: &str = "nvim";
/// Jump to the end of the file, open a new line and enter insert mode.
pub const DEFAULT_NVIM_ARGS: &str = "+ normal Gzzo";
pub const DEFAULT_NVIM_COMMAND: &str = ":NoNeckPain";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Fully resolved configuration for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub paths: PathConfig,
    pub editor: EditorConfig,
    pub logging: LoggingConfig,
}

/// Locations inside the Zettelkasten. Everything except `root` is relative to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathConfig {
    pub root: PathBuf,
    pub inbox_dir: String,
    pub daily_dir: String,
    pub weekly_dir: String,
    pub daily_template: String,
    pub weekly_template: String,
}

impl PathConfig {
    /// Path configuration with every sub-path at its default.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            inbox_dir: DEFAULT_INBOX_DIR.to_string(),
            daily_dir: DEFAULT_DAILY_DIR.to_string(),
            weekly_dir: DEFAULT_WEEKLY_DIR.to_string(),
            daily_template: DEFAULT_DAILY_TEMPLATE.to_string(),
            weekly_template: DEFAULT_WEEKLY_TEMPLATE.to_string(),
        }
    }

    pub fn inbox(&self) -> PathBuf {
        self.root.join(&self.inbox_dir)
    }

    pub fn daily_notes(&self) -> PathBuf {
        self.root.join(&self.daily_dir)
    }

    pub fn weekly_notes(&self) -> PathBuf {
        self.root.join(&self.weekly_dir)
    }

    pub fn daily_template_path(&self) -> PathBuf {
        self.root.join(&self.daily_template)
    }

    pub fn weekly_template_path(&self) -> PathBuf {
        self.root.join(&self.weekly_template)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorConfig {
    pub command: String,
    /// Single argument passed before the file path (neovim only).
    pub args: String,
    /// Extra `-c` commands run after the file is loaded (neovim only).
    pub commands: Vec<String>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            command: DEFAULT_EDITOR.to_string(),
            args: DEFAULT_NVIM_ARGS.to_string(),
            commands: vec![DEFAULT_NVIM_COMMAND.to_string()],
        }
    }
}

impl EditorConfig {
    /// Whether the configured command is neovim, judged by its file name so
    /// that absolute paths like `/usr/bin/nvim` are recognised too.
    pub fn is_nvim(&self) -> bool {
        let name = Path::new(&self.command)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(&self.command);
        matches!(name, "nvim" | "neovim")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub level: String,
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: DEFAULT_LOG_LEVEL.to_string(), file: None }
    }
}

impl Config {
    /// Configuration rooted at `root` with defaults everywhere else.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            paths: PathConfig::with_root(root),
            editor: EditorConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}
