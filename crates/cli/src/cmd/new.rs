//! `zk new`: create an inbox note and link it from today's daily note.

use tracing::debug;
use zk_core::editor::Launcher;
use zk_core::links::parse_wikilink;
use zk_core::{Config, Note, SystemEditor};

use super::{output, CommandError};
use crate::prompt::prompt_title;
use crate::NewArgs;

pub fn run(cfg: &Config, args: NewArgs) -> Result<(), CommandError> {
    debug!("Running create new");
    let raw = match args.title.filter(|t| !t.trim().is_empty()) {
        Some(t) => t,
        None => prompt_title()?,
    };
    let title = normalize_title(&raw);

    let note = Note::new(title, cfg)?;
    let path = note.create(true)?;

    if args.vim {
        output::plain(&path.display().to_string());
    } else {
        output::success(&format!("Created note: {}", path.display()));
        SystemEditor::new(cfg.editor.clone()).open(&path)?;
    }
    Ok(())
}

/// Trim the title and unwrap it when the whole title is one `[[wiki link]]`,
/// which is what the Neovim integration sends for a link under the cursor.
fn normalize_title(raw: &str) -> String {
    let trimmed = raw.trim();
    parse_wikilink(trimmed).unwrap_or(trimmed).trim().to_string()
}
