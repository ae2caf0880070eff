//! Titled notes in the inbox, backlinked from today's daily note.

use std::fs;
use std::path::PathBuf;

use thiserror::Error;

use crate::clock::{Clock, SystemClock};
use crate::config::types::Config;
use crate::error::ZkError;
use crate::links::wikilink;
use crate::periodic::{Period, PeriodicNote};

pub const MAX_TITLE_LENGTH: usize = 80;
pub const NOTE_EXTENSION: &str = ".md";

#[derive(Debug, Error)]
pub enum NoteError {
    #[error("{0}")]
    Title(String),

    #[error("Note already exists: {}", .0.display())]
    Exists(PathBuf),
}

/// Check that `title` can be used as a note file stem.
///
/// The extension is added by the note itself, so a title already ending in
/// `.md` is rejected rather than producing `name.md.md`.
pub fn validate_title(title: &str) -> Result<(), NoteError> {
    if title.is_empty() {
        return Err(NoteError::Title("Note title cannot be empty.".into()));
    }
    if title.chars().count() > MAX_TITLE_LENGTH {
        return Err(NoteError::Title(format!(
            "Title cannot be more than {MAX_TITLE_LENGTH} characters."
        )));
    }
    if title.ends_with(NOTE_EXTENSION) {
        return Err(NoteError::Title(format!(
            "Leave out the {NOTE_EXTENSION} extension."
        )));
    }
    Ok(())
}

/// A note in the inbox. Only constructible with a valid title.
#[derive(Debug, Clone)]
pub struct Note<'a, C = SystemClock> {
    title: String,
    config: &'a Config,
    clock: C,
}

impl<'a> Note<'a> {
    pub fn new(title: impl Into<String>, config: &'a Config) -> Result<Self, NoteError> {
        Self::with_clock(title, config, SystemClock)
    }
}

impl<'a, C: Clock> Note<'a, C> {
    pub fn with_clock(
        title: impl Into<String>,
        config: &'a Config,
        clock: C,
    ) -> Result<Self, NoteError> {
        let title = title.into();
        validate_title(&title)?;
        Ok(Self { title, config, clock })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn path(&self) -> PathBuf {
        self.config.paths.inbox().join(format!("{}{NOTE_EXTENSION}", self.title))
    }

    pub fn exists(&self) -> bool {
        self.path().exists()
    }

    pub fn content(&self) -> String {
        format!("# {}\n\n", self.title)
    }

    /// Write the note, refusing to overwrite an existing file.
    ///
    /// With `link_to_daily`, the backlink is appended to today's daily note
    /// before the note itself is written, so the daily note records the
    /// attempt even if the write fails.
    pub fn create(&self, link_to_daily: bool) -> Result<PathBuf, ZkError> {
        let path = self.path();
        if self.exists() {
            return Err(NoteError::Exists(path).into());
        }

        let inbox = self.config.paths.inbox();
        fs::create_dir_all(&inbox).map_err(|e| ZkError::io(&inbox, e))?;

        if link_to_daily {
            PeriodicNote::with_clock(Period::Daily, self.config, &self.clock)
                .append(&format!("\n{}", wikilink(&self.title)))?;
        }

        fs::write(&path, self.content()).map_err(|e| ZkError::io(&path, e))?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(String::new(), "empty")]
    #[case("a".repeat(81), "80")]
    #[case("x.md".to_string(), "extension")]
    fn invalid_titles(#[case] title: String, #[case] mentions: &str) {
        let err = validate_title(&title).unwrap_err();
        assert!(matches!(err, NoteError::Title(_)));
        assert!(err.to_string().contains(mentions), "{err} should mention {mentions}");
    }

    #[rstest]
    #[case("ok".to_string())]
    #[case("a".repeat(80))]
    #[case("notes.md draft".to_string())]
    #[case("é".repeat(80))]
    fn valid_titles(#[case] title: String) {
        assert!(validate_title(&title).is_ok());
    }

    #[test]
    fn path_is_inbox_title_md() {
        let config = Config::with_root("/zk");
        let note = Note::new("Foo", &config).unwrap();
        assert_eq!(note.title(), "Foo");
        assert_eq!(note.path(), PathBuf::from("/zk/0 Inbox/Foo.md"));
        assert_eq!(note.content(), "# Foo\n\n");
    }

    #[test]
    fn invalid_title_cannot_build_note() {
        let config = Config::with_root("/zk");
        assert!(Note::new("", &config).is_err());
    }
}
