//! Daily and weekly notes: date keys, default content, idempotent creation
//! and appending.

mod period;

pub use period::{monday_of, Period, PeriodSpec};

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

use tracing::info;

use crate::clock::{Clock, SystemClock};
use crate::config::types::Config;
use crate::editor::Launcher;
use crate::error::ZkError;
use crate::links::wikilink;
use crate::templates::load_template;

/// The note for the period instance containing `clock.today()`.
///
/// Holds no state beyond its inputs; every path and key is derived on demand.
#[derive(Debug, Clone)]
pub struct PeriodicNote<'a, C = SystemClock> {
    period: Period,
    config: &'a Config,
    clock: C,
}

/// Today's daily note on the system clock.
pub fn daily(config: &Config) -> PeriodicNote<'_> {
    PeriodicNote::new(Period::Daily, config)
}

/// This week's weekly note on the system clock.
pub fn weekly(config: &Config) -> PeriodicNote<'_> {
    PeriodicNote::new(Period::Weekly, config)
}

impl<'a> PeriodicNote<'a> {
    pub fn new(period: Period, config: &'a Config) -> Self {
        Self::with_clock(period, config, SystemClock)
    }
}

impl<'a, C: Clock> PeriodicNote<'a, C> {
    pub fn with_clock(period: Period, config: &'a Config, clock: C) -> Self {
        Self { period, config, clock }
    }

    /// Canonical key of the current period, e.g. `2025-01-08` or `2025-W02`.
    pub fn date_key(&self) -> String {
        self.offset_key(0)
    }

    /// Key of the period `offset` days (daily) or weeks (weekly) away.
    pub fn offset_key(&self, offset: i64) -> String {
        self.period.spec().key(self.clock.today(), offset)
    }

    pub fn notes_dir(&self) -> PathBuf {
        self.period.spec().notes_dir(&self.config.paths)
    }

    pub fn template_path(&self) -> PathBuf {
        self.period.spec().template_path(&self.config.paths)
    }

    pub fn note_path(&self) -> PathBuf {
        self.notes_dir().join(format!("{}.md", self.date_key()))
    }

    pub fn exists(&self) -> bool {
        self.note_path().is_file()
    }

    /// Heading linking the previous and next period.
    pub fn default_content(&self) -> String {
        format!("# {} - {}\n\n", wikilink(&self.offset_key(-1)), wikilink(&self.offset_key(1)))
    }

    /// Initial content for a new note: the template if there is one,
    /// otherwise the default heading.
    pub fn content(&self) -> String {
        load_template(&self.template_path()).unwrap_or_else(|| self.default_content())
    }

    /// Create the note unless it already exists. Returns whether it was created.
    ///
    /// Two concurrent invocations may both observe a missing note and both
    /// write it; nothing here guards against that.
    pub fn create(&self) -> Result<bool, ZkError> {
        let path = self.note_path();
        if self.exists() {
            info!(
                "{} note already exists: {}",
                capitalize(self.period.spec().name),
                path.display()
            );
            return Ok(false);
        }

        let dir = self.notes_dir();
        fs::create_dir_all(&dir).map_err(|e| ZkError::io(&dir, e))?;
        fs::write(&path, self.content()).map_err(|e| ZkError::io(&path, e))?;
        info!("Created {} note: {}", self.period, path.display());
        Ok(true)
    }

    /// Create the note if needed and hand it to `editor`.
    pub fn open(&self, editor: &dyn Launcher) -> Result<(), ZkError> {
        self.create()?;
        editor.open(&self.note_path())?;
        Ok(())
    }

    /// Append `text` to the end of the note, creating it first if needed.
    pub fn append(&self, text: &str) -> Result<(), ZkError> {
        self.create()?;
        let path = self.note_path();
        let mut file = OpenOptions::new()
            .append(true)
            .open(&path)
            .map_err(|e| ZkError::io(&path, e))?;
        file.write_all(text.as_bytes()).map_err(|e| ZkError::io(&path, e))
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
