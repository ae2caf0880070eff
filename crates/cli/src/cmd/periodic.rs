//! `zk day` and `zk week`.

use tracing::debug;
use zk_core::{Config, Period, PeriodicNote, SystemEditor};

use super::CommandError;

pub fn run(cfg: &Config, period: Period) -> Result<(), CommandError> {
    let note = PeriodicNote::new(period, cfg);
    debug!("Opening {period} note {}", note.date_key());

    let editor = SystemEditor::new(cfg.editor.clone());
    note.open(&editor)?;
    Ok(())
}
