use std::fs;
use std::io;
use std::path::Path;

use tracing::warn;

/// Read an optional template.
///
/// Returns `None` when the file does not exist, is empty, or cannot be read.
/// Read failures are logged and never surfaced: a missing template only
/// means the caller falls back to its default content.
pub fn load_template(path: &Path) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(content) if content.is_empty() => None,
        Ok(content) => Some(content),
        Err(e) if e.kind() == io::ErrorKind::NotFound => None,
        Err(e) => {
            warn!("Could not read template {}: {e}", path.display());
            None
        }
    }
}
