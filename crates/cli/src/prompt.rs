//! Interactive prompt for a missing note title.
//!
//! On a terminal the title is asked for with dialoguer; otherwise one line is
//! read from stdin so that `echo title | zk new` works.

use dialoguer::{theme::ColorfulTheme, Input};
use std::io::{self, BufRead, IsTerminal};

pub const PROMPT_TITLE: &str = "Enter note title";

#[derive(Debug)]
pub enum PromptError {
    /// IO error while reading the answer.
    Io(io::Error),
    /// The dialog itself failed.
    Dialog(dialoguer::Error),
}

impl std::fmt::Display for PromptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PromptError::Io(e) => write!(f, "failed to read note title: {e}"),
            PromptError::Dialog(e) => write!(f, "failed to prompt for note title: {e}"),
        }
    }
}

impl std::error::Error for PromptError {}

impl From<io::Error> for PromptError {
    fn from(e: io::Error) -> Self {
        PromptError::Io(e)
    }
}

impl From<dialoguer::Error> for PromptError {
    fn from(e: dialoguer::Error) -> Self {
        PromptError::Dialog(e)
    }
}

/// Ask for a note title. An empty answer is returned as-is and left for
/// title validation to reject.
pub fn prompt_title() -> Result<String, PromptError> {
    if io::stdin().is_terminal() {
        let title: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(PROMPT_TITLE)
            .allow_empty(true)
            .interact_text()?;
        return Ok(title);
    }
    read_title(io::stdin().lock())
}

fn read_title(mut reader: impl BufRead) -> Result<String, PromptError> {
    let mut line = String::new();
    reader.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_first_line() {
        let input = b"First idea\nsecond line\n";
        assert_eq!(read_title(&input[..]).unwrap(), "First idea");
    }

    #[test]
    fn eof_yields_empty_title() {
        assert_eq!(read_title(&b""[..]).unwrap(), "");
    }

    #[test]
    fn windows_line_endings_are_stripped() {
        assert_eq!(read_title(&b"Idea\r\n"[..]).unwrap(), "Idea");
    }
}
