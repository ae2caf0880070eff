//! Console messages for interactive use.
//!
//! Colours are only emitted when the stream is a terminal and `NO_COLOR` is
//! unset; `plain` never styles so its output stays machine-readable.

use crossterm::style::{Color, Stylize};
use std::io::{self, IsTerminal};

fn color_enabled(is_terminal: bool) -> bool {
    is_terminal && std::env::var_os("NO_COLOR").is_none()
}

fn paint(message: &str, color: Color, is_terminal: bool) -> String {
    if color_enabled(is_terminal) {
        message.with(color).to_string()
    } else {
        message.to_string()
    }
}

/// Green message on stdout.
pub fn success(message: &str) {
    println!("{}", paint(message, Color::Green, io::stdout().is_terminal()));
}

/// Red message on stderr.
pub fn error(message: &str) {
    eprintln!("{}", paint(message, Color::Red, io::stderr().is_terminal()));
}

/// Unstyled line on stdout, for other programs to parse.
pub fn plain(message: &str) {
    println!("{message}");
}
