//! Wiki-style `[[target]]` links.

use regex::Regex;
use std::sync::LazyLock;

static WIKILINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[\[([^\[\]]*)\]\]$").expect("valid regex"));

/// Format `target` as a wiki link.
pub fn wikilink(target: &str) -> String {
    format!("[[{target}]]")
}

/// Target of `text` when the whole of it is a single wiki link.
///
/// Text that merely contains a link, such as `Notes on [[X]]`, yields `None`.
pub fn parse_wikilink(text: &str) -> Option<&str> {
    WIKILINK_RE.captures(text).and_then(|c| c.get(1)).map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_link() {
        assert_eq!(wikilink("2025-01-06"), "[[2025-01-06]]");
    }

    #[test]
    fn parses_whole_link() {
        assert_eq!(parse_wikilink("[[Foo bar]]"), Some("Foo bar"));
        assert_eq!(parse_wikilink("[[]]"), Some(""));
    }

    #[test]
    fn text_around_a_link_is_not_a_link() {
        assert_eq!(parse_wikilink("Meeting about [[Project X]] follow-up"), None);
        assert_eq!(parse_wikilink("- [[Foo]]"), None);
        assert_eq!(parse_wikilink("[[A]] and [[B]]"), None);
        assert_eq!(parse_wikilink("no link [here]"), None);
    }
}
