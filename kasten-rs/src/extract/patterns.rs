//! Front-matter line patterns.
//!
//! The search patterns run inside the executor (ripgrep or the builtin walk);
//! the `LazyLock` regexes re-apply them to the matched text to pull out the
//! captured value.

use regex::Regex;
use std::sync::LazyLock;

/// `title: <text>` at the start of a line.
pub const TITLE_PATTERN: &str = r"^title:\s(.*)$";

/// `tags: [...]` at the start of a line.
pub const TAGS_PATTERN: &str = r"^tags:\s\[.*\]";

pub static TITLE: LazyLock<Regex> = LazyLock::new(|| Regex::new(TITLE_PATTERN).unwrap());

/// Contents of the first bracketed list.
pub static TAG_LIST: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[(.+?)\]").unwrap());

/// Pattern matching a tags line whose bracket contents contain `tag`.
///
/// This is a substring test on the raw bracket text, so `go` also matches a
/// note tagged `golang`. The tag is escaped and always matched literally.
pub fn tag_filter_pattern(tag: &str) -> String {
    format!(r"^tags:\s\[.*{}.*\]", regex::escape(tag))
}

/// Captured title from a matched line, trimmed.
pub fn capture_title(text: &str) -> Option<String> {
    let text = text.trim_end_matches(['\n', '\r']);
    TITLE
        .captures(text)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str().trim().to_string())
}

/// Tags listed on a matched `tags:` line.
///
/// Tokens are trimmed but empty ones are kept: `[a, , b]` yields `a`, `""`, `b`.
pub fn split_tags(text: &str) -> Vec<String> {
    match TAG_LIST.captures(text).and_then(|cap| cap.get(1)) {
        Some(list) => list
            .as_str()
            .split(',')
            .map(|tag| tag.trim().to_string())
            .collect(),
        None => Vec::new(),
    }
}
