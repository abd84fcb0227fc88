//! Shared types for kasten.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A note file discovered in the vault.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Path as reported by the search executor (rooted at the vault).
    pub path: PathBuf,

    /// Base file name of `path`.
    pub name: String,

    /// Text of the first `title:` line, if the note has one.
    ///
    /// `None` means no title line matched; `Some("")` means the line was
    /// present but empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Vault root the note was discovered under.
    pub vault: PathBuf,
}

impl Note {
    /// Build a note for `path`, deriving its name.
    pub fn new(path: impl Into<PathBuf>, vault: impl Into<PathBuf>, title: Option<String>) -> Self {
        let path = path.into();
        let name = file_name(&path);
        Self {
            path,
            name,
            title,
            vault: vault.into(),
        }
    }

    /// Path relative to the vault root, or the full path if it lies outside.
    pub fn relative_path(&self) -> &Path {
        self.path.strip_prefix(&self.vault).unwrap_or(&self.path)
    }

    /// Title if present, otherwise the full path.
    pub fn display_title(&self) -> String {
        match self.title {
            Some(ref title) => title.clone(),
            None => self.path.to_string_lossy().into_owned(),
        }
    }
}

/// One capture span inside a matched line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submatch {
    pub text: String,
    /// Byte offset of the span within the line.
    pub start: usize,
    /// Byte offset one past the end of the span.
    pub end: usize,
}

/// One matched line reported by a structured search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchMatch {
    pub path: PathBuf,

    /// Full line text, including its terminator when the file had one.
    pub line: String,

    /// Match spans in order; may be empty.
    pub submatches: Vec<Submatch>,

    /// Line number (1-indexed).
    pub line_number: u64,

    /// Byte offset of the line start within the file.
    pub absolute_offset: u64,
}

impl SearchMatch {
    /// Text of the first span. A match without spans has nothing to extract.
    pub fn first_text(&self) -> Option<&str> {
        self.submatches.first().map(|s| s.text.as_str())
    }
}

/// Base file name of a path, lossily converted.
pub fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
