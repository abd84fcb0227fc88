//! Actions triggered by picker selections.
//!
//! The editor and the picker are external; they are reached through the
//! [`link::Editor`] and [`tag::PickerLauncher`] traits.

pub mod link;
pub mod tag;

pub use link::{Editor, RegisterContent, RegisterGuard, append_link, link_path, markdown_link};
pub use tag::{PickerLauncher, SourceRequest, select_tag};

use serde::Serialize;
use std::path::PathBuf;

/// What the picker should do after an action ran.
///
/// Both actions leave the picker as it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionFlags {
    #[default]
    None,
}

/// Editor mode the picker was opened from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InsertMode {
    #[default]
    Normal,
    Insert,
}

impl InsertMode {
    /// Parse a Vim-style mode string (`"i"` is insert, anything else normal).
    pub fn from_mode(mode: &str) -> Self {
        if mode == "i" {
            InsertMode::Insert
        } else {
            InsertMode::Normal
        }
    }
}

/// Editing state an action runs against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditContext {
    /// Absolute path of the file being edited.
    pub current_file: PathBuf,
    pub mode: InsertMode,
}

impl EditContext {
    pub fn new(current_file: impl Into<PathBuf>, mode: InsertMode) -> Self {
        Self {
            current_file: current_file.into(),
            mode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_mode_from_mode() {
        assert_eq!(InsertMode::from_mode("i"), InsertMode::Insert);
        assert_eq!(InsertMode::from_mode("n"), InsertMode::Normal);
        assert_eq!(InsertMode::from_mode(""), InsertMode::Normal);
    }
}
