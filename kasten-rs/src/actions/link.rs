//! Insert a markdown link to the selected notes.

use crate::actions::{ActionFlags, EditContext, InsertMode};
use crate::error::Result;
use crate::query::PickerItem;
use crate::types::Note;
use std::ops::{Deref, DerefMut};
use std::path::{Path, PathBuf};

/// Link text used when a note has no title.
pub const NO_TITLE: &str = "No title";

/// How register contents are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegisterKind {
    #[default]
    Charwise,
    Linewise,
}

/// Contents of the editor's unnamed register.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RegisterContent {
    pub text: String,
    pub kind: RegisterKind,
}

impl RegisterContent {
    pub fn charwise(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: RegisterKind::Charwise,
        }
    }
}

/// The editor operations the link action needs.
pub trait Editor {
    /// Current contents of the unnamed register.
    fn register(&mut self) -> Result<RegisterContent>;

    fn set_register(&mut self, content: &RegisterContent) -> Result<()>;

    /// Put the unnamed register after the cursor (`p`).
    fn put(&mut self) -> Result<()>;

    /// Cursor column in bytes (1-indexed).
    fn cursor_column(&mut self) -> Result<usize>;

    fn set_cursor_column(&mut self, column: usize) -> Result<()>;

    /// Open folds under the cursor.
    fn open_folds(&mut self) -> Result<()>;
}

/// Holds the unnamed register for the duration of a paste.
///
/// The previous contents are written back by [`RegisterGuard::restore`], or on
/// drop if the guard is abandoned early.
pub struct RegisterGuard<'a, Ed: Editor + ?Sized> {
    editor: &'a mut Ed,
    saved: Option<RegisterContent>,
}

impl<'a, Ed: Editor + ?Sized> RegisterGuard<'a, Ed> {
    /// Save the register, then replace it with `content`.
    pub fn acquire(editor: &'a mut Ed, content: &RegisterContent) -> Result<Self> {
        let saved = editor.register()?;
        let mut guard = Self {
            editor,
            saved: Some(saved),
        };
        guard.editor.set_register(content)?;
        Ok(guard)
    }

    /// Write the saved contents back and release the editor.
    pub fn restore(mut self) -> Result<()> {
        match self.saved.take() {
            Some(saved) => self.editor.set_register(&saved),
            None => Ok(()),
        }
    }
}

impl<Ed: Editor + ?Sized> Deref for RegisterGuard<'_, Ed> {
    type Target = Ed;

    fn deref(&self) -> &Ed {
        self.editor
    }
}

impl<Ed: Editor + ?Sized> DerefMut for RegisterGuard<'_, Ed> {
    fn deref_mut(&mut self) -> &mut Ed {
        self.editor
    }
}

impl<Ed: Editor + ?Sized> Drop for RegisterGuard<'_, Ed> {
    fn drop(&mut self) {
        if let Some(saved) = self.saved.take() {
            if let Err(e) = self.editor.set_register(&saved) {
                tracing::warn!(error = %e, "failed to restore register");
            }
        }
    }
}

/// Paste `text` at the cursor through the unnamed register.
///
/// In insert mode the cursor is moved past the pasted text.
pub fn paste<Ed: Editor + ?Sized>(
    editor: &mut Ed,
    mode: InsertMode,
    text: &str,
) -> Result<()> {
    {
        let mut guard = RegisterGuard::acquire(editor, &RegisterContent::charwise(text))?;
        let put = guard.put();
        let restored = guard.restore();
        put?;
        restored?;
    }

    if mode == InsertMode::Insert {
        let column = editor.cursor_column()?;
        editor.set_cursor_column(column + text.len())?;
    }

    editor.open_folds()
}

/// Path to write in a link from `current_file` to `target`.
///
/// Notes in the same directory are referenced by file name, anything else by
/// a path relative to the current file's directory.
pub fn link_path(current_file: &Path, target: &Path) -> PathBuf {
    let current_dir = current_file.parent().unwrap_or(Path::new(""));
    let target_dir = target.parent().unwrap_or(Path::new(""));

    if current_dir == target_dir {
        if let Some(name) = target.file_name() {
            return PathBuf::from(name);
        }
    }

    pathdiff::diff_paths(target, current_dir).unwrap_or_else(|| target.to_path_buf())
}

/// `[<title>](<path>)` for `note`, as seen from `current_file`.
pub fn markdown_link(note: &Note, current_file: &Path) -> String {
    let title = note.title.as_deref().unwrap_or(NO_TITLE);
    format!(
        "[{}]({})",
        title,
        link_path(current_file, &note.path).display()
    )
}

/// Paste a link to every selected note.
pub fn append_link<Ed: Editor + ?Sized>(
    items: &[PickerItem],
    context: &EditContext,
    editor: &mut Ed,
) -> Result<ActionFlags> {
    for item in items {
        let Some(ref note) = item.action.note else {
            continue;
        };
        let link = markdown_link(note, &context.current_file);
        tracing::debug!(%link, "pasting link");
        paste(editor, context.mode, &link)?;
    }
    Ok(ActionFlags::None)
}
