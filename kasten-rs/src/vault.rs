//! Vault representation.

use crate::error::{KastenError, Result};
use std::path::{Path, PathBuf};

/// A directory tree of note files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vault {
    /// Root path of the vault.
    pub root: PathBuf,
}

impl Vault {
    /// Open an existing vault directory.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();

        if !root.is_dir() {
            return Err(KastenError::VaultNotFound(root));
        }

        Ok(Self { root })
    }

    /// Wrap a root without checking that it exists.
    ///
    /// Listings over a missing root come back empty.
    pub fn unchecked(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve a user-supplied note path.
    ///
    /// Absolute paths are kept; relative ones are tried against the current
    /// directory first and then against the vault root.
    pub fn resolve_note(&self, query: &Path) -> Result<PathBuf> {
        if query.is_absolute() {
            return if query.is_file() {
                Ok(query.to_path_buf())
            } else {
                Err(KastenError::NoteNotFound(query.to_path_buf()))
            };
        }

        if query.is_file() {
            return Ok(std::path::absolute(query)?);
        }

        let in_vault = self.root.join(query);
        if in_vault.is_file() {
            return Ok(in_vault);
        }

        Err(KastenError::NoteNotFound(query.to_path_buf()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_new_requires_directory() {
        let dir = TempDir::new().unwrap();
        assert!(Vault::new(dir.path()).is_ok());

        let missing = dir.path().join("missing");
        let result = Vault::new(&missing);
        assert!(matches!(result, Err(KastenError::VaultNotFound(_))));
    }

    #[test]
    fn test_resolve_note_in_vault() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("sub")).unwrap();
        std::fs::write(dir.path().join("sub/idea.md"), "x").unwrap();
        let vault = Vault::new(dir.path()).unwrap();

        let resolved = vault.resolve_note(Path::new("sub/idea.md")).unwrap();
        assert_eq!(resolved, dir.path().join("sub/idea.md"));

        let absolute = vault
            .resolve_note(&dir.path().join("sub/idea.md"))
            .unwrap();
        assert_eq!(absolute, dir.path().join("sub/idea.md"));
    }

    #[test]
    fn test_resolve_missing_note() {
        let dir = TempDir::new().unwrap();
        let vault = Vault::new(dir.path()).unwrap();

        let result = vault.resolve_note(Path::new("nope.md"));
        assert!(matches!(result, Err(KastenError::NoteNotFound(_))));
    }
}
