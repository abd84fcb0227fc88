//! Error types and exit codes for kasten.

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Process exit codes used by the CLI.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL_ERROR: i32 = 1;
    pub const VAULT_NOT_FOUND: i32 = 2;
    pub const CONFIG_ERROR: i32 = 3;
    pub const NOTE_NOT_FOUND: i32 = 4;
}

/// Main error type for kasten operations.
#[derive(Error, Debug)]
pub enum KastenError {
    #[error("Vault not found at: {0}")]
    VaultNotFound(PathBuf),

    #[error("Note not found: {0}")]
    NoteNotFound(PathBuf),

    #[error("Could not determine the home directory")]
    HomeDirUnavailable,

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Editor error: {0}")]
    Editor(String),

    #[error("{0}")]
    Other(String),
}

impl KastenError {
    /// Returns the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            KastenError::VaultNotFound(_) | KastenError::HomeDirUnavailable => {
                exit_code::VAULT_NOT_FOUND
            }
            KastenError::ConfigError(_) | KastenError::TomlParse(_) => exit_code::CONFIG_ERROR,
            KastenError::NoteNotFound(_) => exit_code::NOTE_NOT_FOUND,
            _ => exit_code::GENERAL_ERROR,
        }
    }
}

/// Result type alias for kasten operations.
pub type Result<T> = std::result::Result<T, KastenError>;

/// Why a single search invocation produced no usable output.
///
/// These never cross the listing API: the matcher downgrades them to an
/// empty result and records them in its stats.
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("failed to spawn {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("search exited with status {code:?}: {stderr}")]
    Failed { code: Option<i32>, stderr: String },

    #[error("search timed out after {0:?}")]
    Timeout(Duration),

    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("invalid glob: {0}")]
    Glob(#[from] ignore::Error),

    #[error("IO error during search: {0}")]
    Io(#[from] std::io::Error),
}

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    Success,
}

impl ExitCode {
    /// Convert to exit code integer.
    pub fn code(self) -> i32 {
        match self {
            ExitCode::Success => exit_code::SUCCESS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            KastenError::VaultNotFound(PathBuf::from("/nope")).exit_code(),
            exit_code::VAULT_NOT_FOUND
        );
        assert_eq!(
            KastenError::ConfigError("bad".to_string()).exit_code(),
            exit_code::CONFIG_ERROR
        );
        assert_eq!(
            KastenError::NoteNotFound(PathBuf::from("a.md")).exit_code(),
            exit_code::NOTE_NOT_FOUND
        );
        assert_eq!(
            KastenError::Other("x".to_string()).exit_code(),
            exit_code::GENERAL_ERROR
        );
        assert_eq!(ExitCode::Success.code(), 0);
    }
}
