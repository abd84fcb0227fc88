//! Configuration loading and vault path resolution.

use crate::error::{KastenError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Directory name under `$HOME` used when no vault is configured.
pub const DEFAULT_VAULT_DIR: &str = "zettelkasten";

/// Environment variable that overrides the configured vault.
pub const VAULT_ENV: &str = "KASTEN_VAULT";

/// Which search executor backs the pattern matcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Backend {
    /// Spawn `rg` for every search.
    #[default]
    Ripgrep,
    /// Walk and match in-process.
    Builtin,
}

/// Search settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub backend: Backend,
    /// Path or name of the ripgrep binary.
    pub rg_path: String,
    /// Upper bound on a single search invocation, in seconds.
    pub timeout_secs: u64,
    /// Glob selecting note files during discovery.
    pub note_glob: String,
    /// Glob selecting files scanned for tag lines.
    pub tag_glob: String,
    /// Worker threads for per-note title extraction. 1 runs sequentially.
    pub jobs: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            backend: Backend::default(),
            rg_path: "rg".to_string(),
            timeout_secs: 10,
            note_glob: "**/*.md".to_string(),
            tag_glob: "**/*".to_string(),
            jobs: 1,
        }
    }
}

/// Top-level configuration, read from `<config_dir>/kasten/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Vault root. Falls back to `$HOME/zettelkasten`.
    pub vault: Option<PathBuf>,
    pub search: SearchConfig,
}

impl Config {
    /// Default location of the config file.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("kasten").join("config.toml"))
    }

    /// Load the config from its default location, or defaults if absent.
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) if path.is_file() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load the config from an explicit file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&text)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.search.timeout_secs == 0 {
            return Err(KastenError::ConfigError(
                "search.timeout_secs must be greater than zero".to_string(),
            ));
        }
        for (key, glob) in [
            ("note_glob", &self.search.note_glob),
            ("tag_glob", &self.search.tag_glob),
        ] {
            if glob.trim().is_empty() {
                return Err(KastenError::ConfigError(format!(
                    "search.{key} must not be empty"
                )));
            }
        }
        Ok(())
    }

    /// Resolve the vault root.
    ///
    /// Precedence: explicit override, `KASTEN_VAULT`, the `vault` key, then
    /// `$HOME/zettelkasten`.
    pub fn resolve_vault_path(&self, override_path: Option<&Path>) -> Result<PathBuf> {
        let env_path = std::env::var_os(VAULT_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        self.resolve_vault_path_with(override_path, env_path)
    }

    fn resolve_vault_path_with(
        &self,
        override_path: Option<&Path>,
        env_path: Option<PathBuf>,
    ) -> Result<PathBuf> {
        if let Some(path) = override_path {
            return Ok(path.to_path_buf());
        }
        if let Some(path) = env_path {
            return Ok(path);
        }
        if let Some(ref path) = self.vault {
            return Ok(path.clone());
        }
        dirs::home_dir()
            .map(|home| home.join(DEFAULT_VAULT_DIR))
            .ok_or(KastenError::HomeDirUnavailable)
    }
}
