//! kasten - note and tag indexing for plain-text zettelkasten vaults.
//!
//! # Overview
//!
//! kasten scans a vault of note files and answers two questions for a
//! fuzzy picker:
//! - which notes exist (optionally only those tagged with a given tag), with
//!   the title from each note's `title:` line
//! - which tags appear on `tags: [...]` lines anywhere in the vault
//!
//! Nothing is cached: every query rescans the filesystem through a search
//! executor (ripgrep by default, or an in-process walker). Search failures
//! never abort a query; they shrink the result and show up in
//! [`search::StatsSnapshot`].
//!
//! # Example
//!
//! ```no_run
//! use kasten::{Config, Kasten, Vault};
//!
//! let config = Config::load().unwrap();
//! let vault = Vault::new(config.resolve_vault_path(None).unwrap()).unwrap();
//! let kasten = Kasten::from_config(vault, &config);
//!
//! for item in kasten.gather_notes(Some("rust")) {
//!     println!("{}", item.word);
//! }
//! for tag in kasten.tags() {
//!     println!("{}", tag);
//! }
//! ```

pub mod actions;
pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod logging;
pub mod query;
pub mod search;
pub mod types;
pub mod vault;

// Re-export main types at crate root
pub use config::Config;
pub use error::{KastenError, Result};
pub use query::{ActionData, Kasten, PickerItem};
pub use types::*;
pub use vault::Vault;
