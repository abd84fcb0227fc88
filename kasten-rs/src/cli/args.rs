//! CLI argument definitions using clap.

use crate::config::Backend;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "kasten")]
#[command(author, version, about = "List notes and tags in a zettelkasten vault", long_about = None)]
pub struct Cli {
    /// Path to the vault (overrides KASTEN_VAULT and the config file)
    #[arg(long, global = true)]
    pub vault: Option<PathBuf>,

    /// Config file to read instead of the default location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Search backend (overrides the config file)
    #[arg(long, global = true, value_enum)]
    pub backend: Option<Backend>,

    /// Output as JSON (default)
    #[arg(long, global = true, conflicts_with_all = ["yaml", "toml"])]
    pub json: bool,

    /// Output as YAML
    #[arg(long, global = true, conflicts_with_all = ["json", "toml"])]
    pub yaml: bool,

    /// Output as TOML
    #[arg(long, global = true, conflicts_with_all = ["json", "yaml"])]
    pub toml: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (can be repeated)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn output_format(&self) -> OutputFormat {
        if self.yaml {
            OutputFormat::Yaml
        } else if self.toml {
            OutputFormat::Toml
        } else {
            OutputFormat::Json
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
    Toml,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List notes, optionally only those tagged with TAG
    Notes(NotesArgs),

    /// List every distinct tag in the vault
    Tags(TagsArgs),

    /// Print the markdown link to a note as seen from another file
    Link(LinkArgs),
}

/// How list commands render their results.
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct ListingArgs {
    /// Emit picker items (label plus action payload)
    #[arg(long, conflicts_with = "plain")]
    pub items: bool,

    /// Print one label per line, for piping into a line picker
    #[arg(long)]
    pub plain: bool,
}

#[derive(Parser, Debug)]
pub struct NotesArgs {
    /// Only notes whose tags line contains this text
    #[arg(long)]
    pub tag: Option<String>,

    /// Limit number of results
    #[arg(long)]
    pub limit: Option<usize>,

    #[command(flatten)]
    pub listing: ListingArgs,
}

#[derive(Parser, Debug)]
pub struct TagsArgs {
    #[command(flatten)]
    pub listing: ListingArgs,
}

#[derive(Parser, Debug)]
pub struct LinkArgs {
    /// Note to link to (absolute, or relative to the current directory or vault)
    pub note: PathBuf,

    /// File the link will be inserted into (defaults to the vault root)
    #[arg(long)]
    pub from: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_notes_with_tag() {
        let cli = Cli::parse_from(["kasten", "--backend", "builtin", "notes", "--tag", "rust", "--plain"]);
        assert_eq!(cli.backend, Some(Backend::Builtin));
        let Commands::Notes(args) = cli.command else {
            panic!("expected notes command");
        };
        assert_eq!(args.tag.as_deref(), Some("rust"));
        assert!(args.listing.plain);
        assert!(!args.listing.items);
    }

    #[test]
    fn test_items_conflicts_with_plain() {
        let result = Cli::try_parse_from(["kasten", "tags", "--items", "--plain"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_output_format() {
        let cli = Cli::parse_from(["kasten", "tags", "--yaml"]);
        assert_eq!(cli.output_format(), OutputFormat::Yaml);

        let cli = Cli::parse_from(["kasten", "tags"]);
        assert_eq!(cli.output_format(), OutputFormat::Json);
    }
}
