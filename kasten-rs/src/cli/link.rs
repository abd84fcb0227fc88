//! Link command implementation.

use crate::actions::markdown_link;
use crate::cli::args::LinkArgs;
use crate::cli::output::Output;
use crate::error::Result;
use crate::query::Kasten;
use crate::search::SearchExecutor;
use crate::types::Note;

/// Print the link the append-link action would paste for `args.note`.
pub fn run<E: SearchExecutor>(kasten: &Kasten<E>, args: &LinkArgs, output: &Output) -> Result<()> {
    let vault = kasten.vault();
    let path = vault.resolve_note(&args.note)?;
    let title = kasten.title_of(&path);
    let note = Note::new(path, &vault.root, title);

    // Without --from, link as if from a file at the vault root.
    let from = match args.from {
        Some(ref from) => std::path::absolute(from)?,
        None => vault.root.join("_"),
    };

    output.print_raw(&markdown_link(&note, &from));
    Ok(())
}
