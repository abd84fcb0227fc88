//! Per-note title lookup.

use crate::extract::ExtractOptions;
use crate::extract::patterns::{TITLE_PATTERN, capture_title};
use crate::search::{PatternMatcher, SearchExecutor, SearchScope};
use crate::types::Note;
use crate::vault::Vault;
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// Title of the note at `path`: the capture from the first `title:` line.
///
/// Returns `None` when no line matches or the search fails.
pub fn extract_title<E: SearchExecutor>(matcher: &PatternMatcher<E>, path: &Path) -> Option<String> {
    matcher
        .search(TITLE_PATTERN, &SearchScope::file(path))
        .iter()
        .filter_map(|m| m.first_text())
        .find_map(capture_title)
}

/// Turn discovered paths into notes, looking up each title.
///
/// With `jobs > 1` the lookups run on the options' worker pool. Output order
/// always follows `paths`.
pub(crate) fn build_notes<E: SearchExecutor>(
    matcher: &PatternMatcher<E>,
    vault: &Vault,
    paths: Vec<PathBuf>,
    options: &ExtractOptions,
) -> Vec<Note> {
    let build = |path: PathBuf| {
        let title = extract_title(matcher, &path);
        Note::new(path, &vault.root, title)
    };

    match options.title_pool() {
        Some(pool) if paths.len() > 1 => {
            pool.install(|| paths.into_par_iter().map(&build).collect())
        }
        _ => paths.into_iter().map(&build).collect(),
    }
}
