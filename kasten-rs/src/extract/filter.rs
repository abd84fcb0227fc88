//! Tag-scoped note listing.

use crate::extract::ExtractOptions;
use crate::extract::patterns::tag_filter_pattern;
use crate::extract::title::build_notes;
use crate::search::{PatternMatcher, SearchExecutor, SearchScope};
use crate::types::Note;
use crate::vault::Vault;
use std::path::PathBuf;

/// Notes whose `tags: [...]` line contains `tag` anywhere in the brackets.
///
/// Discovery is driven by the tag-line matches, so notes without a tags line
/// never appear here. One note is emitted per matching line, in match order.
pub fn list_notes_with_tag<E: SearchExecutor>(
    matcher: &PatternMatcher<E>,
    vault: &Vault,
    tag: &str,
    options: &ExtractOptions,
) -> Vec<Note> {
    let scope = SearchScope::tree(&vault.root, &options.tag_glob);
    let paths: Vec<PathBuf> = matcher
        .search(&tag_filter_pattern(tag), &scope)
        .into_iter()
        .map(|m| m.path)
        .collect();
    tracing::debug!(tag, count = paths.len(), "notes matched tag");
    build_notes(matcher, vault, paths, options)
}
