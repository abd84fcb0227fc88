//! Vault-wide tag aggregation.

use crate::extract::ExtractOptions;
use crate::extract::patterns::{TAGS_PATTERN, split_tags};
use crate::search::{PatternMatcher, SearchExecutor, SearchScope};
use crate::vault::Vault;
use std::collections::BTreeSet;

/// Every distinct tag listed on a `tags: [...]` line anywhere in the vault.
///
/// Sorted, so repeated calls render the same way.
pub fn list_tags<E: SearchExecutor>(
    matcher: &PatternMatcher<E>,
    vault: &Vault,
    options: &ExtractOptions,
) -> BTreeSet<String> {
    let scope = SearchScope::tree(&vault.root, &options.tag_glob);
    matcher
        .search(TAGS_PATTERN, &scope)
        .iter()
        .filter_map(|m| m.first_text())
        .flat_map(split_tags)
        .collect()
}
