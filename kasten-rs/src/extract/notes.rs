//! Full note listing.

use crate::extract::ExtractOptions;
use crate::extract::title::build_notes;
use crate::search::{PatternMatcher, SearchExecutor, SearchScope};
use crate::types::Note;
use crate::vault::Vault;

/// Every note file under the vault, in discovery order.
///
/// Discovery and title lookup are separate searches, so a failed title lookup
/// still yields the note (with no title).
pub fn list_notes<E: SearchExecutor>(
    matcher: &PatternMatcher<E>,
    vault: &Vault,
    options: &ExtractOptions,
) -> Vec<Note> {
    let paths = matcher.list_files(&SearchScope::tree(&vault.root, &options.note_glob));
    tracing::debug!(vault = %vault.root.display(), count = paths.len(), "discovered note files");
    build_notes(matcher, vault, paths, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::patterns::TITLE_PATTERN;
    use crate::search::BuiltinExecutor;
    use crate::search::matcher::tests::{FakeExecutor, match_json};
    use pretty_assertions::assert_eq;
    use std::collections::BTreeSet;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write(dir: &TempDir, rel: &str, content: &str) {
        let path = dir.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }

    fn summary(notes: &[Note]) -> BTreeSet<(String, Option<String>)> {
        notes
            .iter()
            .map(|n| (n.relative_path().to_string_lossy().into_owned(), n.title.clone()))
            .collect()
    }

    #[test]
    fn test_empty_vault() {
        let dir = TempDir::new().unwrap();
        let vault = Vault::new(dir.path()).unwrap();
        let matcher = PatternMatcher::new(BuiltinExecutor::new());

        assert!(list_notes(&matcher, &vault, &ExtractOptions::default()).is_empty());
    }

    #[test]
    fn test_lists_markdown_with_titles() {
        let dir = TempDir::new().unwrap();
        write(&dir, "a.md", "title: Alpha\n");
        write(&dir, "sub/b.md", "no front matter\n");
        write(&dir, "ignored.txt", "title: Not a note\n");
        let vault = Vault::new(dir.path()).unwrap();
        let matcher = PatternMatcher::new(BuiltinExecutor::new());

        let notes = list_notes(&matcher, &vault, &ExtractOptions::default());

        assert_eq!(
            summary(&notes),
            BTreeSet::from([
                ("a.md".to_string(), Some("Alpha".to_string())),
                ("sub/b.md".to_string(), None),
            ])
        );
        let b = notes.iter().find(|n| n.name == "b.md").unwrap();
        assert_eq!(b.vault, dir.path());
    }

    #[test]
    fn test_listing_is_repeatable() {
        let dir = TempDir::new().unwrap();
        write(&dir, "a.md", "title: Alpha\n");
        write(&dir, "b.md", "title: Beta\n");
        write(&dir, "c/d.md", "");
        let vault = Vault::new(dir.path()).unwrap();
        let matcher = PatternMatcher::new(BuiltinExecutor::new());
        let options = ExtractOptions {
            jobs: 3,
            ..ExtractOptions::default()
        };

        let first = list_notes(&matcher, &vault, &options);
        let second = list_notes(&matcher, &vault, &options);
        assert_eq!(summary(&first), summary(&second));
        assert_eq!(first.len(), 3);
    }

    #[test]
    fn test_title_failure_keeps_note() {
        // Discovery answers; the title lookup for b.md has no canned answer and fails.
        let executor = FakeExecutor::default()
            .with_files("/v", "/v/a.md\n/v/b.md\n")
            .with_json(TITLE_PATTERN, "/v/a.md", &match_json("/v/a.md", "title: A", 1));
        let matcher = PatternMatcher::new(executor);
        let vault = Vault::unchecked("/v");

        let notes = list_notes(&matcher, &vault, &ExtractOptions::default());

        assert_eq!(notes.len(), 2);
        assert_eq!(notes[0].path, PathBuf::from("/v/a.md"));
        assert_eq!(notes[0].title, Some("A".to_string()));
        assert_eq!(notes[1].path, PathBuf::from("/v/b.md"));
        assert_eq!(notes[1].title, None);
        assert_eq!(matcher.stats().failures, 1);
    }

    #[test]
    fn test_discovery_failure_is_empty() {
        let matcher = PatternMatcher::new(FakeExecutor::default());
        let vault = Vault::unchecked("/v");

        assert!(list_notes(&matcher, &vault, &ExtractOptions::default()).is_empty());
        assert_eq!(matcher.stats().failures, 1);
    }
}
