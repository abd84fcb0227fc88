//! Query entry points feeding the picker.
//!
//! [`Kasten`] bundles a vault, a pattern matcher and extraction options, and
//! exposes the two picker sources: notes (optionally filtered by tag) and tags.
//! Results are computed eagerly and handed over as a single batch.

use crate::config::Config;
use crate::extract::{self, ExtractOptions};
use crate::search::{self, PatternMatcher, SearchExecutor, StatsSnapshot};
use crate::types::Note;
use crate::vault::Vault;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Command name recorded in every action payload.
pub const ACTION_CMD: &str = "rg";

/// Cursor location carried in an action payload. Always zeroed for now.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub line: u64,
    pub column: u64,
    #[serde(rename = "taskfile")]
    pub source_file: String,
}

/// Opaque payload attached to a picker item and handed back to actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionData {
    pub cmd: String,
    pub path: PathBuf,
    #[serde(rename = "lineNr")]
    pub line_nr: u64,
    pub name: String,
    pub desc: String,
    pub summary: String,
    /// Whether the payload reflects the current vault state. Always true.
    pub up_to_date: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<Note>,
    pub location: Location,
}

impl ActionData {
    fn new(path: PathBuf, name: String, note: Option<Note>) -> Self {
        Self {
            cmd: ACTION_CMD.to_string(),
            path,
            line_nr: 0,
            name,
            desc: String::new(),
            summary: String::new(),
            up_to_date: true,
            note,
            location: Location::default(),
        }
    }
}

/// One selectable row in the picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickerItem {
    /// Display label.
    pub word: String,
    pub action: ActionData,
}

impl PickerItem {
    /// Item for a note, labelled `"<vault-relative path> | <title or path>"`.
    pub fn for_note(note: Note) -> Self {
        let word = format!(
            "{} | {}",
            note.relative_path().display(),
            note.display_title()
        );
        let action = ActionData::new(
            note.path.clone(),
            note.path.to_string_lossy().into_owned(),
            Some(note),
        );
        Self { word, action }
    }

    /// Item for a tag, labelled with the tag itself.
    pub fn for_tag(tag: String, vault: &Vault) -> Self {
        Self {
            word: tag.clone(),
            action: ActionData::new(vault.root.clone(), tag, None),
        }
    }
}

/// The query facade over one vault.
pub struct Kasten<E> {
    vault: Vault,
    matcher: PatternMatcher<E>,
    options: ExtractOptions,
}

impl Kasten<Box<dyn SearchExecutor>> {
    /// Build a facade with the executor and options chosen by `config`.
    pub fn from_config(vault: Vault, config: &Config) -> Self {
        Kasten::new(
            vault,
            search::from_config(&config.search),
            ExtractOptions::from(&config.search),
        )
    }
}

impl<E: SearchExecutor> Kasten<E> {
    pub fn new(vault: Vault, executor: E, options: ExtractOptions) -> Self {
        Self {
            vault,
            matcher: PatternMatcher::new(executor),
            options,
        }
    }

    pub fn vault(&self) -> &Vault {
        &self.vault
    }

    /// Search counters accumulated by this facade.
    pub fn stats(&self) -> StatsSnapshot {
        self.matcher.stats()
    }

    /// Notes in the vault; a non-empty `tag` restricts them to that tag.
    pub fn notes(&self, tag: Option<&str>) -> Vec<Note> {
        match tag.filter(|t| !t.is_empty()) {
            Some(tag) => extract::list_notes_with_tag(&self.matcher, &self.vault, tag, &self.options),
            None => extract::list_notes(&self.matcher, &self.vault, &self.options),
        }
    }

    /// Distinct tags in the vault.
    pub fn tags(&self) -> BTreeSet<String> {
        extract::list_tags(&self.matcher, &self.vault, &self.options)
    }

    /// Picker items for [`Kasten::notes`].
    pub fn gather_notes(&self, tag: Option<&str>) -> Vec<PickerItem> {
        self.notes(tag).into_iter().map(PickerItem::for_note).collect()
    }

    /// Picker items for [`Kasten::tags`].
    pub fn gather_tags(&self) -> Vec<PickerItem> {
        self.tags()
            .into_iter()
            .map(|tag| PickerItem::for_tag(tag, &self.vault))
            .collect()
    }

    /// Title of a single note file.
    pub fn title_of(&self, path: &std::path::Path) -> Option<String> {
        extract::extract_title(&self.matcher, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::BuiltinExecutor;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn setup() -> (TempDir, Kasten<BuiltinExecutor>) {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("sub")).unwrap();
        std::fs::write(dir.path().join("a.md"), "title: Alpha\ntags: [x, y]\n").unwrap();
        std::fs::write(dir.path().join("sub/b.md"), "tags: [y]\n").unwrap();
        let vault = Vault::new(dir.path()).unwrap();
        let kasten = Kasten::new(vault, BuiltinExecutor::new(), ExtractOptions::default());
        (dir, kasten)
    }

    #[test]
    fn test_note_item_labels() {
        let (dir, kasten) = setup();

        let mut items = kasten.gather_notes(None);
        items.sort_by(|a, b| a.word.cmp(&b.word));

        let untitled = dir.path().join("sub/b.md");
        assert_eq!(
            items.iter().map(|i| i.word.clone()).collect::<Vec<_>>(),
            vec![
                "a.md | Alpha".to_string(),
                format!("sub/b.md | {}", untitled.display()),
            ]
        );
    }

    #[test]
    fn test_note_item_payload() {
        let (dir, kasten) = setup();

        let items = kasten.gather_notes(Some("x"));
        assert_eq!(items.len(), 1);

        let action = &items[0].action;
        assert_eq!(action.cmd, "rg");
        assert_eq!(action.path, dir.path().join("a.md"));
        assert_eq!(action.line_nr, 0);
        assert!(action.up_to_date);
        assert_eq!(action.location, Location::default());
        assert_eq!(
            action.note.as_ref().and_then(|n| n.title.clone()),
            Some("Alpha".to_string())
        );
    }

    #[test]
    fn test_empty_tag_lists_everything() {
        let (_dir, kasten) = setup();
        assert_eq!(kasten.notes(Some("")).len(), 2);
        assert_eq!(kasten.notes(Some("y")).len(), 2);
        assert_eq!(kasten.notes(Some("x")).len(), 1);
    }

    #[test]
    fn test_tag_items() {
        let (dir, kasten) = setup();

        let items = kasten.gather_tags();
        let words: Vec<&str> = items.iter().map(|i| i.word.as_str()).collect();
        assert_eq!(words, vec!["x", "y"]);
        assert_eq!(items[0].action.name, "x");
        assert_eq!(items[0].action.path, dir.path());
        assert!(items[0].action.note.is_none());
    }

    #[test]
    fn test_action_data_wire_names() {
        let (_dir, kasten) = setup();
        let item = kasten.gather_tags().remove(0);

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["word"], "x");
        assert_eq!(json["action"]["lineNr"], 0);
        assert_eq!(json["action"]["up_to_date"], true);
        assert_eq!(json["action"]["location"]["taskfile"], "");
        assert!(json["action"].get("note").is_none());
    }

    #[test]
    fn test_from_config_uses_builtin_backend() {
        let (dir, _) = setup();
        let mut config = Config::default();
        config.search.backend = crate::config::Backend::Builtin;

        let kasten = Kasten::from_config(Vault::new(dir.path()).unwrap(), &config);
        assert_eq!(kasten.notes(None).len(), 2);
        assert_eq!(kasten.stats().failures, 0);
    }
}
