//! Notes command implementation.

use crate::cli::args::{ListingArgs, NotesArgs};
use crate::cli::output::Output;
use crate::cli::report_failures;
use crate::error::Result;
use crate::query::{Kasten, PickerItem};
use crate::search::SearchExecutor;
use crate::types::Note;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct NotesResponse {
    pub notes: Vec<Note>,
    pub total: usize,
    #[serde(skip_serializing_if = "is_zero")]
    pub search_failures: usize,
}

#[derive(Debug, Serialize)]
pub struct ItemsResponse {
    pub items: Vec<PickerItem>,
    pub total: usize,
    #[serde(skip_serializing_if = "is_zero")]
    pub search_failures: usize,
}

pub(crate) fn is_zero(n: &usize) -> bool {
    *n == 0
}

pub fn run<E: SearchExecutor>(kasten: &Kasten<E>, args: &NotesArgs, output: &Output) -> Result<()> {
    let mut notes = kasten.notes(args.tag.as_deref());

    let total = notes.len();
    if let Some(limit) = args.limit {
        notes.truncate(limit);
    }

    let stats = kasten.stats();
    report_failures(stats, output);

    print_listing(
        notes,
        total,
        stats.failures,
        args.listing,
        PickerItem::for_note,
        |notes, total, search_failures| NotesResponse {
            notes,
            total,
            search_failures,
        },
        output,
    )
}

/// Shared rendering for list commands: plain labels, picker items, or the
/// command's own response shape.
pub(crate) fn print_listing<T, R: Serialize>(
    values: Vec<T>,
    total: usize,
    failures: usize,
    listing: ListingArgs,
    to_item: impl Fn(T) -> PickerItem,
    to_response: impl FnOnce(Vec<T>, usize, usize) -> R,
    output: &Output,
) -> Result<()> {
    if listing.plain {
        for item in values.into_iter().map(to_item) {
            output.print_raw(&item.word);
        }
        return Ok(());
    }

    if listing.items {
        let items: Vec<PickerItem> = values.into_iter().map(to_item).collect();
        return output.print(&ItemsResponse {
            items,
            total,
            search_failures: failures,
        });
    }

    output.print(&to_response(values, total, failures))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_items_response_reports_failures_only_when_nonzero() {
        let clean = ItemsResponse {
            items: vec![],
            total: 0,
            search_failures: 0,
        };
        let json = serde_json::to_value(&clean).unwrap();
        assert!(json.get("search_failures").is_none());

        let degraded = ItemsResponse {
            search_failures: 2,
            ..clean
        };
        let json = serde_json::to_value(&degraded).unwrap();
        assert_eq!(json["search_failures"], 2);
    }
}
