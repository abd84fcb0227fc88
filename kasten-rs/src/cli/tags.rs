//! Tags command implementation.

use crate::cli::args::TagsArgs;
use crate::cli::notes::{is_zero, print_listing};
use crate::cli::output::Output;
use crate::cli::report_failures;
use crate::error::Result;
use crate::query::{Kasten, PickerItem};
use crate::search::SearchExecutor;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct TagsResponse {
    pub tags: Vec<String>,
    pub total: usize,
    #[serde(skip_serializing_if = "is_zero")]
    pub search_failures: usize,
}

pub fn run<E: SearchExecutor>(kasten: &Kasten<E>, args: &TagsArgs, output: &Output) -> Result<()> {
    let tags: Vec<String> = kasten.tags().into_iter().collect();
    let total = tags.len();

    let stats = kasten.stats();
    report_failures(stats, output);

    print_listing(
        tags,
        total,
        stats.failures,
        args.listing,
        |tag| PickerItem::for_tag(tag, kasten.vault()),
        |tags, total, search_failures| TagsResponse {
            tags,
            total,
            search_failures,
        },
        output,
    )
}
