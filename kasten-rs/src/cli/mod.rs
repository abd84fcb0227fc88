//! CLI command implementations.

pub mod args;
pub mod output;

pub mod link;
pub mod notes;
pub mod tags;

pub use args::{Cli, Commands};
pub use output::Output;

use crate::search::StatsSnapshot;

/// Warn when searches failed and results may be incomplete.
pub(crate) fn report_failures(stats: StatsSnapshot, output: &Output) {
    if stats.failures > 0 {
        output.warn(&format!(
            "{} of {} searches failed; results may be incomplete",
            stats.failures, stats.searches
        ));
    }
}
