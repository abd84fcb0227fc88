//! Pattern search over the vault through a pluggable executor.

pub mod builtin;
pub mod executor;
pub mod matcher;
pub mod record;
pub mod ripgrep;
pub mod types;

pub use builtin::BuiltinExecutor;
pub use executor::{SearchExecutor, from_config};
pub use matcher::{PatternMatcher, SearchStats, StatsSnapshot};
pub use ripgrep::RipgrepExecutor;
pub use types::{SearchRequest, SearchScope};
