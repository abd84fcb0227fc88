//! The seam between the matcher and whatever actually scans the files.

use crate::config::{Backend, SearchConfig};
use crate::error::SearchError;
use crate::search::builtin::BuiltinExecutor;
use crate::search::ripgrep::RipgrepExecutor;
use crate::search::types::SearchRequest;
use std::time::Duration;

/// Runs one search and returns its raw, newline-delimited output.
///
/// A "no matches" outcome is `Ok` with empty output. Anything else that keeps
/// the executor from producing trustworthy output is an `Err`.
pub trait SearchExecutor: Send + Sync {
    fn execute(&self, request: &SearchRequest) -> Result<String, SearchError>;
}

impl<E: SearchExecutor + ?Sized> SearchExecutor for Box<E> {
    fn execute(&self, request: &SearchRequest) -> Result<String, SearchError> {
        (**self).execute(request)
    }
}

/// Build the executor selected by the config.
pub fn from_config(config: &SearchConfig) -> Box<dyn SearchExecutor> {
    match config.backend {
        Backend::Ripgrep => Box::new(RipgrepExecutor::new(
            &config.rg_path,
            Duration::from_secs(config.timeout_secs),
        )),
        Backend::Builtin => Box::new(BuiltinExecutor::new()),
    }
}
