//! Line-anchored pattern search over the vault.
//!
//! Every executor failure is downgraded to "no results" at this layer. The
//! failures themselves are counted in [`SearchStats`] and logged, so callers
//! that care can still see that data went missing.

use crate::error::SearchError;
use crate::search::executor::SearchExecutor;
use crate::search::record::{Record, parse_line};
use crate::search::types::{SearchRequest, SearchScope};
use crate::types::SearchMatch;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Counters for everything the matcher swallowed.
#[derive(Debug, Default)]
pub struct SearchStats {
    searches: AtomicUsize,
    failures: AtomicUsize,
    malformed: AtomicUsize,
}

/// Point-in-time copy of [`SearchStats`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatsSnapshot {
    pub searches: usize,
    pub failures: usize,
    pub malformed_records: usize,
}

impl SearchStats {
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            searches: self.searches.load(Ordering::Relaxed),
            failures: self.failures.load(Ordering::Relaxed),
            malformed_records: self.malformed.load(Ordering::Relaxed),
        }
    }
}

/// Issues searches through an executor and interprets the output.
pub struct PatternMatcher<E> {
    executor: E,
    stats: SearchStats,
}

impl<E: SearchExecutor> PatternMatcher<E> {
    pub fn new(executor: E) -> Self {
        Self {
            executor,
            stats: SearchStats::default(),
        }
    }

    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    fn run(&self, request: &SearchRequest) -> Result<String, SearchError> {
        self.stats.searches.fetch_add(1, Ordering::Relaxed);
        self.executor.execute(request)
    }

    fn degrade<T: Default>(&self, result: Result<T, SearchError>, scope: &SearchScope) -> T {
        match result {
            Ok(value) => value,
            Err(e) => {
                self.stats.failures.fetch_add(1, Ordering::Relaxed);
                tracing::warn!(scope = %scope.path().display(), error = %e, "search failed, treating as no results");
                T::default()
            }
        }
    }

    /// Enumerate files in scope.
    pub fn try_list_files(&self, scope: &SearchScope) -> Result<Vec<PathBuf>, SearchError> {
        let output = self.run(&SearchRequest::Files(scope.clone()))?;
        Ok(output
            .lines()
            .filter(|line| !line.is_empty())
            .map(PathBuf::from)
            .collect())
    }

    /// Enumerate files in scope; failures yield an empty list.
    pub fn list_files(&self, scope: &SearchScope) -> Vec<PathBuf> {
        self.degrade(self.try_list_files(scope), scope)
    }

    /// Run a structured search for `pattern`.
    pub fn try_search(
        &self,
        pattern: &str,
        scope: &SearchScope,
    ) -> Result<Vec<SearchMatch>, SearchError> {
        let output = self.run(&SearchRequest::Json {
            pattern: pattern.to_string(),
            scope: scope.clone(),
        })?;

        let mut matches = Vec::new();
        for line in output.lines().filter(|line| !line.trim().is_empty()) {
            match parse_line(line) {
                Record::Match(m) => matches.push(m),
                Record::Other => {}
                Record::Malformed => {
                    self.stats.malformed.fetch_add(1, Ordering::Relaxed);
                    tracing::trace!(line, "dropping malformed search record");
                }
            }
        }
        Ok(matches)
    }

    /// Run a structured search; failures yield no matches.
    pub fn search(&self, pattern: &str, scope: &SearchScope) -> Vec<SearchMatch> {
        self.degrade(self.try_search(pattern, scope), scope)
    }
}
