//! Note and tag extraction from vault files.

pub mod filter;
pub mod notes;
pub mod patterns;
pub mod tags;
pub mod title;

pub use filter::list_notes_with_tag;
pub use notes::list_notes;
pub use tags::list_tags;
pub use title::extract_title;

use crate::config::SearchConfig;
use std::sync::{Arc, OnceLock};

/// Knobs shared by the extractors.
///
/// Clones share the title worker pool.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Glob selecting note files during discovery.
    pub note_glob: String,
    /// Glob selecting files scanned for tag lines.
    pub tag_glob: String,
    /// Worker threads for title extraction; 1 or 0 runs sequentially.
    pub jobs: usize,
    pool: Arc<OnceLock<Option<rayon::ThreadPool>>>,
}

impl ExtractOptions {
    /// Pool for parallel title lookups, started on first use.
    ///
    /// `None` when `jobs <= 1` or the pool could not be started.
    pub(crate) fn title_pool(&self) -> Option<&rayon::ThreadPool> {
        if self.jobs <= 1 {
            return None;
        }
        self.pool
            .get_or_init(|| {
                match rayon::ThreadPoolBuilder::new()
                    .num_threads(self.jobs)
                    .thread_name(|i| format!("kasten-title-{i}"))
                    .build()
                {
                    Ok(pool) => Some(pool),
                    Err(e) => {
                        tracing::warn!(error = %e, "could not start title workers, running sequentially");
                        None
                    }
                }
            })
            .as_ref()
    }
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self::from(&SearchConfig::default())
    }
}

impl From<&SearchConfig> for ExtractOptions {
    fn from(config: &SearchConfig) -> Self {
        Self {
            note_glob: config.note_glob.clone(),
            tag_glob: config.tag_glob.clone(),
            jobs: config.jobs,
            pool: Arc::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_has_no_pool() {
        assert!(ExtractOptions::default().title_pool().is_none());
    }

    #[test]
    fn test_pool_is_built_once_and_shared() {
        let options = ExtractOptions {
            jobs: 2,
            ..ExtractOptions::default()
        };

        let first = options.title_pool().unwrap();
        let second = options.title_pool().unwrap();
        assert!(std::ptr::eq(first, second));
        assert_eq!(first.current_num_threads(), 2);

        let cloned = options.clone();
        assert!(std::ptr::eq(first, cloned.title_pool().unwrap()));
    }
}
