//! Request types handed to a search executor.

use std::path::{Path, PathBuf};

/// Where a search looks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchScope {
    /// A single file. Globs do not apply.
    File(PathBuf),
    /// Every file under `root` whose root-relative path matches `glob`.
    Tree { root: PathBuf, glob: String },
}

impl SearchScope {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        SearchScope::File(path.into())
    }

    pub fn tree(root: impl Into<PathBuf>, glob: impl Into<String>) -> Self {
        SearchScope::Tree {
            root: root.into(),
            glob: glob.into(),
        }
    }

    /// The file or directory the search starts from.
    pub fn path(&self) -> &Path {
        match self {
            SearchScope::File(path) => path,
            SearchScope::Tree { root, .. } => root,
        }
    }

    /// Glob filter, if the scope has one.
    pub fn glob(&self) -> Option<&str> {
        match self {
            SearchScope::File(_) => None,
            SearchScope::Tree { glob, .. } => Some(glob),
        }
    }
}

/// What the executor is asked to produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchRequest {
    /// Newline-delimited paths of every file in scope.
    Files(SearchScope),
    /// Newline-delimited ripgrep-style JSON records, one per line event.
    Json { pattern: String, scope: SearchScope },
}

impl SearchRequest {
    pub fn scope(&self) -> &SearchScope {
        match self {
            SearchRequest::Files(scope) => scope,
            SearchRequest::Json { scope, .. } => scope,
        }
    }
}
