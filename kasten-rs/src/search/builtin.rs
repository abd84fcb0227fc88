//! In-process search executor.
//!
//! Produces the same output as the ripgrep executor (paths for file listing,
//! ripgrep-style JSON match records otherwise) so the matcher cannot tell the
//! two apart. The walk honours ignore files and skips hidden entries, like `rg`.

use crate::error::SearchError;
use crate::search::executor::SearchExecutor;
use crate::search::record::{MatchData, SubmatchRecord, TextField, encode_match};
use crate::search::types::{SearchRequest, SearchScope};
use ignore::WalkBuilder;
use ignore::overrides::OverrideBuilder;
use regex::Regex;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default)]
pub struct BuiltinExecutor;

impl BuiltinExecutor {
    pub fn new() -> Self {
        Self
    }

    /// Files in scope, in walk order.
    fn files(scope: &SearchScope) -> Result<Vec<PathBuf>, SearchError> {
        match scope {
            SearchScope::File(path) => {
                if path.is_file() {
                    Ok(vec![path.clone()])
                } else {
                    Err(SearchError::Io(std::io::Error::new(
                        std::io::ErrorKind::NotFound,
                        format!("{}: no such file", path.display()),
                    )))
                }
            }
            SearchScope::Tree { root, glob } => {
                if !root.is_dir() {
                    return Err(SearchError::Io(std::io::Error::new(
                        std::io::ErrorKind::NotFound,
                        format!("{}: no such directory", root.display()),
                    )));
                }

                let overrides = OverrideBuilder::new(root).add(glob)?.build()?;
                let mut files = Vec::new();
                for entry in WalkBuilder::new(root).overrides(overrides).build() {
                    match entry {
                        Ok(entry) => {
                            if entry.file_type().is_some_and(|t| t.is_file()) {
                                files.push(entry.into_path());
                            }
                        }
                        Err(e) => tracing::debug!(error = %e, "skipping unreadable entry"),
                    }
                }
                Ok(files)
            }
        }
    }

    fn search_file(regex: &Regex, path: &Path, out: &mut String) {
        // Binary or non-UTF-8 files are skipped, as ripgrep would.
        let Ok(content) = std::fs::read_to_string(path) else {
            tracing::trace!(path = %path.display(), "skipping unreadable file");
            return;
        };

        let mut offset = 0u64;
        for (idx, line) in content.split_inclusive('\n').enumerate() {
            let body = line.strip_suffix('\n').unwrap_or(line);
            let submatches: Vec<SubmatchRecord> = regex
                .find_iter(body)
                .map(|m| SubmatchRecord {
                    matched: TextField {
                        text: m.as_str().to_string(),
                    },
                    start: m.start(),
                    end: m.end(),
                })
                .collect();

            if !submatches.is_empty() {
                let data = MatchData {
                    path: TextField {
                        text: path.to_string_lossy().into_owned(),
                    },
                    lines: TextField {
                        text: line.to_string(),
                    },
                    line_number: idx as u64 + 1,
                    absolute_offset: offset,
                    submatches,
                };
                out.push_str(&encode_match(data));
                out.push('\n');
            }

            offset += line.len() as u64;
        }
    }
}

impl SearchExecutor for BuiltinExecutor {
    fn execute(&self, request: &SearchRequest) -> Result<String, SearchError> {
        match request {
            SearchRequest::Files(scope) => {
                let mut out = String::new();
                for path in Self::files(scope)? {
                    out.push_str(&path.to_string_lossy());
                    out.push('\n');
                }
                Ok(out)
            }
            SearchRequest::Json { pattern, scope } => {
                let regex = Regex::new(pattern)?;
                let mut out = String::new();
                for path in Self::files(scope)? {
                    Self::search_file(&regex, &path, &mut out);
                }
                Ok(out)
            }
        }
    }
}
