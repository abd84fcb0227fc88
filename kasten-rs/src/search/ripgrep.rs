//! Search executor backed by the `rg` binary.

use crate::error::SearchError;
use crate::search::executor::SearchExecutor;
use crate::search::types::{SearchRequest, SearchScope};
use std::ffi::OsString;
use std::io::Read;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::thread;
use std::time::Duration;
use wait_timeout::ChildExt;

/// ripgrep exits with 1 when nothing matched.
const NO_MATCH_STATUS: i32 = 1;

/// Spawns `rg` once per request.
#[derive(Debug, Clone)]
pub struct RipgrepExecutor {
    program: PathBuf,
    timeout: Duration,
}

impl RipgrepExecutor {
    pub fn new(program: &str, timeout: Duration) -> Self {
        let program = match which::which(program) {
            Ok(resolved) => resolved,
            Err(e) => {
                tracing::warn!(program, error = %e, "ripgrep binary not found on PATH");
                PathBuf::from(program)
            }
        };
        Self { program, timeout }
    }

    /// Command-line arguments for a request.
    fn args(request: &SearchRequest) -> Vec<OsString> {
        let mut args: Vec<OsString> = Vec::new();
        match request {
            SearchRequest::Files(scope) => {
                args.push("--files".into());
                push_scope(&mut args, scope);
            }
            SearchRequest::Json { pattern, scope } => {
                args.push("--json".into());
                if let Some(glob) = scope.glob() {
                    args.push("-g".into());
                    args.push(glob.into());
                }
                args.push("--regexp".into());
                args.push(pattern.into());
                args.push(scope.path().into());
            }
        }
        args
    }
}

fn push_scope(args: &mut Vec<OsString>, scope: &SearchScope) {
    args.push(scope.path().into());
    if let Some(glob) = scope.glob() {
        args.push("-g".into());
        args.push(glob.into());
    }
}

fn read_all(mut stream: impl Read) -> String {
    let mut buf = Vec::new();
    let _ = stream.read_to_end(&mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}

impl SearchExecutor for RipgrepExecutor {
    fn execute(&self, request: &SearchRequest) -> Result<String, SearchError> {
        let args = Self::args(request);
        tracing::debug!(program = %self.program.display(), ?args, "running ripgrep");

        let mut child = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| SearchError::Spawn {
                program: self.program.display().to_string(),
                source,
            })?;

        // Drain both pipes while waiting so a large listing cannot block the child.
        let stdout = child.stdout.take().map(|s| thread::spawn(move || read_all(s)));
        let stderr = child.stderr.take().map(|s| thread::spawn(move || read_all(s)));

        let status = match child.wait_timeout(self.timeout)? {
            Some(status) => status,
            None => {
                let _ = child.kill();
                let _ = child.wait();
                return Err(SearchError::Timeout(self.timeout));
            }
        };

        let stdout = stdout.and_then(|h| h.join().ok()).unwrap_or_default();
        let stderr = stderr.and_then(|h| h.join().ok()).unwrap_or_default();

        if status.success() {
            return Ok(stdout);
        }
        if status.code() == Some(NO_MATCH_STATUS) && stderr.trim().is_empty() {
            return Ok(String::new());
        }

        Err(SearchError::Failed {
            code: status.code(),
            stderr: stderr.trim().to_string(),
        })
    }
}
