//! Ripgrep `--json` line records.
//!
//! Only `match` records carry data we use. Paths or lines that ripgrep could
//! not represent as UTF-8 arrive as `{"bytes": ...}` instead of `{"text": ...}`
//! and fail to parse, which drops them.

use crate::types::{SearchMatch, Submatch};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextField {
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmatchRecord {
    #[serde(rename = "match")]
    pub matched: TextField,
    pub start: usize,
    pub end: usize,
}

/// Payload of a `match` record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchData {
    pub path: TextField,
    pub lines: TextField,
    pub line_number: u64,
    pub absolute_offset: u64,
    pub submatches: Vec<SubmatchRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Envelope {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    data: serde_json::Value,
}

/// Outcome of parsing one output line.
#[derive(Debug)]
pub enum Record {
    Match(SearchMatch),
    /// A well-formed record of another kind (`begin`, `end`, `summary`, ...).
    Other,
    /// Not JSON, or a `match` record missing required fields.
    Malformed,
}

/// Parse a single non-blank output line.
pub fn parse_line(line: &str) -> Record {
    let envelope: Envelope = match serde_json::from_str(line) {
        Ok(envelope) => envelope,
        Err(_) => return Record::Malformed,
    };

    if envelope.kind != "match" {
        return Record::Other;
    }

    match serde_json::from_value::<MatchData>(envelope.data) {
        Ok(data) => Record::Match(data.into()),
        Err(_) => Record::Malformed,
    }
}

/// Encode a match the way ripgrep would.
pub fn encode_match(data: MatchData) -> String {
    let envelope = serde_json::json!({
        "type": "match",
        "data": data,
    });
    envelope.to_string()
}

impl From<MatchData> for SearchMatch {
    fn from(data: MatchData) -> Self {
        SearchMatch {
            path: PathBuf::from(data.path.text),
            line: data.lines.text,
            submatches: data
                .submatches
                .into_iter()
                .map(|s| Submatch {
                    text: s.matched.text,
                    start: s.start,
                    end: s.end,
                })
                .collect(),
            line_number: data.line_number,
            absolute_offset: data.absolute_offset,
        }
    }
}
