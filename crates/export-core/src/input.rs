//! Dataset input resolution.
//!
//! Callers hand the exporter either already-structured records or a
//! JSON-encoded payload. The union is resolved exactly once, when the
//! exporter is built, with explicit parse-or-pass-through branching.

use crate::values::Record;
use thiserror::Error;

/// Errors produced while resolving export input.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The encoded payload was not a JSON array of flat records.
    #[error("malformed record payload: {0}")]
    MalformedInput(#[from] serde_json::Error),
}

/// Dataset input: in-memory records or an encoded JSON payload.
#[derive(Debug, Clone)]
pub enum RecordInput {
    /// Already-structured records, used as-is.
    Records(Vec<Record>),

    /// A JSON-encoded array of records, parsed on resolution.
    Encoded(String),
}

impl RecordInput {
    /// Resolve into concrete records, parsing encoded payloads.
    pub fn into_records(self) -> Result<Vec<Record>, ExportError> {
        match self {
            RecordInput::Records(records) => Ok(records),
            RecordInput::Encoded(text) => Ok(serde_json::from_str(&text)?),
        }
    }
}

impl From<Vec<Record>> for RecordInput {
    fn from(records: Vec<Record>) -> Self {
        RecordInput::Records(records)
    }
}

impl From<String> for RecordInput {
    fn from(text: String) -> Self {
        RecordInput::Encoded(text)
    }
}

impl From<&str> for RecordInput {
    fn from(text: &str) -> Self {
        RecordInput::Encoded(text.to_string())
    }
}
