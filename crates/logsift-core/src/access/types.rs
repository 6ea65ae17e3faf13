use serde::{Deserialize, Serialize};

/// One successfully parsed access log line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    /// Client address as it appears in the line, dotted-quad text.
    pub ip: String,
    /// Bracketed timestamp text, kept verbatim including the brackets.
    pub date: String,
    /// First word of the quoted request line, e.g. "GET".
    pub method: String,
    /// The quoted field in the referrer position. Kept under this name
    /// as a fixed output contract.
    pub url: String,
    /// Trailing integer field, request duration.
    pub duration: u64,
}

/// Outcome of scanning one input: the parsed records plus how many
/// lines failed the grammar and were dropped.
#[derive(Debug, Clone, Default)]
pub struct LogScan {
    pub requests: Vec<Request>,
    pub malformed_lines: usize,
}
