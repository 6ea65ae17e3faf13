use crate::Result;
use super::parser::LineParser;
use super::types::LogScan;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

pub struct LogReader;

impl LogReader {
    /// Read and parse an access log file from the given path.
    ///
    /// Malformed lines are dropped and counted; only I/O failures abort.
    pub fn from_file(path: &Path) -> Result<LogScan> {
        tracing::debug!("Reading access log from: {}", path.display());

        let file = File::open(path)?;
        let reader = BufReader::new(file);

        let mut scan = LogScan::default();
        for line in reader.lines() {
            absorb(&mut scan, &line?);
        }
        report_malformed(&scan);

        tracing::info!(
            "Successfully parsed access log with {} records",
            scan.requests.len()
        );

        Ok(scan)
    }

    /// Parse access log lines from a string.
    pub fn from_str(content: &str) -> LogScan {
        tracing::debug!("Parsing access log from string");

        let mut scan = LogScan::default();
        for line in content.lines() {
            absorb(&mut scan, line);
        }
        report_malformed(&scan);

        scan
    }
}

fn absorb(scan: &mut LogScan, line: &str) {
    match LineParser::parse(line) {
        Ok(request) => scan.requests.push(request),
        Err(_) => scan.malformed_lines += 1,
    }
}

// One aggregate warning per input, never a message per line.
fn report_malformed(scan: &LogScan) {
    if scan.malformed_lines > 0 {
        tracing::warn!(
            "Failed to parse {} lines: not a valid access log format",
            scan.malformed_lines
        );
    }
}
