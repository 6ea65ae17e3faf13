use crate::{Error, Result};
use super::types::Request;
use regex::Regex;
use std::sync::LazyLock;

// Common-log-style line with referrer, user agent and a trailing duration:
//   ip - - [date] "request" status bytes "referrer" "agent" duration
// The pattern is searched, not anchored, so unrelated text around one
// contiguous match is tolerated. Quad groups are textual only, digits are
// not range-checked.
static ACCESS_LOG_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?P<ip>\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}) - - (?P<date>\[.+\]) "(?P<request>.+?)" (?P<status>\d{3}) (?P<bytes>\d+) "(?P<referrer>.+?)" "(?P<agent>.+?)" (?P<duration>\d+)"#,
    )
    .unwrap()
});

pub struct LineParser;

impl LineParser {
    /// Parse one raw line into a [`Request`]. A line either matches the
    /// full grammar or is rejected whole; no partial record is produced.
    pub fn parse(line: &str) -> Result<Request> {
        let captures = ACCESS_LOG_REGEX.captures(line).ok_or(Error::Malformed)?;

        // Only the first word of the quoted request line is kept.
        let method = captures["request"]
            .split_whitespace()
            .next()
            .ok_or(Error::Malformed)?
            .to_owned();

        let duration = captures["duration"]
            .parse::<u64>()
            .map_err(|_| Error::Malformed)?;

        Ok(Request {
            ip: captures["ip"].to_owned(),
            date: captures["date"].to_owned(),
            method,
            // The record's url is fed by the referrer-position quoted
            // field. Fixed output contract; status, bytes and agent are
            // matched only to keep the grammar unambiguous.
            url: captures["referrer"].to_owned(),
            duration,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"203.0.113.5 - - [10/Oct/2023:13:55:36 +0000] "GET /index.html HTTP/1.1" 200 512 "https://example.com/" "Mozilla/5.0" 342"#;

    #[test]
    fn test_parse_full_line() {
        let request = LineParser::parse(SAMPLE).unwrap();
        assert_eq!(request.ip, "203.0.113.5");
        assert_eq!(request.date, "[10/Oct/2023:13:55:36 +0000]");
        assert_eq!(request.method, "GET");
        assert_eq!(request.url, "https://example.com/");
        assert_eq!(request.duration, 342);
    }

    #[test]
    fn test_url_comes_from_referrer_position() {
        let line = r#"198.51.100.7 - - [01/Jan/2024:00:00:01 +0000] "POST /api/v1/items HTTP/1.1" 201 64 "https://referrer.example/" "curl/8.0" 17"#;
        let request = LineParser::parse(line).unwrap();
        // Not the request-line target.
        assert_eq!(request.url, "https://referrer.example/");
    }

    #[test]
    fn test_parse_empty_line_fails() {
        assert!(LineParser::parse("").is_err());
    }

    #[test]
    fn test_parse_truncated_line_fails() {
        let line = r#"203.0.113.5 - - [10/Oct/2023:13:55:36 +0000] "GET /index.html HTTP/1.1" 200"#;
        assert!(LineParser::parse(line).is_err());
    }

    #[test]
    fn test_parse_tolerates_surrounding_text() {
        let line = format!("prefix junk {SAMPLE} trailing junk");
        let request = LineParser::parse(&line).unwrap();
        assert_eq!(request.ip, "203.0.113.5");
        assert_eq!(request.duration, 342);
    }

    #[test]
    fn test_parse_blank_request_line_fails() {
        let line = r#"203.0.113.5 - - [10/Oct/2023:13:55:36 +0000] " " 200 512 "https://example.com/" "Mozilla/5.0" 342"#;
        assert!(LineParser::parse(line).is_err());
    }

    #[test]
    fn test_parse_non_numeric_duration_fails() {
        let line = r#"203.0.113.5 - - [10/Oct/2023:13:55:36 +0000] "GET / HTTP/1.1" 200 512 "https://example.com/" "Mozilla/5.0" fast"#;
        assert!(LineParser::parse(line).is_err());
    }

    #[test]
    fn test_parse_does_not_range_check_quads() {
        let line = r#"999.999.999.999 - - [10/Oct/2023:13:55:36 +0000] "GET / HTTP/1.1" 200 512 "-" "-" 1"#;
        let request = LineParser::parse(line).unwrap();
        assert_eq!(request.ip, "999.999.999.999");
    }
}
