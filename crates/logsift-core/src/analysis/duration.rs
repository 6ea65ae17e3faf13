use super::Analyzer;
use crate::Result;
use crate::access::Request;

pub struct LongestRequestsAnalyzer {
    top_n: usize,
}

impl LongestRequestsAnalyzer {
    pub fn new(top_n: usize) -> Self {
        Self { top_n }
    }
}

impl Default for LongestRequestsAnalyzer {
    fn default() -> Self {
        Self::new(3)
    }
}

impl Analyzer for LongestRequestsAnalyzer {
    type Output = Vec<Request>;

    fn analyze(&self, requests: &[Request]) -> Result<Self::Output> {
        tracing::debug!("Ranking requests by duration");

        let mut longest = requests.to_vec();
        // sort_by is stable, so equal durations keep input order.
        longest.sort_by(|a, b| b.duration.cmp(&a.duration));
        longest.truncate(self.top_n);

        Ok(longest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(url: &str, duration: u64) -> Request {
        Request {
            ip: "10.0.0.1".to_owned(),
            date: "[10/Oct/2023:13:55:36 +0000]".to_owned(),
            method: "GET".to_owned(),
            url: url.to_owned(),
            duration,
        }
    }

    #[test]
    fn test_longest_sorted_descending() {
        let requests = vec![
            request("/a", 100),
            request("/b", 900),
            request("/c", 50),
            request("/d", 300),
        ];

        let longest = LongestRequestsAnalyzer::default()
            .analyze(&requests)
            .unwrap();
        let durations: Vec<u64> = longest.iter().map(|r| r.duration).collect();
        assert_eq!(durations, [900, 300, 100]);
    }

    #[test]
    fn test_longest_omits_only_shorter_requests() {
        let requests = vec![
            request("/a", 10),
            request("/b", 40),
            request("/c", 30),
            request("/d", 20),
        ];

        let longest = LongestRequestsAnalyzer::default()
            .analyze(&requests)
            .unwrap();
        assert_eq!(longest.len(), 3);
        let min_kept = longest.iter().map(|r| r.duration).min().unwrap();
        assert!(min_kept >= 20);
    }

    #[test]
    fn test_longest_ties_keep_input_order() {
        let requests = vec![
            request("/first", 100),
            request("/second", 100),
            request("/third", 100),
            request("/fourth", 100),
        ];

        let longest = LongestRequestsAnalyzer::default()
            .analyze(&requests)
            .unwrap();
        let urls: Vec<&str> = longest.iter().map(|r| r.url.as_str()).collect();
        assert_eq!(urls, ["/first", "/second", "/third"]);
    }

    #[test]
    fn test_longest_fewer_than_top_n() {
        let requests = vec![request("/a", 5), request("/b", 7)];

        let longest = LongestRequestsAnalyzer::default()
            .analyze(&requests)
            .unwrap();
        let durations: Vec<u64> = longest.iter().map(|r| r.duration).collect();
        assert_eq!(durations, [7, 5]);
    }

    #[test]
    fn test_input_not_mutated() {
        let requests = vec![request("/a", 1), request("/b", 2)];
        let before = requests.clone();

        LongestRequestsAnalyzer::default()
            .analyze(&requests)
            .unwrap();
        assert_eq!(requests, before);
    }
}
