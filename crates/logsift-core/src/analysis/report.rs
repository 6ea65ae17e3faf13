use super::{
    AggregateReport, Analyzer, LongestRequestsAnalyzer, MethodStatsAnalyzer, TopClientsAnalyzer,
};
use crate::Result;
use crate::access::Request;

/// Composes the three analyzers into one report per input file.
pub struct ReportBuilder {
    top_n: usize,
}

impl ReportBuilder {
    pub fn new(top_n: usize) -> Self {
        Self { top_n }
    }

    pub fn build(&self, requests: &[Request]) -> Result<AggregateReport> {
        tracing::debug!("Building aggregate report for {} records", requests.len());

        let total_stat = MethodStatsAnalyzer.analyze(requests)?;
        let top_ips = TopClientsAnalyzer::new(self.top_n).analyze(requests)?;
        let top_longest = LongestRequestsAnalyzer::new(self.top_n).analyze(requests)?;

        let report = AggregateReport {
            top_ips,
            top_longest,
            total_stat,
            total_requests: requests.len(),
        };

        tracing::info!(
            "Aggregate report complete: {} requests, {} methods",
            report.total_requests,
            report.total_stat.len()
        );

        Ok(report)
    }
}

impl Default for ReportBuilder {
    fn default() -> Self {
        Self::new(3)
    }
}
