mod duration;
mod frequency;
mod report;
mod writer;

pub use duration::LongestRequestsAnalyzer;
pub use frequency::{MethodStatsAnalyzer, TopClientsAnalyzer};
pub use report::ReportBuilder;
pub use writer::ReportWriter;

use crate::access::Request;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

/// Summary statistics for one input file. Field order is the report's
/// key order on disk.
#[derive(Debug, Clone, Serialize)]
pub struct AggregateReport {
    /// Highest-volume client addresses, descending, at most top-N.
    #[serde(serialize_with = "ranked_counts_as_map")]
    pub top_ips: Vec<(String, u64)>,
    /// Longest requests by duration, descending, at most top-N.
    pub top_longest: Vec<Request>,
    /// Occurrence count per request method.
    pub total_stat: BTreeMap<String, u64>,
    /// Number of successfully parsed lines.
    pub total_requests: usize,
}

// Emit ranked (address, count) pairs as a JSON object, keeping rank order.
fn ranked_counts_as_map<S>(pairs: &[(String, u64)], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_map(pairs.iter().map(|(address, count)| (address, count)))
}

pub trait Analyzer {
    type Output;

    fn analyze(&self, requests: &[Request]) -> crate::Result<Self::Output>;
}
