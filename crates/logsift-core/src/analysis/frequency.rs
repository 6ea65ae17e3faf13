use super::Analyzer;
use crate::Result;
use crate::access::Request;
use std::collections::{BTreeMap, HashMap};

pub struct MethodStatsAnalyzer;

impl Analyzer for MethodStatsAnalyzer {
    type Output = BTreeMap<String, u64>;

    fn analyze(&self, requests: &[Request]) -> Result<Self::Output> {
        tracing::debug!("Counting requests per method");

        let mut counts = BTreeMap::new();
        for request in requests {
            *counts.entry(request.method.clone()).or_insert(0) += 1;
        }

        Ok(counts)
    }
}

pub struct TopClientsAnalyzer {
    top_n: usize,
}

impl TopClientsAnalyzer {
    pub fn new(top_n: usize) -> Self {
        Self { top_n }
    }
}

impl Default for TopClientsAnalyzer {
    fn default() -> Self {
        Self::new(3)
    }
}

impl Analyzer for TopClientsAnalyzer {
    type Output = Vec<(String, u64)>;

    fn analyze(&self, requests: &[Request]) -> Result<Self::Output> {
        tracing::debug!("Ranking client addresses by request volume");

        // Counts are collected in first-occurrence order, so the stable
        // sort below keeps tied addresses in that order.
        let mut order: Vec<&str> = Vec::new();
        let mut counts: HashMap<&str, u64> = HashMap::new();
        for request in requests {
            if !counts.contains_key(request.ip.as_str()) {
                order.push(&request.ip);
            }
            *counts.entry(&request.ip).or_insert(0) += 1;
        }

        let mut ranked: Vec<(String, u64)> = order
            .into_iter()
            .map(|ip| (ip.to_owned(), counts[ip]))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(self.top_n);

        Ok(ranked)
    }
}
