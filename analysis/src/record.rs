use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Metrics the harness reports for a single run.
/// Every field is optional on the wire; an absent value stays absent and
/// renders as N/A downstream, it is never coerced to zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunMetrics {
    pub total_time_ms: Option<f64>,
    pub operations: Option<u64>,
    pub total_ops_per_sec: Option<f64>,
    pub alloc_ops_per_sec: Option<f64>,
    pub free_ops_per_sec: Option<f64>,
    pub avg_alloc_time_ns: Option<f64>,
    pub min_alloc_time_ns: Option<f64>,
    pub max_alloc_time_ns: Option<f64>,
    pub p50_alloc_time_ns: Option<f64>,
    pub p99_alloc_time_ns: Option<f64>,
    pub peak_rss_kb: Option<u64>,
    pub current_rss_kb: Option<u64>,
    pub fragmentation_ratio: Option<f64>,
    pub total_allocated_bytes: Option<u64>,
    pub total_requested_bytes: Option<u64>,
    pub thread_count: Option<u32>,
}

impl RunMetrics {
    /// single-threaded runs usually omit the thread count
    pub fn threads(&self) -> u32 {
        self.thread_count.unwrap_or(1)
    }
}

/// One discrete benchmark execution. Multiple records may share the same
/// (benchmark, allocator) pair, the corpus keeps them all in input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunRecord {
    pub benchmark: String,
    pub allocator: String,
    #[serde(default)]
    pub metrics: RunMetrics,
}

/// Snapshot of one benchmark session, constructed wholesale and never patched
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultCorpus {
    records: Vec<RunRecord>,
}

impl ResultCorpus {
    pub fn new(records: Vec<RunRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[RunRecord] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// sorted union of allocator names observed in the corpus
    pub fn allocators(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|record| record.allocator.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

impl FromIterator<RunRecord> for ResultCorpus {
    fn from_iter<I: IntoIterator<Item = RunRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// One iteration sweep: the same benchmark repeated over ascending iteration
/// counts, one value series per (metric, allocator) pair.
///
/// Invariant: every series has exactly `iterations.len()` points. An
/// allocator missing from a metric means "no data", not zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeriesEntry {
    pub benchmark: String,
    pub iterations: Vec<u64>,
    pub allocators: Vec<String>,
    #[serde(default)]
    pub metrics: BTreeMap<String, BTreeMap<String, Vec<f64>>>,
}
