use allocbench_analysis::record::{ResultCorpus, RunRecord, SeriesEntry};
use serde::Deserialize;

/// Wire shape of one `benchmark_*.json` snapshot. The harness owns the
/// format and may grow it, unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub results: Vec<RunRecord>,
}

impl Snapshot {
    /// record order is preserved, it is the stable-sort tie order downstream
    pub fn into_corpus(self) -> ResultCorpus {
        ResultCorpus::new(self.results)
    }
}

pub fn parse_snapshot(input: &str) -> Result<Snapshot, serde_json::Error> {
    serde_json::from_str(input)
}

/// Decode one `graph_*.json` sweep. The file carries a `"mode": "graph"`
/// discriminator which is ignored here.
pub fn parse_sweep(input: &str) -> Result<SeriesEntry, serde_json::Error> {
    serde_json::from_str(input)
}
