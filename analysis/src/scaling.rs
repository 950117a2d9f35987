use crate::{error::AnalysisError, ranking::throughput, record::ResultCorpus};
use std::collections::{BTreeMap, BTreeSet};

/// benchmark-name prefix the harness uses for its threaded workloads
pub const THREADED_PREFIX: &str = "threaded_alloc_";

#[derive(Debug, Clone, PartialEq)]
pub struct ScalingRow {
    pub threads: u32,
    /// throughput per allocator, allocators without a sample are absent
    pub throughput: BTreeMap<String, f64>,
    /// highest throughput in the row, a missing sample counts as 0 for the
    /// comparison, ties resolve to the alphabetically first allocator
    pub best: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScalingTable {
    /// sorted union of allocators over all rows, the table header
    pub allocators: Vec<String>,
    /// ascending by thread count
    pub rows: Vec<ScalingRow>,
}

/// Compare allocator throughput across thread counts. Only records whose
/// benchmark name carries the threaded prefix participate; a corpus without
/// any yields `Ok(None)` rather than a table with empty rows.
pub fn analyze_thread_scaling(
    corpus: &ResultCorpus,
) -> Result<Option<ScalingTable>, AnalysisError> {
    let mut by_threads: BTreeMap<u32, BTreeMap<String, f64>> = BTreeMap::new();

    for record in corpus
        .records()
        .iter()
        .filter(|record| record.benchmark.starts_with(THREADED_PREFIX))
    {
        let ops = throughput(record)?;

        // a rerun of the same allocator at the same thread count replaces the
        // earlier sample
        by_threads
            .entry(record.metrics.threads())
            .or_default()
            .insert(record.allocator.clone(), ops);
    }

    if by_threads.is_empty() {
        return Ok(None);
    }

    let allocators: Vec<String> = by_threads
        .values()
        .flat_map(|row| row.keys().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let rows = by_threads
        .into_iter()
        .map(|(threads, throughput)| {
            let best = allocators
                .iter()
                .fold(None::<(&String, f64)>, |best, name| {
                    let ops = throughput.get(name).copied().unwrap_or(0.0);

                    match best {
                        Some((_, top)) if ops <= top => best,
                        _ => Some((name, ops)),
                    }
                })
                .map(|(name, _)| name.clone())
                .unwrap_or_default();

            ScalingRow {
                threads,
                throughput,
                best,
            }
        })
        .collect();

    Ok(Some(ScalingTable { allocators, rows }))
}
