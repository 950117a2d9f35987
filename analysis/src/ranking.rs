use crate::{
    error::AnalysisError,
    record::{ResultCorpus, RunRecord},
};
use itertools::Itertools;
use std::collections::BTreeMap;

/// metric every ranking decision is based on
pub const PRIMARY_METRIC: &str = "total_ops_per_sec";

/// One benchmark's records, best throughput first
#[derive(Debug, Clone, PartialEq)]
pub struct RankedBenchmark {
    pub benchmark: String,
    /// sorted descending by total throughput, ties keep corpus order
    pub rows: Vec<RunRecord>,
    pub winner: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RankingReport {
    /// one group per distinct benchmark name, lexicographic order
    pub benchmarks: Vec<RankedBenchmark>,
    /// win counts, most wins first, names ascending within a count
    pub wins: Vec<(String, u32)>,
    /// allocator with the most benchmark wins, ties broken toward the
    /// lexicographically smallest name (alphabetical-first policy)
    pub overall_winner: Option<String>,
}

/// primary throughput of a record, absent or negative is a data error
pub(crate) fn throughput(record: &RunRecord) -> Result<f64, AnalysisError> {
    match record.metrics.total_ops_per_sec {
        Some(value) if value >= 0.0 => Ok(value),
        _ => Err(AnalysisError::MalformedRecord {
            benchmark: record.benchmark.clone(),
            allocator: record.allocator.clone(),
            metric: PRIMARY_METRIC,
        }),
    }
}

/// Group a corpus by benchmark, rank allocators within each group and derive
/// the overall winner across groups. An empty corpus yields an empty report.
pub fn rank_benchmarks(corpus: &ResultCorpus) -> Result<RankingReport, AnalysisError> {
    let mut groups: BTreeMap<&str, Vec<(f64, &RunRecord)>> = BTreeMap::new();

    for record in corpus.records() {
        let ops = throughput(record)?;
        groups
            .entry(record.benchmark.as_str())
            .or_default()
            .push((ops, record));
    }

    let benchmarks = groups
        .into_iter()
        .map(|(benchmark, mut rows)| {
            // stable sort, equal throughput keeps corpus order
            rows.sort_by(|a, b| b.0.total_cmp(&a.0));

            RankedBenchmark {
                benchmark: benchmark.to_owned(),
                winner: rows[0].1.allocator.clone(),
                rows: rows.into_iter().map(|(_, record)| record.clone()).collect(),
            }
        })
        .collect_vec();

    // pure fold over group winners, exactly one increment per benchmark
    let tally = benchmarks
        .iter()
        .fold(BTreeMap::<&str, u32>::new(), |mut tally, group| {
            *tally.entry(group.winner.as_str()).or_default() += 1;
            tally
        });

    // key-ordered scan with strictly-greater replacement, so ties resolve to
    // the alphabetically first allocator
    let overall_winner = tally
        .iter()
        .fold(None::<(&str, u32)>, |best, (name, wins)| match best {
            Some((_, top)) if *wins <= top => best,
            _ => Some((*name, *wins)),
        })
        .map(|(name, _)| name.to_owned());

    let wins = tally
        .into_iter()
        .sorted_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)))
        .map(|(name, wins)| (name.to_owned(), wins))
        .collect_vec();

    Ok(RankingReport {
        benchmarks,
        wins,
        overall_winner,
    })
}
