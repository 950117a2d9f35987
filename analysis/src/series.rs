use crate::{error::AnalysisError, record::SeriesEntry};
use itertools::Itertools;
use serde::Serialize;
use std::collections::BTreeMap;

/// metrics charted per sweep: (metric key, display title, axis label)
pub const TRACKED_METRICS: [(&str, &str, &str); 4] = [
    ("total_ops_per_sec", "Total Ops/sec", "Ops/sec"),
    ("alloc_ops_per_sec", "Alloc Ops/sec", "Ops/sec"),
    ("avg_alloc_time_ns", "Avg Alloc Time", "Nanoseconds"),
    ("peak_rss_kb", "Peak RSS", "KB"),
];

/// metrics whose sweep-wide sum picks a best performer
pub const SUMMARY_METRICS: [&str; 2] = ["total_ops_per_sec", "alloc_ops_per_sec"];

/// One tracked metric over the sweep, aligned to the iterations axis
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricSeries {
    pub metric: String,
    pub title: String,
    pub unit: String,
    /// one point per iteration step and declared allocator, `None` where the
    /// allocator has no sample (kept visible, never interpolated or zeroed)
    pub points: BTreeMap<String, Vec<Option<f64>>>,
}

/// Chart-ready data for one benchmark sweep
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub benchmark: String,
    pub iterations: Vec<u64>,
    /// tracked metrics present in the entry, in `TRACKED_METRICS` order
    pub series: Vec<MetricSeries>,
    /// (metric, allocator) best-performer summary per summary metric; the
    /// winner is the declared allocator with the highest sum over the sweep
    pub best: Vec<(String, String)>,
}

/// Reshape sweep entries into per-metric, per-allocator chartable series.
/// Every series length is validated against the entry's iterations axis
/// before any output is produced.
pub fn aggregate_series(entries: &[SeriesEntry]) -> Result<Vec<ChartSeries>, AnalysisError> {
    for entry in entries {
        for (metric, per_allocator) in &entry.metrics {
            for (allocator, values) in per_allocator {
                if values.len() != entry.iterations.len() {
                    return Err(AnalysisError::InconsistentSeries {
                        benchmark: entry.benchmark.clone(),
                        metric: metric.clone(),
                        allocator: allocator.clone(),
                        got: values.len(),
                        expected: entry.iterations.len(),
                    });
                }
            }
        }
    }

    Ok(entries.iter().map(chart_series).collect())
}

fn chart_series(entry: &SeriesEntry) -> ChartSeries {
    let series = TRACKED_METRICS
        .iter()
        .filter_map(|(metric, title, unit)| {
            entry.metrics.get(*metric).map(|per_allocator| MetricSeries {
                metric: (*metric).to_owned(),
                title: (*title).to_owned(),
                unit: (*unit).to_owned(),
                points: entry
                    .allocators
                    .iter()
                    .map(|allocator| {
                        let points = match per_allocator.get(allocator) {
                            Some(values) => values.iter().copied().map(Some).collect(),
                            // no data for this allocator, keep the axis
                            // alignment with explicit gaps
                            None => vec![None; entry.iterations.len()],
                        };

                        (allocator.clone(), points)
                    })
                    .collect(),
            })
        })
        .collect_vec();

    let best = SUMMARY_METRICS
        .iter()
        .filter_map(|metric| {
            let per_allocator = entry.metrics.get(*metric)?;

            // sum over the whole sweep, not the average; only declared
            // allocators are eligible, ties go to the alphabetically first
            entry
                .allocators
                .iter()
                .sorted()
                .fold(None::<(&String, f64)>, |best, allocator| {
                    let sum: f64 = per_allocator
                        .get(allocator)
                        .map(|values| values.iter().sum())
                        .unwrap_or(0.0);

                    match best {
                        Some((_, top)) if sum <= top => best,
                        _ => Some((allocator, sum)),
                    }
                })
                .map(|(allocator, _)| ((*metric).to_owned(), allocator.clone()))
        })
        .collect_vec();

    ChartSeries {
        benchmark: entry.benchmark.clone(),
        iterations: entry.iterations.clone(),
        series,
        best,
    }
}
