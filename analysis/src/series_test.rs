use crate::{
    record::SeriesEntry,
    series::aggregate_series,
    AnalysisError,
};
use std::collections::BTreeMap;

fn entry(
    benchmark: &str,
    iterations: Vec<u64>,
    allocators: &[&str],
    metrics: &[(&str, &[(&str, &[f64])])],
) -> SeriesEntry {
    SeriesEntry {
        benchmark: benchmark.to_owned(),
        iterations,
        allocators: allocators.iter().map(|name| (*name).to_owned()).collect(),
        metrics: metrics
            .iter()
            .map(|(metric, series)| {
                (
                    (*metric).to_owned(),
                    series
                        .iter()
                        .map(|(allocator, values)| ((*allocator).to_owned(), values.to_vec()))
                        .collect::<BTreeMap<_, _>>(),
                )
            })
            .collect(),
    }
}

#[test]
pub fn points_align_to_the_iterations_axis() {
    let charts = aggregate_series(&[entry(
        "malloc_small",
        vec![100, 1000, 10000],
        &["A", "B"],
        &[(
            "total_ops_per_sec",
            &[("A", &[1.0, 2.0, 3.0]), ("B", &[4.0, 5.0, 6.0])],
        )],
    )])
    .unwrap();

    let series = &charts[0].series[0];
    assert_eq!(series.metric, "total_ops_per_sec");
    assert_eq!(series.points["A"], vec![Some(1.0), Some(2.0), Some(3.0)]);
    assert_eq!(series.points["B"], vec![Some(4.0), Some(5.0), Some(6.0)]);
}

#[test]
pub fn absent_allocator_keeps_visible_gaps() {
    let charts = aggregate_series(&[entry(
        "malloc_small",
        vec![10, 20],
        &["A", "B"],
        &[("total_ops_per_sec", &[("A", &[1.0, 2.0])])],
    )])
    .unwrap();

    // B has no data for this metric: gaps, not zeros
    assert_eq!(charts[0].series[0].points["B"], vec![None, None]);
}

#[test]
pub fn untracked_metrics_are_skipped() {
    let charts = aggregate_series(&[entry(
        "malloc_small",
        vec![10],
        &["A"],
        &[
            ("total_ops_per_sec", &[("A", &[1.0])]),
            ("fragmentation_ratio", &[("A", &[1.5])]),
        ],
    )])
    .unwrap();

    let metrics: Vec<&str> = charts[0]
        .series
        .iter()
        .map(|series| series.metric.as_str())
        .collect();

    assert_eq!(metrics, vec!["total_ops_per_sec"]);
}

#[test]
pub fn inconsistent_length_fails_fast() {
    let result = aggregate_series(&[entry(
        "malloc_small",
        vec![10, 20, 30],
        &["A"],
        &[("total_ops_per_sec", &[("A", &[1.0, 2.0])])],
    )]);

    assert_eq!(
        result,
        Err(AnalysisError::InconsistentSeries {
            benchmark: "malloc_small".to_owned(),
            metric: "total_ops_per_sec".to_owned(),
            allocator: "A".to_owned(),
            got: 2,
            expected: 3,
        })
    );
}

#[test]
pub fn best_performer_prefers_the_larger_sweep_sum() {
    // A spikes once, B is strong across the whole sweep: B wins on sum
    let charts = aggregate_series(&[entry(
        "malloc_small",
        vec![10, 20, 30],
        &["A", "B"],
        &[(
            "total_ops_per_sec",
            &[("A", &[100.0, 1.0, 1.0]), ("B", &[50.0, 50.0, 50.0])],
        )],
    )])
    .unwrap();

    assert_eq!(
        charts[0].best,
        vec![("total_ops_per_sec".to_owned(), "B".to_owned())]
    );
}

#[test]
pub fn best_performer_is_always_a_declared_allocator() {
    // the metric carries a stray series for an undeclared allocator with a
    // huge sum; it must not surface as best performer
    let charts = aggregate_series(&[entry(
        "malloc_small",
        vec![10],
        &["A"],
        &[(
            "alloc_ops_per_sec",
            &[("A", &[1.0]), ("zmalloc", &[9000.0])],
        )],
    )])
    .unwrap();

    assert_eq!(
        charts[0].best,
        vec![("alloc_ops_per_sec".to_owned(), "A".to_owned())]
    );
}

#[test]
pub fn summary_skips_metrics_without_data() {
    let charts = aggregate_series(&[entry(
        "malloc_small",
        vec![10],
        &["A"],
        &[("avg_alloc_time_ns", &[("A", &[5.0])])],
    )])
    .unwrap();

    assert!(charts[0].best.is_empty());
}

#[test]
pub fn no_entries_no_charts() {
    assert_eq!(aggregate_series(&[]).unwrap(), vec![]);
}

#[test]
pub fn aggregation_is_deterministic() {
    let entries = [entry(
        "malloc_small",
        vec![10, 20],
        &["B", "A"],
        &[(
            "total_ops_per_sec",
            &[("A", &[1.0, 2.0]), ("B", &[2.0, 1.0])],
        )],
    )];

    assert_eq!(
        aggregate_series(&entries).unwrap(),
        aggregate_series(&entries).unwrap()
    );
}
