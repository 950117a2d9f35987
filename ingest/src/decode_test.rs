use crate::decode::{parse_snapshot, parse_sweep};

// trimmed-down copy of what the harness actually writes, including null
// metrics and fields this toolkit does not chart
const SNAPSHOT: &str = r#"{
  "timestamp": "20260807_101500",
  "results": [
    {
      "benchmark": "malloc_small",
      "allocator": "system",
      "metrics": {
        "total_time_ms": 12.5,
        "operations": 1000000,
        "alloc_ops_per_sec": 80000000.0,
        "free_ops_per_sec": 90000000.0,
        "total_ops_per_sec": 42500000.0,
        "avg_alloc_time_ns": 12.51,
        "min_alloc_time_ns": null,
        "max_alloc_time_ns": null,
        "p50_alloc_time_ns": 11.0,
        "p99_alloc_time_ns": 45.0,
        "peak_rss_kb": 2048,
        "current_rss_kb": 1024,
        "fragmentation_ratio": null,
        "total_allocated_bytes": 16000000,
        "total_requested_bytes": 15500000,
        "thread_count": 1
      }
    },
    {
      "benchmark": "threaded_alloc_4",
      "allocator": "jemalloc",
      "metrics": {
        "total_ops_per_sec": 9000000.0,
        "thread_count": 4
      }
    }
  ]
}"#;

const SWEEP: &str = r#"{
  "mode": "graph",
  "benchmark": "malloc_small",
  "iterations": [1000, 10000, 100000],
  "allocators": ["system", "jemalloc"],
  "metrics": {
    "total_ops_per_sec": {
      "system": [1.0, 2.0, 3.0],
      "jemalloc": [4.0, 5.0, 6.0]
    },
    "peak_rss_kb": {
      "system": [100.0, 200.0, 300.0]
    }
  }
}"#;

#[test]
pub fn snapshot_decodes_the_harness_shape() {
    let corpus = parse_snapshot(SNAPSHOT).unwrap().into_corpus();

    assert_eq!(corpus.len(), 2);

    let first = &corpus.records()[0];
    assert_eq!(first.benchmark, "malloc_small");
    assert_eq!(first.allocator, "system");
    assert_eq!(first.metrics.total_ops_per_sec, Some(42_500_000.0));
    assert_eq!(first.metrics.peak_rss_kb, Some(2048));
    // written as null by the harness
    assert_eq!(first.metrics.min_alloc_time_ns, None);
    assert_eq!(first.metrics.fragmentation_ratio, None);
}

#[test]
pub fn snapshot_keeps_record_order() {
    let corpus = parse_snapshot(SNAPSHOT).unwrap().into_corpus();

    assert_eq!(corpus.records()[1].benchmark, "threaded_alloc_4");
    assert_eq!(corpus.records()[1].metrics.threads(), 4);
}

#[test]
pub fn snapshot_tolerates_missing_metrics() {
    let snapshot = parse_snapshot(
        r#"{"results": [{"benchmark": "b", "allocator": "a", "metrics": {}}]}"#,
    )
    .unwrap();

    assert_eq!(snapshot.results[0].metrics.total_ops_per_sec, None);
    // absent thread count reads as a single-threaded run
    assert_eq!(snapshot.results[0].metrics.threads(), 1);
}

#[test]
pub fn empty_snapshot_is_an_empty_corpus() {
    let corpus = parse_snapshot(r#"{"results": []}"#).unwrap().into_corpus();

    assert!(corpus.is_empty());
}

#[test]
pub fn sweep_decodes_the_graph_shape() {
    let entry = parse_sweep(SWEEP).unwrap();

    assert_eq!(entry.benchmark, "malloc_small");
    assert_eq!(entry.iterations, vec![1000, 10000, 100000]);
    assert_eq!(entry.allocators, vec!["system", "jemalloc"]);
    assert_eq!(
        entry.metrics["total_ops_per_sec"]["jemalloc"],
        vec![4.0, 5.0, 6.0]
    );
    // jemalloc has no peak_rss_kb series at all
    assert_eq!(entry.metrics["peak_rss_kb"].get("jemalloc"), None);
}

#[test]
pub fn malformed_json_is_rejected() {
    assert!(parse_snapshot("{\"results\": [").is_err());
    assert!(parse_sweep("not json").is_err());
}
