use thiserror::Error;

/// Failures surfaced to the caller, never logged or retried here
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("Record {benchmark}/{allocator} has no usable {metric}")]
    MalformedRecord {
        benchmark: String,
        allocator: String,
        metric: &'static str,
    },
    #[error(
        "Series {benchmark}: {metric} for {allocator} has {got} points, expected {expected}"
    )]
    InconsistentSeries {
        benchmark: String,
        metric: String,
        allocator: String,
        got: usize,
        expected: usize,
    },
}
