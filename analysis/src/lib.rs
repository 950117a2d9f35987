//! Aggregation core for allocator benchmark results: groups raw measurement
//! records, ranks allocators per benchmark, derives thread-scaling tables and
//! reshapes iteration sweeps into chartable series. Pure transformations over
//! in-memory corpora, no I/O and no logging.

pub mod error;
pub mod format;
pub mod ranking;
pub mod record;
pub mod scaling;
pub mod series;

pub use error::AnalysisError;
pub use record::{ResultCorpus, RunMetrics, RunRecord, SeriesEntry};

#[cfg(test)]
mod format_test;
#[cfg(test)]
mod series_test;
