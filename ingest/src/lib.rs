//! Discovery and decoding of the result files the benchmark harness drops
//! into its results directory: discrete-run snapshots (`benchmark_*.json`)
//! and iteration sweeps (`graph_*.json`). Everything here is about getting
//! bytes into the core's record types, the aggregation itself lives in
//! `allocbench-analysis`.

pub mod decode;
pub mod discover;

pub use decode::{parse_snapshot, parse_sweep, Snapshot};
pub use discover::{load_corpus, load_sweeps};

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("Result glob was invalid")]
    InvalidGlob(#[from] globset::Error),
    #[error("Failed to read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to decode {path}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod decode_test;
