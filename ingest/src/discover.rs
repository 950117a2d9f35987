use crate::{decode, IngestError};
use allocbench_analysis::record::{ResultCorpus, SeriesEntry};
use globset::GlobBuilder;
use ignore::WalkBuilder;
use rayon::prelude::*;
use std::{
    fs,
    path::{Path, PathBuf},
    time::SystemTime,
};
use tracing::{debug, warn};

/// the harness writes one snapshot per session, stamped into the name
pub const SNAPSHOT_GLOB: &str = "benchmark_*.json";
/// one sweep file per benchmark
pub const SWEEP_GLOB: &str = "graph_*.json";

/// collect the files directly under `dir` whose name matches `pattern`,
/// sorted by file name
fn matching_files(dir: &Path, pattern: &str) -> Result<Vec<PathBuf>, IngestError> {
    let matcher = GlobBuilder::new(pattern).build()?.compile_matcher();

    let mut files: Vec<PathBuf> = WalkBuilder::new(dir)
        .max_depth(Some(1))
        .build()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry.into_path()),
            Err(error) => {
                warn!("Failed to walk results directory: {error}");
                None
            }
        })
        .filter(|path| path.is_file())
        .filter(|path| {
            path.file_name()
                .map(|name| matcher.is_match(name))
                .unwrap_or(false)
        })
        .collect();

    files.sort();

    Ok(files)
}

/// Newest snapshot by modification time, `None` when the directory holds none
pub fn latest_snapshot(dir: &Path) -> Result<Option<PathBuf>, IngestError> {
    Ok(matching_files(dir, SNAPSHOT_GLOB)?
        .into_iter()
        .max_by_key(|path| {
            fs::metadata(path)
                .and_then(|metadata| metadata.modified())
                .unwrap_or(SystemTime::UNIX_EPOCH)
        }))
}

pub fn sweep_files(dir: &Path) -> Result<Vec<PathBuf>, IngestError> {
    matching_files(dir, SWEEP_GLOB)
}

fn read(path: &Path) -> Result<String, IngestError> {
    fs::read_to_string(path).map_err(|source| IngestError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Load the newest discrete-run snapshot as a corpus. A results directory
/// without a snapshot yields an empty corpus, a present but broken file is
/// an error.
pub fn load_corpus(dir: &Path) -> Result<ResultCorpus, IngestError> {
    match latest_snapshot(dir)? {
        Some(path) => {
            debug!(path = ?path, "Loading benchmark snapshot");

            let raw = read(&path)?;
            decode::parse_snapshot(&raw)
                .map(decode::Snapshot::into_corpus)
                .map_err(|source| IngestError::Decode { path, source })
        }
        None => {
            warn!("No benchmark snapshot found in {}", dir.display());

            Ok(ResultCorpus::default())
        }
    }
}

/// Decode all sweep files. Files decode in parallel but the output keeps
/// file-name order, independent of thread scheduling.
pub fn load_sweeps(dir: &Path) -> Result<Vec<SeriesEntry>, IngestError> {
    sweep_files(dir)?
        .into_par_iter()
        .map(|path| {
            debug!(path = ?path, "Loading sweep");

            let raw = read(&path)?;
            decode::parse_sweep(&raw).map_err(|source| IngestError::Decode { path, source })
        })
        .collect()
}
