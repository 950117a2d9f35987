use serde::{Deserialize, Serialize};
use std::{fs::File, io::Error, os::unix::fs::MetadataExt, path::PathBuf, str::FromStr};
use thiserror::Error;
use tracing::error;

// check if a file is executable
pub fn check_executable(path: &PathBuf) -> Result<bool, ConfigErrors> {
    if !path.is_file() {
        Err(ConfigErrors::FileNotFound)
    } else {
        match File::open(path).map(|file| file.metadata()) {
            Ok(Ok(metadata)) => Ok((metadata.mode() & 0o111) != 0),
            Ok(Err(e)) | Err(e) => Err(ConfigErrors::MetadataNotFound(e)),
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigErrors {
    #[error("Config file was invalid")]
    InvalidConfig(#[from] serde_yaml::Error),
    #[error("File not found")]
    FileNotFound,
    #[error("Metadata not found")]
    MetadataNotFound(#[from] Error),
    #[error("Preflight checks failed")]
    FailedPreflight,
}

#[derive(Deserialize, Serialize, Clone, Debug)]
#[serde(deny_unknown_fields)]
pub struct HarnessConfig {
    // benchmark executable, invoked once per report mode
    #[serde(default = "default_executable")]
    pub executable: PathBuf,
    // the harness drops its JSON result files here
    #[serde(default = "default_results_dir")]
    pub results: PathBuf,
    // assembled markdown report
    #[serde(default = "default_output")]
    pub output: PathBuf,
    // chart data lands in a per-platform directory below this
    #[serde(default = "default_plots_dir")]
    pub plots: PathBuf,
    // seconds to wait for a single harness invocation
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    // passed through to the harness as -b/-a filters
    #[serde(default)]
    pub benchmark: Option<String>,
    #[serde(default)]
    pub allocator: Option<String>,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            executable: default_executable(),
            results: default_results_dir(),
            output: default_output(),
            plots: default_plots_dir(),
            timeout: default_timeout(),
            benchmark: None,
            allocator: None,
        }
    }
}

impl HarnessConfig {
    pub fn load(path: &PathBuf) -> Result<Self, ConfigErrors> {
        match File::open(path) {
            Ok(file) => Ok(serde_yaml::from_reader(file)?),
            Err(_) => Err(ConfigErrors::FileNotFound),
        }
    }

    /// attempt to catch all errors instead of piece-by-piece to make
    /// debugging easier for users; returns true when anything is wrong
    pub fn preflight_checks(&self, skip_run: bool) -> bool {
        let mut contains_error = false;

        if skip_run {
            // existing results are reused, the executable is not needed
        } else if !self.executable.is_file() {
            error!(
                "Failed to find the benchmark executable. Either not a file or not found at {}",
                self.executable.to_string_lossy()
            );

            contains_error = true;
        } else {
            match check_executable(&self.executable) {
                Ok(is_executable) => {
                    if !is_executable {
                        error!(
                            "Benchmark target {} is not executable, this might cause problems",
                            self.executable.to_string_lossy()
                        );

                        contains_error = true;
                    }
                }
                Err(e) => {
                    error!(
                        "Failed to determine if {} is an executable: {e}",
                        self.executable.to_string_lossy()
                    );

                    contains_error = true;
                }
            }
        }

        if self.timeout == 0 {
            error!("timeout cannot be 0, the harness would be killed before reporting anything");
            contains_error = true;
        }

        contains_error
    }
}

fn default_executable() -> PathBuf {
    PathBuf::from_str("build/allocbench").unwrap()
}

fn default_results_dir() -> PathBuf {
    PathBuf::from_str("build/results").unwrap()
}

fn default_output() -> PathBuf {
    PathBuf::from_str("bench_results.md").unwrap()
}

fn default_plots_dir() -> PathBuf {
    PathBuf::from_str("plots").unwrap()
}

fn default_timeout() -> u64 {
    600
}
