use crate::config::HarnessConfig;
use std::{
    io::Read,
    process::{Command, Stdio},
    time::{Duration, Instant},
};
use thiserror::Error;
use tracing::{debug, instrument, trace};
use wait_timeout::ChildExt;

#[derive(Error, Debug)]
pub enum ExecutorError {
    #[error("Failed to spawn the benchmark harness")]
    Spawn(#[source] std::io::Error),
    #[error("Failed to wait for the benchmark harness")]
    Wait(#[from] std::io::Error),
    #[error("Benchmark harness ran into the {0}s timeout")]
    Timeout(u64),
    #[error("Benchmark harness exited with status {status}: {stderr}")]
    Failed { status: i32, stderr: String },
}

/// Run the harness once. It writes its JSON results itself, stdout is only
/// interesting for tracing.
#[instrument(skip(config), level = "info")]
pub fn run_harness(config: &HarnessConfig, graph_mode: bool) -> Result<String, ExecutorError> {
    let mut command = Command::new(&config.executable);
    command
        .arg("-o")
        .arg(&config.results)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    if graph_mode {
        command.arg("--graph");
    }
    if let Some(ref benchmark) = config.benchmark {
        command.args(["-b", benchmark]);
    }
    if let Some(ref allocator) = config.allocator {
        command.args(["-a", allocator]);
    }

    debug!("Running: {command:?}");

    let timeout = Duration::from_secs(config.timeout);
    let start = Instant::now();
    let mut child = command.spawn().map_err(ExecutorError::Spawn)?;

    match child.wait_timeout(timeout)? {
        Some(status) => {
            let elapsed = start.elapsed();
            let mut stdout = String::new();

            if let Some(mut pipe) = child.stdout.take() {
                pipe.read_to_string(&mut stdout)?;
            }

            debug!(
                "Finished in {} ns | status: {}",
                elapsed.as_nanos(),
                status.success()
            );
            trace!("Output: {stdout}");

            if status.success() {
                Ok(stdout)
            } else {
                let mut stderr = String::new();

                if let Some(mut pipe) = child.stderr.take() {
                    pipe.read_to_string(&mut stderr)?;
                }

                Err(ExecutorError::Failed {
                    status: status.code().unwrap_or(-1),
                    stderr,
                })
            }
        }
        None => {
            // child hasn't exited yet
            child.kill()?;

            Err(ExecutorError::Timeout(config.timeout))
        }
    }
}
