mod chart;
mod config;
mod executor;
mod report;


use allocbench_analysis::{
    ranking::rank_benchmarks, scaling::analyze_thread_scaling, series::aggregate_series,
    AnalysisError,
};
use allocbench_ingest::{discover, IngestError};
use clap::Parser;
use config::{ConfigErrors, HarnessConfig};
use executor::ExecutorError;
use std::{fs, path::PathBuf, process::exit};
use thiserror::Error;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "allocbench", version, about = "Run allocator benchmarks and generate a report")]
struct Cli {
    /// harness config file, built-in defaults apply when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// skip running benchmarks and reuse existing results
    #[arg(long)]
    skip_run: bool,

    /// override the report output path
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Error, Debug)]
enum RunnerError {
    #[error("Config failed to load")]
    Config(#[from] ConfigErrors),
    #[error("Benchmark harness failed")]
    Executor(#[from] ExecutorError),
    #[error("Results failed to load")]
    Ingest(#[from] IngestError),
    #[error("Result aggregation failed")]
    Analysis(#[from] AnalysisError),
    #[error("Report could not be written")]
    Io(#[from] std::io::Error),
}

fn run(cli: Cli) -> Result<(), RunnerError> {
    let mut config = match cli.config {
        Some(ref path) => HarnessConfig::load(path)?,
        None => HarnessConfig::default(),
    };

    if let Some(output) = cli.output {
        config.output = output;
    }

    if config.preflight_checks(cli.skip_run) {
        return Err(ConfigErrors::FailedPreflight.into());
    }

    let platform = std::env::consts::OS;
    info!("Platform: {platform}");

    if cli.skip_run {
        info!("[1/4] Skipping benchmark run (--skip-run)");
        info!("[2/4] Skipping graph mode run (--skip-run)");
    } else {
        info!("[1/4] Running standard benchmarks...");
        executor::run_harness(&config, false)?;

        info!("[2/4] Running graph mode benchmarks...");
        executor::run_harness(&config, true)?;
    }

    info!("[3/4] Loading results...");
    let corpus = discover::load_corpus(&config.results)?;
    let sweeps = discover::load_sweeps(&config.results)?;

    info!("[4/4] Generating report...");
    let ranking = rank_benchmarks(&corpus)?;
    let scaling = analyze_thread_scaling(&corpus)?;
    let charts = aggregate_series(&sweeps)?;

    chart::write_chart_data(&config.plots.join(platform), &charts)?;

    let md = report::render_report(platform, &corpus, &ranking, scaling.as_ref(), &charts);
    fs::write(&config.output, &md)?;

    info!("Report saved to: {}", config.output.display());

    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(error) = run(Cli::parse()) {
        error!(error = ?error, "Benchmark report failed: {error}");

        exit(1);
    }
}
