use allocbench_analysis::series::ChartSeries;
use std::{fs, path::Path};
use tracing::info;
use tracing_unwrap::ResultExt;

/// Write one chart-data file per sweep below `dir`. Missing points are kept
/// as JSON `null` so a plotter can show the gap instead of a fake zero.
pub fn write_chart_data(dir: &Path, charts: &[ChartSeries]) -> Result<(), std::io::Error> {
    if charts.is_empty() {
        return Ok(());
    }

    fs::create_dir_all(dir)?;

    for chart in charts {
        let path = dir.join(format!("{}.json", chart.benchmark));
        // string-keyed value types, serialization cannot fail
        let data = serde_json::to_string_pretty(chart).unwrap_or_log();

        fs::write(&path, data)?;
        info!("Wrote chart data to {}", path.display());
    }

    Ok(())
}
