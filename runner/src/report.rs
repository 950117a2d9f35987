//! Markdown assembly over the core's result structures. Pure string
//! building, every number goes through the core formatter so identical
//! inputs produce an identical document.

use allocbench_analysis::{
    format::{format_bytes, format_scaled, Scalar},
    ranking::RankingReport,
    record::ResultCorpus,
    scaling::ScalingTable,
    series::ChartSeries,
};
use itertools::Itertools;
use std::fmt::Write;

fn ops(value: Option<f64>) -> String {
    format_scaled(value.map(Scalar::Float), "")
}

fn nanos(value: Option<f64>) -> String {
    format_scaled(value.map(Scalar::Float), "ns")
}

pub fn render_report(
    platform: &str,
    corpus: &ResultCorpus,
    ranking: &RankingReport,
    scaling: Option<&ScalingTable>,
    charts: &[ChartSeries],
) -> String {
    let mut md = format!("## Benchmark results ({platform})\n\n");

    md.push_str("## Tested allocators\n\n");
    md.push_str(&corpus.allocators().join(", "));
    md.push_str("\n\n");

    md.push_str(&render_ranking(ranking));
    md.push_str(&render_scaling(scaling));
    md.push_str(&render_series(charts, platform));

    md
}

pub fn render_ranking(report: &RankingReport) -> String {
    let mut md = String::from("## Results\n\n");

    for group in &report.benchmarks {
        let _ = writeln!(md, "### {}\n", group.benchmark);
        md.push_str("| Allocator | Total ops/s | Alloc ops/s | Free ops/s | Avg time (ns) | P50 (ns) | P99 (ns) | Peak RSS |\n");
        md.push_str("|-----------|-------------|-------------|------------|---------------|----------|----------|----------|\n");

        for row in &group.rows {
            let marker = if row.allocator == group.winner {
                " **(Winner)**"
            } else {
                ""
            };
            let m = &row.metrics;

            let _ = writeln!(
                md,
                "| {}{} | {} | {} | {} | {} | {} | {} | {} |",
                row.allocator,
                marker,
                ops(m.total_ops_per_sec),
                ops(m.alloc_ops_per_sec),
                ops(m.free_ops_per_sec),
                nanos(m.avg_alloc_time_ns),
                nanos(m.p50_alloc_time_ns),
                nanos(m.p99_alloc_time_ns),
                format_bytes(m.peak_rss_kb.map(|kb| kb * 1024)),
            );
        }

        md.push('\n');
    }

    if let Some(ref winner) = report.overall_winner {
        let wins = report
            .wins
            .iter()
            .find(|(name, _)| name == winner)
            .map(|(_, wins)| *wins)
            .unwrap_or(0);

        md.push_str("### Overall Summary\n\n");
        let _ = writeln!(md, "**Overall Winner: {winner}** (won {wins} benchmarks)\n");
        md.push_str("| Allocator | Wins |\n|-----------|------|\n");

        for (allocator, wins) in &report.wins {
            let _ = writeln!(md, "| {allocator} | {wins} |");
        }

        md.push('\n');
    }

    md
}

pub fn render_scaling(table: Option<&ScalingTable>) -> String {
    let mut md = String::from("## Thread scaling\n\n");

    let table = match table {
        Some(table) => table,
        None => {
            md.push_str("*No threaded benchmark data available*\n\n");

            return md;
        }
    };

    let _ = writeln!(md, "| Threads | {} | Best |", table.allocators.iter().join(" | "));
    let _ = writeln!(
        md,
        "|---------|{}|",
        vec!["--------"; table.allocators.len() + 1].join("|")
    );

    for row in &table.rows {
        let cells = table
            .allocators
            .iter()
            .map(|allocator| match row.throughput.get(allocator) {
                Some(value) if *allocator == row.best => format!("**{}**", ops(Some(*value))),
                Some(value) => ops(Some(*value)),
                // no sample for this allocator at this thread count
                None => "N/A".to_owned(),
            })
            .join(" | ");

        let _ = writeln!(md, "| {} | {} | {} |", row.threads, cells, row.best);
    }

    md.push('\n');

    md
}

/// Chart rendering itself is left to external tooling, the report points at
/// the emitted data files and names the best performers.
pub fn render_series(charts: &[ChartSeries], platform: &str) -> String {
    let mut md = String::from("## Performance plots\n\n");

    for chart in charts {
        let _ = writeln!(md, "### {}\n", chart.benchmark);
        let _ = writeln!(
            md,
            "Chart data: `plots/{platform}/{}.json` ({} iteration points)\n",
            chart.benchmark,
            chart.iterations.len()
        );

        if !chart.best.is_empty() {
            md.push_str("**Best performer:** ");
            md.push_str(
                &chart
                    .best
                    .iter()
                    .map(|(metric, allocator)| format!("{metric}: {allocator}"))
                    .join(", "),
            );
            md.push_str("\n\n");
        }
    }

    md
}
