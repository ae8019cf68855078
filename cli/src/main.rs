use anyhow::Result;
use benchgraph_plots::{GroupedBarChart, GroupedBarOptions, Plot};
use benchgraph_report::{ResultTable, build_series, read_records};
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info};

/// Benchgraph - Grouped bar charts from benchmark results
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "benchgraph")]
#[command(
    about = "Render benchmark throughput results as a grouped bar chart",
    long_about = None
)]
struct Cli {
    /// Path to the benchmark results CSV file
    #[arg(value_name = "RESULTS_CSV")]
    input: PathBuf,
}

fn main() -> Result<()> {
    // Initialize tracing subscriber with environment filter. Diagnostics go
    // to stderr; stdout carries only the chart markup.
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();
    let start_time = Instant::now();

    let records = read_records(&args.input)?;
    info!("read {} rows from {}", records.len(), args.input.display());

    let table = ResultTable::from_records(&records)?;
    info!(
        "aggregated {} cases ({} methods x {} sizes)",
        table.cases().len(),
        table.methods().len(),
        table.sizes().len()
    );

    let series = build_series(&table)?;

    let options = GroupedBarOptions::new()
        .x_desc("Data sizes")
        .y_desc("Speed")
        .y_tick_suffix("GB/s")
        .build()?;
    let svg = GroupedBarChart::new().render(series, &options)?;
    debug!(
        "rendered {} bytes of markup in {:.2?}",
        svg.len(),
        start_time.elapsed()
    );

    println!("{svg}");
    Ok(())
}
