use crate::output::read_report;
use crate::parser::options::SUPPORTED_OPTIONS;
use crate::utils::config::SCHEMA_VERSION;
use anyhow::Result;
use std::path::PathBuf;

/// Validate a JSON report file
pub fn validate_report_file(file_path: PathBuf) -> Result<()> {
    println!("Validating report: {}", file_path.display());

    let report = read_report(&file_path)?;
    let points: usize = report.charts.iter().map(|c| c.point_count()).sum();

    println!("✓ Valid report JSON");
    println!("  Version: {}", report.version);
    println!("  Generated: {}", report.generated_at);
    println!("  Charts: {}", report.charts.len());
    println!("  Points: {}", points);

    Ok(())
}

/// Display supported chart options
pub fn display_options() {
    println!("Chart options are passed as `ChartNamePrefix;key=value;key=value`");
    println!("and apply to every chart whose name starts with the prefix.");
    println!();
    println!("Supported options:");
    for (key, allowed) in SUPPORTED_OPTIONS {
        println!("  {:<10} {}", key, allowed);
    }
    println!();
    println!("Example:");
    println!("  benchart render -c 'PoolOverhead;title=Overhead;xAxisType=log;yAxisType=log' input.csv result.html");
}

/// Display version information
pub fn display_version() {
    println!("Benchart v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Turn benchmark result tables into interactive HTML charts.");
}
