//! Render command implementation.
//!
//! The render command:
//! 1. Parses chart option specs
//! 2. Scans the results table into charts
//! 3. Writes the HTML page or JSON report

use super::models::{OutputFormat, RenderArgs};
use crate::aggregator::{parse_benchmark_results, ChartSummary};
use crate::output::{to_report, validate_path, write_html, write_report};
use crate::parser::options::ChartOptionSet;
use anyhow::{Context, Result};
use log::{debug, info};
use std::fs::File;
use std::io::BufReader;
use std::time::Instant;

/// Execute the render command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Invalid chart option specs
/// * Unreadable input or malformed rows
/// * Option prefixes that match no chart
/// * File write errors
pub fn execute_render(args: RenderArgs) -> Result<()> {
    let start_time = Instant::now();

    info!("Rendering benchmark results from: {}", args.input.display());

    // Step 1: Parse chart options
    info!("Step 1/3: Parsing chart options...");
    let options = ChartOptionSet::from_specs(&args.chart_options)
        .context("Failed to parse chart options")?;

    debug!("Options given for {} chart prefixes", options.len());

    // Step 2: Parse input table
    info!("Step 2/3: Parsing benchmark results...");
    let file = File::open(&args.input)
        .with_context(|| format!("Can't open input file {}", args.input.display()))?;

    let charts = parse_benchmark_results(BufReader::new(file), &options)
        .with_context(|| format!("Failed to parse {}", args.input.display()))?;

    let summary = ChartSummary::from_charts(&charts);
    info!("{}", summary.summary());

    // Step 3: Write output
    info!("Step 3/3: Writing output file...");
    match args.format {
        OutputFormat::Html => {
            write_html(&charts, &args.output).context("Failed to write HTML page")?;
        }
        OutputFormat::Json => {
            write_report(&to_report(charts), &args.output)
                .context("Failed to write JSON report")?;
        }
    }

    info!("✓ Output written to: {}", args.output.display());

    if args.print_summary {
        println!("\n{}", "=".repeat(80));
        println!("BENCHMARK SUMMARY");
        println!("{}", "=".repeat(80));
        println!("Input:  {}", args.input.display());
        println!("Output: {}", args.output.display());
        println!("{}", summary.summary());
        println!("{}", "=".repeat(80));
    }

    let elapsed = start_time.elapsed();
    info!("Render completed in {:.2}s", elapsed.as_secs_f64());

    Ok(())
}

/// Validate render arguments
///
/// **Public** - can be called before execute_render for early validation
pub fn validate_args(args: &RenderArgs) -> Result<()> {
    if args.input.as_os_str().is_empty() {
        anyhow::bail!("Input path cannot be empty");
    }

    if !args.input.is_file() {
        anyhow::bail!("Input file does not exist: {}", args.input.display());
    }

    validate_path(&args.output).context("Invalid output path")?;

    if args.input == args.output {
        anyhow::bail!("Output path must differ from input path");
    }

    Ok(())
}
