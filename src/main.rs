//! Benchart CLI
//!
//! Turns benchmark result tables into interactive HTML charts.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use benchart::commands::{
    display_options, display_version, execute_render, validate_args, validate_report_file,
    OutputFormat, RenderArgs,
};

/// Benchart - charts from benchmark result tables
#[derive(Parser, Debug)]
#[command(name = "benchart")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Render a results table into charts
    Render {
        /// Benchmark results table (comma-separated)
        input: PathBuf,

        /// Output file path
        output: PathBuf,

        /// Chart options: 'ChartNamePrefix;key=value;key=value' (repeatable)
        #[arg(short, long = "chart")]
        chart: Vec<String>,

        /// Write a JSON report instead of an HTML page
        #[arg(long)]
        json: bool,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,
    },

    /// Validate a JSON report file
    Validate {
        /// Path to report JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// List supported chart options
    Options,

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Render {
            input,
            output,
            chart,
            json,
            summary,
        } => {
            let args = RenderArgs {
                input,
                output,
                chart_options: chart,
                format: if json {
                    OutputFormat::Json
                } else {
                    OutputFormat::Html
                },
                print_summary: summary,
            };

            // Validate args first
            validate_args(&args)?;

            execute_render(args)?;
        }

        Commands::Validate { file } => {
            validate_report_file(file)?;
        }

        Commands::Options => {
            display_options();
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
