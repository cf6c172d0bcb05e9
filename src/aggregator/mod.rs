//! Aggregation of decoded measurement rows into charts.
//!
//! This module transforms a benchmark results table into:
//! - Charts grouped by benchmark name and discriminator attributes
//! - Per-case point series in input order
//! - Chart-level display options
//! - Summary statistics

pub mod chart_builder;
pub mod scanner;
pub mod summary;

// Re-export main types and functions
pub use chart_builder::{aggregate, chart_id, ChartAggregator};
pub use scanner::{parse_benchmark_results, parse_benchmark_str};
pub use summary::ChartSummary;
