//! Benchart
//!
//! Turns benchmark result tables (one measurement per row) into chart
//! datasets and renders them as an interactive HTML page.
//!
//! This crate provides the core implementation for the
//! `benchart` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! benchart render input.csv result.html
//! benchart render -c 'Hash;xAxisName=bytes;xAxisType=log' input.csv result.html
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;
