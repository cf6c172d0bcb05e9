//! Chart data model and output JSON schema.
//!
//! Field names are fixed by the HTML template that renders the charts,
//! so the serialized keys do not follow Rust naming.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One measurement on a chart. All values are kept as text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate, verbatim from the x-axis attribute
    #[serde(rename = "X")]
    pub x: String,

    /// Y value, verbatim from the value column
    #[serde(rename = "Y")]
    pub y: String,

    /// Absolute error (Y * percent / 100)
    #[serde(rename = "Error")]
    pub error: String,
}

/// A single rendered chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    /// Hex SHA-256 of the chart name
    #[serde(rename = "ID")]
    pub id: String,

    /// Benchmark base name followed by its discriminator attributes
    #[serde(rename = "Name")]
    pub name: String,

    /// Y-axis label, shared by every chart of one input table
    #[serde(rename = "YAxisLabel")]
    pub y_axis_label: String,

    /// Case name -> points, both in input order
    #[serde(rename = "Cases")]
    pub cases: IndexMap<String, Vec<Point>>,

    /// Display options consumed by the template
    #[serde(rename = "Options")]
    pub options: IndexMap<String, String>,
}

impl Chart {
    /// Total number of points across all cases
    pub fn point_count(&self) -> usize {
        self.cases.values().map(Vec::len).sum()
    }
}

/// Identifier cell resolved into chart coordinates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedIdentifier {
    pub chart_name: String,
    pub case_name: String,
    pub x_value: String,
    pub x_axis_label: String,
}

/// A fully decoded measurement row, ready for aggregation
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub chart_name: String,
    pub case_name: String,
    pub x_axis_label: String,
    pub point: Point,
}

/// Top-level structure of the JSON report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Timestamp when the report was generated
    pub generated_at: String,

    /// Charts in first-seen order
    pub charts: Vec<Chart>,
}
