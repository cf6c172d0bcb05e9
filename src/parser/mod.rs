//! Measurement row decoding, chart options and schema definitions.
//!
//! This module handles:
//! - Decoding benchmark identifier cells into chart/case/x coordinates
//! - Parsing value and error-rate cells into points
//! - Validating per-chart option specs
//! - Defining output schema

pub mod line;
pub mod options;
pub mod schema;

// Re-export main types
pub use line::{decode_identifier, decode_point, LineDecoder};
pub use options::{AxisType, ChartOption, ChartOptionSet};
pub use schema::{Chart, ChartReport, DecodedIdentifier, Measurement, Point};
