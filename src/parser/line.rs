//! Decoder for single benchmark measurement rows.
//!
//! A row looks like `Hash/type:crc32;bytes:4-8,4.13067E+00,1%`:
//! - the identifier cell holds the base name, `key:value` attributes and a
//!   discarded `-suffix` (usually the parallelism count)
//! - the second cell is the Y value
//! - the third cell is the relative error in percent
//!
//! The identifier decides which chart and case a row belongs to and where it
//! sits on the X axis.

use super::options::ChartOptionSet;
use super::schema::{DecodedIdentifier, Measurement, Point};
use crate::utils::config::{
    ATTRIBUTE_SEPARATOR, BENCHMARK_NAME_SEPARATOR, KEY_VALUE_SEPARATOR, SUFFIX_SEPARATOR,
    TYPE_ATTRIBUTE,
};
use crate::utils::error::DecodeError;
use log::debug;
use std::collections::HashMap;

const PERCENTS: f64 = 100.0;

/// Stateful row decoder
///
/// **Public** - used by the scanner for one pass over an input table
///
/// Remembers the x-axis label resolved for every benchmark base name so that
/// later rows of the same benchmark find their x attribute by key, wherever
/// it appears in the attribute list.
#[derive(Debug, Default)]
pub struct LineDecoder {
    x_axis_labels: HashMap<String, String>,
}

impl LineDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a decoder whose label table is seeded from `xAxisName` options
    /// given for an exact benchmark base name.
    pub fn with_options(options: &ChartOptionSet) -> Self {
        let x_axis_labels = options
            .x_axis_names()
            .map(|(name, label)| (name.to_string(), label.to_string()))
            .collect();

        Self { x_axis_labels }
    }

    /// Known x-axis label for a benchmark base name
    pub fn x_axis_label(&self, benchmark_name: &str) -> Option<&str> {
        self.x_axis_labels.get(benchmark_name).map(String::as_str)
    }

    /// Decode the identifier cell, consulting and updating the label table
    pub fn decode_identifier(&mut self, cell: &str) -> Result<DecodedIdentifier, DecodeError> {
        let (benchmark_name, attributes) = split_identifier(cell)?;
        let known = self.x_axis_label(benchmark_name);
        let decoded = classify_attributes(benchmark_name, attributes, known)?;

        if known != Some(decoded.x_axis_label.as_str()) {
            debug!(
                "x-axis label for `{}` resolved to `{}`",
                benchmark_name, decoded.x_axis_label
            );
            self.x_axis_labels
                .insert(benchmark_name.to_string(), decoded.x_axis_label.clone());
        }

        Ok(decoded)
    }

    /// Decode the three cells of a measurement row
    ///
    /// # Arguments
    /// * `identifier_cell` - `<base>/<attributes>-<suffix>`
    /// * `y_cell` - Y value
    /// * `error_cell` - error rate ending with `%`
    pub fn decode(
        &mut self,
        identifier_cell: &str,
        y_cell: &str,
        error_cell: &str,
    ) -> Result<Measurement, DecodeError> {
        let identifier = self.decode_identifier(identifier_cell)?;
        let point = decode_point(identifier.x_value, y_cell, error_cell)?;

        Ok(Measurement {
            chart_name: identifier.chart_name,
            case_name: identifier.case_name,
            x_axis_label: identifier.x_axis_label,
            point,
        })
    }
}

/// Decode an identifier cell without any decoder state
///
/// **Public** - stateless entry point
///
/// # Arguments
/// * `cell` - identifier cell, e.g. `Hash/type:crc32;bytes:4-8`
/// * `known_x_axis_label` - label already established for this benchmark
///
/// # Errors
/// * `CannotParseBenchmarkName` - no `/`
/// * `CannotParseMeasurementAttributes` - no `-` after the attributes
/// * `CannotParseAttributePair` - an attribute without `:`
/// * `MeasurementLineHasNoTypeAttribute` / `DuplicateTypeAttribute`
pub fn decode_identifier(
    cell: &str,
    known_x_axis_label: Option<&str>,
) -> Result<DecodedIdentifier, DecodeError> {
    let (benchmark_name, attributes) = split_identifier(cell)?;
    classify_attributes(benchmark_name, attributes, known_x_axis_label)
}

/// Split an identifier cell into base name and attribute list.
/// Everything after the first `-` of the remainder is dropped.
pub fn split_identifier(cell: &str) -> Result<(&str, &str), DecodeError> {
    let (benchmark_name, rest) = cell
        .split_once(BENCHMARK_NAME_SEPARATOR)
        .ok_or_else(|| DecodeError::CannotParseBenchmarkName(cell.to_string()))?;

    let (attributes, _suffix) = rest
        .split_once(SUFFIX_SEPARATOR)
        .ok_or_else(|| DecodeError::CannotParseMeasurementAttributes(rest.to_string()))?;

    Ok((benchmark_name, attributes))
}

/// Split `key:value;key:value` into ordered pairs
fn parse_attribute_pairs(attributes: &str) -> Result<Vec<(&str, &str)>, DecodeError> {
    attributes
        .split(ATTRIBUTE_SEPARATOR)
        .map(|pair| {
            pair.split_once(KEY_VALUE_SEPARATOR)
                .ok_or_else(|| DecodeError::CannotParseAttributePair(pair.to_string()))
        })
        .collect()
}

/// Resolve chart name, case, x value and x-axis label from attributes
///
/// The x attribute is the one whose key equals the known label, or the last
/// attribute when there is no such key. `type` names the case. Every other
/// attribute is a discriminator and becomes part of the chart name, so
/// attribute order in the input matters.
pub fn classify_attributes(
    benchmark_name: &str,
    attributes: &str,
    known_x_axis_label: Option<&str>,
) -> Result<DecodedIdentifier, DecodeError> {
    let pairs = parse_attribute_pairs(attributes)?;

    let x_index = known_x_axis_label
        .and_then(|label| pairs.iter().position(|(key, _)| *key == label))
        .unwrap_or(pairs.len() - 1);

    let mut chart_name_parts = vec![benchmark_name.to_string()];
    let mut case_name: Option<&str> = None;
    let mut x_axis_label = "";
    let mut x_value = "";

    for (index, &(key, value)) in pairs.iter().enumerate() {
        if index == x_index {
            x_axis_label = key;
            x_value = value;
            continue;
        }

        if key == TYPE_ATTRIBUTE {
            if case_name.is_some() {
                return Err(DecodeError::DuplicateTypeAttribute(attributes.to_string()));
            }
            case_name = Some(value);
            continue;
        }

        chart_name_parts.push(format!("{}={}", key, value));
    }

    let case_name = case_name
        .filter(|name| !name.is_empty())
        .ok_or_else(|| DecodeError::MeasurementLineHasNoTypeAttribute(attributes.to_string()))?;

    Ok(DecodedIdentifier {
        chart_name: chart_name_parts.join(" "),
        case_name: case_name.to_string(),
        x_value: x_value.to_string(),
        x_axis_label: x_axis_label.to_string(),
    })
}

/// Build a point from an x value and the raw value/error cells
///
/// The absolute error is `y * (rate / 100)` rendered with default float
/// formatting. The Y value keeps its original text.
pub fn decode_point(x_value: String, y_cell: &str, error_cell: &str) -> Result<Point, DecodeError> {
    let y_value = parse_y_value(y_cell)?;
    let error_rate = parse_error_rate(error_cell)?;

    Ok(Point {
        x: x_value,
        y: y_cell.to_string(),
        error: (y_value * (error_rate / PERCENTS)).to_string(),
    })
}

/// Parse the Y value cell as f64
pub fn parse_y_value(cell: &str) -> Result<f64, DecodeError> {
    cell.parse::<f64>()
        .map_err(|_| DecodeError::CannotParseYValue(cell.to_string()))
}

/// Parse an error rate cell like `1.5%` into its percentage
pub fn parse_error_rate(cell: &str) -> Result<f64, DecodeError> {
    cell.strip_suffix('%')
        .and_then(|rate| rate.parse::<f64>().ok())
        .ok_or_else(|| DecodeError::CannotParseErrorRate(cell.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_attribute_is_x_axis() {
        let decoded = decode_identifier("Hash/type:crc32;bytes:4-8", None).unwrap();

        assert_eq!(decoded.chart_name, "Hash");
        assert_eq!(decoded.case_name, "crc32");
        assert_eq!(decoded.x_axis_label, "bytes");
        assert_eq!(decoded.x_value, "4");
    }

    #[test]
    fn test_known_label_matches_mid_list() {
        let decoded =
            decode_identifier("Hash/type:crc32;bytes:4;mode:fast-8", Some("bytes")).unwrap();

        assert_eq!(decoded.chart_name, "Hash mode=fast");
        assert_eq!(decoded.case_name, "crc32");
        assert_eq!(decoded.x_axis_label, "bytes");
        assert_eq!(decoded.x_value, "4");
    }

    #[test]
    fn test_unmatched_known_label_falls_back_to_last() {
        let decoded =
            decode_identifier("Hash/type:crc32;mode:fast;size:16-8", Some("bytes size")).unwrap();

        assert_eq!(decoded.chart_name, "Hash mode=fast");
        assert_eq!(decoded.x_axis_label, "size");
        assert_eq!(decoded.x_value, "16");
    }

    #[test]
    fn test_discriminators_keep_order() {
        let decoded =
            decode_identifier("Pool/workers:4;type:fifo;queue:bounded;tasks:100-8", None).unwrap();

        assert_eq!(decoded.chart_name, "Pool workers=4 queue=bounded");
        assert_eq!(decoded.case_name, "fifo");
    }

    #[test]
    fn test_suffix_is_discarded() {
        let decoded = decode_identifier("Hash/type:crc32;bytes:4-8-extra", None).unwrap();
        assert_eq!(decoded.x_value, "4");
    }

    #[test]
    fn test_missing_slash() {
        assert_eq!(
            decode_identifier("Hash\\type:crc32;bytes:4-8", None),
            Err(DecodeError::CannotParseBenchmarkName(
                "Hash\\type:crc32;bytes:4-8".to_string()
            ))
        );
    }

    #[test]
    fn test_missing_dash() {
        assert!(matches!(
            decode_identifier("Hash/type:crc32;bytes:4|8", None),
            Err(DecodeError::CannotParseMeasurementAttributes(_))
        ));
    }

    #[test]
    fn test_pair_without_colon() {
        assert_eq!(
            decode_identifier("Hash/type:crc32;fast;bytes:4-8", None),
            Err(DecodeError::CannotParseAttributePair("fast".to_string()))
        );
    }

    #[test]
    fn test_missing_type() {
        assert!(matches!(
            decode_identifier("Hash/types:crc32;bytes:4-8", None),
            Err(DecodeError::MeasurementLineHasNoTypeAttribute(_))
        ));
    }

    #[test]
    fn test_type_as_last_attribute_is_x_axis() {
        assert!(matches!(
            decode_identifier("Hash/bytes:4;type:crc32-8", None),
            Err(DecodeError::MeasurementLineHasNoTypeAttribute(_))
        ));
    }

    #[test]
    fn test_duplicate_type() {
        assert!(matches!(
            decode_identifier("Hash/type:crc32;type:fnv;bytes:4-8", None),
            Err(DecodeError::DuplicateTypeAttribute(_))
        ));
    }

    #[test]
    fn test_error_magnitude() {
        let point = decode_point("4".to_string(), "10.0", "5%").unwrap();

        assert_eq!(point.x, "4");
        assert_eq!(point.y, "10.0");
        assert_eq!(point.error, "0.5");
    }

    #[test]
    fn test_scientific_y_value() {
        assert_eq!(parse_y_value("4.13067E+00").unwrap(), 4.13067);
        assert!(parse_y_value("4.GG13067E+00").is_err());
    }

    #[test]
    fn test_error_rate_requires_percent() {
        assert_eq!(parse_error_rate("1.5%").unwrap(), 1.5);
        assert!(parse_error_rate("1").is_err());
        assert!(parse_error_rate("%").is_err());
        assert!(parse_error_rate("1GG%").is_err());
    }

    #[test]
    fn test_decoder_remembers_x_axis_label() {
        let mut decoder = LineDecoder::new();

        decoder.decode("Hash/type:crc32;bytes:4-8", "1", "1%").unwrap();
        assert_eq!(decoder.x_axis_label("Hash"), Some("bytes"));

        let measurement = decoder
            .decode("Hash/type:crc32;bytes:8;mode:fast-8", "2", "1%")
            .unwrap();
        assert_eq!(measurement.chart_name, "Hash mode=fast");
        assert_eq!(measurement.point.x, "8");
    }
}
