//! Group decoded measurements into charts.
//!
//! Charts are created lazily the first time a chart name shows up and keep
//! that creation order. Within a chart, cases and points keep input order.

use crate::parser::options::ChartOptionSet;
use crate::parser::schema::{Chart, Measurement};
use crate::utils::config::X_AXIS_NAME_OPTION;
use crate::utils::error::ParseError;
use indexmap::IndexMap;
use log::debug;
use sha2::{Digest, Sha256};

/// Stable chart identifier: hex SHA-256 of the chart name
pub fn chart_id(chart_name: &str) -> String {
    hex::encode(Sha256::digest(chart_name.as_bytes()))
}

/// Create an empty chart with the x-axis label seeded into its options
pub fn new_chart(chart_name: &str, x_axis_label: &str, y_axis_label: &str) -> Chart {
    let mut options = IndexMap::new();
    options.insert(X_AXIS_NAME_OPTION.to_string(), x_axis_label.to_string());

    Chart {
        id: chart_id(chart_name),
        name: chart_name.to_string(),
        y_axis_label: y_axis_label.to_string(),
        cases: IndexMap::new(),
        options,
    }
}

/// Accumulates measurements of one input table
///
/// **Public** - driven by the scanner, usable directly with decoded rows
#[derive(Debug)]
pub struct ChartAggregator {
    y_axis_label: String,
    charts: IndexMap<String, Chart>,
}

impl ChartAggregator {
    pub fn new(y_axis_label: impl Into<String>) -> Self {
        Self {
            y_axis_label: y_axis_label.into(),
            charts: IndexMap::new(),
        }
    }

    /// Append a measurement to its chart and case, creating either if new
    pub fn push(&mut self, measurement: Measurement) {
        let Measurement {
            chart_name,
            case_name,
            x_axis_label,
            point,
        } = measurement;

        let y_axis_label = &self.y_axis_label;
        let chart = self.charts.entry(chart_name).or_insert_with_key(|name| {
            debug!("New chart: `{}` (x-axis: {})", name, x_axis_label);
            new_chart(name, &x_axis_label, y_axis_label)
        });

        chart.cases.entry(case_name).or_default().push(point);
    }

    /// Merge options into every chart whose name starts with the option prefix
    ///
    /// # Errors
    /// * `ParseError::OptionChartNameNotFound` - a prefix matched no chart
    pub fn apply_options(&mut self, options: &ChartOptionSet) -> Result<(), ParseError> {
        for (prefix, chart_options) in options.iter() {
            let chart_options: Vec<_> = chart_options.collect();
            let mut matched = 0usize;

            for chart in self
                .charts
                .values_mut()
                .filter(|chart| chart.name.starts_with(prefix))
            {
                matched += 1;
                for option in &chart_options {
                    chart
                        .options
                        .insert(option.key().to_string(), option.value().to_string());
                }
            }

            if matched == 0 {
                return Err(ParseError::OptionChartNameNotFound(prefix.to_string()));
            }

            debug!("Options for `{}` applied to {} chart(s)", prefix, matched);
        }

        Ok(())
    }

    /// Apply options and return charts in creation order
    pub fn finish(mut self, options: &ChartOptionSet) -> Result<Vec<Chart>, ParseError> {
        self.apply_options(options)?;
        Ok(self.charts.into_values().collect())
    }

    pub fn len(&self) -> usize {
        self.charts.len()
    }
}

/// Aggregate already-decoded measurements in one call
///
/// **Public** - convenience wrapper around `ChartAggregator`
pub fn aggregate<I>(
    measurements: I,
    y_axis_label: &str,
    options: &ChartOptionSet,
) -> Result<Vec<Chart>, ParseError>
where
    I: IntoIterator<Item = Measurement>,
{
    let mut aggregator = ChartAggregator::new(y_axis_label);
    for measurement in measurements {
        aggregator.push(measurement);
    }
    aggregator.finish(options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::schema::Point;

    fn measurement(chart: &str, case: &str, x: &str) -> Measurement {
        Measurement {
            chart_name: chart.to_string(),
            case_name: case.to_string(),
            x_axis_label: "bytes".to_string(),
            point: Point {
                x: x.to_string(),
                y: "1".to_string(),
                error: "0.01".to_string(),
            },
        }
    }

    #[test]
    fn test_chart_id_is_sha256_hex() {
        assert_eq!(
            chart_id(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(chart_id("Hash"), chart_id("Hash"));
        assert_ne!(chart_id("Hash"), chart_id("Hash mode=fast"));
    }

    #[test]
    fn test_new_chart_seeds_x_axis_option() {
        let chart = new_chart("Hash", "bytes", "time/op");

        assert_eq!(chart.options.get("xAxisName").map(String::as_str), Some("bytes"));
        assert_eq!(chart.y_axis_label, "time/op");
        assert!(chart.cases.is_empty());
    }

    #[test]
    fn test_push_groups_by_chart_and_case() {
        let mut aggregator = ChartAggregator::new("time/op");
        aggregator.push(measurement("Hash", "crc32", "4"));
        aggregator.push(measurement("Pool", "fifo", "1"));
        aggregator.push(measurement("Hash", "fnv", "4"));
        aggregator.push(measurement("Hash", "crc32", "8"));

        assert_eq!(aggregator.len(), 2);

        let charts = aggregator.finish(&ChartOptionSet::new()).unwrap();
        assert_eq!(charts[0].name, "Hash");
        assert_eq!(charts[1].name, "Pool");

        let cases: Vec<_> = charts[0].cases.keys().map(String::as_str).collect();
        assert_eq!(cases, vec!["crc32", "fnv"]);

        let xs: Vec<_> = charts[0].cases["crc32"].iter().map(|p| p.x.as_str()).collect();
        assert_eq!(xs, vec!["4", "8"]);
    }

    #[test]
    fn test_unmatched_option_prefix_fails() {
        let options = ChartOptionSet::from_specs(["HashesBench;xAxisType=log"]).unwrap();
        let result = aggregate(vec![measurement("Hash", "crc32", "4")], "time/op", &options);

        assert!(matches!(
            result,
            Err(ParseError::OptionChartNameNotFound(prefix)) if prefix == "HashesBench"
        ));
    }
}
