//! Scan a benchmark results table into charts.
//!
//! Input is comma-separated text:
//!
//! ```text
//! name,time/op (ns/op),±
//! Hash/type:crc32;bytes:4-8,4.13067E+00,1%
//! Hash/type:crc32;bytes:8-8,4.45801E+00,0%
//! ```
//!
//! The first non-blank line is the header; its second column becomes the
//! Y-axis label of every chart and must not be empty. Blank lines are
//! skipped. A later line that starts with `name` opens another table (e.g.
//! allocation stats) and ends the scan. The first malformed row aborts the whole scan.

use super::chart_builder::ChartAggregator;
use crate::parser::line::LineDecoder;
use crate::parser::options::ChartOptionSet;
use crate::parser::schema::Chart;
use crate::utils::config::{HEADER_TOKEN, MIN_COLUMNS};
use crate::utils::error::ParseError;
use log::{debug, info, warn};
use std::io::BufRead;

/// Parse a results table from any buffered reader
///
/// **Public** - main entry point for turning input into charts
///
/// # Arguments
/// * `reader` - Input table, read line by line
/// * `options` - Per-chart options, also seeding known x-axis labels
///
/// # Returns
/// Charts in the order they first appear
///
/// # Errors
/// * `ParseError::NotEnoughColumns` - a row has fewer than 3 cells
/// * `ParseError::EmptyYAxisLabel` - header column 1 is empty
/// * `ParseError::InvalidLine` - a row failed to decode
/// * `ParseError::OptionChartNameNotFound` - an option prefix matched no chart
/// * `ParseError::Io` - reading failed
pub fn parse_benchmark_results<R: BufRead>(
    reader: R,
    options: &ChartOptionSet,
) -> Result<Vec<Chart>, ParseError> {
    let mut decoder = LineDecoder::with_options(options);
    let mut aggregator: Option<ChartAggregator> = None;
    let mut rows = 0usize;

    for (index, line) in reader.lines().enumerate() {
        let line_number = index + 1;
        let line = line?;
        let line = line.trim();

        if line.is_empty() {
            continue;
        }

        let Some(aggregator) = aggregator.as_mut() else {
            let cells = split_cells(line, line_number)?;
            if cells[1].is_empty() {
                return Err(ParseError::EmptyYAxisLabel {
                    line: line_number,
                    text: line.to_string(),
                });
            }
            debug!("Header on line {}: y-axis label `{}`", line_number, cells[1]);
            aggregator = Some(ChartAggregator::new(cells[1]));
            continue;
        };

        if line.starts_with(HEADER_TOKEN) {
            // TODO: render later tables (allocation stats) as their own charts
            info!("Second table found on line {}, stopping", line_number);
            break;
        }

        let cells = split_cells(line, line_number)?;
        let measurement = decoder
            .decode(cells[0], cells[1], cells[2])
            .map_err(|source| ParseError::InvalidLine {
                line: line_number,
                text: line.to_string(),
                source,
            })?;

        aggregator.push(measurement);
        rows += 1;
    }

    let aggregator = aggregator.unwrap_or_else(|| {
        warn!("Input has no header line");
        ChartAggregator::new("")
    });

    info!("Parsed {} rows into {} charts", rows, aggregator.len());

    aggregator.finish(options)
}

/// Parse a results table held in memory
pub fn parse_benchmark_str(input: &str, options: &ChartOptionSet) -> Result<Vec<Chart>, ParseError> {
    parse_benchmark_results(input.as_bytes(), options)
}

fn split_cells(line: &str, line_number: usize) -> Result<Vec<&str>, ParseError> {
    let cells: Vec<&str> = line.split(',').collect();
    if cells.len() < MIN_COLUMNS {
        return Err(ParseError::NotEnoughColumns {
            line: line_number,
            text: line.to_string(),
        });
    }
    Ok(cells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::DecodeError;

    const HEADER: &str = "name,time/op (ns/op),±\n";

    fn parse(body: &str) -> Result<Vec<Chart>, ParseError> {
        parse_benchmark_str(&format!("{}{}", HEADER, body), &ChartOptionSet::new())
    }

    #[test]
    fn test_header_sets_y_axis_label() {
        let charts = parse("Hash/type:crc32;bytes:4-8,4.13067E+00,1%\n").unwrap();

        assert_eq!(charts.len(), 1);
        assert_eq!(charts[0].y_axis_label, "time/op (ns/op)");
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let input = "\n\n  name,time/op,±\n\n  Hash/type:crc32;bytes:4-8,1,1%\n\n";
        let charts = parse_benchmark_str(input, &ChartOptionSet::new()).unwrap();

        assert_eq!(charts[0].point_count(), 1);
    }

    #[test]
    fn test_second_table_stops_scan() {
        let charts = parse(
            "Hash/type:crc32;bytes:4-8,1,1%\n\
             name,alloc/op (B/op),±\n\
             Pool/type:fifo;tasks:1-8,garbage,1%\n",
        )
        .unwrap();

        assert_eq!(charts.len(), 1);
        assert_eq!(charts[0].name, "Hash");
    }

    #[test]
    fn test_header_with_few_columns() {
        let result = parse_benchmark_str("name,time/op±\n", &ChartOptionSet::new());
        assert!(matches!(
            result,
            Err(ParseError::NotEnoughColumns { line: 1, .. })
        ));
    }

    #[test]
    fn test_header_with_empty_y_axis_label() {
        let input = "\nname,,±\nHash/type:crc32;bytes:4-8,1,1%\n";
        let result = parse_benchmark_str(input, &ChartOptionSet::new());

        assert!(matches!(
            result,
            Err(ParseError::EmptyYAxisLabel { line: 2, ref text }) if text == "name,,±"
        ));
    }

    #[test]
    fn test_row_error_keeps_line_context() {
        let err = parse("\nHash/type:crc32;bytes:4-8,4.GG13067E+00,1%\n").unwrap_err();

        match err {
            ParseError::InvalidLine { line, text, source } => {
                assert_eq!(line, 3);
                assert_eq!(text, "Hash/type:crc32;bytes:4-8,4.GG13067E+00,1%");
                assert_eq!(
                    source,
                    DecodeError::CannotParseYValue("4.GG13067E+00".to_string())
                );
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_empty_input_has_no_charts() {
        let charts = parse_benchmark_str("", &ChartOptionSet::new()).unwrap();
        assert!(charts.is_empty());
    }
}
