//! Configuration and constants for the CLI.

/// Current report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Every non-blank input row needs at least name, value and error columns
pub const MIN_COLUMNS: usize = 3;

/// A row starting with this token after the first header opens a new table
pub const HEADER_TOKEN: &str = "name";

/// Attribute key that names the case (series) of a measurement
pub const TYPE_ATTRIBUTE: &str = "type";

/// Option key reserved for the x-axis label, seeded on every chart
pub const X_AXIS_NAME_OPTION: &str = "xAxisName";

// Separators of the identifier cell: "<base>/<key:value;...>-<suffix>"
pub const BENCHMARK_NAME_SEPARATOR: char = '/';
pub const SUFFIX_SEPARATOR: char = '-';
pub const ATTRIBUTE_SEPARATOR: char = ';';
pub const KEY_VALUE_SEPARATOR: char = ':';

/// Marker in the HTML template replaced by the chart JSON
pub const TEMPLATE_PLACEHOLDER: &str = "__BENCHART_DATA__";
