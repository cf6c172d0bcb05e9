//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors raised while decoding a single measurement row
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("can't parse benchmark name: `{0}`")]
    CannotParseBenchmarkName(String),

    #[error("can't parse measurement attributes: `{0}`")]
    CannotParseMeasurementAttributes(String),

    #[error("can't parse attribute pair, expected `key:value`: `{0}`")]
    CannotParseAttributePair(String),

    #[error("measurement line has no 'type' attribute: `{0}`")]
    MeasurementLineHasNoTypeAttribute(String),

    #[error("measurement line has more than one 'type' attribute: `{0}`")]
    DuplicateTypeAttribute(String),

    #[error("can't parse y value: `{0}`")]
    CannotParseYValue(String),

    #[error("can't parse error rate, cell should be a number ending with `%`: `{0}`")]
    CannotParseErrorRate(String),
}

/// Errors that can occur while scanning an input table into charts
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("not enough columns: on line [{line}]: `{text}`")]
    NotEnoughColumns { line: usize, text: String },

    #[error("header has an empty y-axis label: on line [{line}]: `{text}`")]
    EmptyYAxisLabel { line: usize, text: String },

    #[error("{source}: on line [{line}]: `{text}`")]
    InvalidLine {
        line: usize,
        text: String,
        #[source]
        source: DecodeError,
    },

    #[error(
        "option chart name not found: you've passed options for chart with name `{0}`, \
         but we didn't find such benchmark within input file"
    )]
    OptionChartNameNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ParseError {
    /// The row-level cause, if this error came from a single malformed row
    pub fn decode_error(&self) -> Option<&DecodeError> {
        match self {
            ParseError::InvalidLine { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Errors in user-supplied chart option specs
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OptionError {
    #[error("can't parse chart options, expected `ChartName;key=value`: `{0}`")]
    CannotParseChartOptions(String),

    #[error("can't parse option, expected `key=value`: `{0}`")]
    CannotParseOption(String),

    #[error("option is not supported: `{option}`; supported options: {supported}")]
    OptionIsNotSupported { option: String, supported: String },

    #[error("option type is wrong: option {option} allows only {allowed}, got `{value}`")]
    OptionTypeIsWrong {
        option: String,
        value: String,
        allowed: String,
    },
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
