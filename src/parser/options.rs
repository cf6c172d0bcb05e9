//! Per-chart display options.
//!
//! Options come from specs like `Hash;xAxisName=bytes size;xAxisType=log`:
//! a chart name prefix followed by `key=value` items. The prefix applies the
//! options to every chart whose name starts with it.

use crate::utils::config::X_AXIS_NAME_OPTION;
use crate::utils::error::OptionError;
use indexmap::map::Values;
use indexmap::IndexMap;
use std::fmt;
use std::str::FromStr;

/// Accepted option keys and the values each one allows
pub const SUPPORTED_OPTIONS: &[(&str, &str)] = &[
    ("title", "any string"),
    (X_AXIS_NAME_OPTION, "any string"),
    ("xAxisType", "log"),
    ("yAxisType", "log"),
];

/// Scale of a chart axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisType {
    Log,
}

impl AxisType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AxisType::Log => "log",
        }
    }
}

impl FromStr for AxisType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "log" => Ok(AxisType::Log),
            _ => Err(()),
        }
    }
}

impl fmt::Display for AxisType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single validated chart option
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartOption {
    Title(String),
    XAxisName(String),
    XAxisType(AxisType),
    YAxisType(AxisType),
}

impl ChartOption {
    /// Validate a `key=value` pair against the supported vocabulary
    ///
    /// # Errors
    /// * `OptionIsNotSupported` - unknown key
    /// * `OptionTypeIsWrong` - axis type other than `log`
    pub fn parse(key: &str, value: &str) -> Result<Self, OptionError> {
        match key {
            "title" => Ok(ChartOption::Title(value.to_string())),
            X_AXIS_NAME_OPTION => Ok(ChartOption::XAxisName(value.to_string())),
            "xAxisType" => parse_axis_type(key, value).map(ChartOption::XAxisType),
            "yAxisType" => parse_axis_type(key, value).map(ChartOption::YAxisType),
            _ => Err(OptionError::OptionIsNotSupported {
                option: format!("{}={}", key, value),
                supported: supported_options_description(),
            }),
        }
    }

    /// Key the template reads this option under
    pub fn key(&self) -> &'static str {
        match self {
            ChartOption::Title(_) => "title",
            ChartOption::XAxisName(_) => X_AXIS_NAME_OPTION,
            ChartOption::XAxisType(_) => "xAxisType",
            ChartOption::YAxisType(_) => "yAxisType",
        }
    }

    pub fn value(&self) -> &str {
        match self {
            ChartOption::Title(value) | ChartOption::XAxisName(value) => value,
            ChartOption::XAxisType(axis) | ChartOption::YAxisType(axis) => axis.as_str(),
        }
    }
}

fn parse_axis_type(key: &str, value: &str) -> Result<AxisType, OptionError> {
    value.parse().map_err(|_| OptionError::OptionTypeIsWrong {
        option: key.to_string(),
        value: value.to_string(),
        allowed: AxisType::Log.to_string(),
    })
}

/// Human-readable list of supported options
pub fn supported_options_description() -> String {
    SUPPORTED_OPTIONS
        .iter()
        .map(|(key, allowed)| format!("{} ({})", key, allowed))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Options for all chart prefixes, in the order prefixes were first given
#[derive(Debug, Clone, Default)]
pub struct ChartOptionSet {
    entries: IndexMap<String, IndexMap<&'static str, ChartOption>>,
}

impl ChartOptionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse every spec string into one set
    ///
    /// **Public** - main entry point for CLI option specs
    pub fn from_specs<I, S>(specs: I) -> Result<Self, OptionError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new();
        for spec in specs {
            set.parse_spec(spec.as_ref())?;
        }
        Ok(set)
    }

    /// Parse one `Prefix;key=value;...` spec and merge it in.
    /// A later value for the same prefix and key replaces the earlier one.
    pub fn parse_spec(&mut self, spec: &str) -> Result<(), OptionError> {
        let (prefix, items) = spec
            .split_once(';')
            .ok_or_else(|| OptionError::CannotParseChartOptions(spec.to_string()))?;

        let mut parsed = Vec::new();
        for item in items.split(';') {
            let parts: Vec<&str> = item.split('=').collect();
            let [key, value] = parts.as_slice() else {
                return Err(OptionError::CannotParseOption(item.to_string()));
            };
            parsed.push(ChartOption::parse(key, value)?);
        }

        for option in parsed {
            self.insert(prefix, option);
        }

        Ok(())
    }

    pub fn insert(&mut self, prefix: &str, option: ChartOption) {
        self.entries
            .entry(prefix.to_string())
            .or_default()
            .insert(option.key(), option);
    }

    /// Iterate prefixes with their options
    pub fn iter(&self) -> impl Iterator<Item = (&str, Values<'_, &'static str, ChartOption>)> {
        self.entries
            .iter()
            .map(|(prefix, options)| (prefix.as_str(), options.values()))
    }

    /// `xAxisName` values keyed by prefix, used to seed the row decoder
    pub fn x_axis_names(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().filter_map(|(prefix, options)| {
            options
                .get(X_AXIS_NAME_OPTION)
                .map(|option| (prefix.as_str(), option.value()))
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
