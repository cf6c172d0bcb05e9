use std::path::PathBuf;

/// Output file format of the render command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Self-contained HTML page
    #[default]
    Html,
    /// Versioned JSON report
    Json,
}

/// Arguments for the render command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct RenderArgs {
    /// Benchmark results table
    pub input: PathBuf,

    /// Output file path
    pub output: PathBuf,

    /// Chart option specs, e.g. `Hash;xAxisName=bytes;xAxisType=log`
    pub chart_options: Vec<String>,

    /// Output format
    pub format: OutputFormat,

    /// Print text summary to stdout
    pub print_summary: bool,
}

impl Default for RenderArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from("input.csv"),
            output: PathBuf::from("result.html"),
            chart_options: Vec::new(),
            format: OutputFormat::Html,
            print_summary: false,
        }
    }
}
