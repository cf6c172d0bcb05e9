//! HTML chart page writer.
//!
//! The page is a fixed template with the chart JSON substituted for a
//! placeholder. Rendering happens in the browser.

use crate::parser::schema::Chart;
use crate::utils::config::TEMPLATE_PLACEHOLDER;
use crate::utils::error::OutputError;
use log::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

const TEMPLATE: &str = include_str!("template.html");

/// Render charts into a complete HTML page
///
/// Only the first placeholder occurrence is replaced. `</` is escaped so a
/// chart name cannot close the surrounding script element.
pub fn render_html(charts: &[Chart]) -> Result<String, OutputError> {
    let json = serde_json::to_string_pretty(charts)?.replace("</", "<\\/");
    Ok(TEMPLATE.replacen(TEMPLATE_PLACEHOLDER, &json, 1))
}

/// Render charts and write the page to a file
///
/// **Public** - main entry point for HTML output
///
/// # Errors
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::InvalidPath` - Path is invalid
pub fn write_html(charts: &[Chart], output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing HTML to: {}", output_path.display());

    super::validate_path(output_path)?;
    super::create_parent_dirs(output_path)?;

    let page = render_html(charts)?;

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let mut writer = BufWriter::new(file);

    writer
        .write_all(page.as_bytes())
        .map_err(OutputError::WriteFailed)?;
    writer.flush().map_err(OutputError::WriteFailed)?;

    info!(
        "HTML written successfully ({} bytes, {:.2} KB)",
        page.len(),
        page.len() as f64 / 1024.0
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::chart_builder::new_chart;

    #[test]
    fn test_template_has_placeholder() {
        assert_eq!(TEMPLATE.matches(TEMPLATE_PLACEHOLDER).count(), 1);
    }

    #[test]
    fn test_render_replaces_placeholder() {
        let charts = vec![new_chart("Hash", "bytes", "time/op")];
        let page = render_html(&charts).unwrap();

        assert!(!page.contains(TEMPLATE_PLACEHOLDER));
        assert!(page.contains("\"Name\": \"Hash\""));
        assert!(page.contains("\"xAxisName\": \"bytes\""));
    }

    #[test]
    fn test_render_escapes_script_close() {
        let charts = vec![new_chart("Evil</script>", "n", "time/op")];
        let page = render_html(&charts).unwrap();

        assert!(page.contains("Evil<\\/script>"));
    }
}
