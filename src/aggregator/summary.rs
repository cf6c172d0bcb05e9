//! Size statistics for a set of charts.

use crate::parser::schema::Chart;

/// Chart, case and point counts
///
/// **Public** - logged after parsing and printed with `--summary`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChartSummary {
    pub chart_count: usize,
    pub case_count: usize,
    pub point_count: usize,
    /// Most points carried by a single chart
    pub largest_chart_points: usize,
}

impl ChartSummary {
    pub fn from_charts(charts: &[Chart]) -> Self {
        charts.iter().fold(Self::default(), |mut summary, chart| {
            let points = chart.point_count();
            summary.chart_count += 1;
            summary.case_count += chart.cases.len();
            summary.point_count += points;
            summary.largest_chart_points = summary.largest_chart_points.max(points);
            summary
        })
    }

    /// Get human-readable summary
    pub fn summary(&self) -> String {
        format!(
            "Charts: {} | Cases: {} | Points: {} | Largest chart: {} points",
            self.chart_count, self.case_count, self.point_count, self.largest_chart_points
        )
    }
}
