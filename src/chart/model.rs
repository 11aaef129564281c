//! Chart model: everything the view draws, derived from one projection

use serde::{Deserialize, Serialize};

use crate::projection::{MaturitySummary, ProjectionPoint, ProjectionResult};
use super::axis::AxisScale;
use super::format::{format_compact, format_usd, format_year};

pub const X_AXIS_LABEL: &str = "Years";
pub const Y_AXIS_LABEL: &str = "Amount";
pub const SUMMARY_HEADING: &str = "Comparison at maturity:";

/// The two plotted series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Series {
    Compound,
    Simple,
}

impl Series {
    /// Draw order, which is also legend and tooltip order
    pub const ALL: [Series; 2] = [Series::Compound, Series::Simple];

    pub fn name(&self) -> &'static str {
        match self {
            Series::Compound => "Compound Interest",
            Series::Simple => "Simple Interest",
        }
    }

    /// Key of the series in serialized points
    pub fn data_key(&self) -> &'static str {
        match self {
            Series::Compound => "compoundAmount",
            Series::Simple => "simpleAmount",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Series::Compound => "#8884d8",
            Series::Simple => "#82ca9d",
        }
    }

    pub fn value(&self, point: &ProjectionPoint) -> i128 {
        match self {
            Series::Compound => point.compound_amount,
            Series::Simple => point.simple_amount,
        }
    }
}

/// A labelled y tick
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tick {
    pub value: i128,
    pub label: String,
}

/// Hover content for one year
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tooltip {
    pub year: u32,
    pub label: String,
    /// (series name, currency value), in series order
    pub entries: Vec<(String, String)>,
}

impl Tooltip {
    pub fn for_point(point: &ProjectionPoint) -> Self {
        Self {
            year: point.year,
            label: format_year(point.year),
            entries: Series::ALL
                .iter()
                .map(|s| (s.name().to_string(), format_usd(s.value(point))))
                .collect(),
        }
    }

    /// Single-line rendering, "Year 3: Compound Interest $1,331, Simple Interest $1,300"
    pub fn text(&self) -> String {
        let parts: Vec<String> = self
            .entries
            .iter()
            .map(|(name, value)| format!("{} {}", name, value))
            .collect();
        format!("{}: {}", self.label, parts.join(", "))
    }
}

/// Legend row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub name: String,
    pub color: String,
}

/// Maturity panel with currency-formatted values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryPanel {
    pub heading: String,
    pub compound: String,
    pub simple: String,
    pub totals: MaturitySummary,
}

impl SummaryPanel {
    pub fn from_summary(totals: MaturitySummary) -> Self {
        Self {
            heading: SUMMARY_HEADING.to_string(),
            compound: format_usd(totals.compound_amount),
            simple: format_usd(totals.simple_amount),
            totals,
        }
    }
}

/// Render-ready chart derived from a projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartModel {
    pub projection: ProjectionResult,
    pub axis: AxisScale,
    pub y_ticks: Vec<Tick>,
    pub tooltips: Vec<Tooltip>,
    pub legend: Vec<LegendEntry>,
    pub summary: Option<SummaryPanel>,
}

impl ChartModel {
    pub fn build(projection: ProjectionResult) -> Self {
        let axis = AxisScale::from_points(&projection.points, projection.params.principal);
        let y_ticks = axis
            .ticks
            .iter()
            .map(|&value| Tick { value, label: format_compact(value) })
            .collect();
        let tooltips = projection.points.iter().map(Tooltip::for_point).collect();
        let legend = Series::ALL
            .iter()
            .map(|s| LegendEntry {
                name: s.name().to_string(),
                color: s.color().to_string(),
            })
            .collect();
        let summary = projection.summary().map(SummaryPanel::from_summary);

        Self { projection, axis, y_ticks, tooltips, legend, summary }
    }

    pub fn points(&self) -> &[ProjectionPoint] {
        &self.projection.points
    }

    /// Values of one series in year order
    pub fn series_values(&self, series: Series) -> Vec<i128> {
        self.points().iter().map(|p| series.value(p)).collect()
    }

    pub fn tooltip(&self, year: u32) -> Option<&Tooltip> {
        self.tooltips.iter().find(|t| t.year == year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::InterestParams;
    use crate::projection::ProjectionEngine;

    fn reference_model() -> ChartModel {
        let projection = ProjectionEngine::new().project(&InterestParams::default());
        ChartModel::build(projection)
    }

    #[test]
    fn test_build_reference_model() {
        let model = reference_model();
        assert_eq!(model.points().len(), 11);
        assert_eq!(model.axis.ticks, vec![900, 1900, 2900]);

        let labels: Vec<&str> = model.y_ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["900", "1.9K", "2.9K"]);

        let summary = model.summary.as_ref().unwrap();
        assert_eq!(summary.heading, "Comparison at maturity:");
        assert_eq!(summary.compound, "$2,594");
        assert_eq!(summary.simple, "$2,000");
    }

    #[test]
    fn test_tooltips_and_legend() {
        let model = reference_model();
        let tooltip = model.tooltip(10).unwrap();
        assert_eq!(tooltip.label, "Year 10");
        assert_eq!(
            tooltip.entries,
            vec![
                ("Compound Interest".to_string(), "$2,594".to_string()),
                ("Simple Interest".to_string(), "$2,000".to_string()),
            ]
        );
        assert_eq!(
            tooltip.text(),
            "Year 10: Compound Interest $2,594, Simple Interest $2,000"
        );

        assert_eq!(model.legend.len(), 2);
        assert_eq!(model.legend[0].color, "#8884d8");
        assert_eq!(model.legend[1].name, "Simple Interest");
    }

    #[test]
    fn test_series_values() {
        let model = reference_model();
        let simple = model.series_values(Series::Simple);
        assert_eq!(simple[0], 1000);
        assert_eq!(simple[5], 1500);
        assert_eq!(Series::Compound.data_key(), "compoundAmount");
    }

    #[test]
    fn test_empty_projection_has_no_summary() {
        let model = ChartModel::build(ProjectionResult::new(InterestParams::default()));
        assert!(model.summary.is_none());
        assert!(model.tooltips.is_empty());
        assert_eq!(model.axis.ticks, vec![900]);
    }
}
