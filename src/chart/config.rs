//! Chart layout configuration

use serde::{Deserialize, Serialize};

/// Space reserved around the plot area, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

/// Layout of a rendered chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Total SVG width
    pub width: f64,

    /// Height of the chart area, excluding the summary panel
    pub height: f64,

    pub margins: Margins,

    /// Width reserved for y tick labels
    pub y_label_width: f64,

    /// Height reserved for x tick labels and the axis title
    pub x_label_height: f64,

    /// Height reserved for the legend row
    pub legend_height: f64,

    /// Height of the maturity panel below the chart
    pub summary_height: f64,

    pub stroke_width: f64,

    /// Dash pattern for the grid lines
    pub grid_dash: String,

    pub font_size: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 896.0,
            height: 384.0,
            margins: Margins {
                top: 20.0,
                right: 30.0,
                bottom: 20.0,
                left: 20.0,
            },
            y_label_width: 60.0,
            x_label_height: 40.0,
            legend_height: 24.0,
            summary_height: 72.0,
            stroke_width: 2.0,
            grid_dash: "3 3".to_string(),
            font_size: 12.0,
        }
    }
}

impl ChartConfig {
    /// Override the outer size, keeping everything else
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Total document height including the summary panel
    pub fn total_height(&self) -> f64 {
        self.height + self.summary_height
    }

    /// Plot area as (x, y, width, height)
    pub fn plot_area(&self) -> (f64, f64, f64, f64) {
        let x = self.margins.left + self.y_label_width;
        let y = self.margins.top;
        let w = self.width - x - self.margins.right;
        let h = self.height
            - self.margins.top
            - self.margins.bottom
            - self.x_label_height
            - self.legend_height;
        (x, y, w.max(1.0), h.max(1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_plot_area() {
        let config = ChartConfig::default();
        let (x, y, w, h) = config.plot_area();
        assert_relative_eq!(x, 80.0);
        assert_relative_eq!(y, 20.0);
        assert_relative_eq!(w, 786.0);
        assert_relative_eq!(h, 280.0);
        assert_relative_eq!(config.total_height(), 456.0);
    }

    #[test]
    fn test_tiny_size_keeps_positive_area() {
        let config = ChartConfig::default().with_size(10.0, 10.0);
        let (_, _, w, h) = config.plot_area();
        assert!(w >= 1.0 && h >= 1.0);
    }
}
