//! Interest Chart - compound vs simple interest projection and charting
//!
//! This library provides:
//! - Year-by-year compound and simple interest projections
//! - Y-axis range and tick generation with a fixed magnitude ladder
//! - Compact tick labels and whole-dollar currency formatting
//! - A render-ready chart model with tooltips, legend and maturity summary
//! - SVG output of the chart
//! - A calculator that recomputes everything whenever an input changes

pub mod params;
pub mod projection;
pub mod chart;
pub mod calculator;

// Re-export commonly used types
pub use params::{InterestParams, InputError, Field};
pub use projection::{ProjectionEngine, ProjectionResult, ProjectionPoint, MaturitySummary, project};
pub use chart::{AxisScale, ChartConfig, ChartModel, Series, render_svg, format_compact, format_usd};
pub use calculator::InterestCalculator;
