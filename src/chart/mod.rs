//! Chart construction: axis scaling, label formatting, model and SVG output

mod axis;
mod config;
pub mod format;
mod model;
mod svg;

pub use axis::{AxisScale, generate_ticks, step_for_range, AXIS_FLOOR_FACTOR, MAX_TICKS};
pub use config::{ChartConfig, Margins};
pub use format::{format_compact, format_usd, format_usd_f64, format_year};
pub use model::{ChartModel, LegendEntry, Series, SummaryPanel, Tick, Tooltip};
pub use svg::{render_svg, write_svg};
