//! SVG rendering of a chart model
//!
//! Output is a standalone document: dashed grid, axes, one polyline per
//! series, hover tooltips via `<title>`, legend, and the maturity panel.

use std::fmt::{self, Write};

use super::config::ChartConfig;
use super::format::format_year;
use super::model::{ChartModel, Series, SUMMARY_HEADING, X_AXIS_LABEL, Y_AXIS_LABEL};

const GRID_COLOR: &str = "#cccccc";
const AXIS_COLOR: &str = "#666666";
const TEXT_COLOR: &str = "#374151";
const PANEL_FILL: &str = "#f9fafb";

/// Most x tick labels drawn before labels start skipping years
const MAX_X_LABELS: usize = 20;

/// Render a chart model to an SVG string
pub fn render_svg(model: &ChartModel, config: &ChartConfig) -> String {
    let mut out = String::new();
    // fmt::Write into a String never fails
    let _ = write_svg(&mut out, model, config);
    out
}

/// Write a chart model as SVG into any formatter sink
pub fn write_svg<W: Write>(out: &mut W, model: &ChartModel, config: &ChartConfig) -> fmt::Result {
    let plot = Plot::new(model, config);

    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="sans-serif" font-size="{fs}">"#,
        w = num(config.width),
        h = num(config.total_height()),
        fs = num(config.font_size),
    )?;

    write_grid(out, model, &plot, config)?;
    write_axes(out, model, &plot, config)?;
    for series in Series::ALL {
        write_series(out, model, &plot, series, config)?;
    }
    write_tooltips(out, model, &plot)?;
    write_legend(out, model, &plot, config)?;
    write_summary(out, model, config)?;

    writeln!(out, "</svg>")
}

/// Maps data coordinates onto the plot rectangle
struct Plot {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    y_min: i128,
    y_span: f64,
    max_year: u32,
}

impl Plot {
    fn new(model: &ChartModel, config: &ChartConfig) -> Self {
        let (x, y, width, height) = config.plot_area();
        let y_min = model.axis.min;
        let y_span = (model.axis.upper_bound() - y_min).max(1) as f64;
        let max_year = model.points().last().map(|p| p.year).unwrap_or(0);
        Self { x, y, width, height, y_min, y_span, max_year }
    }

    fn px(&self, year: u32) -> f64 {
        if self.max_year == 0 {
            self.x + self.width / 2.0
        } else {
            self.x + self.width * year as f64 / self.max_year as f64
        }
    }

    fn py(&self, value: i128) -> f64 {
        let t = (value - self.y_min) as f64 / self.y_span;
        self.y + self.height * (1.0 - t)
    }

    fn bottom(&self) -> f64 {
        self.y + self.height
    }

    fn right(&self) -> f64 {
        self.x + self.width
    }
}

fn write_grid<W: Write>(out: &mut W, model: &ChartModel, plot: &Plot, config: &ChartConfig) -> fmt::Result {
    writeln!(
        out,
        r#"<g class="grid" stroke="{}" stroke-dasharray="{}">"#,
        GRID_COLOR,
        escape(&config.grid_dash)
    )?;
    for tick in &model.axis.ticks {
        let y = plot.py(*tick);
        writeln!(
            out,
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}"/>"#,
            num(plot.x),
            num(y),
            num(plot.right()),
            num(y)
        )?;
    }
    for point in model.points() {
        let x = plot.px(point.year);
        writeln!(
            out,
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}"/>"#,
            num(x),
            num(plot.y),
            num(x),
            num(plot.bottom())
        )?;
    }
    writeln!(out, "</g>")
}

fn write_axes<W: Write>(out: &mut W, model: &ChartModel, plot: &Plot, config: &ChartConfig) -> fmt::Result {
    writeln!(out, r#"<g class="axes" stroke="{}">"#, AXIS_COLOR)?;
    writeln!(
        out,
        r#"<line x1="{x}" y1="{b}" x2="{r}" y2="{b}"/>"#,
        x = num(plot.x),
        b = num(plot.bottom()),
        r = num(plot.right())
    )?;
    writeln!(
        out,
        r#"<line x1="{x}" y1="{t}" x2="{x}" y2="{b}"/>"#,
        x = num(plot.x),
        t = num(plot.y),
        b = num(plot.bottom())
    )?;
    writeln!(out, "</g>")?;

    writeln!(out, r#"<g class="y-ticks" fill="{}" text-anchor="end">"#, TEXT_COLOR)?;
    for tick in &model.y_ticks {
        writeln!(
            out,
            r#"<text x="{}" y="{}" dominant-baseline="middle">{}</text>"#,
            num(plot.x - 8.0),
            num(plot.py(tick.value)),
            escape(&tick.label)
        )?;
    }
    writeln!(out, "</g>")?;

    let every = x_label_interval(model.points().len());
    writeln!(out, r#"<g class="x-ticks" fill="{}" text-anchor="middle">"#, TEXT_COLOR)?;
    for point in model.points().iter().step_by(every) {
        writeln!(
            out,
            r#"<text x="{}" y="{}">{}</text>"#,
            num(plot.px(point.year)),
            num(plot.bottom() + config.font_size + 6.0),
            point.year
        )?;
    }
    writeln!(out, "</g>")?;

    writeln!(
        out,
        r#"<text class="x-label" x="{}" y="{}" text-anchor="end" fill="{}">{}</text>"#,
        num(plot.right()),
        num(plot.bottom() + config.x_label_height - 4.0),
        TEXT_COLOR,
        X_AXIS_LABEL
    )?;
    let label_x = config.margins.left;
    let label_y = plot.y + plot.height / 2.0;
    writeln!(
        out,
        r#"<text class="y-label" x="{x}" y="{y}" text-anchor="middle" fill="{c}" transform="rotate(-90 {x} {y})">{t}</text>"#,
        x = num(label_x),
        y = num(label_y),
        c = TEXT_COLOR,
        t = Y_AXIS_LABEL
    )
}

fn write_series<W: Write>(
    out: &mut W,
    model: &ChartModel,
    plot: &Plot,
    series: Series,
    config: &ChartConfig,
) -> fmt::Result {
    let coords: Vec<String> = model
        .points()
        .iter()
        .map(|p| format!("{},{}", num(plot.px(p.year)), num(plot.py(series.value(p)))))
        .collect();

    writeln!(
        out,
        r#"<polyline class="series" data-key="{}" fill="none" stroke="{}" stroke-width="{}" points="{}"><title>{}</title></polyline>"#,
        series.data_key(),
        series.color(),
        num(config.stroke_width),
        coords.join(" "),
        series.name()
    )
}

fn write_tooltips<W: Write>(out: &mut W, model: &ChartModel, plot: &Plot) -> fmt::Result {
    writeln!(out, r#"<g class="tooltips">"#)?;
    for (point, tooltip) in model.points().iter().zip(&model.tooltips) {
        let x = plot.px(point.year);
        writeln!(out, r#"<g data-year="{}"><title>{}</title>"#, point.year, escape(&tooltip.text()))?;
        for series in Series::ALL {
            writeln!(
                out,
                r#"<circle cx="{}" cy="{}" r="3" fill="{}"/>"#,
                num(x),
                num(plot.py(series.value(point))),
                series.color()
            )?;
        }
        writeln!(out, "</g>")?;
    }
    writeln!(out, "</g>")
}

fn write_legend<W: Write>(out: &mut W, model: &ChartModel, plot: &Plot, config: &ChartConfig) -> fmt::Result {
    let y = config.height - config.margins.bottom - config.legend_height / 2.0;
    let entry_width = 160.0;
    let total = entry_width * model.legend.len() as f64;
    let mut x = plot.x + (plot.width - total) / 2.0;

    writeln!(out, r#"<g class="legend">"#)?;
    for entry in &model.legend {
        writeln!(
            out,
            r#"<line x1="{}" y1="{y}" x2="{}" y2="{y}" stroke="{}" stroke-width="{}"/>"#,
            num(x),
            num(x + 16.0),
            escape(&entry.color),
            num(config.stroke_width),
            y = num(y)
        )?;
        writeln!(
            out,
            r#"<text x="{}" y="{}" dominant-baseline="middle" fill="{}">{}</text>"#,
            num(x + 22.0),
            num(y),
            escape(&entry.color),
            escape(&entry.name)
        )?;
        x += entry_width;
    }
    writeln!(out, "</g>")
}

fn write_summary<W: Write>(out: &mut W, model: &ChartModel, config: &ChartConfig) -> fmt::Result {
    let x = config.margins.left;
    let y = config.height;
    let width = config.width - config.margins.left - config.margins.right;

    writeln!(out, r#"<g class="summary">"#)?;
    writeln!(
        out,
        r#"<rect x="{}" y="{}" width="{}" height="{}" rx="6" fill="{}"/>"#,
        num(x),
        num(y),
        num(width),
        num(config.summary_height),
        PANEL_FILL
    )?;
    writeln!(
        out,
        r#"<text x="{}" y="{}" fill="{}">{}</text>"#,
        num(x + 16.0),
        num(y + 22.0),
        TEXT_COLOR,
        SUMMARY_HEADING
    )?;

    if let Some(panel) = &model.summary {
        let column = width / 2.0;
        let rows = [
            (Series::Compound, panel.compound.as_str()),
            (Series::Simple, panel.simple.as_str()),
        ];
        for (i, (series, value)) in rows.iter().enumerate() {
            writeln!(
                out,
                r#"<text x="{}" y="{}" fill="{}">{}: <tspan font-weight="bold">{}</tspan></text>"#,
                num(x + 16.0 + column * i as f64),
                num(y + 50.0),
                TEXT_COLOR,
                series.name(),
                escape(value)
            )?;
        }
        writeln!(
            out,
            r#"<desc>{} at maturity</desc>"#,
            format_year(panel.totals.year)
        )?;
    }
    writeln!(out, "</g>")
}

/// Label every n-th year so long horizons stay readable
fn x_label_interval(count: usize) -> usize {
    count.div_ceil(MAX_X_LABELS).max(1)
}

/// Coordinates with at most two decimals and no trailing zeros
fn num(value: f64) -> String {
    let s = format!("{:.2}", value);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::InterestParams;
    use crate::projection::{ProjectionEngine, ProjectionResult};

    fn render(params: InterestParams) -> String {
        let model = ChartModel::build(ProjectionEngine::new().project(&params));
        render_svg(&model, &ChartConfig::default())
    }

    #[test]
    fn test_document_structure() {
        let svg = render(InterestParams::default());
        assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"896\" height=\"456\""));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert_eq!(svg.matches("<polyline").count(), 2);
        assert!(svg.contains(r##"stroke="#8884d8""##));
        assert!(svg.contains(r##"stroke="#82ca9d""##));
        assert!(svg.contains(r#"stroke-dasharray="3 3""#));
    }

    #[test]
    fn test_labels_tooltips_and_summary() {
        let svg = render(InterestParams::default());
        assert!(svg.contains(">1.9K</text>"));
        assert!(svg.contains(">2.9K</text>"));
        assert!(svg.contains(">Years</text>"));
        assert!(svg.contains(">Amount</text>"));
        assert!(svg.contains("<title>Year 10: Compound Interest $2,594, Simple Interest $2,000</title>"));
        assert_eq!(svg.matches("<g data-year=").count(), 11);
        assert!(svg.contains("Comparison at maturity:"));
        assert!(svg.contains("Compound Interest: <tspan font-weight=\"bold\">$2,594</tspan>"));
        assert!(svg.contains("Simple Interest: <tspan font-weight=\"bold\">$2,000</tspan>"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let params = InterestParams::new(5000.0, 7.5, 40);
        assert_eq!(render(params), render(params));
    }

    #[test]
    fn test_empty_model_renders() {
        let model = ChartModel::build(ProjectionResult::new(InterestParams::default()));
        let svg = render_svg(&model, &ChartConfig::default());
        assert!(svg.contains("Comparison at maturity:"));
        assert!(!svg.contains("<tspan"));
        assert!(!svg.contains("<circle"));
    }

    #[test]
    fn test_single_year_centered() {
        let svg = render(InterestParams::new(1000.0, 5.0, 0));
        // plot x 80 + width 786 / 2
        assert!(svg.contains(r#"<circle cx="473""#));
    }

    #[test]
    fn test_long_horizon_skips_year_labels() {
        assert_eq!(x_label_interval(11), 1);
        assert_eq!(x_label_interval(20), 1);
        assert_eq!(x_label_interval(101), 6);
    }

    #[test]
    fn test_num_and_escape() {
        assert_eq!(num(80.0), "80");
        assert_eq!(num(12.5), "12.5");
        assert_eq!(num(1.0 / 3.0), "0.33");
        assert_eq!(num(-0.001), "0");
        assert_eq!(escape("a<b & \"c\""), "a&lt;b &amp; &quot;c&quot;");
    }
}
