//! Interest Chart CLI
//!
//! Projects compound and simple interest for one set of inputs and prints the
//! result to stdout as a summary, a year table, JSON, or an SVG chart.
//! Chart size can be overridden with CHART_WIDTH / CHART_HEIGHT.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use interest_chart::chart::{format_usd_f64, format_year};
use interest_chart::{
    format_usd, render_svg, ChartConfig, ChartModel, InterestCalculator, InterestParams,
};
use log::info;
use std::env;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Maturity comparison only
    Summary,
    /// One row per year
    Table,
    /// Full chart model as JSON
    Json,
    /// SVG document
    Svg,
}

#[derive(Debug, Parser)]
#[command(name = "interest_chart")]
#[command(about = "Compare compound and simple interest growth over time")]
#[command(version)]
struct Cli {
    /// Initial amount
    #[arg(short, long, default_value_t = 1000.0)]
    principal: f64,

    /// Annual rate in percent
    #[arg(short, long, default_value_t = 10.0)]
    rate: f64,

    /// Time period in years
    #[arg(short, long, default_value_t = 10)]
    years: u32,

    /// What to print
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Summary)]
    format: OutputFormat,

    /// Reject out-of-range inputs instead of clamping them
    #[arg(long)]
    strict: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let params = InterestParams::new(cli.principal, cli.rate, cli.years);

    if cli.strict {
        params.validate().context("invalid input")?;
    }

    let calculator = InterestCalculator::with_params(params);
    let model = calculator.model();
    info!(
        "principal={} rate={}% years={}",
        calculator.params().principal,
        calculator.params().rate,
        calculator.params().years
    );

    match cli.format {
        OutputFormat::Summary => print_summary(model),
        OutputFormat::Table => print_table(model),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(model).context("serializing chart model")?;
            println!("{}", json);
        }
        OutputFormat::Svg => print!("{}", render_svg(model, &chart_config())),
    }

    Ok(())
}

/// Default layout with optional size overrides from the environment
fn chart_config() -> ChartConfig {
    let defaults = ChartConfig::default();

    let width: f64 = env::var("CHART_WIDTH")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(defaults.width);

    let height: f64 = env::var("CHART_HEIGHT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(defaults.height);

    defaults.with_size(width, height)
}

fn print_summary(model: &ChartModel) {
    let params = &model.projection.params;
    println!("Compound Interest Calculator");
    println!("============================\n");
    println!("  Initial Amount:      {}", format_usd_f64(params.principal));
    println!("  Annual Rate (%):     {}", params.rate);
    println!("  Time Period (years): {}", params.years);
    println!();

    match &model.summary {
        Some(panel) => {
            println!("{}", panel.heading);
            println!("  Compound Interest: {}", panel.compound);
            println!("  Simple Interest:   {}", panel.simple);
            println!(
                "  Difference:        {}",
                format_usd(panel.totals.compounding_advantage())
            );
        }
        None => println!("No projection data."),
    }
}

fn print_table(model: &ChartModel) {
    println!("{:>9} {:>18} {:>18}", "Year", "Compound Interest", "Simple Interest");
    println!("{}", "-".repeat(47));
    for point in model.points() {
        println!(
            "{:>9} {:>18} {:>18}",
            format_year(point.year),
            format_usd(point.compound_amount),
            format_usd(point.simple_amount)
        );
    }

    let ticks: Vec<&str> = model.y_ticks.iter().map(|t| t.label.as_str()).collect();
    println!(
        "\nY axis: {} .. {} step {} [{}]",
        model.axis.min,
        model.axis.upper_bound(),
        model.axis.step,
        ticks.join(", ")
    );
}
