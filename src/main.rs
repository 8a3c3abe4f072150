//! Command-line shell around the calibration pipeline
//!
//! Collects the same fields an interactive form would, runs one calibration
//! cycle, writes the chart to disk, and prints the fit summary and the
//! optional inverse lookup.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use calcurve::plot::{LegendPosition, PlotConfig};
use calcurve::run::{evaluate, CalibrationRequest};

#[derive(Parser, Debug)]
#[command(
    name = "calcurve",
    version,
    about = "Fit and plot an absorbance vs. concentration calibration curve"
)]
struct Cli {
    /// Comma-separated concentration values
    #[arg(long, default_value = "0.1,0.2,0.3,0.4,0.5")]
    concentrations: String,

    /// Comma-separated absorbance values, same length as --concentrations
    #[arg(long, default_value = "0.05,0.10,0.15,0.20,0.25")]
    absorbances: String,

    /// Chart caption shown below the plot area
    #[arg(long, default_value = "Absorbance vs. concentration calibration curve")]
    title: String,

    /// X-axis label
    #[arg(long, default_value = "Concentration (c)")]
    x_label: String,

    /// Y-axis label
    #[arg(long, default_value = "Absorbance (Abs)")]
    y_label: String,

    /// Legend label for the data points; empty hides the entry
    #[arg(long, default_value = "Data points")]
    points_label: String,

    /// Legend label for the fitted line; empty hides the entry
    #[arg(long, default_value = "Fitted line")]
    line_label: String,

    /// Legend placement
    #[arg(long, value_enum, default_value = "auto")]
    legend_position: LegendPosition,

    /// Allow a non-zero intercept instead of forcing the line through the origin
    #[arg(long)]
    free_intercept: bool,

    /// Absorbance reading to convert back to a concentration
    #[arg(long)]
    absorbance: Option<String>,

    /// Output path for the rendered chart
    #[arg(long, default_value = "calibration_curve.png")]
    output: PathBuf,

    /// Print the fit summary as JSON
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn into_request(self) -> (CalibrationRequest, PathBuf, bool) {
        let request = CalibrationRequest {
            concentrations: self.concentrations,
            absorbances: self.absorbances,
            plot: PlotConfig {
                title: self.title,
                x_label: self.x_label,
                y_label: self.y_label,
                points_label: self.points_label,
                line_label: self.line_label,
                legend_position: self.legend_position,
            },
            through_origin: !self.free_intercept,
            absorbance_query: self.absorbance.unwrap_or_default(),
        };
        (request, self.output, self.json)
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let (request, output, json) = Cli::parse().into_request();
    let outcome = evaluate(&request);

    if let Some(message) = outcome.error {
        anyhow::bail!("{message}");
    }

    if let Some(png) = &outcome.chart_png {
        fs::write(&output, png).with_context(|| format!("writing {}", output.display()))?;
        println!("wrote {}", output.display());
    }

    if let Some(line) = &outcome.fit {
        if json {
            println!("{}", serde_json::to_string_pretty(line)?);
        } else {
            println!("{}  (r\u{b2} = {:.4})", line.equation(), line.r_squared);
        }
    }

    if let Some(concentration) = outcome.concentration {
        println!("concentration = {concentration:.3}");
    }
    if let Some(message) = outcome.inversion_error {
        eprintln!("{message}");
    }

    Ok(())
}
