//! Chart rendering
//!
//! Renders the calibration chart to an in-memory PNG: open-circle markers
//! for the measurements, the fitted line sampled across the full x-range,
//! an equation annotation near the high-x end of the line, an optional
//! legend, and the chart title as a centered caption below the plot area.
//!
//! This module is render-only. It takes already-computed fit parameters and
//! never touches the fitting logic.

mod config;
mod error;

pub use config::{LegendPosition, PlotConfig};
pub use error::PlotError;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::data::CalibrationData;
use crate::fit::LinearFit;

// 11.69 x 8.27 inches (landscape A4) at 100 dpi
const WIDTH: u32 = 1169;
const HEIGHT: u32 = 827;

// Caption strip below the plot area, in pixels
const CAPTION_HEIGHT: u32 = 70;

// Number of evenly spaced samples of the fitted line over [0, xmax]
const LINE_SAMPLES: usize = 100;

const MARKER_RADIUS: i32 = 6;

/// Render the calibration chart to PNG bytes.
///
/// Axes span `[0, max * 1.1]` on both dimensions and always start at zero,
/// regardless of where the data lies.
pub fn render_png(
    data: &CalibrationData,
    fit: &LinearFit,
    config: &PlotConfig,
) -> Result<Vec<u8>, PlotError> {
    let mut raw = vec![0u8; (WIDTH * HEIGHT * 3) as usize];
    {
        let root = BitMapBackend::with_buffer(&mut raw, (WIDTH, HEIGHT)).into_drawing_area();
        root.fill(&WHITE)?;

        let (plot_area, caption_area) = root.split_vertically((HEIGHT - CAPTION_HEIGHT) as i32);
        draw_chart(&plot_area, data, fit, config)?;
        draw_caption(&caption_area, &config.title)?;

        root.present()?;
    }

    let png = encode_png(&raw)?;
    log::debug!("rendered {}x{} chart, {} bytes of PNG", WIDTH, HEIGHT, png.len());
    Ok(png)
}

fn draw_chart<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    data: &CalibrationData,
    fit: &LinearFit,
    config: &PlotConfig,
) -> Result<(), PlotError> {
    let x_max = positive_or(data.max_concentration() * 1.1, 1.0);
    let y_max = positive_or(data.max_absorbance() * 1.1, 1.0);

    let mut chart = ChartBuilder::on(area)
        .margin(25)
        .set_label_area_size(LabelAreaPosition::Left, 70)
        .set_label_area_size(LabelAreaPosition::Bottom, 50)
        .build_cartesian_2d(0.0..x_max, 0.0..y_max)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc(config.x_label.as_str())
        .y_desc(config.y_label.as_str())
        .label_style(("sans-serif", 18))
        .axis_desc_style(("sans-serif", 20))
        .draw()?;

    // Fitted line first, so the markers sit on top of it
    let step = x_max / (LINE_SAMPLES - 1) as f64;
    let line_points: Vec<(f64, f64)> = (0..LINE_SAMPLES)
        .map(|i| {
            let x = step * i as f64;
            (x, fit.absorbance_at(x))
        })
        .collect();
    let line_anno = chart.draw_series(LineSeries::new(line_points, &BLACK))?;
    if !config.line_label.is_empty() {
        line_anno
            .label(config.line_label.as_str())
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 30, y)], &BLACK));
    }

    // Open circles: white fill, then a black outline pass
    chart.draw_series(
        data.points()
            .map(|(x, y)| Circle::new((x, y), MARKER_RADIUS, WHITE.filled())),
    )?;
    let marker_anno = chart.draw_series(
        data.points()
            .map(|(x, y)| Circle::new((x, y), MARKER_RADIUS, BLACK.stroke_width(2))),
    )?;
    if !config.points_label.is_empty() {
        marker_anno
            .label(config.points_label.as_str())
            .legend(|(x, y)| Circle::new((x + 10, y), MARKER_RADIUS, BLACK.stroke_width(2)));
    }

    // Equation annotation near the high-x end of the fitted line
    let equation_pos = (x_max * 0.7, fit.absorbance_at(x_max) * 0.9);
    chart.draw_series(std::iter::once(Text::new(
        fit.equation(),
        equation_pos,
        ("sans-serif", 18).into_font().color(&BLACK),
    )))?;

    if config.wants_legend() {
        chart
            .configure_series_labels()
            .position(config.legend_position.to_series_label_position())
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .label_font(("sans-serif", 18))
            .draw()?;
    }

    Ok(())
}

/// Draw the chart title centered in the caption strip below the plot.
fn draw_caption<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    title: &str,
) -> Result<(), PlotError> {
    if title.is_empty() {
        return Ok(());
    }

    let (width, height) = area.dim_in_pixel();
    let style = ("sans-serif", 28)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Center));
    area.draw(&Text::new(
        title.to_string(),
        (width as i32 / 2, height as i32 / 2),
        style,
    ))?;

    Ok(())
}

fn positive_or(value: f64, fallback: f64) -> f64 {
    if value > 0.0 && value.is_finite() {
        value
    } else {
        fallback
    }
}

fn encode_png(raw: &[u8]) -> Result<Vec<u8>, PlotError> {
    let mut png = Vec::new();
    PngEncoder::new(&mut png).write_image(raw, WIDTH, HEIGHT, ExtendedColorType::Rgb8)?;
    Ok(png)
}
