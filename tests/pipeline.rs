//! End-to-end pipeline tests
//!
//! Drive the public API the way a shell would: raw text in, chart bytes and
//! a concentration (or message) out.

use approx::assert_relative_eq;

use calcurve::prelude::*;

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

#[test]
fn default_request_produces_chart_and_fit() {
    let outcome = evaluate(&CalibrationRequest::default());

    assert!(outcome.error.is_none(), "unexpected: {:?}", outcome.error);
    let line = outcome.fit.expect("fit present");
    assert_relative_eq!(line.slope, 0.5, epsilon = 1e-12);
    assert_eq!(line.intercept, 0.0);

    let png = outcome.chart_png.expect("chart present");
    assert_eq!(&png[..8], &PNG_SIGNATURE);
    assert!(png.len() > 1000, "suspiciously small PNG: {} bytes", png.len());
}

#[test]
fn worked_example_through_origin() {
    let request = CalibrationRequest {
        concentrations: "0.1, 0.2, 0.3, 0.4, 0.5".to_string(),
        absorbances: "0.05, 0.10, 0.15, 0.20, 0.25".to_string(),
        through_origin: true,
        absorbance_query: "0.125".to_string(),
        ..Default::default()
    };
    let outcome = evaluate(&request);

    assert!(outcome.error.is_none());
    let line = outcome.fit.unwrap();
    assert_relative_eq!(line.slope, 0.5, epsilon = 1e-12);
    assert_eq!(line.intercept, 0.0);
    assert_relative_eq!(outcome.concentration.unwrap(), 0.250, epsilon = 1e-12);
}

#[test]
fn worked_example_free_intercept() {
    // Same data lies on an origin-passing line, so the free fit agrees
    let request = CalibrationRequest {
        through_origin: false,
        ..Default::default()
    };
    let outcome = evaluate(&request);

    assert!(outcome.error.is_none());
    let line = outcome.fit.unwrap();
    assert_relative_eq!(line.slope, 0.5, epsilon = 1e-9);
    assert_relative_eq!(line.intercept, 0.0, epsilon = 1e-9);
}

#[test]
fn inversion_failure_keeps_the_chart() {
    // All-zero absorbances give a zero slope; inversion must fail while the
    // chart stays available
    let request = CalibrationRequest {
        concentrations: "0.1,0.2,0.3".to_string(),
        absorbances: "0.0,0.0,0.0".to_string(),
        absorbance_query: "0.5".to_string(),
        ..Default::default()
    };
    let outcome = evaluate(&request);

    assert!(outcome.error.is_none());
    assert!(outcome.chart_png.is_some());
    assert!(outcome.concentration.is_none());
    let message = outcome.inversion_error.expect("zero slope must be reported");
    assert!(message.contains("slope"), "got: {message}");
}

#[test]
fn non_numeric_query_is_an_inversion_error_only() {
    let request = CalibrationRequest {
        absorbance_query: "abc".to_string(),
        ..Default::default()
    };
    let outcome = evaluate(&request);

    assert!(outcome.error.is_none());
    assert!(outcome.chart_png.is_some());
    assert!(outcome.inversion_error.is_some());
}

#[test]
fn empty_legend_labels_still_render() {
    let request = CalibrationRequest {
        plot: PlotConfig {
            points_label: String::new(),
            line_label: String::new(),
            ..Default::default()
        },
        ..Default::default()
    };
    let outcome = evaluate(&request);

    assert!(outcome.error.is_none());
    assert_eq!(&outcome.chart_png.unwrap()[..8], &PNG_SIGNATURE);
}

#[test]
fn every_legend_position_renders() {
    for position in [
        LegendPosition::Auto,
        LegendPosition::UpperRight,
        LegendPosition::LowerRight,
        LegendPosition::UpperLeft,
        LegendPosition::LowerLeft,
    ] {
        let request = CalibrationRequest {
            plot: PlotConfig {
                legend_position: position,
                ..Default::default()
            },
            ..Default::default()
        };
        let outcome = evaluate(&request);
        assert!(outcome.error.is_none(), "legend position {position:?} failed");
    }
}

#[test]
fn render_png_directly() {
    let data = CalibrationData::from_text("0.1, 0.2, 0.3", "0.11, 0.19, 0.32").unwrap();
    let line = fit(&data, FitKind::FreeIntercept).unwrap();
    let png = render_png(&data, &line, &PlotConfig::default()).unwrap();

    assert_eq!(&png[..8], &PNG_SIGNATURE);
}
