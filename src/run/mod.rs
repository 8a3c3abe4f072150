//! Request/response orchestration
//!
//! One calibration cycle is a pure function of an immutable
//! [`CalibrationRequest`]: parse both series, validate, fit, render, and
//! optionally invert a single absorbance reading. The hosting shell (CLI,
//! form, whatever) holds onto the latest field values between interactions
//! and calls [`evaluate`] again on any change.
//!
//! All errors are caught here and converted to short user-facing messages.
//! A failure in the inverse lookup withholds only the concentration; the
//! already-rendered chart stays in the outcome.

use serde::{Deserialize, Serialize};

use crate::data::{parse_scalar, CalibrationData};
use crate::error::CalcurveError;
use crate::fit::{fit, FitKind, LinearFit};
use crate::plot::{render_png, PlotConfig};

/// All inputs for one calibration cycle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalibrationRequest {
    /// Comma-separated concentration values
    pub concentrations: String,
    /// Comma-separated absorbance values, same length as `concentrations`
    pub absorbances: String,
    /// Chart display options
    pub plot: PlotConfig,
    /// Force the fitted line through the origin
    pub through_origin: bool,
    /// Optional absorbance reading to convert back to a concentration;
    /// blank means no inverse lookup
    pub absorbance_query: String,
}

impl Default for CalibrationRequest {
    fn default() -> Self {
        Self {
            concentrations: "0.1,0.2,0.3,0.4,0.5".to_string(),
            absorbances: "0.05,0.10,0.15,0.20,0.25".to_string(),
            plot: PlotConfig::default(),
            through_origin: true,
            absorbance_query: String::new(),
        }
    }
}

impl CalibrationRequest {
    fn fit_kind(&self) -> FitKind {
        if self.through_origin {
            FitKind::ThroughOrigin
        } else {
            FitKind::FreeIntercept
        }
    }
}

/// Everything produced by one calibration cycle
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalibrationOutcome {
    /// The fitted line, when parsing and fitting succeeded
    pub fit: Option<LinearFit>,
    /// Rendered chart; present whenever `fit` is
    #[serde(skip)]
    pub chart_png: Option<Vec<u8>>,
    /// Result of the inverse lookup, when requested and successful
    pub concentration: Option<f64>,
    /// Pipeline failure message (parse, fit, or render)
    pub error: Option<String>,
    /// Inverse-lookup failure message; the chart remains valid
    pub inversion_error: Option<String>,
}

/// Run one full calibration cycle.
///
/// # Examples
///
/// ```rust
/// use calcurve::run::{evaluate, CalibrationRequest};
///
/// let request = CalibrationRequest {
///     absorbance_query: "0.125".to_string(),
///     ..Default::default()
/// };
/// let outcome = evaluate(&request);
/// assert!(outcome.error.is_none());
/// assert_eq!(outcome.concentration, Some(0.25));
/// ```
pub fn evaluate(request: &CalibrationRequest) -> CalibrationOutcome {
    let mut outcome = CalibrationOutcome::default();

    let (data, line) = match prepare(request) {
        Ok(pair) => pair,
        Err(err) => {
            outcome.error = Some(err.to_string());
            return outcome;
        }
    };
    outcome.fit = Some(line);

    match render_png(&data, &line, &request.plot) {
        Ok(png) => outcome.chart_png = Some(png),
        Err(err) => {
            outcome.error = Some(err.to_string());
            return outcome;
        }
    }

    let query = request.absorbance_query.trim();
    if !query.is_empty() {
        match invert_query(query, &line) {
            Ok(concentration) => outcome.concentration = Some(concentration),
            Err(err) => outcome.inversion_error = Some(err.to_string()),
        }
    }

    outcome
}

fn prepare(request: &CalibrationRequest) -> Result<(CalibrationData, LinearFit), CalcurveError> {
    let data = CalibrationData::from_text(&request.concentrations, &request.absorbances)?;
    let line = fit(&data, request.fit_kind())?;
    log::debug!(
        "fitted {} points: {} (r^2 = {:.6})",
        data.len(),
        line.equation(),
        line.r_squared
    );
    Ok((data, line))
}

fn invert_query(text: &str, line: &LinearFit) -> Result<f64, CalcurveError> {
    let absorbance = parse_scalar(text)?;
    Ok(line.invert(absorbance)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_series_becomes_a_message() {
        let request = CalibrationRequest {
            concentrations: "0.1, , 0.3".to_string(),
            ..Default::default()
        };
        let outcome = evaluate(&request);

        assert!(outcome.error.is_some());
        assert!(outcome.fit.is_none());
        assert!(outcome.chart_png.is_none());
        assert!(outcome.concentration.is_none());
    }

    #[test]
    fn length_mismatch_fails_before_rendering() {
        let request = CalibrationRequest {
            concentrations: "0.1,0.2,0.3,0.4,0.5".to_string(),
            absorbances: "0.05,0.10,0.15,0.20".to_string(),
            ..Default::default()
        };
        let outcome = evaluate(&request);

        let message = outcome.error.expect("mismatch must be reported");
        assert!(message.contains("differ in length"), "got: {message}");
        assert!(outcome.chart_png.is_none());
    }

    #[test]
    fn singular_free_intercept_fit_is_reported() {
        let request = CalibrationRequest {
            concentrations: "0.3,0.3,0.3".to_string(),
            absorbances: "0.1,0.2,0.3".to_string(),
            through_origin: false,
            ..Default::default()
        };
        let outcome = evaluate(&request);

        assert!(outcome.error.is_some());
        assert!(outcome.chart_png.is_none());
    }

    #[test]
    fn blank_query_skips_inversion() {
        let request = CalibrationRequest {
            absorbance_query: "   ".to_string(),
            ..Default::default()
        };
        let outcome = evaluate(&request);

        assert!(outcome.error.is_none());
        assert!(outcome.concentration.is_none());
        assert!(outcome.inversion_error.is_none());
    }
}
