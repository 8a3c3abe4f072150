//! Least-squares fitting of the calibration line
//!
//! The calibration model is `absorbance = slope * concentration + intercept`.
//! Two fit modes are supported:
//!
//! - [`FitKind::ThroughOrigin`]: the line is forced through (0, 0). The
//!   single free parameter has the closed form `k = Σ(x·y) / Σ(x²)`.
//! - [`FitKind::FreeIntercept`]: ordinary least squares on the degree-1
//!   design matrix `[x, 1]`, solved by SVD. Requires at least two distinct
//!   concentration values; a constant-x design is rejected up front instead
//!   of letting the solver return NaN coefficients.
//!
//! Both modes are deterministic, unweighted, standard least squares.

mod error;

pub use error::{FitError, InvertError};

use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};

use crate::data::CalibrationData;

/// Selects between the one- and two-parameter calibration models
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FitKind {
    /// Intercept fixed at zero; only the slope is estimated
    ThroughOrigin,
    /// Ordinary linear regression with a free intercept
    FreeIntercept,
}

/// A fitted calibration line
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearFit {
    /// Slope of the fitted line
    pub slope: f64,
    /// Intercept of the fitted line; exactly 0.0 in through-origin mode
    pub intercept: f64,
    /// Which model produced this fit
    pub kind: FitKind,
    /// Coefficient of determination of the fit
    pub r_squared: f64,
}

impl LinearFit {
    /// Predicted absorbance at the given concentration
    pub fn absorbance_at(&self, concentration: f64) -> f64 {
        self.slope * concentration + self.intercept
    }

    /// Invert the fitted line: estimate the concentration that produces the
    /// given absorbance.
    pub fn invert(&self, absorbance: f64) -> Result<f64, InvertError> {
        if self.slope == 0.0 {
            return Err(InvertError::ZeroSlope);
        }
        Ok(match self.kind {
            FitKind::ThroughOrigin => absorbance / self.slope,
            FitKind::FreeIntercept => (absorbance - self.intercept) / self.slope,
        })
    }

    /// Human-readable equation, e.g. `y = 0.500 x` or `y = 0.500 x + 0.010`
    pub fn equation(&self) -> String {
        match self.kind {
            FitKind::ThroughOrigin => format!("y = {:.3} x", self.slope),
            FitKind::FreeIntercept => format!("y = {:.3} x + {:.3}", self.slope, self.intercept),
        }
    }
}

/// Fit the calibration line to a sample set.
///
/// # Examples
///
/// ```rust
/// use calcurve::data::CalibrationData;
/// use calcurve::fit::{fit, FitKind};
///
/// let data = CalibrationData::from_text("0.1, 0.2, 0.3", "0.05, 0.10, 0.15").unwrap();
/// let line = fit(&data, FitKind::ThroughOrigin).unwrap();
/// assert!((line.slope - 0.5).abs() < 1e-12);
/// assert_eq!(line.intercept, 0.0);
/// ```
pub fn fit(data: &CalibrationData, kind: FitKind) -> Result<LinearFit, FitError> {
    let x = data.concentrations();
    let y = data.absorbances();

    let (slope, intercept) = match kind {
        FitKind::ThroughOrigin => {
            let sxx: f64 = x.iter().map(|v| v * v).sum();
            if sxx == 0.0 {
                return Err(FitError::DegenerateAbscissa);
            }
            let sxy: f64 = x.iter().zip(y).map(|(a, b)| a * b).sum();
            (sxy / sxx, 0.0)
        }
        FitKind::FreeIntercept => solve_free_intercept(x, y)?,
    };

    Ok(LinearFit {
        slope,
        intercept,
        kind,
        r_squared: r_squared(x, y, slope, intercept),
    })
}

/// Ordinary least squares for `y = slope·x + intercept` via SVD.
///
/// The design matrix is tall (n rows, 2 columns), so an SVD solve is used
/// rather than QR, which only handles square systems here.
fn solve_free_intercept(x: &[f64], y: &[f64]) -> Result<(f64, f64), FitError> {
    if x.iter().all(|v| *v == x[0]) {
        return Err(FitError::SingularDesign);
    }

    let n = x.len();
    let design = DMatrix::from_fn(n, 2, |i, j| if j == 0 { x[i] } else { 1.0 });
    let rhs = DVector::from_column_slice(y);

    let svd = design.svd(true, true);
    let beta = svd.solve(&rhs, 1e-12).map_err(|_| FitError::SingularDesign)?;
    if !beta[0].is_finite() || !beta[1].is_finite() {
        return Err(FitError::SingularDesign);
    }

    Ok((beta[0], beta[1]))
}

/// Coefficient of determination against the mean model.
///
/// Returns 1.0 when y has no variance (the fit cannot do worse than the
/// mean, and division by zero must be avoided).
fn r_squared(x: &[f64], y: &[f64], slope: f64, intercept: f64) -> f64 {
    let n = y.len() as f64;
    let y_mean = y.iter().sum::<f64>() / n;
    let ss_tot: f64 = y.iter().map(|v| (v - y_mean).powi(2)).sum();
    if ss_tot.abs() < 1e-15 {
        return 1.0;
    }
    let ss_res: f64 = x
        .iter()
        .zip(y)
        .map(|(xi, yi)| (yi - (slope * xi + intercept)).powi(2))
        .sum();
    1.0 - ss_res / ss_tot
}
