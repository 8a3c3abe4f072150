//! calcurve — spectrophotometric calibration curves
//!
//! Fits a linear calibration curve (absorbance vs. concentration) to
//! user-supplied data, renders the data and fitted line as a PNG chart, and
//! inverts the fit to estimate a concentration from an absorbance reading.
//!
//! The model is `absorbance = slope * concentration + intercept`, fitted by
//! least squares either through the origin (intercept fixed at 0) or with a
//! free intercept.
//!
//! # Usage
//!
//! Individual stages are exposed as pure functions:
//!
//! ```rust
//! use calcurve::data::CalibrationData;
//! use calcurve::fit::{fit, FitKind};
//!
//! let data = CalibrationData::from_text(
//!     "0.1, 0.2, 0.3, 0.4, 0.5",
//!     "0.05, 0.10, 0.15, 0.20, 0.25",
//! )?;
//! let line = fit(&data, FitKind::ThroughOrigin)?;
//!
//! assert!((line.slope - 0.5).abs() < 1e-12);
//! assert!((line.invert(0.125)? - 0.25).abs() < 1e-12);
//! # Ok::<(), calcurve::CalcurveError>(())
//! ```
//!
//! Or drive the whole cycle (parse, fit, render, invert) through
//! [`run::evaluate`], which converts every failure into a user-facing
//! message instead of an error.

pub mod data;
pub mod error;
pub mod fit;
pub mod plot;
pub mod run;

pub use data::{CalibrationData, ParseError};
pub use error::CalcurveError;
pub use fit::{FitError, FitKind, InvertError, LinearFit};
pub use plot::{LegendPosition, PlotConfig, PlotError};
pub use run::{evaluate, CalibrationOutcome, CalibrationRequest};

pub mod prelude {
    //! Convenience re-exports for typical pipeline use
    pub use crate::data::{parse_scalar, parse_series, CalibrationData};
    pub use crate::fit::{fit, FitKind, LinearFit};
    pub use crate::plot::{render_png, LegendPosition, PlotConfig};
    pub use crate::run::{evaluate, CalibrationOutcome, CalibrationRequest};
}
