//! Fit and inversion error types

use thiserror::Error;

/// Errors that can occur while fitting the calibration line
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FitError {
    /// No measurements were supplied
    #[error("no data points to fit")]
    NoData,

    /// The two series differ in length
    #[error("concentration and absorbance lists differ in length ({concentrations} vs {absorbances})")]
    LengthMismatch {
        /// Number of concentration values
        concentrations: usize,
        /// Number of absorbance values
        absorbances: usize,
    },

    /// Free-intercept fit on data with fewer than two distinct concentrations
    #[error("free-intercept fit needs at least two distinct concentration values")]
    SingularDesign,

    /// Origin-constrained fit where every concentration is zero
    #[error("cannot fit a line through the origin when all concentrations are zero")]
    DegenerateAbscissa,
}

/// Errors that can occur while inverting the fitted line
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvertError {
    /// The fitted slope is zero, so the line has no inverse
    #[error("fitted slope is zero; the calibration line cannot be inverted")]
    ZeroSlope,
}
