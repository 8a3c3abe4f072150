//! Calibration sample data
//!
//! A [`CalibrationData`] holds the paired concentration/absorbance
//! measurements for one calibration run. The two series are paired by index:
//! `(concentrations[i], absorbances[i])` is one measurement. Length equality
//! is enforced at construction; mismatched input is an error, never a silent
//! truncation. The set is immutable once built and is recreated from the raw
//! text on every re-submission.

mod parse;

pub use parse::{parse_scalar, parse_series, ParseError};

use serde::{Deserialize, Serialize};

use crate::error::CalcurveError;
use crate::fit::FitError;

/// Paired concentration/absorbance measurements, validated at construction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalibrationData {
    concentrations: Vec<f64>,
    absorbances: Vec<f64>,
}

impl CalibrationData {
    /// Build a sample set from already-parsed series.
    ///
    /// Fails with [`FitError::NoData`] on empty input and
    /// [`FitError::LengthMismatch`] when the series differ in length.
    pub fn new(concentrations: Vec<f64>, absorbances: Vec<f64>) -> Result<Self, FitError> {
        if concentrations.is_empty() && absorbances.is_empty() {
            return Err(FitError::NoData);
        }
        if concentrations.len() != absorbances.len() {
            return Err(FitError::LengthMismatch {
                concentrations: concentrations.len(),
                absorbances: absorbances.len(),
            });
        }
        Ok(Self {
            concentrations,
            absorbances,
        })
    }

    /// Parse both series from comma-separated text and validate them.
    pub fn from_text(concentrations: &str, absorbances: &str) -> Result<Self, CalcurveError> {
        let concentrations = parse_series(concentrations)?;
        let absorbances = parse_series(absorbances)?;
        Ok(Self::new(concentrations, absorbances)?)
    }

    /// Concentration values (the x-axis)
    pub fn concentrations(&self) -> &[f64] {
        &self.concentrations
    }

    /// Absorbance values (the y-axis)
    pub fn absorbances(&self) -> &[f64] {
        &self.absorbances
    }

    /// Number of measurements
    pub fn len(&self) -> usize {
        self.concentrations.len()
    }

    /// True when the set holds no measurements
    pub fn is_empty(&self) -> bool {
        self.concentrations.is_empty()
    }

    /// Iterate over `(concentration, absorbance)` pairs
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.concentrations
            .iter()
            .copied()
            .zip(self.absorbances.iter().copied())
    }

    /// Largest concentration in the set
    pub fn max_concentration(&self) -> f64 {
        self.concentrations.iter().copied().fold(f64::MIN, f64::max)
    }

    /// Largest absorbance in the set
    pub fn max_absorbance(&self) -> f64 {
        self.absorbances.iter().copied().fold(f64::MIN, f64::max)
    }
}
