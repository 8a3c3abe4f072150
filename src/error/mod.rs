use thiserror::Error;

use crate::data::ParseError;
use crate::fit::{FitError, InvertError};
use crate::plot::PlotError;

/// Aggregated error type for callers that drive the whole pipeline
#[derive(Error, Debug)]
pub enum CalcurveError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Fit(#[from] FitError),

    #[error(transparent)]
    Invert(#[from] InvertError),

    #[error(transparent)]
    Plot(#[from] PlotError),
}
