//! Chart rendering error types

use plotters::drawing::DrawingAreaErrorKind;
use thiserror::Error;

/// Errors that can occur while rendering the chart
#[derive(Error, Debug)]
pub enum PlotError {
    /// The drawing backend failed
    #[error("chart drawing failed: {0}")]
    Draw(String),

    /// The rendered bitmap could not be encoded as PNG
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}

impl<E: std::error::Error + Send + Sync> From<DrawingAreaErrorKind<E>> for PlotError {
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        PlotError::Draw(err.to_string())
    }
}
