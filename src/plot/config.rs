//! Chart display options
//!
//! Pure presentation state, owned by the caller and passed into rendering.
//! None of these fields affect the fit.

use clap::ValueEnum;
use plotters::chart::SeriesLabelPosition;
use serde::{Deserialize, Serialize};

/// Where the legend box is placed on the chart
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum LegendPosition {
    /// Pick a corner automatically
    #[default]
    Auto,
    /// Upper-right corner
    UpperRight,
    /// Lower-right corner
    LowerRight,
    /// Upper-left corner
    UpperLeft,
    /// Lower-left corner
    LowerLeft,
}

impl LegendPosition {
    /// Map to the plotting backend's series-label position.
    ///
    /// `Auto` resolves to the upper-left corner: a calibration line ascends
    /// towards the upper right, so upper left is the corner the data leaves
    /// open.
    pub(crate) fn to_series_label_position(self) -> SeriesLabelPosition {
        match self {
            LegendPosition::Auto | LegendPosition::UpperLeft => SeriesLabelPosition::UpperLeft,
            LegendPosition::UpperRight => SeriesLabelPosition::UpperRight,
            LegendPosition::LowerRight => SeriesLabelPosition::LowerRight,
            LegendPosition::LowerLeft => SeriesLabelPosition::LowerLeft,
        }
    }
}

/// Display configuration for one rendered chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlotConfig {
    /// Caption drawn centered below the plot area
    pub title: String,
    /// X-axis label
    pub x_label: String,
    /// Y-axis label
    pub y_label: String,
    /// Legend label for the measurements; empty hides the entry
    pub points_label: String,
    /// Legend label for the fitted line; empty hides the entry
    pub line_label: String,
    /// Legend placement
    pub legend_position: LegendPosition,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            title: "Absorbance vs. concentration calibration curve".to_string(),
            x_label: "Concentration (c)".to_string(),
            y_label: "Absorbance (Abs)".to_string(),
            points_label: "Data points".to_string(),
            line_label: "Fitted line".to_string(),
            legend_position: LegendPosition::Auto,
        }
    }
}

impl PlotConfig {
    /// True when at least one legend label is non-empty, i.e. a legend box
    /// should be drawn at all.
    pub(crate) fn wants_legend(&self) -> bool {
        !self.points_label.is_empty() || !self.line_label.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legend_position_mapping_is_total() {
        // SeriesLabelPosition does not implement PartialEq, so match instead
        let auto = LegendPosition::Auto.to_series_label_position();
        assert!(matches!(auto, SeriesLabelPosition::UpperLeft));
        assert!(matches!(
            LegendPosition::UpperRight.to_series_label_position(),
            SeriesLabelPosition::UpperRight
        ));
        assert!(matches!(
            LegendPosition::LowerRight.to_series_label_position(),
            SeriesLabelPosition::LowerRight
        ));
        assert!(matches!(
            LegendPosition::UpperLeft.to_series_label_position(),
            SeriesLabelPosition::UpperLeft
        ));
        assert!(matches!(
            LegendPosition::LowerLeft.to_series_label_position(),
            SeriesLabelPosition::LowerLeft
        ));
    }

    #[test]
    fn empty_labels_suppress_legend() {
        let mut config = PlotConfig::default();
        assert!(config.wants_legend());

        config.points_label.clear();
        assert!(config.wants_legend());

        config.line_label.clear();
        assert!(!config.wants_legend());
    }

    #[test]
    fn legend_position_serializes_kebab_case() {
        let json = serde_json::to_string(&LegendPosition::UpperRight).unwrap();
        assert_eq!(json, "\"upper-right\"");
    }
}
