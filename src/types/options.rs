use serde::{Deserialize, Serialize};

use crate::error::LayoutError;

/// Default upper bound for a row band's height in pixels.
pub const DEFAULT_MAX_CELL_HEIGHT: f64 = 16.0;

/// How the heatmap is laid out inside its container.
///
/// Every field has a default, so `{}` is a valid JSON configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DisplayOptions {
    /// Reserve room for and emit row labels.
    pub show_row_labels: bool,
    /// Upper bound for the row band height.
    pub max_cell_height: f64,
    /// Shrink columns to fit the container width (downsampling if needed)
    /// instead of using fixed-width cells and scrolling.
    pub fit_to_container: bool,
    /// Optional color legend painted on a separate surface.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<LegendOptions>,
    /// Ask the host to shrink to the drawn height when the heatmap is
    /// shorter than the container.
    pub allow_target_size_adjust: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            show_row_labels: false,
            max_cell_height: DEFAULT_MAX_CELL_HEIGHT,
            fit_to_container: false,
            legend: None,
            allow_target_size_adjust: false,
        }
    }
}

impl DisplayOptions {
    /// Check the options once, before layout.
    ///
    /// # Errors
    /// Returns [`LayoutError::InvalidOptions`] when `max_cell_height` is not
    /// a positive finite number.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if !self.max_cell_height.is_finite() || self.max_cell_height <= 0.0 {
            return Err(LayoutError::InvalidOptions(format!(
                "maxCellHeight must be positive, got {}",
                self.max_cell_height
            )));
        }
        Ok(())
    }

    /// The legend options when a legend should actually be produced.
    pub fn active_legend(&self) -> Option<&LegendOptions> {
        self.legend
            .as_ref()
            .filter(|l| l.show && !l.target.trim().is_empty())
    }
}

/// Where and how to draw the color legend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LegendOptions {
    pub show: bool,
    /// Identifier of the surface the legend is painted on (a DOM element id
    /// in the browser).
    pub target: String,
    /// Stack the color stops top to bottom instead of left to right.
    pub vertical: bool,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_gives_defaults() {
        let opts: DisplayOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(opts, DisplayOptions::default());
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn test_camel_case_fields() {
        let opts: DisplayOptions = serde_json::from_str(
            r#"{"showRowLabels":true,"maxCellHeight":20,"fitToContainer":true,
                "legend":{"show":true,"target":"legendDiv"}}"#,
        )
        .unwrap();
        assert!(opts.show_row_labels);
        assert!(opts.fit_to_container);
        assert!(opts.active_legend().is_some());
    }

    #[test]
    fn test_rejects_non_positive_max_height() {
        let opts = DisplayOptions {
            max_cell_height: 0.0,
            ..DisplayOptions::default()
        };
        assert!(matches!(
            opts.validate(),
            Err(LayoutError::InvalidOptions(_))
        ));
    }

    #[test]
    fn test_legend_needs_show_and_target() {
        let mut opts = DisplayOptions {
            legend: Some(LegendOptions {
                show: false,
                target: "legend".to_string(),
                vertical: false,
            }),
            ..DisplayOptions::default()
        };
        assert!(opts.active_legend().is_none());
        if let Some(legend) = opts.legend.as_mut() {
            legend.show = true;
            legend.target = "  ".to_string();
        }
        assert!(opts.active_legend().is_none());
    }
}
