//! Color legend: a strip of representative palette colors between the
//! saturation bounds.

use crate::color_scale::ColorScale;
use crate::types::{LegendOptions, LegendPlan, LegendStop, LegendText, Orientation};

/// Number of color stops in the strip.
pub const LEGEND_STOPS: usize = 8;
/// Side of one stop box.
pub const LEGEND_BOX: f64 = 10.0;
/// Legend label font size.
pub const LEGEND_FONT_SIZE: f64 = 10.0;

const MARGIN: f64 = 3.0;
const LABEL_GAP: f64 = 4.0;
/// Estimated pixels per character at the legend font size.
const LEGEND_CHAR_WIDTH: f64 = 6.0;
/// Room for the two bound labels around the strip.
const LABEL_ALLOWANCE: f64 = 60.0;
const HORIZONTAL_HEIGHT: f64 = 40.0;
const VERTICAL_WIDTH: f64 = 50.0;

/// Format a bound the way the legend prints it (one decimal).
pub fn bound_label(value: f64) -> String {
    format!("{value:.1}")
}

/// Lay out the legend for `scale` on the surface named in `options`.
pub fn plan_legend(options: &LegendOptions, scale: &ColorScale) -> LegendPlan {
    let min_text = bound_label(-scale.clip());
    let max_text = bound_label(scale.clip());
    let picks: Vec<_> = scale
        .colors()
        .iter()
        .copied()
        .enumerate()
        .step_by(2)
        .take(LEGEND_STOPS)
        .collect();
    let strip_length = LEGEND_BOX * picks.len() as f64;

    if options.vertical {
        let stops = picks
            .iter()
            .enumerate()
            .map(|(i, &(bucket, color))| LegendStop {
                bucket,
                color,
                x: MARGIN,
                y: MARGIN + i as f64 * LEGEND_BOX,
                width: LEGEND_BOX,
                height: LEGEND_BOX,
            })
            .collect();
        LegendPlan {
            target: options.target.clone(),
            orientation: Orientation::Vertical,
            width: VERTICAL_WIDTH,
            height: LABEL_ALLOWANCE + strip_length,
            font_size: LEGEND_FONT_SIZE,
            stops,
            min_label: LegendText {
                text: min_text,
                x: LEGEND_BOX + MARGIN,
                y: MARGIN,
            },
            max_label: LegendText {
                text: max_text,
                x: MARGIN + LABEL_GAP,
                y: MARGIN + strip_length,
            },
        }
    } else {
        let strip_x = MARGIN + min_text.chars().count() as f64 * LEGEND_CHAR_WIDTH + LABEL_GAP;
        let stops = picks
            .iter()
            .enumerate()
            .map(|(i, &(bucket, color))| LegendStop {
                bucket,
                color,
                x: strip_x + i as f64 * LEGEND_BOX,
                y: MARGIN,
                width: LEGEND_BOX,
                height: LEGEND_BOX,
            })
            .collect();
        LegendPlan {
            target: options.target.clone(),
            orientation: Orientation::Horizontal,
            width: LABEL_ALLOWANCE + strip_length,
            height: HORIZONTAL_HEIGHT,
            font_size: LEGEND_FONT_SIZE,
            stops,
            min_label: LegendText {
                text: min_text,
                x: MARGIN,
                y: MARGIN,
            },
            max_label: LegendText {
                text: max_text,
                x: strip_x + strip_length + LABEL_GAP,
                y: MARGIN,
            },
        }
    }
}

#[cfg(test)]
#[allow(clippy::indexing_slicing, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::color_scale::palette;

    fn options(vertical: bool) -> LegendOptions {
        LegendOptions {
            show: true,
            target: "legend".to_string(),
            vertical,
        }
    }

    #[test]
    fn test_eight_stops_every_other_color() {
        let plan = plan_legend(&options(false), &ColorScale::default());
        assert_eq!(plan.stops.len(), LEGEND_STOPS);
        let buckets: Vec<usize> = plan.stops.iter().map(|s| s.bucket).collect();
        assert_eq!(buckets, vec![0, 2, 4, 6, 8, 10, 12, 14]);
        assert_eq!(plan.stops[1].color, palette::DIVERGING_17[2]);
    }

    #[test]
    fn test_bounds_are_printed_with_one_decimal() {
        let plan = plan_legend(&options(false), &ColorScale::default());
        assert_eq!(plan.min_label.text, "-3.0");
        assert_eq!(plan.max_label.text, "3.0");
    }

    #[test]
    fn test_horizontal_geometry() {
        let plan = plan_legend(&options(false), &ColorScale::default());
        assert_eq!(plan.width, 140.0);
        assert_eq!(plan.height, 40.0);
        assert_eq!(plan.stops[0].x, 31.0);
        assert_eq!(plan.max_label.x, 31.0 + 80.0 + 4.0);
    }

    #[test]
    fn test_vertical_geometry() {
        let plan = plan_legend(&options(true), &ColorScale::default());
        assert_eq!(plan.orientation, Orientation::Vertical);
        assert_eq!(plan.width, 50.0);
        assert_eq!(plan.height, 140.0);
        assert_eq!(plan.stops[7].y, 73.0);
        assert_eq!(plan.max_label.y, 83.0);
    }
}
