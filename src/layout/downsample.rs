//! Column downsampling.
//!
//! When columns would be narrower than a pixel, adjacent samples are folded
//! into one displayed cell by averaging. Samples are saturated before they
//! are averaged, and a single NaN in a group makes the whole group missing.

use crate::color_scale::ColorScale;

/// One displayed value after folding `count` source samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampledValue {
    /// Index of the first folded source column.
    pub first: usize,
    /// Number of folded source columns (the last group may be short).
    pub count: usize,
    /// Clamped average, NaN when any folded sample was NaN.
    pub value: f64,
}

/// Fold `values` into groups of `stride` adjacent samples.
///
/// A stride of 0 is treated as 1.
pub fn downsample(values: &[f64], stride: usize, scale: &ColorScale) -> Vec<SampledValue> {
    let stride = stride.max(1);
    values
        .chunks(stride)
        .enumerate()
        .map(|(i, group)| {
            let sum: f64 = group.iter().map(|&v| scale.clamp(v)).sum();
            SampledValue {
                first: i * stride,
                count: group.len(),
                value: sum / group.len() as f64,
            }
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::indexing_slicing, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_stride_one_only_clamps() {
        let scale = ColorScale::default();
        let out = downsample(&[-5.0, 1.0, 4.0], 1, &scale);
        let values: Vec<f64> = out.iter().map(|s| s.value).collect();
        assert_eq!(values, vec![-3.0, 1.0, 3.0]);
    }

    #[test]
    fn test_short_last_group() {
        let scale = ColorScale::default();
        let out = downsample(&[1.0, 2.0, 0.5, -0.5, 2.0], 2, &scale);
        assert_eq!(out.len(), 3);
        assert_eq!(out[0].value, 1.5);
        assert_eq!(out[1].value, 0.0);
        assert_eq!(out[2].first, 4);
        assert_eq!(out[2].count, 1);
        assert_eq!(out[2].value, 2.0);
    }

    #[test]
    fn test_nan_poisons_group() {
        let scale = ColorScale::default();
        let out = downsample(&[1.0, f64::NAN, 2.0, 2.0], 2, &scale);
        assert!(out[0].value.is_nan());
        assert_eq!(out[1].value, 2.0);
    }

    #[test]
    fn test_zero_stride_is_one() {
        let scale = ColorScale::default();
        assert_eq!(downsample(&[0.0, 1.0], 0, &scale).len(), 2);
    }
}
