//! Diverging color scale for heatmap cells.
//!
//! Values are saturated to a symmetric range `[-clip, +clip]` and binned into
//! a fixed palette. NaN never lands in a bucket; it gets the sentinel color.

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;

/// Symmetric bound beyond which values saturate.
pub const CLIP: f64 = 3.0;

/// RGB color with u8 components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB color.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert to CSS hex string (#RRGGBB).
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self::new(0, 0, 0)
    }
}

/// Fixed palette and sentinel colors.
pub mod palette {
    use super::Rgb;

    /// Black → red → orange → yellow → white, 17 stops.
    pub const DIVERGING_17: [Rgb; 17] = [
        Rgb::new(0, 0, 0),
        Rgb::new(32, 0, 0),
        Rgb::new(64, 0, 0),
        Rgb::new(96, 0, 0),
        Rgb::new(128, 0, 0),
        Rgb::new(159, 32, 0),
        Rgb::new(191, 64, 0),
        Rgb::new(223, 96, 0),
        Rgb::new(255, 128, 0),
        Rgb::new(255, 159, 32),
        Rgb::new(255, 191, 64),
        Rgb::new(255, 223, 96),
        Rgb::new(255, 255, 128),
        Rgb::new(255, 255, 159),
        Rgb::new(255, 255, 191),
        Rgb::new(255, 255, 223),
        Rgb::new(255, 255, 255),
    ];

    /// Missing values (CSS "grey").
    pub const MISSING: Rgb = Rgb::new(128, 128, 128);

    /// Label text.
    pub const TEXT: Rgb = Rgb::new(0, 0, 0);
}

/// A palette spread over `[-clip, +clip]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScale {
    colors: Vec<Rgb>,
    clip: f64,
    missing: Rgb,
}

impl Default for ColorScale {
    fn default() -> Self {
        Self {
            colors: palette::DIVERGING_17.to_vec(),
            clip: CLIP,
            missing: palette::MISSING,
        }
    }
}

impl ColorScale {
    /// Build a scale from a custom palette.
    ///
    /// # Errors
    /// Fails when the palette is empty or `clip` is not a positive finite number.
    pub fn new(colors: Vec<Rgb>, clip: f64, missing: Rgb) -> Result<Self, LayoutError> {
        if colors.is_empty() {
            return Err(LayoutError::InvalidOptions(
                "color palette must not be empty".to_string(),
            ));
        }
        if !clip.is_finite() || clip <= 0.0 {
            return Err(LayoutError::InvalidOptions(format!(
                "clip must be positive, got {clip}"
            )));
        }
        Ok(Self {
            colors,
            clip,
            missing,
        })
    }

    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    pub fn clip(&self) -> f64 {
        self.clip
    }

    pub fn missing(&self) -> Rgb {
        self.missing
    }

    /// Width of one palette bucket in value units.
    pub fn bin_size(&self) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let len = self.colors.len() as f64;
        (2.0 * self.clip) / len
    }

    /// Saturate a value to `[-clip, +clip]`. NaN passes through.
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return value;
        }
        value.clamp(-self.clip, self.clip)
    }

    /// Palette bucket for a value, or `None` for NaN.
    // (v + clip) / bin_size lies in [0, len] after clamping, so the cast
    // cannot truncate or lose a sign.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn bucket(&self, value: f64) -> Option<usize> {
        if value.is_nan() {
            return None;
        }
        let v = self.clamp(value);
        let raw = ((v + self.clip) / self.bin_size()).floor().max(0.0) as usize;
        Some(raw.min(self.colors.len().saturating_sub(1)))
    }

    /// Color for a bucket; `None` maps to the missing-value color.
    pub fn color_for_bucket(&self, bucket: Option<usize>) -> Rgb {
        bucket
            .and_then(|b| self.colors.get(b).copied())
            .unwrap_or(self.missing)
    }

    /// Color for a raw value.
    pub fn color(&self, value: f64) -> Rgb {
        self.color_for_bucket(self.bucket(value))
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bin_size() {
        let scale = ColorScale::default();
        assert!((scale.bin_size() - 6.0 / 17.0).abs() < 1e-12);
    }

    #[test]
    fn test_extremes_hit_first_and_last_bucket() {
        let scale = ColorScale::default();
        assert_eq!(scale.bucket(-3.0), Some(0));
        assert_eq!(scale.bucket(3.0), Some(16));
        assert_eq!(scale.bucket(-5.0), Some(0));
        assert_eq!(scale.bucket(f64::INFINITY), Some(16));
    }

    #[test]
    fn test_nan_has_no_bucket() {
        let scale = ColorScale::default();
        assert_eq!(scale.bucket(f64::NAN), None);
        assert_eq!(scale.color(f64::NAN), palette::MISSING);
    }

    #[test]
    fn test_rejects_empty_palette() {
        assert!(ColorScale::new(vec![], 1.0, palette::MISSING).is_err());
    }

    #[test]
    fn test_css_hex() {
        assert_eq!(Rgb::new(255, 128, 0).to_hex(), "#FF8000");
        assert_eq!(palette::MISSING.to_hex(), "#808080");
    }
}
