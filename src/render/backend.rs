//! Render backend trait for pluggable drawing surfaces.
//!
//! This module defines the `RenderBackend` trait that abstracts the few
//! primitives a heatmap needs, so the same plan can be painted on a Canvas 2D
//! element in the browser or recorded for inspection.

use crate::color_scale::Rgb;
use crate::error::Result;

/// How a piece of text is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub font_size: f64,
    pub color: Rgb,
    /// Rotation in radians around the text origin.
    pub rotation: f64,
    pub baseline: TextBaseline,
}

impl TextStyle {
    pub fn new(font_size: f64, color: Rgb) -> Self {
        Self {
            font_size,
            color,
            rotation: 0.0,
            baseline: TextBaseline::Alphabetic,
        }
    }

    #[must_use]
    pub fn rotated(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }

    #[must_use]
    pub fn with_baseline(mut self, baseline: TextBaseline) -> Self {
        self.baseline = baseline;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextBaseline {
    Top,
    Alphabetic,
}

impl TextBaseline {
    /// CSS/Canvas keyword.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Alphabetic => "alphabetic",
        }
    }
}

/// Trait for render backends
///
/// Implementations handle the actual drawing operations for different
/// surfaces. Every primitive may fail; the painter decides whether a failure
/// skips one element or aborts the paint.
pub trait RenderBackend {
    /// Resize the drawing surface (logical pixels).
    fn resize(&mut self, width: u32, height: u32) -> Result<()>;

    /// Discard everything painted so far.
    fn clear(&mut self) -> Result<()>;

    /// Fill an axis-aligned rectangle.
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Rgb) -> Result<()>;

    /// Draw a single line of text with its origin at `(x, y)`.
    fn fill_text(&mut self, text: &str, x: f64, y: f64, style: &TextStyle) -> Result<()>;

    /// Get the current width
    fn width(&self) -> u32;

    /// Get the current height
    fn height(&self) -> u32;
}
