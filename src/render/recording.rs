//! A backend that records draw operations instead of drawing them.
//!
//! Used by the CLI to summarize what a plan would paint, and by tests to
//! inspect the painter and to inject surface failures.

use crate::color_scale::Rgb;
use crate::error::{HeatviewError, Result};
use crate::render::backend::{RenderBackend, TextStyle};

/// One recorded primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Resize {
        width: u32,
        height: u32,
    },
    Clear,
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: Rgb,
    },
    Text {
        text: String,
        x: f64,
        y: f64,
        style: TextStyle,
    },
}

/// In-memory surface.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    ops: Vec<DrawOp>,
    width: u32,
    height: u32,
    reject_color: Option<Rgb>,
    reject_text: bool,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every `fill_rect` in `color` fail.
    #[must_use]
    pub fn rejecting_color(mut self, color: Rgb) -> Self {
        self.reject_color = Some(color);
        self
    }

    /// Make every `fill_text` fail.
    #[must_use]
    pub fn rejecting_text(mut self) -> Self {
        self.reject_text = true;
        self
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn rects(&self) -> impl Iterator<Item = &DrawOp> {
        self.ops.iter().filter(|op| matches!(op, DrawOp::Rect { .. }))
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl RenderBackend for RecordingBackend {
    fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        self.width = width;
        self.height = height;
        self.ops.push(DrawOp::Resize { width, height });
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.ops
            .retain(|op| matches!(op, DrawOp::Resize { .. } | DrawOp::Clear));
        self.ops.push(DrawOp::Clear);
        Ok(())
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Rgb) -> Result<()> {
        if self.reject_color == Some(color) {
            return Err(HeatviewError::Render(format!(
                "surface rejected {}",
                color.to_hex()
            )));
        }
        self.ops.push(DrawOp::Rect {
            x,
            y,
            width,
            height,
            color,
        });
        Ok(())
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64, style: &TextStyle) -> Result<()> {
        if self.reject_text {
            return Err(HeatviewError::Render("surface rejected text".to_string()));
        }
        self.ops.push(DrawOp::Text {
            text: text.to_string(),
            x,
            y,
            style: *style,
        });
        Ok(())
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }
}
