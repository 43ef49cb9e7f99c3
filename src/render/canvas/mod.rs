//! Canvas 2D rendering backend.
//!
//! This module paints plans through the HTML Canvas 2D API via web-sys.
//! A heatmap is only rectangles and short text runs, which the 2D context
//! handles directly.

mod renderer;

pub use renderer::CanvasRenderer;
