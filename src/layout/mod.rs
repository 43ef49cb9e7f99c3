//! Layout engine for heatmaps.
//!
//! This module handles:
//! - Reserving room for row and column labels
//! - Sizing row bands and columns to the container
//! - Downsampling columns that would be narrower than a pixel
//! - Emitting the colored cell grid as a [`RenderPlan`](crate::types::RenderPlan)

pub mod downsample;
pub mod geometry;
mod heatmap_layout;
pub mod labels;

pub use downsample::{downsample, SampledValue};
pub use geometry::ColumnFit;
pub use heatmap_layout::{render, LayoutEngine};
