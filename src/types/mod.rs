//! Data types for the heatmap layout engine.

mod options;
mod plan;
mod row;

pub use options::*;
pub use plan::*;
pub use row::*;
