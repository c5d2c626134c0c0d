//! statplot-rs: layout core for statistics teaching plots.
//!
//! The crate turns raw samples into dot-plot and scatter-plot layouts: nice
//! axis ticks, non-overlapping dot bins and stacks, order statistics by
//! randomized selection, and a backend-agnostic frame for drawing.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{PlotEngine, PlotEngineConfig};
pub use error::{PlotError, PlotResult};
