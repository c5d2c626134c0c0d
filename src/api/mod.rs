mod engine;
mod engine_config;
mod frame_builder;
mod snapshot;

pub use engine::PlotEngine;
pub use engine_config::{PlotEngineConfig, PlotStyle};
pub use snapshot::PlotSnapshot;
