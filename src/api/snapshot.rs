use serde::{Deserialize, Serialize};

use crate::core::{DotPlotLayout, ScatterLayout, SummaryStatistics};
use crate::error::{PlotError, PlotResult};
use crate::render::Renderer;

use super::{PlotEngine, PlotEngineConfig};

/// Deterministic dump of everything the engine computed for its current data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotSnapshot {
    pub config: PlotEngineConfig,
    pub summary: Option<SummaryStatistics>,
    pub dot_plot: Option<DotPlotLayout>,
    pub scatter: Option<ScatterLayout>,
}

impl PlotSnapshot {
    pub fn from_json_str(input: &str) -> PlotResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| PlotError::InvalidData(format!("failed to parse snapshot: {e}")))
    }
}

impl<R: Renderer> PlotEngine<R> {
    /// Builds a snapshot; sections without data are `None`.
    pub fn snapshot(&mut self) -> PlotResult<PlotSnapshot> {
        let (summary, dot_plot) = if self.sample().is_some() {
            (Some(self.summary()?), Some(self.dot_plot_layout()?))
        } else {
            (None, None)
        };
        let scatter = if self.points().is_empty() {
            None
        } else {
            Some(self.scatter_layout()?)
        };

        Ok(PlotSnapshot {
            config: self.config(),
            summary,
            dot_plot,
            scatter,
        })
    }

    /// Serializes the snapshot as pretty JSON for fixture-based regression checks.
    pub fn snapshot_json_pretty(&mut self) -> PlotResult<String> {
        let snapshot = self.snapshot()?;
        serde_json::to_string_pretty(&snapshot)
            .map_err(|e| PlotError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}
