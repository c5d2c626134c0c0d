use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, warn};

use crate::core::{
    DataPoint, DotPlotLayout, FormattingConfig, Sample, ScatterLayout, SummaryStatistics,
};
use crate::error::{PlotError, PlotResult};
use crate::render::Renderer;

use super::PlotEngineConfig;
use super::frame_builder::{build_dot_plot_frame, build_scatter_frame};

/// Orchestration facade consumed by host applications.
///
/// `PlotEngine` owns the current sample and point set, the display
/// preferences and the random source used for order statistics. Every layout
/// call runs to completion synchronously.
pub struct PlotEngine<R: Renderer> {
    renderer: R,
    config: PlotEngineConfig,
    rng: StdRng,
    sample: Option<Sample>,
    points: Vec<DataPoint>,
}

impl<R: Renderer> PlotEngine<R> {
    pub fn new(renderer: R, config: PlotEngineConfig) -> PlotResult<Self> {
        Self::with_rng(renderer, config, StdRng::from_os_rng())
    }

    /// Builds an engine whose selections are reproducible.
    pub fn with_seed(renderer: R, config: PlotEngineConfig, seed: u64) -> PlotResult<Self> {
        Self::with_rng(renderer, config, StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(renderer: R, config: PlotEngineConfig, rng: StdRng) -> PlotResult<Self> {
        let config = config.validate()?;
        Ok(Self {
            renderer,
            config,
            rng,
            sample: None,
            points: Vec::new(),
        })
    }

    #[must_use]
    pub fn config(&self) -> PlotEngineConfig {
        self.config
    }

    #[must_use]
    pub fn formatting(&self) -> FormattingConfig {
        self.config.formatting
    }

    pub fn set_config(&mut self, config: PlotEngineConfig) -> PlotResult<()> {
        self.config = config.validate()?;
        Ok(())
    }

    pub fn set_formatting(&mut self, formatting: FormattingConfig) -> PlotResult<()> {
        self.config.formatting = formatting.validate()?;
        Ok(())
    }

    /// Replaces the quantitative sample. Rejected input leaves the previous
    /// sample in place.
    pub fn set_sample(&mut self, values: Vec<f64>) -> PlotResult<()> {
        match Sample::new(values) {
            Ok(sample) => {
                debug!(count = sample.len(), "set sample");
                self.sample = Some(sample);
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "rejected sample");
                Err(err)
            }
        }
    }

    pub fn set_points(&mut self, points: Vec<DataPoint>) -> PlotResult<()> {
        if let Some(index) = points.iter().position(|point| !point.is_finite()) {
            warn!(index, "rejected non-finite scatter point");
            return Err(PlotError::InvalidArgument(format!(
                "scatter point at index {index} is not finite"
            )));
        }
        debug!(count = points.len(), "set scatter points");
        self.points = points;
        Ok(())
    }

    /// Drops the sample and points, as a page reset would.
    pub fn clear(&mut self) {
        self.sample = None;
        self.points.clear();
    }

    #[must_use]
    pub fn sample(&self) -> Option<&Sample> {
        self.sample.as_ref()
    }

    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    pub fn dot_plot_layout(&self) -> PlotResult<DotPlotLayout> {
        let sample = self.require_sample()?;
        DotPlotLayout::compute(
            sample,
            self.config.plot_area()?,
            self.config.dot_plot,
            self.config.formatting,
        )
    }

    pub fn scatter_layout(&mut self) -> PlotResult<ScatterLayout> {
        ScatterLayout::compute(
            &self.points,
            self.config.show_regression_line,
            self.config.formatting,
            &mut self.rng,
        )
    }

    pub fn summary(&mut self) -> PlotResult<SummaryStatistics> {
        let values = self.require_sample()?.values().to_vec();
        SummaryStatistics::from_values(&values, &mut self.rng)
    }

    pub fn render_dot_plot(&mut self) -> PlotResult<()> {
        let layout = self.dot_plot_layout()?;
        let frame = build_dot_plot_frame(&layout, self.config)?;
        self.renderer.render(&frame)
    }

    pub fn render_scatter_plot(&mut self) -> PlotResult<()> {
        let layout = self.scatter_layout()?;
        let frame = build_scatter_frame(&layout, self.config)?;
        self.renderer.render(&frame)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    fn require_sample(&self) -> PlotResult<&Sample> {
        self.sample
            .as_ref()
            .ok_or_else(|| PlotError::InvalidArgument("no sample has been set".to_owned()))
    }
}
