use indexmap::IndexMap;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::axis::{AxisKind, AxisParameters, calculate_axis_parameters};
use crate::core::tolerance::FormattingConfig;
use crate::core::types::{Sample, Viewport};
use crate::error::{PlotError, PlotResult};

/// Default on-screen dot diameter in pixels.
pub const DOT_SIZE_PX: f64 = 8.0;

/// Whether values are snapped to bin boundaries before stacking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum BinningMode {
    #[default]
    Binned,
    /// Stack only tolerance-equal raw values.
    Exact,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DotPlotOptions {
    #[serde(default = "default_dot_diameter_px")]
    pub dot_diameter_px: f64,
    #[serde(default)]
    pub binning: BinningMode,
}

impl Default for DotPlotOptions {
    fn default() -> Self {
        Self {
            dot_diameter_px: DOT_SIZE_PX,
            binning: BinningMode::Binned,
        }
    }
}

impl DotPlotOptions {
    pub fn validate(self) -> PlotResult<Self> {
        if !self.dot_diameter_px.is_finite() || self.dot_diameter_px <= 0.0 {
            return Err(PlotError::InvalidArgument(
                "dot diameter must be finite and > 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

fn default_dot_diameter_px() -> f64 {
    DOT_SIZE_PX
}

/// Plotted position and stack slot of one observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DotPlacement {
    pub value: f64,
    pub position: f64,
    /// 1-based height within the stack at `position`.
    pub stack_index: u32,
}

/// Dot center in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DotMark {
    pub x_px: f64,
    pub y_px: f64,
    pub radius_px: f64,
}

/// Complete dot-plot layout for one sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DotPlotLayout {
    pub axis: AxisParameters,
    pub bin_increment: Option<f64>,
    pub first_bin_boundary: Option<f64>,
    pub dots: Vec<DotPlacement>,
    pub max_stack_index: u32,
    pub dot_diameter_px: f64,
    /// Vertical distance between stacked dot centers.
    pub dot_spacing_px: f64,
}

impl DotPlotLayout {
    pub fn compute(
        sample: &Sample,
        viewport: Viewport,
        options: DotPlotOptions,
        config: FormattingConfig,
    ) -> PlotResult<Self> {
        let viewport = viewport.ensure_valid()?;
        let options = options.validate()?;
        let axis =
            calculate_axis_parameters(sample.min(), sample.max(), AxisKind::DotPlot, config)?;

        let (positions, bin_increment, first_bin_boundary) = match options.binning {
            BinningMode::Exact => (sample.values().to_vec(), None, None),
            BinningMode::Binned => {
                let increment =
                    bin_increment(&axis, f64::from(viewport.width), options.dot_diameter_px)?;
                let first = first_bin_boundary(&axis, increment, config);
                let positions = assign_bins(sample.values(), &axis, increment, config);
                (positions, Some(increment), Some(first))
            }
        };

        let stack_config = match options.binning {
            BinningMode::Exact => config,
            BinningMode::Binned => axis.position_config(config),
        };
        let (indices, max_stack_index) = stack_indices(&positions, stack_config);
        let dots = sample
            .values()
            .iter()
            .zip(positions)
            .zip(indices)
            .map(|((value, position), stack_index)| DotPlacement {
                value: *value,
                position,
                stack_index,
            })
            .collect();

        let dot_spacing_px = options
            .dot_diameter_px
            .min(f64::from(viewport.height) / f64::from(max_stack_index));

        Ok(Self {
            axis,
            bin_increment,
            first_bin_boundary,
            dots,
            max_stack_index,
            dot_diameter_px: options.dot_diameter_px,
            dot_spacing_px,
        })
    }

    #[must_use]
    pub fn positions(&self) -> Vec<f64> {
        self.dots.iter().map(|dot| dot.position).collect()
    }

    #[must_use]
    pub fn stack_indices(&self) -> Vec<u32> {
        self.dots.iter().map(|dot| dot.stack_index).collect()
    }

    /// Height of every stack, keyed by plotted position in ascending order.
    #[must_use]
    pub fn stack_heights(&self) -> IndexMap<OrderedFloat<f64>, u32> {
        let mut heights = IndexMap::new();
        for dot in &self.dots {
            let height = heights.entry(OrderedFloat(dot.position)).or_insert(0);
            *height = (*height).max(dot.stack_index);
        }
        heights
    }

    /// Maps every dot to its pixel center; stacks grow up from the bottom edge.
    pub fn project(&self, viewport: Viewport) -> PlotResult<Vec<DotMark>> {
        let viewport = viewport.ensure_valid()?;
        let scale = self.axis.scale()?;
        let width = f64::from(viewport.width);
        let height = f64::from(viewport.height);
        let radius_px = self.dot_spacing_px.min(self.dot_diameter_px) / 2.0;

        self.dots
            .iter()
            .map(|dot| {
                Ok(DotMark {
                    x_px: scale.domain_to_pixel(dot.position, width)?,
                    y_px: height - (f64::from(dot.stack_index) - 0.5) * self.dot_spacing_px,
                    radius_px,
                })
            })
            .collect()
    }
}

/// Distance between bin boundaries so that dots of `dot_diameter_px` never
/// overlap horizontally and are never more than two diameters apart.
pub fn bin_increment(
    axis: &AxisParameters,
    plot_width_px: f64,
    dot_diameter_px: f64,
) -> PlotResult<f64> {
    if !plot_width_px.is_finite() || plot_width_px <= 0.0 {
        return Err(PlotError::InvalidArgument(
            "plot width must be finite and > 0".to_owned(),
        ));
    }
    if !dot_diameter_px.is_finite() || dot_diameter_px <= 0.0 {
        return Err(PlotError::InvalidArgument(
            "dot diameter must be finite and > 0".to_owned(),
        ));
    }

    let min_increment = axis
        .scale()?
        .pixels_to_domain_length(dot_diameter_px, plot_width_px)?;
    let max_increment = 2.0 * min_increment;
    let mut increment = axis.tick_increment / 10.0;

    if increment < min_increment {
        increment = min_increment;
    } else {
        let mut divisor = 1.0;
        while increment / divisor > max_increment {
            divisor += 1.0;
        }
        increment /= divisor;
    }

    let resolution = axis.resolution();
    if increment < resolution {
        increment = resolution;
    }

    trace!(min_increment, max_increment, increment, "dot plot bin increment");
    Ok(increment)
}

/// Smallest bin boundary `first_tick + k * increment` at or above `axis_min`.
#[must_use]
pub fn first_bin_boundary(axis: &AxisParameters, increment: f64, config: FormattingConfig) -> f64 {
    let config = axis.position_config(config);
    let boundary = |step: i64| axis.snap(axis.first_tick + step as f64 * increment);

    let mut step = 0_i64;
    while config.compare(boundary(step), axis.axis_min).is_gt() {
        step -= 1;
    }
    while config.compare(boundary(step), axis.axis_min).is_lt() {
        step += 1;
    }
    boundary(step)
}

/// Maps each sorted value to the first bin boundary at or above it.
///
/// Comparisons run at the axis resolution, which may be finer than
/// `config.tolerance_places`.
#[must_use]
pub fn assign_bins(
    sorted_values: &[f64],
    axis: &AxisParameters,
    increment: f64,
    config: FormattingConfig,
) -> Vec<f64> {
    let start = first_bin_boundary(axis, increment, config);
    let config = axis.position_config(config);
    let boundary = |step: i64| axis.snap(start + step as f64 * increment);

    let mut step = 0_i64;
    let mut current = boundary(step);
    sorted_values
        .iter()
        .map(|value| {
            while config.compare(current, *value).is_lt() {
                step += 1;
                current = boundary(step);
            }
            current
        })
        .collect()
}

/// 1-based stack slot for each position plus the tallest stack.
///
/// Positions must be sorted; the slot resets whenever the position changes
/// within tolerance.
#[must_use]
pub fn stack_indices(sorted_positions: &[f64], config: FormattingConfig) -> (Vec<u32>, u32) {
    let mut indices = Vec::with_capacity(sorted_positions.len());
    let mut max_index = 0;
    let mut current = 0;
    let mut previous: Option<f64> = None;

    for position in sorted_positions {
        current = match previous {
            Some(prev) if config.approx_eq(prev, *position) => current + 1,
            _ => 1,
        };
        max_index = max_index.max(current);
        indices.push(current);
        previous = Some(*position);
    }

    (indices, max_index)
}
