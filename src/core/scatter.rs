use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::axis::{AxisKind, AxisParameters, calculate_axis_parameters};
use crate::core::regression::LinearFit;
use crate::core::select::DataRange;
use crate::core::tolerance::FormattingConfig;
use crate::core::types::{DataPoint, Viewport};
use crate::error::{PlotError, PlotResult};

/// Axes and optional fitted line for a scatter plot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterLayout {
    pub x_axis: AxisParameters,
    pub y_axis: AxisParameters,
    pub points: Vec<DataPoint>,
    pub fit: Option<LinearFit>,
}

/// Point center in pixel space (Y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScatterMark {
    pub x_px: f64,
    pub y_px: f64,
}

impl ScatterLayout {
    /// Lays out both axes from the data ranges found by selection.
    ///
    /// The regression line is attached when `with_fit` is set and the points
    /// admit one; a vertical cloud simply has no fit.
    pub fn compute<R: Rng + ?Sized>(
        points: &[DataPoint],
        with_fit: bool,
        config: FormattingConfig,
        rng: &mut R,
    ) -> PlotResult<Self> {
        if points.is_empty() {
            return Err(PlotError::InvalidArgument(
                "scatter plot requires at least one point".to_owned(),
            ));
        }

        let xs: Vec<f64> = points.iter().map(|point| point.x).collect();
        let ys: Vec<f64> = points.iter().map(|point| point.y).collect();
        let x_range = DataRange::from_values(&xs, rng)?;
        let y_range = DataRange::from_values(&ys, rng)?;

        let x_axis =
            calculate_axis_parameters(x_range.min, x_range.max, AxisKind::ScatterPlot, config)?;
        let y_axis =
            calculate_axis_parameters(y_range.min, y_range.max, AxisKind::ScatterPlot, config)?;

        let fit = if with_fit {
            LinearFit::fit(points, config).ok()
        } else {
            None
        };

        Ok(Self {
            x_axis,
            y_axis,
            points: points.to_vec(),
            fit,
        })
    }

    pub fn project(&self, viewport: Viewport) -> PlotResult<Vec<ScatterMark>> {
        let viewport = viewport.ensure_valid()?;
        let x_scale = self.x_axis.scale()?;
        let y_scale = self.y_axis.scale()?;
        let width = f64::from(viewport.width);
        let height = f64::from(viewport.height);

        self.points
            .iter()
            .map(|point| {
                Ok(ScatterMark {
                    x_px: x_scale.domain_to_pixel(point.x, width)?,
                    y_px: y_scale.domain_to_pixel_inverted(point.y, height)?,
                })
            })
            .collect()
    }
}
