use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};

/// Pixel size of the plotting area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    pub(crate) fn ensure_valid(self) -> PlotResult<Self> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(PlotError::InvalidViewport {
                width: self.width,
                height: self.height,
            })
        }
    }
}

/// One paired observation for scatter plots.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

impl DataPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Non-empty, finite observations kept in ascending order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sample {
    values: Vec<f64>,
}

impl Sample {
    pub fn new(mut values: Vec<f64>) -> PlotResult<Self> {
        if values.is_empty() {
            return Err(PlotError::InvalidArgument(
                "sample must contain at least one value".to_owned(),
            ));
        }
        if let Some(index) = values.iter().position(|value| !value.is_finite()) {
            return Err(PlotError::InvalidArgument(format!(
                "sample value at index {index} is not finite"
            )));
        }

        values.sort_by(f64::total_cmp);
        Ok(Self { values })
    }

    pub fn from_slice(values: &[f64]) -> PlotResult<Self> {
        Self::new(values.to_vec())
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false`; kept for API symmetry with slices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn min(&self) -> f64 {
        self.values[0]
    }

    #[must_use]
    pub fn max(&self) -> f64 {
        self.values[self.values.len() - 1]
    }
}
