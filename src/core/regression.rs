use serde::{Deserialize, Serialize};

use crate::core::summary::compensated_sum;
use crate::core::tolerance::FormattingConfig;
use crate::core::types::DataPoint;
use crate::error::{PlotError, PlotResult};

/// Least-squares line `y = intercept + slope * x`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
    /// Pearson correlation; `None` when every `y` is equal.
    pub correlation: Option<f64>,
    pub count: usize,
}

impl LinearFit {
    pub fn fit(points: &[DataPoint], config: FormattingConfig) -> PlotResult<Self> {
        if points.len() < 2 {
            return Err(PlotError::InvalidArgument(
                "regression needs at least two points".to_owned(),
            ));
        }
        if let Some(index) = points.iter().position(|point| !point.is_finite()) {
            return Err(PlotError::InvalidArgument(format!(
                "regression point at index {index} is not finite"
            )));
        }

        let count = points.len();
        let n = count as f64;
        let xs: Vec<f64> = points.iter().map(|point| point.x).collect();
        let ys: Vec<f64> = points.iter().map(|point| point.y).collect();
        let mean_x = compensated_sum(&xs) / n;
        let mean_y = compensated_sum(&ys) / n;

        let mut sxx = 0.0;
        let mut syy = 0.0;
        let mut sxy = 0.0;
        for point in points {
            let dx = point.x - mean_x;
            let dy = point.y - mean_y;
            sxx += dx * dx;
            syy += dy * dy;
            sxy += dx * dy;
        }

        if config.is_zero(sxx) {
            return Err(PlotError::InvalidArgument(
                "regression needs at least two distinct x values".to_owned(),
            ));
        }

        let slope = sxy / sxx;
        let correlation = (!config.is_zero(syy)).then(|| sxy / (sxx * syy).sqrt());

        Ok(Self {
            slope,
            intercept: mean_y - slope * mean_x,
            correlation,
            count,
        })
    }

    #[must_use]
    pub fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }

    #[must_use]
    pub fn r_squared(&self) -> Option<f64> {
        self.correlation.map(|r| r * r)
    }
}
