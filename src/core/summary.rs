//! Descriptive statistics shown next to dot plots.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::select::{DataRange, median};
use crate::error::{PlotError, PlotResult};

/// One-pass descriptive summary of a quantitative sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryStatistics {
    pub count: usize,
    pub mean: f64,
    /// Sample (n − 1) standard deviation; `None` for a single observation.
    pub std_dev: Option<f64>,
    pub min: f64,
    pub median: f64,
    pub max: f64,
}

impl SummaryStatistics {
    pub fn from_values<R: Rng + ?Sized>(values: &[f64], rng: &mut R) -> PlotResult<Self> {
        if values.is_empty() {
            return Err(PlotError::InvalidArgument(
                "summary requires a non-empty sample".to_owned(),
            ));
        }
        if values.iter().any(|value| !value.is_finite()) {
            return Err(PlotError::InvalidArgument(
                "summary values must be finite".to_owned(),
            ));
        }

        let range = DataRange::from_values(values, rng)?;
        let median = median(values, rng)?;

        let mut count = 0_usize;
        let mut running_mean = 0.0_f64;
        let mut m2 = 0.0_f64;
        for value in values {
            count += 1;
            let delta = value - running_mean;
            running_mean += delta / count as f64;
            m2 += delta * (value - running_mean);
        }

        let std_dev = (count > 1).then(|| (m2 / (count - 1) as f64).sqrt());

        Ok(Self {
            count,
            mean: compensated_sum(values) / count as f64,
            std_dev,
            min: range.min,
            median,
            max: range.max,
        })
    }

    #[must_use]
    pub fn range(&self) -> f64 {
        self.max - self.min
    }
}

/// Neumaier-compensated sum.
pub(crate) fn compensated_sum(values: &[f64]) -> f64 {
    let mut sum = 0.0_f64;
    let mut compensation = 0.0_f64;
    for &value in values {
        let next = sum + value;
        if sum.abs() >= value.abs() {
            compensation += (sum - next) + value;
        } else {
            compensation += (value - next) + sum;
        }
        sum = next;
    }
    sum + compensation
}
