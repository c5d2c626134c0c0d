use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};

/// Decimal places used when no explicit tolerance is configured.
pub const DEFAULT_TOLERANCE_PLACES: u32 = 8;

/// Upper bound for tolerance places; `10^places` stops being exact beyond it.
pub const MAX_TOLERANCE_PLACES: u32 = 15;

/// Numeric formatting preferences threaded through comparison and layout.
///
/// Hosts usually persist these as user preferences and hand them back on
/// every layout call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattingConfig {
    #[serde(default = "default_tolerance_places")]
    pub tolerance_places: u32,
    /// Fixed number of decimals for tick labels; `None` derives it from the
    /// tick increment.
    #[serde(default)]
    pub label_precision: Option<u32>,
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            tolerance_places: DEFAULT_TOLERANCE_PLACES,
            label_precision: None,
        }
    }
}

impl FormattingConfig {
    #[must_use]
    pub fn with_tolerance_places(mut self, places: u32) -> Self {
        self.tolerance_places = places;
        self
    }

    #[must_use]
    pub fn with_label_precision(mut self, precision: Option<u32>) -> Self {
        self.label_precision = precision;
        self
    }

    pub fn validate(self) -> PlotResult<Self> {
        if self.tolerance_places > MAX_TOLERANCE_PLACES {
            return Err(PlotError::InvalidConfig(format!(
                "tolerance places must be <= {MAX_TOLERANCE_PLACES}, got {}",
                self.tolerance_places
            )));
        }
        if let Some(precision) = self.label_precision {
            if precision > MAX_TOLERANCE_PLACES {
                return Err(PlotError::InvalidConfig(format!(
                    "label precision must be <= {MAX_TOLERANCE_PLACES}, got {precision}"
                )));
            }
        }
        Ok(self)
    }

    #[must_use]
    pub fn round(self, value: f64) -> f64 {
        round_within_tolerance(value, self.tolerance_places)
    }

    #[must_use]
    pub fn compare(self, left: f64, right: f64) -> Ordering {
        compare_to_within_tolerance(left, right, self.tolerance_places)
    }

    #[must_use]
    pub fn is_zero(self, value: f64) -> bool {
        is_zero_within_tolerance(value, self.tolerance_places)
    }

    #[must_use]
    pub fn approx_eq(self, left: f64, right: f64) -> bool {
        self.compare(left, right) == Ordering::Equal
    }
}

fn default_tolerance_places() -> u32 {
    DEFAULT_TOLERANCE_PLACES
}

fn pow10(places: u32) -> f64 {
    10_f64.powi(i32::try_from(places).unwrap_or(i32::MAX))
}

/// Magnitude from which every `f64` is already an integer.
const EXACT_INTEGER_BOUND: f64 = 4_503_599_627_370_496.0; // 2^52

/// Rounds `value` to `places` decimal digits, half away from zero.
///
/// Values already integral at that precision, or whose scaled form is not
/// finite, are returned unchanged.
#[must_use]
pub fn round_within_tolerance(value: f64, places: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let factor = pow10(places);
    let scaled = value * factor;
    if !factor.is_finite() || !scaled.is_finite() || scaled.abs() >= EXACT_INTEGER_BOUND {
        return value;
    }
    let rounded = scaled.round() / factor;
    // Keep `-0.0` out of downstream labels and comparisons.
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// Three-way comparison of `left` and `right` after rounding their difference
/// to `places` decimals.
#[must_use]
pub fn compare_to_within_tolerance(left: f64, right: f64, places: u32) -> Ordering {
    let difference = round_within_tolerance(left - right, places);
    if difference > 0.0 {
        Ordering::Greater
    } else if difference < 0.0 {
        Ordering::Less
    } else {
        Ordering::Equal
    }
}

/// Returns `true` iff `|value| < 10^(-places)`.
#[must_use]
pub fn is_zero_within_tolerance(value: f64, places: u32) -> bool {
    value.abs() < 1.0 / pow10(places)
}
