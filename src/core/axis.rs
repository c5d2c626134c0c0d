use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use crate::core::scale::LinearScale;
use crate::core::tolerance::{FormattingConfig, MAX_TOLERANCE_PLACES, round_within_tolerance};
use crate::error::{PlotError, PlotResult};

/// Smallest accepted `tick_increment / axis_range`.
pub const AXIS_MAJOR_TICK_MIN_PROP: f64 = 0.08;
/// Largest accepted `tick_increment / axis_range`.
pub const AXIS_MAJOR_TICK_MAX_PROP: f64 = 0.25;
/// Major ticks sparser than this proportion get minor subdivisions.
pub const MINOR_TICK_TOLERANCE_PROP: f64 = 0.12;
/// Minor subdivisions per major interval on dot plots.
pub const DOT_PLOT_MINOR_TICKS: u32 = 10;
/// Minor subdivisions per major interval on scatter plots.
pub const NUM_MINOR_TICKS: u32 = 5;

/// Extra decimals kept beyond the tick exponent when snapping derived
/// positions (bin boundaries can be up to ~25x finer than a major tick).
const SNAP_EXTRA_PLACES: u32 = 3;

/// Which renderer the axis is laid out for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum AxisKind {
    #[default]
    DotPlot,
    ScatterPlot,
}

impl AxisKind {
    #[must_use]
    pub fn minor_subdivisions(self) -> u32 {
        match self {
            Self::DotPlot => DOT_PLOT_MINOR_TICKS,
            Self::ScatterPlot => NUM_MINOR_TICKS,
        }
    }
}

/// Tick layout for one numeric axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisParameters {
    pub kind: AxisKind,
    pub axis_min: f64,
    pub axis_max: f64,
    pub first_tick: f64,
    pub tick_increment: f64,
    /// `tick_increment == tick_multiplier * 10^tick_exponent`.
    pub tick_multiplier: u32,
    pub tick_exponent: i32,
    pub minor_subdivisions: Option<u32>,
    /// `true` when a zero-width range was widened to a unit range.
    pub degenerate: bool,
    snap_places: u32,
}

/// One tick mark produced by [`AxisParameters::ticks`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTick {
    pub value: f64,
    pub major: bool,
    pub label: Option<String>,
}

/// Computes a human-legible tick layout for `[range_min, range_max]`.
///
/// The increment is `multiplier * 10^p` with the smallest multiplier that
/// keeps ticks at least [`AXIS_MAJOR_TICK_MIN_PROP`] of the range apart.
/// A range that is zero within tolerance is replaced by a unit range centered
/// on the single value.
pub fn calculate_axis_parameters(
    range_min: f64,
    range_max: f64,
    kind: AxisKind,
    config: FormattingConfig,
) -> PlotResult<AxisParameters> {
    if !range_min.is_finite() || !range_max.is_finite() {
        return Err(PlotError::InvalidArgument(
            "axis range bounds must be finite".to_owned(),
        ));
    }
    if range_min > range_max {
        return Err(PlotError::InvalidArgument(format!(
            "axis range minimum {range_min} exceeds maximum {range_max}"
        )));
    }

    let degenerate = config.is_zero(range_max - range_min);
    let (axis_min, axis_max) = if degenerate {
        let center = range_min + (range_max - range_min) / 2.0;
        debug!(center, "degenerate axis range, substituting unit range");
        (center - 0.5, center + 0.5)
    } else {
        (range_min, range_max)
    };

    let axis_range = axis_max - axis_min;
    if !axis_range.is_finite() {
        return Err(PlotError::InvalidArgument(
            "axis range span overflows f64".to_owned(),
        ));
    }

    let mut exponent = decade_exponent(axis_range);
    while power_of_ten(exponent) / axis_range > AXIS_MAJOR_TICK_MAX_PROP {
        exponent -= 1;
    }

    let base = power_of_ten(exponent);
    let mut multiplier: u32 = 1;
    while f64::from(multiplier) * base / axis_range < AXIS_MAJOR_TICK_MIN_PROP {
        multiplier += 1;
    }
    let tick_increment = scaled_power_of_ten(f64::from(multiplier), exponent);

    let exponent_places = u32::try_from(-exponent).unwrap_or(0);
    let snap_places = config
        .tolerance_places
        .max(exponent_places + SNAP_EXTRA_PLACES)
        .min(MAX_TOLERANCE_PLACES);

    // Round the ratio first so 0.3 / 0.1 lands on 3, not 2.9999999999999996.
    let ratio = round_within_tolerance(axis_min / tick_increment, config.tolerance_places);
    let steps = if axis_min < 0.0 {
        ratio.ceil()
    } else {
        ratio.floor()
    };
    let first_tick = round_within_tolerance(
        scaled_power_of_ten(steps * f64::from(multiplier), exponent),
        snap_places,
    );

    let minor_subdivisions = (tick_increment / axis_range > MINOR_TICK_TOLERANCE_PROP)
        .then(|| kind.minor_subdivisions());

    debug!(
        ?kind,
        axis_min,
        axis_max,
        first_tick,
        tick_increment,
        ?minor_subdivisions,
        "calculated axis parameters"
    );

    Ok(AxisParameters {
        kind,
        axis_min,
        axis_max,
        first_tick,
        tick_increment,
        tick_multiplier: multiplier,
        tick_exponent: exponent,
        minor_subdivisions,
        degenerate,
        snap_places,
    })
}

impl AxisParameters {
    #[must_use]
    pub fn axis_range(&self) -> f64 {
        self.axis_max - self.axis_min
    }

    #[must_use]
    pub fn has_minor_ticks(&self) -> bool {
        self.minor_subdivisions.is_some()
    }

    /// Spacing used when walking the axis: the minor step when minor ticks are
    /// drawn, the major increment otherwise.
    #[must_use]
    pub fn iteration_increment(&self) -> f64 {
        self.tick_increment / f64::from(self.minor_subdivisions.unwrap_or(1))
    }

    /// Rounds a derived axis position to the decimals this axis resolves.
    #[must_use]
    pub fn snap(&self, value: f64) -> f64 {
        round_within_tolerance(value, self.snap_places)
    }

    /// Decimal places at which derived positions on this axis are resolved.
    #[must_use]
    pub fn resolution_places(&self) -> u32 {
        self.snap_places
    }

    /// Smallest step distinguishable at [`Self::resolution_places`].
    #[must_use]
    pub fn resolution(&self) -> f64 {
        power_of_ten(-(self.resolution_places() as i32))
    }

    /// `config` tightened to compare derived positions at the axis resolution.
    #[must_use]
    pub fn position_config(&self, config: FormattingConfig) -> FormattingConfig {
        config.with_tolerance_places(self.resolution_places().max(config.tolerance_places))
    }

    pub fn scale(&self) -> PlotResult<LinearScale> {
        LinearScale::new(self.axis_min, self.axis_max)
    }

    /// Offsets of the tick marks inside one major interval, starting at `0`.
    #[must_use]
    pub fn interval_offsets(&self) -> SmallVec<[f64; 10]> {
        let subdivisions = self.minor_subdivisions.unwrap_or(1);
        (0..subdivisions)
            .map(|index| self.tick_increment * f64::from(index) / f64::from(subdivisions))
            .collect()
    }

    /// Every tick inside `[axis_min, axis_max]`, majors labeled.
    #[must_use]
    pub fn ticks(&self, config: FormattingConfig) -> Vec<AxisTick> {
        let offsets = self.interval_offsets();
        let mut ticks = Vec::new();
        let mut major_index = 0_u32;
        loop {
            let major = self.first_tick
                + scaled_power_of_ten(
                    f64::from(major_index) * f64::from(self.tick_multiplier),
                    self.tick_exponent,
                );
            for (offset_index, offset) in offsets.iter().enumerate() {
                let value = self.snap(major + offset);
                if config.compare(value, self.axis_max).is_gt() {
                    return ticks;
                }
                if config.compare(value, self.axis_min).is_lt() {
                    continue;
                }
                let is_major = offset_index == 0;
                // Near the f64 precision limit neighboring ticks can collapse.
                if let Some(last) = ticks.last_mut().filter(|last| value <= last.value) {
                    if is_major && !last.major {
                        last.major = true;
                        last.label = Some(self.format_label(last.value, config));
                    }
                    continue;
                }
                ticks.push(AxisTick {
                    value,
                    major: is_major,
                    label: is_major.then(|| self.format_label(value, config)),
                });
            }
            major_index += 1;
        }
    }

    /// Formats a tick value using decimal arithmetic so binary noise such as
    /// `0.30000000000000004` never reaches a label.
    #[must_use]
    pub fn format_label(&self, value: f64, config: FormattingConfig) -> String {
        let value = if value == 0.0 { 0.0 } else { value };
        let Some(decimal) = Decimal::from_f64_retain(value) else {
            return format!("{value}");
        };

        match config.label_precision {
            Some(precision) => {
                let rounded =
                    decimal.round_dp_with_strategy(precision, RoundingStrategy::MidpointAwayFromZero);
                format!("{rounded:.prec$}", prec = precision as usize)
            }
            None => {
                let places = u32::try_from(-self.tick_exponent).unwrap_or(0);
                decimal
                    .round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero)
                    .normalize()
                    .to_string()
            }
        }
    }
}

/// `p` such that `10^p <= value < 10^(p+1)` for finite `value > 0`.
fn decade_exponent(value: f64) -> i32 {
    let mut exponent = value.log10().floor() as i32;
    if power_of_ten(exponent) > value {
        exponent -= 1;
    } else if power_of_ten(exponent + 1) <= value {
        exponent += 1;
    }
    exponent
}

fn power_of_ten(exponent: i32) -> f64 {
    scaled_power_of_ten(1.0, exponent)
}

/// `factor * 10^exponent`, dividing for negative exponents so decimal steps
/// such as `0.3` come out correctly rounded.
fn scaled_power_of_ten(factor: f64, exponent: i32) -> f64 {
    if exponent >= 0 {
        factor * 10_f64.powi(exponent)
    } else {
        factor / 10_f64.powi(-exponent)
    }
}
