pub mod axis;
pub mod dotplot;
pub mod regression;
pub mod scale;
pub mod scatter;
pub mod select;
pub mod summary;
pub mod tolerance;
pub mod types;

pub use axis::{AxisKind, AxisParameters, AxisTick, calculate_axis_parameters};
pub use dotplot::{BinningMode, DotMark, DotPlacement, DotPlotLayout, DotPlotOptions};
pub use regression::LinearFit;
pub use scale::LinearScale;
pub use scatter::{ScatterLayout, ScatterMark};
pub use select::{DataRange, maximum, median, minimum, random_select, random_select_in_place};
pub use summary::SummaryStatistics;
pub use tolerance::{
    FormattingConfig, compare_to_within_tolerance, is_zero_within_tolerance,
    round_within_tolerance,
};
pub use types::{DataPoint, Sample, Viewport};
