use proptest::prelude::*;
use statplot_rs::core::axis::{AXIS_MAJOR_TICK_MAX_PROP, AXIS_MAJOR_TICK_MIN_PROP};
use statplot_rs::core::{AxisKind, FormattingConfig, calculate_axis_parameters};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn tick_increment_stays_within_proportion_bounds(
        range_min in -1e4f64..1e4,
        span in 1e-3f64..1e5,
        scatter in any::<bool>()
    ) {
        let kind = if scatter { AxisKind::ScatterPlot } else { AxisKind::DotPlot };
        let axis = calculate_axis_parameters(
            range_min,
            range_min + span,
            kind,
            FormattingConfig::default(),
        )
        .expect("axis");

        let ratio = axis.tick_increment / axis.axis_range();
        prop_assert!(ratio >= AXIS_MAJOR_TICK_MIN_PROP - 1e-9, "ratio {ratio}");
        prop_assert!(ratio <= AXIS_MAJOR_TICK_MAX_PROP + 1e-9, "ratio {ratio}");
        prop_assert!(axis.tick_multiplier >= 1);
    }

    #[test]
    fn first_tick_is_adjacent_multiple_of_increment(
        range_min in -1e4f64..1e4,
        span in 1e-2f64..1e5
    ) {
        let axis = calculate_axis_parameters(
            range_min,
            range_min + span,
            AxisKind::DotPlot,
            FormattingConfig::default(),
        )
        .expect("axis");

        let steps = axis.first_tick / axis.tick_increment;
        prop_assert!((steps - steps.round()).abs() <= 1e-6, "steps {steps}");
        prop_assert!(
            (axis.first_tick - axis.axis_min).abs() <= axis.tick_increment * (1.0 + 1e-6)
        );
        if axis.axis_min < 0.0 {
            prop_assert!(axis.first_tick >= axis.axis_min - axis.tick_increment * 1e-6);
        } else {
            prop_assert!(axis.first_tick <= axis.axis_min + axis.tick_increment * 1e-6);
        }
    }

    #[test]
    fn ticks_are_increasing_and_inside_axis(
        range_min in -1e3f64..1e3,
        span in 1e-2f64..1e4
    ) {
        let config = FormattingConfig::default();
        let axis = calculate_axis_parameters(range_min, range_min + span, AxisKind::DotPlot, config)
            .expect("axis");
        let ticks = axis.ticks(config);

        prop_assert!(!ticks.is_empty());
        prop_assert!(ticks.iter().any(|tick| tick.major));
        for pair in ticks.windows(2) {
            prop_assert!(pair[0].value < pair[1].value);
        }
        for tick in &ticks {
            prop_assert!(config.compare(tick.value, axis.axis_min).is_ge());
            prop_assert!(config.compare(tick.value, axis.axis_max).is_le());
            prop_assert_eq!(tick.major, tick.label.is_some());
        }
    }
}
