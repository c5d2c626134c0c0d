use ordered_float::OrderedFloat;
use statplot_rs::PlotError;
use statplot_rs::core::dotplot::{assign_bins, bin_increment, first_bin_boundary};
use statplot_rs::core::{
    AxisKind, BinningMode, DotPlotLayout, DotPlotOptions, FormattingConfig, Sample, Viewport,
    calculate_axis_parameters,
};

fn layout(values: &[f64], viewport: Viewport, options: DotPlotOptions) -> DotPlotLayout {
    let sample = Sample::from_slice(values).expect("sample");
    DotPlotLayout::compute(&sample, viewport, options, FormattingConfig::default())
        .expect("dot plot layout")
}

#[test]
fn integer_sample_bins_onto_itself_and_stacks_duplicates() {
    let layout = layout(
        &[5.0, 2.0, 4.0, 1.0, 3.0, 2.0, 4.0],
        Viewport::new(800, 400),
        DotPlotOptions::default(),
    );

    assert_eq!(layout.bin_increment, Some(0.05));
    assert_eq!(layout.first_bin_boundary, Some(1.0));
    assert_eq!(layout.positions(), vec![1.0, 2.0, 2.0, 3.0, 4.0, 4.0, 5.0]);
    assert_eq!(layout.stack_indices(), vec![1, 1, 2, 1, 1, 2, 1]);
    assert_eq!(layout.max_stack_index, 2);
    assert_eq!(layout.dot_spacing_px, 8.0);
}

#[test]
fn values_closer_than_a_dot_share_a_bin() {
    let layout = layout(
        &[1.0, 1.01, 1.02, 2.0],
        Viewport::new(200, 100),
        DotPlotOptions::default(),
    );

    let increment = layout.bin_increment.expect("binned");
    assert!((increment - 0.04).abs() <= 1e-12);
    assert_eq!(layout.positions(), vec![1.0, 1.04, 1.04, 2.0]);
    assert_eq!(layout.stack_indices(), vec![1, 1, 2, 1]);
}

#[test]
fn exact_mode_stacks_raw_values() {
    let options = DotPlotOptions {
        binning: BinningMode::Exact,
        ..DotPlotOptions::default()
    };
    let layout = layout(&[2.0, 1.0, 1.0, 1.0], Viewport::new(800, 400), options);

    assert_eq!(layout.bin_increment, None);
    assert_eq!(layout.positions(), vec![1.0, 1.0, 1.0, 2.0]);
    assert_eq!(layout.stack_indices(), vec![1, 2, 3, 1]);
}

#[test]
fn single_value_sample_is_plottable() {
    let layout = layout(&[5.0], Viewport::new(800, 400), DotPlotOptions::default());

    assert!(layout.axis.degenerate);
    assert_eq!(layout.axis.axis_min, 4.5);
    assert_eq!(layout.axis.axis_max, 5.5);
    assert_eq!(layout.positions(), vec![5.0]);
    assert_eq!(layout.stack_indices(), vec![1]);
}

#[test]
fn tall_stacks_shrink_vertical_spacing_to_fit() {
    let values = vec![3.0; 30];
    let layout = layout(&values, Viewport::new(400, 100), DotPlotOptions::default());

    assert_eq!(layout.max_stack_index, 30);
    assert!((layout.dot_spacing_px - 100.0 / 30.0).abs() <= 1e-12);
}

#[test]
fn projection_places_stacks_on_bottom_edge() {
    let viewport = Viewport::new(800, 400);
    let layout = layout(
        &[1.0, 2.0, 2.0, 3.0, 4.0, 4.0, 5.0],
        viewport,
        DotPlotOptions::default(),
    );
    let marks = layout.project(viewport).expect("project");

    assert_eq!(marks.len(), 7);
    assert!((marks[0].x_px - 0.0).abs() <= 1e-9);
    assert!((marks[6].x_px - 800.0).abs() <= 1e-9);
    assert!((marks[1].y_px - 396.0).abs() <= 1e-9);
    assert!((marks[2].y_px - 388.0).abs() <= 1e-9);
    assert!((marks[0].radius_px - 4.0).abs() <= 1e-9);
}

#[test]
fn stack_heights_are_keyed_by_position_in_order() {
    let layout = layout(
        &[1.0, 2.0, 2.0, 3.0, 4.0, 4.0, 5.0],
        Viewport::new(800, 400),
        DotPlotOptions::default(),
    );
    let heights = layout.stack_heights();

    let keys: Vec<f64> = heights.keys().map(|key| key.0).collect();
    assert_eq!(keys, vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    assert_eq!(heights.get(&OrderedFloat(2.0)), Some(&2));
    assert_eq!(heights.get(&OrderedFloat(3.0)), Some(&1));
}

#[test]
fn bin_increment_snaps_up_to_dot_width() {
    let axis =
        calculate_axis_parameters(0.0, 1.0, AxisKind::DotPlot, FormattingConfig::default())
            .expect("axis");
    // tick/10 = 0.01, one 8px dot on a 100px axis spans 0.08.
    let increment = bin_increment(&axis, 100.0, 8.0).expect("increment");
    assert!((increment - 0.08).abs() <= 1e-12);
}

#[test]
fn bin_increment_shrinks_when_dots_would_sit_too_far_apart() {
    let axis =
        calculate_axis_parameters(0.0, 100.0, AxisKind::DotPlot, FormattingConfig::default())
            .expect("axis");
    // tick = 10, tick/10 = 1; min = 8/2000*100 = 0.4, max = 0.8 -> 1/2 = 0.5.
    let increment = bin_increment(&axis, 2000.0, 8.0).expect("increment");
    assert!((increment - 0.5).abs() <= 1e-12);
}

#[test]
fn first_boundary_is_smallest_at_or_above_axis_minimum() {
    let config = FormattingConfig::default();
    let axis = calculate_axis_parameters(0.05, 1.05, AxisKind::DotPlot, config).expect("axis");
    assert_eq!(axis.first_tick, 0.0);

    let first = first_bin_boundary(&axis, 0.04, config);
    assert!((first - 0.08).abs() <= 1e-12);

    let bins = assign_bins(&[0.05, 0.09, 1.05], &axis, 0.04, config);
    assert!((bins[0] - 0.08).abs() <= 1e-12);
    assert!((bins[1] - 0.12).abs() <= 1e-12);
    assert!(bins[2] >= 1.05);
}

#[test]
fn invalid_inputs_are_rejected() {
    assert!(Sample::new(Vec::new()).is_err());
    assert!(Sample::new(vec![1.0, f64::NAN]).is_err());

    let sample = Sample::from_slice(&[1.0, 2.0]).expect("sample");
    let err = DotPlotLayout::compute(
        &sample,
        Viewport::new(0, 100),
        DotPlotOptions::default(),
        FormattingConfig::default(),
    )
    .expect_err("zero width");
    assert!(matches!(err, PlotError::InvalidViewport { .. }));

    let options = DotPlotOptions {
        dot_diameter_px: 0.0,
        ..DotPlotOptions::default()
    };
    assert!(
        DotPlotLayout::compute(
            &sample,
            Viewport::new(100, 100),
            options,
            FormattingConfig::default()
        )
        .is_err()
    );
}

#[test]
fn bins_finer_than_tolerance_keep_values_apart() {
    let values = [0.0, 3e-9, 7e-9, 1.1e-8, 1.5e-8, 2e-7];
    let layout = layout(&values, Viewport::new(800, 300), DotPlotOptions::default());

    let increment = layout.bin_increment.expect("binned");
    assert!((increment - 2e-9).abs() <= 1e-18);
    assert!(layout.axis.resolution() < increment);
    assert_eq!(layout.first_bin_boundary, Some(0.0));

    let expected = [0.0, 4e-9, 8e-9, 1.2e-8, 1.6e-8, 2e-7];
    for (dot, want) in layout.dots.iter().zip(expected) {
        assert!((dot.position - want).abs() <= 1e-15, "{} vs {want}", dot.position);
        assert!(dot.position >= dot.value);
    }
    assert_eq!(layout.stack_indices(), vec![1; 6]);
    assert_eq!(layout.max_stack_index, 1);
}

#[test]
fn large_magnitude_values_bin_onto_themselves() {
    let layout = layout(
        &[1e17, 1e17 + 64.0],
        Viewport::new(800, 300),
        DotPlotOptions::default(),
    );

    assert_eq!(layout.bin_increment, Some(1.0));
    assert_eq!(layout.positions(), vec![1e17, 1e17 + 64.0]);
    assert_eq!(layout.stack_indices(), vec![1, 1]);
}
