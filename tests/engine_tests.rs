use statplot_rs::api::{PlotEngine, PlotEngineConfig, PlotSnapshot, PlotStyle};
use statplot_rs::core::{BinningMode, DataPoint, FormattingConfig, Viewport};
use statplot_rs::render::NullRenderer;
use statplot_rs::{PlotError, telemetry};

fn engine() -> PlotEngine<NullRenderer> {
    let config = PlotEngineConfig::new(Viewport::new(832, 432));
    PlotEngine::with_seed(NullRenderer::default(), config, 42).expect("engine init")
}

#[test]
fn plot_area_reserves_axis_band() {
    let config = PlotEngineConfig::new(Viewport::new(832, 432));
    assert_eq!(config.plot_area().expect("area"), Viewport::new(832, 400));

    let too_short = PlotEngineConfig::new(Viewport::new(200, 20));
    assert!(matches!(
        too_short.plot_area(),
        Err(PlotError::InvalidViewport { .. })
    ));
    assert!(PlotEngine::new(NullRenderer::default(), too_short).is_err());
}

#[test]
fn layout_requires_a_sample() {
    let mut engine = engine();
    assert!(engine.dot_plot_layout().is_err());
    assert!(engine.summary().is_err());
    assert!(engine.render_dot_plot().is_err());
}

#[test]
fn rejected_sample_keeps_previous_one() {
    let mut engine = engine();
    engine.set_sample(vec![1.0, 2.0, 3.0]).expect("sample");
    assert!(engine.set_sample(vec![f64::NAN]).is_err());
    assert!(engine.set_sample(Vec::new()).is_err());
    assert_eq!(engine.sample().expect("sample").values(), &[1.0, 2.0, 3.0]);
}

#[test]
fn dot_plot_renders_dots_ticks_and_labels() {
    let mut engine = engine();
    engine
        .set_sample(vec![1.0, 2.0, 2.0, 3.0, 4.0, 4.0, 5.0])
        .expect("sample");
    engine.render_dot_plot().expect("render");

    let renderer = engine.renderer();
    assert_eq!(renderer.last_circle_count, 7);
    // 1 axis line + 41 ticks (1..=5 with ten minor steps per unit).
    assert_eq!(renderer.last_line_count, 42);
    assert_eq!(renderer.last_text_count, 5);

    let renderer = engine.into_renderer();
    assert_eq!(renderer.last_circle_count, 7);
}

#[test]
fn scatter_plot_renders_fit_line_when_enabled() {
    let mut engine = engine();
    engine
        .set_points(vec![
            DataPoint::new(0.0, 1.0),
            DataPoint::new(10.0, 21.0),
            DataPoint::new(40.0, 81.0),
        ])
        .expect("points");
    engine.render_scatter_plot().expect("render");
    let with_fit = engine.renderer().last_line_count;

    let config = engine.config().with_regression_line(false);
    engine.set_config(config).expect("config");
    engine.render_scatter_plot().expect("render");
    assert_eq!(engine.renderer().last_line_count, with_fit - 1);
    assert_eq!(engine.renderer().last_circle_count, 3);
}

#[test]
fn non_finite_points_are_rejected() {
    let mut engine = engine();
    let err = engine
        .set_points(vec![DataPoint::new(1.0, f64::INFINITY)])
        .expect_err("non-finite");
    assert!(format!("{err}").contains("index 0"));
    assert!(engine.points().is_empty());
}

#[test]
fn exact_binning_is_configurable() {
    let config =
        PlotEngineConfig::new(Viewport::new(832, 432)).with_binning(BinningMode::Exact);
    let mut engine =
        PlotEngine::with_seed(NullRenderer::default(), config, 1).expect("engine init");
    engine.set_sample(vec![1.0, 1.01, 1.02]).expect("sample");

    let layout = engine.dot_plot_layout().expect("layout");
    assert_eq!(layout.bin_increment, None);
    assert_eq!(layout.stack_indices(), vec![1, 1, 1]);
}

#[test]
fn config_round_trips_through_json() {
    let config = PlotEngineConfig::new(Viewport::new(640, 480))
        .with_formatting(FormattingConfig::default().with_label_precision(Some(1)))
        .with_dot_diameter_px(6.0);
    let json = config.to_json_pretty().expect("serialize");
    let restored = PlotEngineConfig::from_json_str(&json).expect("parse");
    assert_eq!(restored, config);
}

#[test]
fn config_json_fills_defaults_and_validates() {
    let config = PlotEngineConfig::from_json_str(r#"{"viewport":{"width":300,"height":200}}"#)
        .expect("parse");
    assert_eq!(config.formatting, FormattingConfig::default());
    assert!(config.show_regression_line);
    assert_eq!(config.style, PlotStyle::default());

    let err = PlotEngineConfig::from_json_str(
        r#"{"viewport":{"width":300,"height":200},"formatting":{"tolerance_places":30}}"#,
    )
    .expect_err("tolerance too large");
    assert!(matches!(err, PlotError::InvalidConfig(_)));

    assert!(PlotEngineConfig::from_json_str("not json").is_err());
}

#[test]
fn set_formatting_validates() {
    let mut engine = engine();
    assert!(
        engine
            .set_formatting(FormattingConfig::default().with_tolerance_places(99))
            .is_err()
    );
    engine
        .set_formatting(FormattingConfig::default().with_tolerance_places(6))
        .expect("formatting");
    assert_eq!(engine.formatting().tolerance_places, 6);
}

#[test]
fn snapshot_json_is_deterministic_for_fixed_seed() {
    let build = || {
        let mut engine = engine();
        engine.set_sample(vec![3.0, 1.0, 2.0, 2.0]).expect("sample");
        engine
            .set_points(vec![DataPoint::new(1.0, 2.0), DataPoint::new(2.0, 4.0)])
            .expect("points");
        engine.snapshot_json_pretty().expect("snapshot json")
    };

    let first = build();
    assert_eq!(first, build());

    let snapshot = PlotSnapshot::from_json_str(&first).expect("parse snapshot");
    let summary = snapshot.summary.expect("summary");
    assert_eq!(summary.median, 2.0);
    assert_eq!(snapshot.dot_plot.expect("dot plot").dots.len(), 4);
    assert!(snapshot.scatter.expect("scatter").fit.is_some());
}

#[test]
fn malformed_snapshot_json_is_a_data_error() {
    let err = PlotSnapshot::from_json_str("{\"config\": 3}").expect_err("malformed");
    assert!(matches!(err, PlotError::InvalidData(_)));
    assert!(matches!(
        PlotSnapshot::from_json_str("not json"),
        Err(PlotError::InvalidData(_))
    ));
}

#[test]
fn clear_drops_data_sections_from_snapshot() {
    let mut engine = engine();
    engine.set_sample(vec![1.0]).expect("sample");
    engine.clear();
    let snapshot = engine.snapshot().expect("snapshot");
    assert!(snapshot.summary.is_none());
    assert!(snapshot.dot_plot.is_none());
    assert!(snapshot.scatter.is_none());
}

#[test]
fn telemetry_is_opt_in() {
    let initialized = telemetry::init_default_tracing();
    if cfg!(not(feature = "telemetry")) {
        assert!(!initialized);
    }
}
