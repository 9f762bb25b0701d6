use chart_spec::api::{
    AxisRange, ChartDataModel, ChartSpecBuilder, ChartSpecConfig, ColorSpec, SeriesDescriptor,
};
use chart_spec::core::{ChartDimensions, DataPoint, PaletteCycle};
use chart_spec::error::ChartSpecError;

fn two_color_builder() -> ChartSpecBuilder {
    let palette = PaletteCycle::from_hex(&["#111111", "#222222"]).expect("palette");
    ChartSpecBuilder::new(ChartSpecConfig::default().with_palette(palette)).expect("builder")
}

fn example_model() -> ChartDataModel {
    ChartDataModel::new(vec![
        SeriesDescriptor::new("A", vec![DataPoint::new(0.0, 0.0), DataPoint::new(1.0, 5.0)]),
        SeriesDescriptor::new("B", vec![DataPoint::new(0.0, 2.0), DataPoint::new(1.0, 3.0)])
            .with_color("#FF0000"),
    ])
}

#[test]
fn two_series_end_to_end() {
    let spec = two_color_builder().build(&example_model()).expect("build");

    let a = spec.dataset("A").expect("dataset A");
    let b = spec.dataset("B").expect("dataset B");
    assert_eq!(a.border_color.to_string(), "rgba(17,17,17,1.0)");
    assert_eq!(a.background_color.to_string(), "rgba(17,17,17,0.4)");
    assert_eq!(b.border_color.to_string(), "rgba(255,0,0,1.0)");
    assert_eq!(b.background_color.to_string(), "rgba(255,0,0,0.4)");

    assert_eq!(spec.axes.range, AxisRange::new(0.0, 1.0, 0.0, 5.0));
    assert!(spec.axes.x.ticks.begin_at_zero);
    assert_eq!(spec.axes.x.ticks.min, 0.0);
    assert_eq!(spec.axes.y.ticks.max, 5.0);

    assert!(!spec.annotations_enabled());
    assert!(spec.annotations.is_empty());
}

#[test]
fn consecutive_builds_are_identical() {
    let builder = two_color_builder();
    let model = example_model();

    let first = builder.build(&model).expect("first build");
    let second = builder.build(&model).expect("second build");
    assert_eq!(first, second);
}

#[test]
fn datasets_follow_visible_order() {
    let spec = two_color_builder().build(&example_model()).expect("build");
    let labels: Vec<&str> = spec.datasets.iter().map(|d| d.label.as_str()).collect();
    assert_eq!(labels, ["A", "B"]);
    assert_eq!(spec.datasets[0].data, example_model().visible_data_sets[0].points);
}

#[test]
fn empty_visible_set_uses_fallback_range() {
    let fallback = AxisRange::new(0.0, 60.0, -10.0, 10.0);
    let model = ChartDataModel::new(Vec::new()).with_fallback_range(fallback);

    let spec = two_color_builder().build(&model).expect("build");
    assert!(spec.datasets.is_empty());
    assert_eq!(spec.axes.range, fallback);
}

#[test]
fn all_empty_series_use_fallback_range() {
    let fallback = AxisRange::new(1.0, 2.0, 3.0, 4.0);
    let model = ChartDataModel::new(vec![SeriesDescriptor::new("empty", Vec::new())])
        .with_fallback_range(fallback);

    let spec = two_color_builder().build(&model).expect("build");
    assert_eq!(spec.datasets.len(), 1);
    assert_eq!(spec.axes.range, fallback);
    assert!(!spec.axes.x.ticks.begin_at_zero);
}

#[test]
fn malformed_series_fails_the_build() {
    let model = ChartDataModel::new(vec![
        SeriesDescriptor::new("ok", vec![DataPoint::new(0.0, 1.0)]),
        SeriesDescriptor::new("bad", vec![DataPoint::new(f64::NAN, 1.0)]),
    ]);

    let err = two_color_builder().build(&model).expect_err("must fail");
    match err {
        ChartSpecError::MalformedSeries { series, .. } => assert_eq!(series, "bad"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn malformed_color_degrades_only_that_series() {
    let model = ChartDataModel::new(vec![
        SeriesDescriptor::new("A", vec![DataPoint::new(0.0, 0.0)]).with_color("#zzzzzz"),
        SeriesDescriptor::new("B", vec![DataPoint::new(1.0, 1.0)]).with_color("#00FF00"),
    ]);

    let spec = two_color_builder().build(&model).expect("build");
    assert_eq!(
        spec.datasets[0].border_color.to_string(),
        "rgba(17,17,17,1.0)"
    );
    assert_eq!(spec.datasets[1].border_color.to_string(), "rgba(0,255,0,1.0)");
}

#[test]
fn last_fixed_label_rotation_wins() {
    let model = ChartDataModel::new(vec![
        SeriesDescriptor::new("a", vec![DataPoint::new(0.0, 0.0)]).with_fixed_label_rotation(30.0),
        SeriesDescriptor::new("b", vec![DataPoint::new(1.0, 0.0)]),
        SeriesDescriptor::new("c", vec![DataPoint::new(2.0, 0.0)]).with_fixed_label_rotation(90.0),
    ])
    .with_data_label_rotation(45.0);

    let spec = two_color_builder().build(&model).expect("build");
    assert_eq!(spec.axes.x.ticks.min_rotation, Some(90.0));
    assert_eq!(spec.axes.x.ticks.max_rotation, Some(90.0));
    assert_eq!(spec.datasets[0].min_rotation, Some(30.0));
    assert_eq!(spec.datasets[1].min_rotation, None);
}

#[test]
fn model_rotation_applies_without_series_override() {
    let model = ChartDataModel::new(vec![SeriesDescriptor::new(
        "a",
        vec![DataPoint::new(0.0, 0.0)],
    )])
    .with_data_label_rotation(45.0);

    let spec = two_color_builder().build(&model).expect("build");
    assert_eq!(spec.axes.x.ticks.min_rotation, Some(45.0));
    assert_eq!(spec.axes.x.ticks.max_rotation, Some(45.0));
}

#[test]
fn point_colors_are_emitted_per_point() {
    let points = (0..4).map(|i| DataPoint::new(f64::from(i), 0.0)).collect();
    let model = ChartDataModel::new(vec![
        SeriesDescriptor::new("s", points).with_point_colors(["#ABCDEF"]),
    ]);

    let spec = two_color_builder().build(&model).expect("build");
    let dataset = &spec.datasets[0];
    let ColorSpec::PerPoint(borders) = &dataset.point_border_color else {
        panic!("expected per-point border colors");
    };
    let rendered: Vec<String> = borders.iter().map(ToString::to_string).collect();
    assert_eq!(
        rendered,
        [
            "rgba(171,205,239,1.0)",
            "rgba(17,17,17,1.0)",
            "rgba(34,34,34,1.0)",
            "rgba(17,17,17,1.0)",
        ]
    );
    assert_eq!(
        dataset.point_background_color.at(0).map(|c| c.to_string()),
        Some("rgba(171,205,239,0.4)".to_owned())
    );
    assert_eq!(dataset.point_hover_border_color, dataset.point_border_color);
}

#[test]
fn series_without_point_colors_use_uniform_series_color() {
    let spec = two_color_builder().build(&example_model()).expect("build");
    let b = spec.dataset("B").expect("dataset B");
    assert_eq!(b.point_border_color, ColorSpec::Uniform(b.border_color));
    assert_eq!(b.point_background_color, ColorSpec::Uniform(b.background_color));
}

#[test]
fn dash_pattern_is_carried_and_invalid_one_dropped() {
    let model = ChartDataModel::new(vec![
        SeriesDescriptor::new("dashed", vec![DataPoint::new(0.0, 0.0)]).with_dash_pattern(&[5.0, 5.0]),
        SeriesDescriptor::new("broken", vec![DataPoint::new(0.0, 0.0)]).with_dash_pattern(&[-1.0]),
    ]);

    let spec = two_color_builder().build(&model).expect("build");
    assert_eq!(
        spec.datasets[0].border_dash.as_deref(),
        Some([5.0, 5.0].as_slice())
    );
    assert!(spec.datasets[1].border_dash.is_none());
}

#[test]
fn title_and_dimensions_follow_model_and_config() {
    let builder = ChartSpecBuilder::new(
        ChartSpecConfig::default()
            .with_dimensions(ChartDimensions::new(640, 300))
            .with_font_family("Lato"),
    )
    .expect("builder");
    let model = example_model().with_name("Fire spread");

    let spec = builder.build(&model).expect("build");
    assert!(spec.options.title.display);
    assert_eq!(spec.options.title.text, "Fire spread");
    assert_eq!(spec.options.title.font_family.as_deref(), Some("Lato"));
    assert_eq!(spec.axes.x.ticks.font_family.as_deref(), Some("Lato"));
    assert_eq!(spec.dimensions, ChartDimensions::new(640, 300));
    assert_eq!(spec.options.animation_duration_ms, 0);
    assert!(!spec.options.maintain_aspect_ratio);

    let untitled = builder.build(&example_model()).expect("build");
    assert!(!untitled.options.title.display);
}

#[test]
fn default_dimensions_are_400_square() {
    let spec = ChartSpecBuilder::new(ChartSpecConfig::default())
        .expect("builder")
        .build(&example_model())
        .expect("build");
    assert_eq!(spec.dimensions, ChartDimensions::new(400, 400));
}

#[test]
fn strict_alignment_rejects_series_longer_than_labels() {
    let builder = ChartSpecBuilder::new(ChartSpecConfig::default().with_strict_label_alignment(true))
        .expect("builder");
    let model = example_model().with_labels(["t0"]);

    let err = builder.build(&model).expect_err("must fail");
    assert!(matches!(
        err,
        ChartSpecError::LabelMismatch {
            points: 2,
            labels: 1,
            ..
        }
    ));

    let aligned = example_model().with_labels(["t0", "t1"]);
    let spec = builder.build(&aligned).expect("aligned build");
    assert_eq!(spec.labels, ["t0", "t1"]);
}

#[test]
fn lenient_alignment_keeps_mismatched_labels() {
    let model = example_model().with_labels(["only"]);
    let spec = two_color_builder().build(&model).expect("build");
    assert_eq!(spec.labels, ["only"]);
}

#[test]
fn invalid_config_is_rejected() {
    let zero = ChartSpecConfig::default().with_dimensions(ChartDimensions::new(0, 400));
    assert!(matches!(
        ChartSpecBuilder::new(zero),
        Err(ChartSpecError::InvalidDimensions { width: 0, .. })
    ));
}

#[test]
fn invalid_model_range_is_rejected() {
    let model = example_model().with_min_max_all(AxisRange::new(5.0, 1.0, 0.0, 1.0));
    assert!(two_color_builder().build(&model).is_err());
}
