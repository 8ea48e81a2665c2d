use barchart_rs::api::{
    BarChart, CHART_SNAPSHOT_JSON_SCHEMA_V1, ChartSnapshot, LayoutPass, parse_data_points_json,
};
use barchart_rs::core::{ChartConfig, DataPoint, Easing, Rgb8};
use barchart_rs::error::ChartError;
use barchart_rs::render::{EstimatedTextMeasurer, NullRenderer};
use rust_decimal::Decimal;

#[test]
fn data_points_parse_from_json_array() {
    let points = parse_data_points_json(r#"[{"label":"A","value":10},{"label":"B","value":2.5}]"#)
        .expect("points");
    assert_eq!(
        points,
        vec![DataPoint::new("A", 10.0), DataPoint::new("B", 2.5)]
    );
}

#[test]
fn missing_value_fails_data_parse() {
    let err = parse_data_points_json(r#"[{"label":"A"}]"#).expect_err("missing value");
    assert!(matches!(err, ChartError::InvalidData(_)));

    let err = parse_data_points_json(r#"[{"label":"A","value":"ten"}]"#)
        .expect_err("string value");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn decimal_values_convert_to_points() {
    let value = Decimal::new(1234, 2);
    let point = DataPoint::from_decimal("Q1", value).expect("decimal point");
    assert!((point.value - 12.34).abs() <= 1e-9);
}

#[test]
fn partial_config_json_keeps_defaults() {
    let config = ChartConfig::from_json_str(
        r##"{"width":640,"numberShownColumns":4,"paddingXaxis":12,"showYaxis":false,"barColor":"#ff0000","easing":"linear"}"##,
    )
    .expect("config");

    assert_eq!(config.width, 640.0);
    assert_eq!(config.height, 300.0);
    assert_eq!(config.number_shown_columns, 4);
    assert_eq!(config.padding_x_axis, 12.0);
    assert!(!config.show_y_axis);
    assert!(config.show_x_axis);
    assert_eq!(config.bar_color, Rgb8::new(255, 0, 0));
    assert_eq!(config.easing, Easing::Linear);
    assert_eq!(config.bars_spacing, 4.0);
}

#[test]
fn config_json_rejects_bad_color() {
    let err = ChartConfig::from_json_str(r#"{"barColor":"blue-ish"}"#).expect_err("bad color");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn snapshot_contract_round_trips() {
    let mut chart = BarChart::new(
        NullRenderer::default(),
        ChartConfig::default().with_window(0, 3),
    );
    chart
        .set_data_json(r#"[{"label":"Jan","value":3},{"label":"Feb","value":9},{"label":"Mar","value":6}]"#)
        .expect("data");
    chart
        .measure_labels(&mut EstimatedTextMeasurer)
        .expect("measure");

    let json = chart.snapshot_json_contract_v1_pretty().expect("json");
    assert!(json.contains("\"schema_version\": 1"));

    let restored = ChartSnapshot::from_json_compat_str(&json).expect("restore");
    assert_eq!(restored.layout_pass, LayoutPass::Final);
    assert_eq!(restored.generation, chart.generation());
    assert_eq!(restored.layout.bars.len(), 3);
    assert_eq!(restored.animation.len(), 3);
    assert_eq!(restored.config, *chart.config());
    assert!(restored.tooltip.is_none());
}

#[test]
fn bare_snapshot_is_accepted() {
    let mut chart = BarChart::new(NullRenderer::default(), ChartConfig::default());
    chart.set_data(vec![DataPoint::new("only", 1.0)]);
    let snapshot = chart.snapshot().expect("snapshot");
    let bare = serde_json::to_string(&snapshot).expect("bare json");

    let restored = ChartSnapshot::from_json_compat_str(&bare).expect("restore bare");
    assert_eq!(restored.layout.bars.len(), 1);
    assert_eq!(restored.layout.bars[0].label, "only");
}

#[test]
fn unknown_schema_version_is_rejected() {
    let mut chart = BarChart::new(NullRenderer::default(), ChartConfig::default());
    chart.set_data(vec![DataPoint::new("only", 1.0)]);
    let json = chart.snapshot_json_contract_v1_pretty().expect("json");
    let bumped = json.replacen(
        &format!("\"schema_version\": {CHART_SNAPSHOT_JSON_SCHEMA_V1}"),
        "\"schema_version\": 99",
        1,
    );

    let err = ChartSnapshot::from_json_compat_str(&bumped).expect_err("unsupported version");
    assert!(matches!(err, ChartError::InvalidData(_)));
}
