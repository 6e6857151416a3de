use bar_chart_rs::api::{
    BarChart, CHART_SNAPSHOT_JSON_SCHEMA_V1, ChartSnapshot, LifecyclePhase, demo_dataset,
};
use bar_chart_rs::core::Datum;
use bar_chart_rs::render::RetainedScene;
use serde_json::Value;

fn drawn_chart() -> BarChart<RetainedScene> {
    let mut chart = BarChart::new(RetainedScene::new());
    chart.set_graph_data(demo_dataset());
    chart.init_chart("#chart").expect("mount");
    chart
}

#[test]
fn snapshot_captures_scales_and_bars() {
    let snapshot = drawn_chart().snapshot();

    assert_eq!(snapshot.lifecycle, LifecyclePhase::Drawn);
    assert_eq!(snapshot.record_count, Some(5));
    assert_eq!(
        snapshot.x_domain,
        ["A", "B", "C", "D", "E"].map(Datum::from).to_vec()
    );
    assert_eq!(snapshot.y_domain, (0.0, 125.0));
    assert_eq!(snapshot.band_width, 59.0);
    assert_eq!(snapshot.bars.len(), 5);
    assert_eq!(
        snapshot.x_axis.as_ref().map(|axis| axis.ticks.len()),
        Some(5)
    );
}

#[test]
fn snapshot_of_unmounted_chart_has_no_scales() {
    let snapshot = BarChart::new(RetainedScene::new()).snapshot();

    assert_eq!(snapshot.lifecycle, LifecyclePhase::Unmounted);
    assert_eq!(snapshot.record_count, Some(0));
    assert!(snapshot.x_domain.is_empty());
    assert!(snapshot.x_axis.is_none());
    assert!(snapshot.bars.is_empty());
}

#[test]
fn contract_payload_is_versioned_and_parses_back() {
    let chart = drawn_chart();
    let json = chart
        .snapshot_json_contract_v1_pretty()
        .expect("serialize contract");

    let value: Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(
        value["schema_version"].as_u64(),
        Some(u64::from(CHART_SNAPSHOT_JSON_SCHEMA_V1))
    );
    assert_eq!(value["snapshot"]["x_domain"][1], "B");

    let parsed = ChartSnapshot::from_json_compat_str(&json).expect("parse contract");
    let expected = chart.snapshot();
    assert_eq!(parsed.lifecycle, expected.lifecycle);
    assert_eq!(parsed.x_domain, expected.x_domain);
    assert_eq!(parsed.margins, expected.margins);
    assert_eq!(parsed.bars.len(), expected.bars.len());
    assert_eq!(parsed.bars[1].height, 292.0);
}

#[test]
fn bare_snapshot_json_is_accepted() {
    let snapshot = drawn_chart().snapshot();
    let bare = serde_json::to_string(&snapshot).expect("serialize snapshot");

    let parsed = ChartSnapshot::from_json_compat_str(&bare).expect("parse bare snapshot");
    assert_eq!(parsed.record_count, snapshot.record_count);
    assert_eq!(parsed.y_domain, snapshot.y_domain);
    assert_eq!(parsed.band_width, snapshot.band_width);
}

#[test]
fn unknown_schema_version_is_rejected() {
    let snapshot = drawn_chart().snapshot();
    let payload = serde_json::json!({
        "schema_version": 99,
        "snapshot": snapshot,
    });

    let result = ChartSnapshot::from_json_compat_str(&payload.to_string());
    assert!(result.is_err());
}
