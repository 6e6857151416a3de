use bar_chart_rs::api::{BarChart, ChartConfigPatch, ConfigProperty};
use bar_chart_rs::core::{Color, ColorScale, Datum, Margins, MarginsPatch, Record, dataset};
use bar_chart_rs::render::RetainedScene;
use serde_json::json;

fn chart() -> BarChart<RetainedScene> {
    BarChart::new(RetainedScene::new())
}

#[test]
fn defaults_match_documented_values() {
    let chart = chart();

    assert_eq!(chart.canvas_height(), 400.0);
    assert_eq!(chart.canvas_width(), 400.0);
    assert_eq!(chart.margins(), Margins::new(10.0, 10.0, 25.0, 50.0));
    assert_eq!(chart.x_data_metric(), "name");
    assert_eq!(chart.y_data_metric(), "value");
    assert_eq!(chart.graph_data().map(|data| data.len()), Some(0));
    assert_eq!(chart.color_scale().color(0), Color::from_rgb8(0x1f, 0x77, 0xb4));
}

#[test]
fn setters_chain_and_read_back() {
    let mut chart = chart();
    chart
        .set_canvas_height(300.0)
        .set_canvas_width(640.0)
        .set_x_data_metric("label")
        .set_y_data_metric("count");

    assert_eq!(chart.canvas_height(), 300.0);
    assert_eq!(chart.canvas_width(), 640.0);
    assert_eq!(chart.x_data_metric(), "label");
    assert_eq!(chart.y_data_metric(), "count");
}

#[test]
fn setting_a_property_does_not_draw() {
    let mut chart = chart();
    chart.init_chart("#chart").expect("mount");
    let nodes_after_mount = chart.scene().node_count();

    chart.set_graph_data(dataset(vec![Record::new().with("name", "A").with("value", 5)]));

    assert_eq!(chart.scene().node_count(), nodes_after_mount);
    assert!(chart.bar_layouts().is_empty());
}

#[test]
fn invalid_canvas_dimensions_are_ignored() {
    let mut chart = chart();
    chart
        .set_canvas_height(f64::NAN)
        .set_canvas_width(-20.0)
        .set_canvas_height(0.0)
        .set_canvas_width(f64::INFINITY);

    assert_eq!(chart.canvas_height(), 400.0);
    assert_eq!(chart.canvas_width(), 400.0);
}

#[test]
fn margins_merge_per_side() {
    let mut chart = chart();
    chart.set_margins(MarginsPatch::default().left(80.0).bottom(40.0));

    assert_eq!(chart.margins(), Margins::new(10.0, 10.0, 40.0, 80.0));

    chart.set_margins(MarginsPatch::default().top(-5.0).right(f64::NAN).left(60.0));
    assert_eq!(chart.margins(), Margins::new(10.0, 10.0, 40.0, 60.0));

    chart.set_margins(Margins::new(1.0, 2.0, 3.0, 4.0));
    assert_eq!(chart.margins(), Margins::new(1.0, 2.0, 3.0, 4.0));
}

#[test]
fn configurable_properties_are_discoverable() {
    let names: Vec<&str> = BarChart::<RetainedScene>::configurable_properties()
        .iter()
        .map(|property| property.name())
        .collect();

    assert_eq!(
        names,
        vec![
            "canvasHeight",
            "canvasWidth",
            "colorScale",
            "graphData",
            "margins",
            "xDataMetric",
            "xTickFormat",
            "yDataMetric",
            "yTickFormat",
        ]
    );
}

#[test]
fn json_config_applies_known_keys_only() {
    let mut chart = chart();
    chart.apply_json_config(&json!({
        "canvasHeight": 320,
        "canvasWidth": "512",
        "margins": { "top": 20 },
        "graphData": [{ "name": "A", "value": 3 }],
        "xDataMetric": "name",
        "unknownKey": { "anything": true }
    }));

    assert_eq!(chart.canvas_height(), 320.0);
    assert_eq!(chart.canvas_width(), 512.0);
    assert_eq!(chart.margins().top, 20.0);
    assert_eq!(chart.margins().left, 50.0);
    let data = chart.graph_data().expect("graph data");
    assert_eq!(data.len(), 1);
    assert_eq!(data[0].get("value"), Some(&Datum::Number(3.0)));
}

#[test]
fn json_records_with_nested_fields_are_kept() {
    let mut chart = chart();
    chart.apply_json_config(&json!({
        "graphData": [
            { "name": "A", "value": 50, "meta": { "source": "x" } },
            { "name": "B", "value": 100, "tags": ["a"] }
        ]
    }));

    let data = chart.graph_data().expect("graph data");
    assert_eq!(data.len(), 2);
    assert_eq!(data[1].metric("value"), Some(100.0));
    assert_eq!(data[1].get("tags"), Some(&Datum::List(vec![Datum::from("a")])));

    chart.init_chart("#chart").expect("mount");
    assert_eq!(chart.bar_layouts().len(), 2);
}

#[test]
fn unknown_json_keys_leave_configuration_untouched() {
    let mut chart = chart();
    chart.apply_json_config(&json!({ "canvasDepth": 10, "title": "bars" }));

    assert_eq!(chart.canvas_height(), 400.0);
    assert_eq!(chart.canvas_width(), 400.0);
    assert_eq!(chart.margins(), Margins::default());
}

#[test]
fn json_palette_replaces_color_scale() {
    let mut chart = chart();
    chart.apply_json_config(&json!({ "colorScale": ["#ff0000", "#0000ff"] }));

    assert_eq!(chart.color_scale().color(0), Color::rgb(1.0, 0.0, 0.0));
    assert_eq!(chart.color_scale().color(1), Color::rgb(0.0, 0.0, 1.0));
    assert_eq!(chart.color_scale().color(2), Color::rgb(1.0, 0.0, 0.0));
}

#[test]
fn typed_patch_reports_present_properties() {
    let patch = ChartConfigPatch::new()
        .canvas_width(800.0)
        .color_scale(ColorScale::custom(|_| Color::BLACK))
        .y_tick_format(|value, _| format!("{value}%"));

    assert!(patch.contains(ConfigProperty::CanvasWidth));
    assert!(!patch.contains(ConfigProperty::CanvasHeight));
    assert_eq!(
        patch.properties(),
        vec![
            ConfigProperty::CanvasWidth,
            ConfigProperty::ColorScale,
            ConfigProperty::YTickFormat
        ]
    );

    let mut chart = chart();
    chart.apply_patch(patch);
    assert_eq!(chart.canvas_width(), 800.0);
    assert_eq!(chart.color_scale().color(7), Color::BLACK);
    assert_eq!((chart.y_tick_format())(25.0, 0), "25%");
}
