use bar_chart_rs::api::{BarChart, JoinSummary, LifecyclePhase, demo_dataset};
use bar_chart_rs::render::{NodeKind, RetainedScene, Scene, Translate};

fn mounted_demo_chart() -> BarChart<RetainedScene> {
    let mut chart = BarChart::new(RetainedScene::new());
    chart.set_graph_data(demo_dataset());
    chart.init_chart("#chart").expect("mount");
    chart.scene_mut().settle();
    chart
}

fn surface_size(chart: &BarChart<RetainedScene>) -> (f64, f64) {
    let graph = chart.lifecycle().graph().expect("mounted");
    match &chart.scene().node(graph.surface).expect("surface").kind {
        NodeKind::Surface { width, height, .. } => (*width, *height),
        other => panic!("expected surface, got {other:?}"),
    }
}

#[test]
fn new_chart_starts_unmounted() {
    let chart = BarChart::new(RetainedScene::new());
    assert!(!chart.is_mounted());
    assert_eq!(chart.lifecycle().phase(), LifecyclePhase::Unmounted);
    assert_eq!(chart.scene().node_count(), 0);
}

#[test]
fn init_creates_surface_and_three_groups() {
    let chart = mounted_demo_chart();
    let scene = chart.scene();
    let graph = chart.lifecycle().graph().expect("mounted");

    assert_eq!(scene.surfaces(), vec![graph.surface]);
    assert_eq!(
        scene.children(graph.surface),
        &[graph.bars_group, graph.x_axis_group, graph.y_axis_group]
    );
    assert_eq!(surface_size(&chart), (400.0, 400.0));

    let x_axis = scene.node(graph.x_axis_group).expect("x axis group");
    assert_eq!(x_axis.class.as_deref(), Some("axis"));
    assert_eq!(x_axis.attributes.transform, Translate::new(50.0, 375.0));

    let y_axis = scene.node(graph.y_axis_group).expect("y axis group");
    assert_eq!(y_axis.class.as_deref(), Some("axis"));
    assert_eq!(y_axis.attributes.transform, Translate::new(50.0, 0.0));

    let bars = scene.node(graph.bars_group).expect("bars group");
    assert_eq!(bars.class, None);
    assert_eq!(bars.attributes.transform, Translate::new(50.0, 0.0));
    assert_eq!(chart.lifecycle().phase(), LifecyclePhase::Drawn);
}

#[test]
fn repeated_init_does_not_duplicate_surface() {
    let mut chart = mounted_demo_chart();
    let first_graph = chart.lifecycle().graph().expect("mounted").clone();

    chart.init_chart("#chart").expect("second init");
    chart.scene_mut().settle();

    let scene = chart.scene();
    assert_eq!(scene.surfaces().len(), 1);
    assert_eq!(scene.children(first_graph.surface).len(), 3);
    assert_eq!(scene.children(first_graph.bars_group).len(), 5);
    assert_eq!(
        chart.lifecycle().graph().expect("mounted").surface,
        first_graph.surface
    );
}

#[test]
fn init_without_data_mounts_but_skips_draw() {
    let mut chart = BarChart::new(RetainedScene::new());
    chart.clear_graph_data();
    chart.init_chart("#chart").expect("mount");

    assert!(chart.is_mounted());
    assert!(chart.scales().is_none());
    assert!(chart.last_join().is_none());
    let graph = chart.lifecycle().graph().expect("mounted");
    assert!(chart.scene().children(graph.bars_group).is_empty());
}

#[test]
fn resize_floors_width_and_defers_geometry() {
    let mut chart = mounted_demo_chart();
    let graph = chart.lifecycle().graph().expect("mounted").clone();
    let first_bar = graph.bound_shapes()[0];
    let drawn_width = chart
        .scene()
        .node(first_bar)
        .expect("bar")
        .attributes
        .width;

    chart.resize_chart(600.9, 250.0).expect("resize");

    assert_eq!(chart.canvas_width(), 600.0);
    assert_eq!(chart.canvas_height(), 400.0);
    assert_eq!(surface_size(&chart), (600.0, 400.0));
    assert_eq!(chart.lifecycle().phase(), LifecyclePhase::ResizedPendingRedraw);
    assert_eq!(
        chart.scene().node(first_bar).expect("bar").attributes.width,
        drawn_width
    );

    chart.render(None).expect("redraw");
    chart.scene_mut().settle();

    assert_eq!(chart.lifecycle().phase(), LifecyclePhase::Drawn);
    let redrawn_width = chart.scene().node(first_bar).expect("bar").attributes.width;
    assert!(redrawn_width > drawn_width);
    assert_eq!(redrawn_width, chart.bar_layouts()[0].width);
}

#[test]
fn resize_before_mount_is_a_no_op() {
    let mut chart = BarChart::new(RetainedScene::new());
    chart.resize_chart(800.0, 600.0).expect("resize");

    assert!(!chart.is_mounted());
    assert_eq!(chart.canvas_width(), 400.0);
    assert_eq!(chart.scene().node_count(), 0);
}

#[test]
fn invalid_resize_widths_are_ignored() {
    let mut chart = mounted_demo_chart();

    chart.resize_chart(0.4, 400.0).expect("resize");
    chart.resize_chart(f64::NAN, 400.0).expect("resize");
    chart.resize_chart(-100.0, 400.0).expect("resize");

    assert_eq!(chart.canvas_width(), 400.0);
    assert_eq!(surface_size(&chart), (400.0, 400.0));
    assert_eq!(chart.lifecycle().phase(), LifecyclePhase::Drawn);
}

#[test]
fn repeated_resize_to_the_same_width_is_idempotent() {
    let mut chart = mounted_demo_chart();
    let graph = chart.lifecycle().graph().expect("mounted").clone();

    chart.resize_chart(600.5, 400.0).expect("first resize");
    chart.resize_chart(600.5, 400.0).expect("second resize");
    chart.render(None).expect("first redraw");
    chart.render(None).expect("second redraw");
    chart.scene_mut().settle();

    assert_eq!(chart.canvas_width(), 600.0);
    assert_eq!(chart.scene().surfaces().len(), 1);
    assert_eq!(surface_size(&chart), (600.0, 400.0));
    assert_eq!(
        chart.last_join(),
        Some(JoinSummary {
            entered: 0,
            updated: 5,
            exited: 0
        })
    );
    assert_eq!(chart.scene().children(graph.bars_group).len(), 5);
    assert_eq!(chart.lifecycle().phase(), LifecyclePhase::Drawn);
}

#[test]
fn failed_surface_resize_keeps_configured_width() {
    let mut chart = mounted_demo_chart();
    let surface = chart.lifecycle().graph().expect("mounted").surface;
    chart.scene_mut().remove_shape(surface).expect("detach surface");

    assert!(chart.resize_chart(720.0, 400.0).is_err());
    assert_eq!(chart.canvas_width(), 400.0);
    assert_eq!(chart.lifecycle().phase(), LifecyclePhase::Drawn);
}
