use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::{Color, Record};
use crate::error::ChartResult;
use crate::render::{
    AXIS_TRANSITION_MS, Attr, BAR_TRANSITION_MS, DataJoin, HoverStyle, NodeId, Scene, ShapeStyle,
    Transition, Translate,
};

use super::lifecycle::SceneGraph;
use super::{ChartConfig, ChartScales};

/// Target geometry of one bar in bars-group coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarLayout {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Color,
}

impl BarLayout {
    #[must_use]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }
}

/// Partition sizes of one reconciliation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinSummary {
    pub entered: usize,
    pub updated: usize,
    pub exited: usize,
}

/// Resolves each record to its bar geometry.
///
/// A missing metric plots as zero. Height is clamped at zero so negative
/// metrics or oversized margins never produce inverted bars.
pub(super) fn bar_layouts(
    config: &ChartConfig,
    records: &[Record],
    scales: &ChartScales,
) -> Vec<BarLayout> {
    let band_width = scales.x().band_width();
    let bottom = config.margins.bottom;
    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let x = scales
                .x()
                .position(&record.label_key(&config.x_data_metric))
                .unwrap_or(0.0);
            let y = scales
                .y()
                .apply(record.metric(&config.y_data_metric).unwrap_or(0.0));
            BarLayout {
                x,
                y,
                width: band_width,
                height: (config.canvas_height - y - bottom).max(0.0),
                fill: bar_fill(config, index),
            }
        })
        .collect()
}

/// Color for the bar at `index`; out-of-range channels from a custom scale
/// fall back to black.
fn bar_fill(config: &ChartConfig, index: usize) -> Color {
    let color = config.color_scale.color(index);
    match color.validate() {
        Ok(()) => color,
        Err(err) => {
            warn!(index, error = %err, "color scale returned an invalid color");
            Color::BLACK
        }
    }
}

/// Reconciles bar shapes with `layouts` by position.
///
/// Exiting shapes shrink to zero width and are removed when their
/// transition completes; they leave the binding immediately. Entering shapes
/// start at zero geometry and animate in with the updates.
pub(super) fn handle_bars<S: Scene>(
    scene: &mut S,
    graph: &mut SceneGraph,
    config: &ChartConfig,
    layouts: &[BarLayout],
) -> ChartResult<JoinSummary> {
    scene.set_attribute(
        graph.bars_group,
        Attr::Transform(Translate::new(config.margins.left, 0.0)),
    )?;

    let join = DataJoin::by_index(&graph.bound, layouts.len());
    let summary = JoinSummary {
        entered: join.enter.len(),
        updated: join.update.len(),
        exited: join.exit.len(),
    };

    for shape in &join.exit {
        scene.animate(
            *shape,
            Transition::new(BAR_TRANSITION_MS)
                .attr(Attr::Width(0.0))
                .remove(),
        )?;
    }

    let mut bound: Vec<Option<NodeId>> = vec![None; layouts.len()];
    for (index, shape) in join.update {
        bound[index] = Some(shape);
    }
    for index in join.enter {
        let shape = scene.append_shape(graph.bars_group, ShapeStyle::default())?;
        scene.set_hover_style(shape, HoverStyle::default())?;
        bound[index] = Some(shape);
    }
    graph.bound = bound.into_iter().flatten().collect();

    for (shape, layout) in graph.bound.iter().zip(layouts) {
        scene.animate(
            *shape,
            Transition::new(BAR_TRANSITION_MS)
                .attr(Attr::X(layout.x))
                .attr(Attr::Y(layout.y))
                .attr(Attr::Width(layout.width))
                .attr(Attr::Height(layout.height))
                .attr(Attr::Fill(layout.fill)),
        )?;
    }

    Ok(summary)
}

/// Moves both axis groups into place and redraws their ticks.
pub(super) fn call_axes<S: Scene>(
    scene: &mut S,
    graph: &SceneGraph,
    config: &ChartConfig,
    scales: &ChartScales,
) -> ChartResult<()> {
    let margins = config.margins;

    scene.animate(
        graph.x_axis_group,
        Transition::new(AXIS_TRANSITION_MS).attr(Attr::Transform(Translate::new(
            margins.left,
            config.canvas_height - margins.bottom,
        ))),
    )?;
    scene.render_axis(graph.x_axis_group, &scales.x_axis.layout())?;

    scene.animate(
        graph.y_axis_group,
        Transition::new(AXIS_TRANSITION_MS)
            .attr(Attr::Transform(Translate::new(margins.left, 0.0))),
    )?;
    scene.render_axis(graph.y_axis_group, &scales.y_axis.layout())?;

    Ok(())
}
