use serde_json::{Value, json};
use tracing::{debug, trace};

use crate::core::{Dataset, Record, dataset, same_dataset};
use crate::error::ChartResult;
use crate::render::Scene;

use super::{BarChart, ChartConfigPatch, ConfigProperty};

/// Adapter driving a [`BarChart`] on behalf of an embedding UI layer.
///
/// It owns the host-side contracts: canvas width defaults to the measured
/// container width, window resizes are followed by a redraw, and data
/// updates are applied only when the dataset reference changes.
pub struct ChartHost<S: Scene> {
    chart: BarChart<S>,
    last_data: Option<Dataset>,
}

impl<S: Scene> ChartHost<S> {
    /// Mounts a chart configured from a JSON object.
    pub fn mount(
        scene: S,
        container: &str,
        measured_width: f64,
        config: &Value,
    ) -> ChartResult<Self> {
        Self::mount_with_patch(
            scene,
            container,
            measured_width,
            ChartConfigPatch::from_json(config),
        )
    }

    /// Mounts a chart configured from a typed patch.
    ///
    /// Without an explicit `canvasWidth`, the canvas takes the floor of the
    /// measured container width.
    pub fn mount_with_patch(
        scene: S,
        container: &str,
        measured_width: f64,
        patch: ChartConfigPatch,
    ) -> ChartResult<Self> {
        let mut chart = BarChart::new(scene);
        if !patch.contains(ConfigProperty::CanvasWidth) {
            chart.set_canvas_width(measured_width.floor());
        }
        chart.apply_patch(patch);
        chart.init_chart(container)?;

        let last_data = chart.graph_data().cloned();
        debug!(
            container,
            width = chart.canvas_width(),
            "chart host mounted"
        );
        Ok(Self { chart, last_data })
    }

    /// Resizes to the container's new width and redraws with unchanged data.
    pub fn on_window_resize(&mut self, measured_width: f64) -> ChartResult<()> {
        let height = self.chart.canvas_height();
        self.chart.resize_chart(measured_width, height)?.render(None)
    }

    /// Re-renders when `data` is defined and not the dataset last seen.
    ///
    /// Returns whether a render happened.
    pub fn on_data_changed(&mut self, data: Option<Dataset>) -> ChartResult<bool> {
        let Some(data) = data else {
            trace!("ignoring undefined data update");
            return Ok(false);
        };
        if self
            .last_data
            .as_ref()
            .is_some_and(|last| same_dataset(last, &data))
        {
            trace!("dataset reference unchanged; skipping render");
            return Ok(false);
        }
        self.last_data = Some(data.clone());
        self.chart.render(Some(data))?;
        Ok(true)
    }

    #[must_use]
    pub fn chart(&self) -> &BarChart<S> {
        &self.chart
    }

    pub fn chart_mut(&mut self) -> &mut BarChart<S> {
        &mut self.chart
    }

    #[must_use]
    pub fn into_chart(self) -> BarChart<S> {
        self.chart
    }
}

/// Five-record sample dataset used by the demo binary.
#[must_use]
pub fn demo_dataset() -> Dataset {
    dataset(
        [("A", 50), ("B", 100), ("C", 75), ("D", 35), ("E", 125)]
            .into_iter()
            .map(|(name, value)| Record::new().with("name", name).with("value", value))
            .collect(),
    )
}

/// Host configuration matching [`demo_dataset`].
#[must_use]
pub fn demo_config() -> Value {
    json!({
        "canvasHeight": 400,
        "graphData": [
            { "name": "A", "value": 50 },
            { "name": "B", "value": 100 },
            { "name": "C", "value": 75 },
            { "name": "D", "value": 35 },
            { "name": "E", "value": 125 }
        ],
        "xDataMetric": "name",
        "yDataMetric": "value"
    })
}
