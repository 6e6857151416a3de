use serde::{Deserialize, Serialize};

use crate::core::{AxisLayout, Datum, Margins};
use crate::render::Scene;

use super::BarChart;
use super::lifecycle::LifecyclePhase;
use super::render_pipeline::BarLayout;

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshot {
    pub lifecycle: LifecyclePhase,
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub margins: Margins,
    pub x_data_metric: String,
    pub y_data_metric: String,
    pub record_count: Option<usize>,
    pub x_domain: Vec<Datum>,
    pub y_domain: (f64, f64),
    pub band_width: f64,
    pub bars: Vec<BarLayout>,
    pub x_axis: Option<AxisLayout>,
    pub y_axis: Option<AxisLayout>,
}

impl<S: Scene> BarChart<S> {
    #[must_use]
    pub fn snapshot(&self) -> ChartSnapshot {
        let scales = self.scales.as_ref();
        ChartSnapshot {
            lifecycle: self.lifecycle.phase(),
            canvas_width: self.config.canvas_width,
            canvas_height: self.config.canvas_height,
            margins: self.config.margins,
            x_data_metric: self.config.x_data_metric.clone(),
            y_data_metric: self.config.y_data_metric.clone(),
            record_count: self.config.graph_data.as_ref().map(|data| data.len()),
            x_domain: scales.map(|scales| scales.x_domain()).unwrap_or_default(),
            y_domain: scales.map_or((0.0, 0.0), |scales| scales.y().domain()),
            band_width: scales.map_or(0.0, |scales| scales.x().band_width()),
            bars: self.bars.clone(),
            x_axis: scales.map(|scales| scales.x_axis.layout()),
            y_axis: scales.map(|scales| scales.y_axis.layout()),
        }
    }
}
