use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, warn};

use crate::core::{ColorScale, Dataset, Datum, Margins, MarginsPatch, XTickFormat, YTickFormat};
use crate::render::Scene;

use super::{BarChart, ChartConfig, ChartConfigPatch, ConfigProperty};

impl<S: Scene> BarChart<S> {
    /// Canonical names of every configurable property.
    #[must_use]
    pub fn configurable_properties() -> &'static [ConfigProperty] {
        &ConfigProperty::ALL
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    #[must_use]
    pub fn canvas_height(&self) -> f64 {
        self.config.canvas_height
    }

    /// Sets the canvas height; non-finite or non-positive values are ignored.
    pub fn set_canvas_height(&mut self, height: f64) -> &mut Self {
        if accept_dimension("canvasHeight", height) {
            self.config.canvas_height = height;
        }
        self
    }

    #[must_use]
    pub fn canvas_width(&self) -> f64 {
        self.config.canvas_width
    }

    /// Sets the canvas width; non-finite or non-positive values are ignored.
    pub fn set_canvas_width(&mut self, width: f64) -> &mut Self {
        if accept_dimension("canvasWidth", width) {
            self.config.canvas_width = width;
        }
        self
    }

    #[must_use]
    pub fn color_scale(&self) -> &ColorScale {
        &self.config.color_scale
    }

    pub fn set_color_scale(&mut self, scale: ColorScale) -> &mut Self {
        self.config.color_scale = scale;
        self
    }

    /// Stored dataset, or `None` while undefined.
    #[must_use]
    pub fn graph_data(&self) -> Option<&Dataset> {
        self.config.graph_data.as_ref()
    }

    /// Stores a dataset without drawing.
    pub fn set_graph_data(&mut self, data: Dataset) -> &mut Self {
        self.config.graph_data = Some(data);
        self
    }

    /// Marks the dataset undefined; draws are skipped until data is set again.
    pub fn clear_graph_data(&mut self) -> &mut Self {
        self.config.graph_data = None;
        self
    }

    #[must_use]
    pub fn margins(&self) -> Margins {
        self.config.margins
    }

    /// Merges the given sides into the current margins.
    ///
    /// Sides that are non-finite or negative keep their prior value.
    pub fn set_margins(&mut self, margins: impl Into<MarginsPatch>) -> &mut Self {
        let rejected = self.config.margins.merge(margins.into());
        if !rejected.is_empty() {
            warn!(sides = ?rejected, "ignoring invalid margin values");
        }
        self
    }

    #[must_use]
    pub fn x_data_metric(&self) -> &str {
        &self.config.x_data_metric
    }

    pub fn set_x_data_metric(&mut self, field: impl Into<String>) -> &mut Self {
        self.config.x_data_metric = field.into();
        self
    }

    #[must_use]
    pub fn x_tick_format(&self) -> &XTickFormat {
        &self.config.x_tick_format
    }

    pub fn set_x_tick_format(
        &mut self,
        format: impl Fn(&Datum) -> String + Send + Sync + 'static,
    ) -> &mut Self {
        self.config.x_tick_format = Arc::new(format);
        self
    }

    #[must_use]
    pub fn y_data_metric(&self) -> &str {
        &self.config.y_data_metric
    }

    pub fn set_y_data_metric(&mut self, field: impl Into<String>) -> &mut Self {
        self.config.y_data_metric = field.into();
        self
    }

    #[must_use]
    pub fn y_tick_format(&self) -> &YTickFormat {
        &self.config.y_tick_format
    }

    pub fn set_y_tick_format(
        &mut self,
        format: impl Fn(f64, usize) -> String + Send + Sync + 'static,
    ) -> &mut Self {
        self.config.y_tick_format = Arc::new(format);
        self
    }

    /// Applies every property carried by `patch` through its setter.
    pub fn apply_patch(&mut self, patch: ChartConfigPatch) -> &mut Self {
        debug!(properties = ?patch.properties(), "applying chart configuration");
        if let Some(height) = patch.canvas_height {
            self.set_canvas_height(height);
        }
        if let Some(width) = patch.canvas_width {
            self.set_canvas_width(width);
        }
        if let Some(scale) = patch.color_scale {
            self.set_color_scale(scale);
        }
        if let Some(data) = patch.graph_data {
            self.set_graph_data(data);
        }
        if let Some(margins) = patch.margins {
            self.set_margins(margins);
        }
        if let Some(field) = patch.x_data_metric {
            self.set_x_data_metric(field);
        }
        if let Some(format) = patch.x_tick_format {
            self.config.x_tick_format = format;
        }
        if let Some(field) = patch.y_data_metric {
            self.set_y_data_metric(field);
        }
        if let Some(format) = patch.y_tick_format {
            self.config.y_tick_format = format;
        }
        self
    }

    /// Applies the recognized keys of a JSON configuration object.
    ///
    /// Unknown keys have no effect.
    pub fn apply_json_config(&mut self, config: &Value) -> &mut Self {
        self.apply_patch(ChartConfigPatch::from_json(config))
    }
}

fn accept_dimension(property: &'static str, value: f64) -> bool {
    if value.is_finite() && value > 0.0 {
        return true;
    }
    warn!(property, value, "ignoring invalid canvas dimension");
    false
}
