use std::fmt;
use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, warn};

use crate::core::axis::{default_x_tick_format, default_y_tick_format};
use crate::core::{
    Color, ColorScale, Dataset, Datum, Margins, MarginsPatch, Record, XTickFormat, YTickFormat,
    dataset,
};

/// Canonical configurable chart properties.
///
/// Names are the camelCase keys accepted by the bulk-apply path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigProperty {
    CanvasHeight,
    CanvasWidth,
    ColorScale,
    GraphData,
    Margins,
    XDataMetric,
    XTickFormat,
    YDataMetric,
    YTickFormat,
}

impl ConfigProperty {
    pub const ALL: [Self; 9] = [
        Self::CanvasHeight,
        Self::CanvasWidth,
        Self::ColorScale,
        Self::GraphData,
        Self::Margins,
        Self::XDataMetric,
        Self::XTickFormat,
        Self::YDataMetric,
        Self::YTickFormat,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::CanvasHeight => "canvasHeight",
            Self::CanvasWidth => "canvasWidth",
            Self::ColorScale => "colorScale",
            Self::GraphData => "graphData",
            Self::Margins => "margins",
            Self::XDataMetric => "xDataMetric",
            Self::XTickFormat => "xTickFormat",
            Self::YDataMetric => "yDataMetric",
            Self::YTickFormat => "yTickFormat",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|property| property.name() == name)
    }
}

impl fmt::Display for ConfigProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Current chart parameters.
///
/// `graph_data == None` means the dataset is undefined and draws are skipped.
#[derive(Clone)]
pub struct ChartConfig {
    pub canvas_height: f64,
    pub canvas_width: f64,
    pub color_scale: ColorScale,
    pub graph_data: Option<Dataset>,
    pub margins: Margins,
    pub x_data_metric: String,
    pub x_tick_format: XTickFormat,
    pub y_data_metric: String,
    pub y_tick_format: YTickFormat,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            canvas_height: 400.0,
            canvas_width: 400.0,
            color_scale: ColorScale::default(),
            graph_data: Some(dataset(Vec::new())),
            margins: Margins::default(),
            x_data_metric: "name".to_owned(),
            x_tick_format: default_x_tick_format(),
            y_data_metric: "value".to_owned(),
            y_tick_format: default_y_tick_format(),
        }
    }
}

impl fmt::Debug for ChartConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChartConfig")
            .field("canvas_height", &self.canvas_height)
            .field("canvas_width", &self.canvas_width)
            .field("color_scale", &self.color_scale)
            .field("graph_data_len", &self.graph_data.as_ref().map(|data| data.len()))
            .field("margins", &self.margins)
            .field("x_data_metric", &self.x_data_metric)
            .field("y_data_metric", &self.y_data_metric)
            .finish_non_exhaustive()
    }
}

/// Typed partial configuration; absent fields keep their current value.
#[derive(Clone, Default)]
pub struct ChartConfigPatch {
    pub canvas_height: Option<f64>,
    pub canvas_width: Option<f64>,
    pub color_scale: Option<ColorScale>,
    pub graph_data: Option<Dataset>,
    pub margins: Option<MarginsPatch>,
    pub x_data_metric: Option<String>,
    pub x_tick_format: Option<XTickFormat>,
    pub y_data_metric: Option<String>,
    pub y_tick_format: Option<YTickFormat>,
}

impl ChartConfigPatch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn canvas_height(mut self, value: f64) -> Self {
        self.canvas_height = Some(value);
        self
    }

    #[must_use]
    pub fn canvas_width(mut self, value: f64) -> Self {
        self.canvas_width = Some(value);
        self
    }

    #[must_use]
    pub fn color_scale(mut self, scale: ColorScale) -> Self {
        self.color_scale = Some(scale);
        self
    }

    #[must_use]
    pub fn graph_data(mut self, data: Dataset) -> Self {
        self.graph_data = Some(data);
        self
    }

    #[must_use]
    pub fn margins(mut self, margins: impl Into<MarginsPatch>) -> Self {
        self.margins = Some(margins.into());
        self
    }

    #[must_use]
    pub fn x_data_metric(mut self, field: impl Into<String>) -> Self {
        self.x_data_metric = Some(field.into());
        self
    }

    #[must_use]
    pub fn x_tick_format(
        mut self,
        format: impl Fn(&Datum) -> String + Send + Sync + 'static,
    ) -> Self {
        self.x_tick_format = Some(Arc::new(format));
        self
    }

    #[must_use]
    pub fn y_data_metric(mut self, field: impl Into<String>) -> Self {
        self.y_data_metric = Some(field.into());
        self
    }

    #[must_use]
    pub fn y_tick_format(
        mut self,
        format: impl Fn(f64, usize) -> String + Send + Sync + 'static,
    ) -> Self {
        self.y_tick_format = Some(Arc::new(format));
        self
    }

    /// Properties carried by this patch, in canonical order.
    #[must_use]
    pub fn properties(&self) -> Vec<ConfigProperty> {
        ConfigProperty::ALL
            .into_iter()
            .filter(|property| self.contains(*property))
            .collect()
    }

    #[must_use]
    pub fn contains(&self, property: ConfigProperty) -> bool {
        match property {
            ConfigProperty::CanvasHeight => self.canvas_height.is_some(),
            ConfigProperty::CanvasWidth => self.canvas_width.is_some(),
            ConfigProperty::ColorScale => self.color_scale.is_some(),
            ConfigProperty::GraphData => self.graph_data.is_some(),
            ConfigProperty::Margins => self.margins.is_some(),
            ConfigProperty::XDataMetric => self.x_data_metric.is_some(),
            ConfigProperty::XTickFormat => self.x_tick_format.is_some(),
            ConfigProperty::YDataMetric => self.y_data_metric.is_some(),
            ConfigProperty::YTickFormat => self.y_tick_format.is_some(),
        }
    }

    /// Reads recognized keys of a JSON object.
    ///
    /// Unknown keys and values of the wrong shape are skipped with a log line.
    /// Numeric strings are accepted for numeric properties. Tick formatters
    /// cannot be expressed in JSON and are always skipped.
    #[must_use]
    pub fn from_json(config: &Value) -> Self {
        let mut patch = Self::default();
        let Some(entries) = config.as_object() else {
            warn!("ignoring non-object chart configuration");
            return patch;
        };

        for (key, value) in entries {
            let Some(property) = ConfigProperty::from_name(key) else {
                debug!(key = %key, "ignoring unrecognized chart configuration key");
                continue;
            };
            let applied = match property {
                ConfigProperty::CanvasHeight => {
                    patch.canvas_height = json_number(value);
                    patch.canvas_height.is_some()
                }
                ConfigProperty::CanvasWidth => {
                    patch.canvas_width = json_number(value);
                    patch.canvas_width.is_some()
                }
                ConfigProperty::ColorScale => {
                    patch.color_scale = json_palette(value);
                    patch.color_scale.is_some()
                }
                ConfigProperty::GraphData => {
                    patch.graph_data = serde_json::from_value::<Vec<Record>>(value.clone())
                        .ok()
                        .map(dataset);
                    patch.graph_data.is_some()
                }
                ConfigProperty::Margins => {
                    patch.margins = serde_json::from_value::<MarginsPatch>(value.clone()).ok();
                    patch.margins.is_some()
                }
                ConfigProperty::XDataMetric => {
                    patch.x_data_metric = value.as_str().map(str::to_owned);
                    patch.x_data_metric.is_some()
                }
                ConfigProperty::YDataMetric => {
                    patch.y_data_metric = value.as_str().map(str::to_owned);
                    patch.y_data_metric.is_some()
                }
                ConfigProperty::XTickFormat | ConfigProperty::YTickFormat => {
                    debug!(
                        property = %property,
                        "tick formatters are not configurable from json"
                    );
                    continue;
                }
            };
            if !applied {
                warn!(
                    property = %property,
                    value = %value,
                    "ignoring malformed chart configuration value"
                );
            }
        }

        patch
    }
}

impl fmt::Debug for ChartConfigPatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChartConfigPatch")
            .field("properties", &self.properties())
            .finish()
    }
}

fn json_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    }
}

fn json_palette(value: &Value) -> Option<ColorScale> {
    let colors = value
        .as_array()?
        .iter()
        .map(|entry| entry.as_str().and_then(|hex| Color::from_hex(hex).ok()))
        .collect::<Option<Vec<Color>>>()?;
    if colors.is_empty() {
        return None;
    }
    Some(ColorScale::palette(colors))
}

#[cfg(test)]
mod tests {
    use super::{ChartConfigPatch, ConfigProperty};
    use serde_json::json;

    #[test]
    fn property_names_round_trip() {
        for property in ConfigProperty::ALL {
            assert_eq!(ConfigProperty::from_name(property.name()), Some(property));
        }
        assert_eq!(ConfigProperty::from_name("canvas_height"), None);
    }

    #[test]
    fn json_patch_keeps_only_recognized_well_formed_keys() {
        let patch = ChartConfigPatch::from_json(&json!({
            "canvasHeight": "320",
            "canvasWidth": "wide",
            "margins": { "left": 30 },
            "colorScale": ["#ff0000", "#00ff00"],
            "yTickFormat": "ignored",
            "bogus": 1
        }));
        assert_eq!(
            patch.properties(),
            vec![
                ConfigProperty::CanvasHeight,
                ConfigProperty::ColorScale,
                ConfigProperty::Margins
            ]
        );
        assert_eq!(patch.canvas_height, Some(320.0));
        assert_eq!(patch.margins.and_then(|margins| margins.left), Some(30.0));
    }
}
