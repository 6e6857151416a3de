use crate::core::{AxisDescriptor, AxisOrient, BandScale, Datum, LinearScale, Record, XAxis, YAxis};

use super::ChartConfig;

/// Scales and axis descriptors derived for one draw.
///
/// Rebuilt from scratch on every draw; nothing here is cached across
/// dataset or dimension changes.
#[derive(Debug, Clone)]
pub struct ChartScales {
    pub x_axis: XAxis,
    pub y_axis: YAxis,
}

impl ChartScales {
    /// Derives both scales from `config` and `records`.
    ///
    /// Records with a missing or non-numeric metric are skipped when
    /// computing the y maximum; an empty or all-skipped dataset yields the
    /// domain `[0, 0]`.
    #[must_use]
    pub fn build(config: &ChartConfig, records: &[Record]) -> Self {
        let margins = config.margins;
        let plot_width = (config.canvas_width - margins.left - margins.right).max(0.0);
        let labels = records
            .iter()
            .map(|record| record.label_key(&config.x_data_metric));
        let x = BandScale::new(labels, (0.0, plot_width));

        let max = records
            .iter()
            .filter_map(|record| record.metric(&config.y_data_metric))
            .reduce(f64::max)
            .unwrap_or(0.0);
        let y = LinearScale::new(
            (0.0, max),
            (config.canvas_height - margins.bottom, margins.top),
        );

        Self {
            x_axis: XAxis {
                descriptor: AxisDescriptor::new(AxisOrient::Bottom),
                scale: x,
                format: config.x_tick_format.clone(),
            },
            y_axis: YAxis {
                descriptor: AxisDescriptor::new(AxisOrient::Left),
                scale: y,
                format: config.y_tick_format.clone(),
            },
        }
    }

    #[must_use]
    pub fn x(&self) -> &BandScale {
        &self.x_axis.scale
    }

    #[must_use]
    pub fn y(&self) -> LinearScale {
        self.y_axis.scale
    }

    /// X domain as data values, in first-seen order.
    #[must_use]
    pub fn x_domain(&self) -> Vec<Datum> {
        self.x().domain().iter().map(|key| key.to_datum()).collect()
    }
}
