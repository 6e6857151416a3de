use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::core::band_scale::BandScale;
use crate::core::scale::LinearScale;
use crate::core::types::Datum;

/// Default tick length, in pixels.
pub const AXIS_TICK_SIZE_PX: f64 = 3.0;
/// Default gap between tick and label, in pixels.
pub const AXIS_TICK_PADDING_PX: f64 = 3.0;
/// Approximate tick count requested from the linear axis.
pub const AXIS_LINEAR_TICK_COUNT: usize = 10;

/// Formats one categorical tick label.
pub type XTickFormat = Arc<dyn Fn(&Datum) -> String + Send + Sync>;
/// Formats one numeric tick label from its value and index.
pub type YTickFormat = Arc<dyn Fn(f64, usize) -> String + Send + Sync>;

#[must_use]
pub fn default_x_tick_format() -> XTickFormat {
    Arc::new(|value: &Datum| value.to_string())
}

#[must_use]
pub fn default_y_tick_format() -> YTickFormat {
    Arc::new(|value: f64, _index: usize| value.to_string())
}

/// Side of the plot an axis is drawn on; ticks point away from the plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisOrient {
    Top,
    Right,
    Bottom,
    Left,
}

impl AxisOrient {
    #[must_use]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }

    /// Sign applied to tick length along the cross axis.
    #[must_use]
    pub fn outward_sign(self) -> f64 {
        match self {
            Self::Top | Self::Left => -1.0,
            Self::Bottom | Self::Right => 1.0,
        }
    }
}

/// Tick geometry shared by both axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisDescriptor {
    pub orient: AxisOrient,
    pub tick_size: f64,
    pub tick_padding: f64,
}

impl AxisDescriptor {
    #[must_use]
    pub const fn new(orient: AxisOrient) -> Self {
        Self {
            orient,
            tick_size: AXIS_TICK_SIZE_PX,
            tick_padding: AXIS_TICK_PADDING_PX,
        }
    }
}

/// One materialized tick in axis-group coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTick {
    pub position: f64,
    pub label: String,
}

/// Fully resolved axis content handed to the scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisLayout {
    pub descriptor: AxisDescriptor,
    /// Extent of the domain line along the axis.
    pub range: (f64, f64),
    pub ticks: Vec<AxisTick>,
}

/// Bottom categorical axis over a band scale.
#[derive(Clone)]
pub struct XAxis {
    pub descriptor: AxisDescriptor,
    pub scale: BandScale,
    pub format: XTickFormat,
}

impl XAxis {
    /// Ticks sit at band centers, one per distinct label.
    #[must_use]
    pub fn layout(&self) -> AxisLayout {
        let ticks = self
            .scale
            .domain()
            .iter()
            .filter_map(|label| {
                self.scale.center(label).map(|position| AxisTick {
                    position,
                    label: (self.format)(&label.to_datum()),
                })
            })
            .collect();
        AxisLayout {
            descriptor: self.descriptor,
            range: self.scale.range(),
            ticks,
        }
    }
}

impl fmt::Debug for XAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("XAxis")
            .field("descriptor", &self.descriptor)
            .field("scale", &self.scale)
            .finish_non_exhaustive()
    }
}

/// Left linear axis.
#[derive(Clone)]
pub struct YAxis {
    pub descriptor: AxisDescriptor,
    pub scale: LinearScale,
    pub format: YTickFormat,
}

impl YAxis {
    #[must_use]
    pub fn layout(&self) -> AxisLayout {
        let ticks = self
            .scale
            .ticks(AXIS_LINEAR_TICK_COUNT)
            .into_iter()
            .enumerate()
            .map(|(index, value)| AxisTick {
                position: self.scale.apply(value),
                label: (self.format)(value, index),
            })
            .collect();
        AxisLayout {
            descriptor: self.descriptor,
            range: self.scale.range(),
            ticks,
        }
    }
}

impl fmt::Debug for YAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("YAxis")
            .field("descriptor", &self.descriptor)
            .field("scale", &self.scale)
            .finish_non_exhaustive()
    }
}
