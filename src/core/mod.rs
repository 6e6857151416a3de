pub mod axis;
pub mod band_scale;
pub mod color;
pub mod scale;
pub mod types;

pub use axis::{
    AxisDescriptor, AxisLayout, AxisOrient, AxisTick, XAxis, XTickFormat, YAxis, YTickFormat,
};
pub use band_scale::BandScale;
pub use color::{Color, ColorScale};
pub use scale::LinearScale;
pub use types::{Dataset, Datum, DatumKey, Margins, MarginsPatch, Record, dataset, same_dataset};
