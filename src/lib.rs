//! bar-chart-rs: incremental bar chart engine over a retained scene graph.
//!
//! The engine derives a categorical x scale and a linear y scale from a
//! dataset, reconciles bar shapes with enter/update/exit semantics, and
//! animates changes through the [`render::Scene`] capability contract.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{BarChart, ChartConfig, ChartConfigPatch, ChartHost};
pub use error::{ChartError, ChartResult};
