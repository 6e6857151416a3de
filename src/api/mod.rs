mod engine;
mod engine_accessors;
mod engine_config;
mod engine_snapshot;
mod host;
mod interaction_controller;
mod json_contract;
mod lifecycle;
mod render_pipeline;
mod scale_builder;

pub use engine::BarChart;
pub use engine_config::{ChartConfig, ChartConfigPatch, ConfigProperty};
pub use engine_snapshot::ChartSnapshot;
pub use host::{ChartHost, demo_config, demo_dataset};
pub use json_contract::{CHART_SNAPSHOT_JSON_SCHEMA_V1, ChartSnapshotJsonContractV1};
pub use lifecycle::{ChartLifecycle, LifecyclePhase, MountPhase, SceneGraph};
pub use render_pipeline::{BarLayout, JoinSummary};
pub use scale_builder::ChartScales;
