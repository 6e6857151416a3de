use tracing::{debug, trace};

use crate::core::Dataset;
use crate::error::ChartResult;
use crate::interaction::HoverState;
use crate::render::Scene;

use super::lifecycle::{ChartLifecycle, MountPhase};
use super::render_pipeline::{self, BarLayout, JoinSummary};
use super::{ChartConfig, ChartScales};

/// Stateful bar chart bound to one scene.
///
/// Configuration is mutated through chained setters, the scene graph is
/// mounted once with [`BarChart::init_chart`], and every [`BarChart::render`]
/// reconciles bars against the current dataset in place. Draw state (scales,
/// bound shapes) is consistent as soon as a call returns; the transitions it
/// schedules complete later on the scene's own clock.
pub struct BarChart<S: Scene> {
    pub(super) scene: S,
    pub(super) config: ChartConfig,
    pub(super) lifecycle: ChartLifecycle,
    pub(super) scales: Option<ChartScales>,
    pub(super) bars: Vec<BarLayout>,
    pub(super) last_join: Option<JoinSummary>,
    pub(super) hover: HoverState,
}

impl<S: Scene> BarChart<S> {
    /// Creates an unmounted chart with default configuration.
    #[must_use]
    pub fn new(scene: S) -> Self {
        Self::with_config(scene, ChartConfig::default())
    }

    #[must_use]
    pub fn with_config(scene: S, config: ChartConfig) -> Self {
        Self {
            scene,
            config,
            lifecycle: ChartLifecycle::Unmounted,
            scales: None,
            bars: Vec::new(),
            last_join: None,
            hover: HoverState::default(),
        }
    }

    /// Main entry point: replaces the dataset when one is given, then draws.
    pub fn render(&mut self, data: Option<Dataset>) -> ChartResult<()> {
        if let Some(data) = data {
            trace!(records = data.len(), "replacing graph data");
            self.config.graph_data = Some(data);
        }
        self.draw()
    }

    /// Rebuilds scales and reconciles the scene with the stored dataset.
    ///
    /// Skipped entirely while the dataset is undefined. Before mount only the
    /// scales are recomputed.
    pub fn draw(&mut self) -> ChartResult<()> {
        let Some(data) = self.config.graph_data.clone() else {
            debug!("graph data undefined; skipping draw");
            return Ok(());
        };

        let scales = ChartScales::build(&self.config, &data);
        let layouts = render_pipeline::bar_layouts(&self.config, &data, &scales);

        if let ChartLifecycle::Mounted { graph, phase } = &mut self.lifecycle {
            let summary =
                render_pipeline::handle_bars(&mut self.scene, graph, &self.config, &layouts)?;
            render_pipeline::call_axes(&mut self.scene, graph, &self.config, &scales)?;
            *phase = MountPhase::Drawn;

            if let Some(hovered) = self.hover.hovered() {
                if !graph.bound_shapes().contains(&hovered) {
                    // still in the scene while its exit transition runs
                    self.scene.dispatch_hover(hovered, false)?;
                    self.hover.forget();
                }
            }
            debug!(
                records = data.len(),
                entered = summary.entered,
                updated = summary.updated,
                exited = summary.exited,
                "chart drawn"
            );
            self.last_join = Some(summary);
        } else {
            debug!(records = data.len(), "chart not mounted; scales rebuilt only");
        }

        self.scales = Some(scales);
        self.bars = layouts;
        Ok(())
    }

    /// Scales computed by the most recent draw.
    #[must_use]
    pub fn scales(&self) -> Option<&ChartScales> {
        self.scales.as_ref()
    }

    /// Target geometry of each bar after the most recent draw.
    #[must_use]
    pub fn bar_layouts(&self) -> &[BarLayout] {
        &self.bars
    }

    /// Enter/update/exit counts of the most recent mounted draw.
    #[must_use]
    pub fn last_join(&self) -> Option<JoinSummary> {
        self.last_join
    }

    #[must_use]
    pub fn scene(&self) -> &S {
        &self.scene
    }

    /// Mutable scene access, e.g. to advance a retained scene's clock.
    pub fn scene_mut(&mut self) -> &mut S {
        &mut self.scene
    }

    #[must_use]
    pub fn into_scene(self) -> S {
        self.scene
    }
}
