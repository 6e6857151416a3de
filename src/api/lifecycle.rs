use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::ChartResult;
use crate::render::{NodeId, Scene, Translate};

use super::{BarChart, ChartConfig};

/// Persistent scene nodes created once at mount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneGraph {
    pub surface: NodeId,
    pub bars_group: NodeId,
    pub x_axis_group: NodeId,
    pub y_axis_group: NodeId,
    pub(super) bound: Vec<NodeId>,
}

impl SceneGraph {
    fn mount<S: Scene>(
        scene: &mut S,
        container: &str,
        config: &ChartConfig,
    ) -> ChartResult<Self> {
        let margins = config.margins;
        let surface = scene.create_surface(container, config.canvas_width, config.canvas_height)?;
        let bars_group = scene.create_group(surface, None, Translate::new(margins.left, 0.0))?;
        let x_axis_group = scene.create_group(
            surface,
            Some("axis"),
            Translate::new(margins.left, config.canvas_height - margins.bottom),
        )?;
        let y_axis_group =
            scene.create_group(surface, Some("axis"), Translate::new(margins.left, 0.0))?;

        Ok(Self {
            surface,
            bars_group,
            x_axis_group,
            y_axis_group,
            bound: Vec::new(),
        })
    }

    /// Bar shapes bound to the current dataset, in record order.
    ///
    /// Shapes still running their exit transition are not included.
    #[must_use]
    pub fn bound_shapes(&self) -> &[NodeId] {
        &self.bound
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MountPhase {
    Drawn,
    /// Geometry changed by a resize; the next draw applies it.
    ResizedPendingRedraw,
}

/// Mount state of a chart. There is no teardown state: the owner removes
/// the surface from its container when the chart is discarded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ChartLifecycle {
    #[default]
    Unmounted,
    Mounted {
        graph: SceneGraph,
        phase: MountPhase,
    },
}

/// Flattened, serializable view of [`ChartLifecycle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LifecyclePhase {
    Unmounted,
    Drawn,
    ResizedPendingRedraw,
}

impl ChartLifecycle {
    #[must_use]
    pub fn phase(&self) -> LifecyclePhase {
        match self {
            Self::Unmounted => LifecyclePhase::Unmounted,
            Self::Mounted {
                phase: MountPhase::Drawn,
                ..
            } => LifecyclePhase::Drawn,
            Self::Mounted {
                phase: MountPhase::ResizedPendingRedraw,
                ..
            } => LifecyclePhase::ResizedPendingRedraw,
        }
    }

    #[must_use]
    pub fn graph(&self) -> Option<&SceneGraph> {
        match self {
            Self::Unmounted => None,
            Self::Mounted { graph, .. } => Some(graph),
        }
    }
}

impl<S: Scene> BarChart<S> {
    /// Mounts the scene graph inside `container` on first call, then draws.
    ///
    /// Later calls only draw; the surface and groups are never recreated.
    pub fn init_chart(&mut self, container: &str) -> ChartResult<()> {
        if matches!(self.lifecycle, ChartLifecycle::Unmounted) {
            let graph = SceneGraph::mount(&mut self.scene, container, &self.config)?;
            info!(
                container,
                width = self.config.canvas_width,
                height = self.config.canvas_height,
                "chart mounted"
            );
            self.lifecycle = ChartLifecycle::Mounted {
                graph,
                phase: MountPhase::Drawn,
            };
        } else {
            debug!(container, "chart already mounted; redrawing");
        }
        self.draw()
    }

    /// Applies a new container width to a mounted chart.
    ///
    /// The canvas width becomes `floor(width)` and the surface is resized, but
    /// bars and axes keep their geometry until the next draw. `_height` is
    /// accepted for host symmetry; chart height stays configuration-owned.
    /// Before mount this is a no-op.
    pub fn resize_chart(&mut self, width: f64, _height: f64) -> ChartResult<&mut Self> {
        let floored = width.floor();
        if !floored.is_finite() || floored <= 0.0 {
            warn!(width, "ignoring invalid resize width");
            return Ok(self);
        }
        let ChartLifecycle::Mounted { graph, phase } = &mut self.lifecycle else {
            debug!(width, "resize before mount ignored");
            return Ok(self);
        };

        self.scene
            .set_surface_size(graph.surface, floored, self.config.canvas_height)?;
        self.config.canvas_width = floored;
        *phase = MountPhase::ResizedPendingRedraw;
        debug!(width = floored, "chart resized; redraw pending");
        Ok(self)
    }

    #[must_use]
    pub fn lifecycle(&self) -> &ChartLifecycle {
        &self.lifecycle
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        matches!(self.lifecycle, ChartLifecycle::Mounted { .. })
    }
}
