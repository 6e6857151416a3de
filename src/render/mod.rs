mod attributes;
mod data_join;
mod primitives;
mod retained_scene;
pub mod svg;
mod transition;

use serde::{Deserialize, Serialize};

pub use attributes::{Attr, AttrKind, NodeAttributes};
pub use data_join::DataJoin;
pub use primitives::{Color, HoverStyle, ShapeStyle, Translate};
pub use retained_scene::{NodeKind, RetainedScene, SceneNode};
pub use transition::{AXIS_TRANSITION_MS, BAR_TRANSITION_MS, Easing, Transition};

use crate::core::AxisLayout;
use crate::error::ChartResult;

/// Stable handle of a node inside a scene graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u64);

/// Capability contract implemented by any retained drawing backend.
///
/// The chart engine only mutates the scene through this trait, so scale and
/// reconciliation logic stay independent of the concrete UI layer. Nodes are
/// persistent: the engine keeps their ids across draws and mutates them in
/// place.
pub trait Scene {
    /// Creates the root drawing surface inside `container`.
    fn create_surface(&mut self, container: &str, width: f64, height: f64) -> ChartResult<NodeId>;

    fn set_surface_size(&mut self, surface: NodeId, width: f64, height: f64) -> ChartResult<()>;

    fn create_group(
        &mut self,
        parent: NodeId,
        class: Option<&str>,
        transform: Translate,
    ) -> ChartResult<NodeId>;

    /// Appends a rectangle shape to `group` with fixed decorative attributes.
    fn append_shape(&mut self, group: NodeId, style: ShapeStyle) -> ChartResult<NodeId>;

    /// Removes a shape immediately.
    fn remove_shape(&mut self, shape: NodeId) -> ChartResult<()>;

    /// Sets an attribute without animation.
    fn set_attribute(&mut self, node: NodeId, attr: Attr) -> ChartResult<()>;

    /// Schedules an attribute transition; returns before it completes.
    fn animate(&mut self, node: NodeId, transition: Transition) -> ChartResult<()>;

    /// Registers hover-in/hover-out stroke toggling on a shape.
    fn set_hover_style(&mut self, shape: NodeId, style: HoverStyle) -> ChartResult<()>;

    /// Delivers a pointer enter (`true`) or leave (`false`) to a shape.
    fn dispatch_hover(&mut self, shape: NodeId, hovered: bool) -> ChartResult<()>;

    /// Redraws ticks and labels of an axis group.
    fn render_axis(&mut self, group: NodeId, layout: &AxisLayout) -> ChartResult<()>;
}
