use indexmap::IndexMap;
use tracing::trace;

use crate::core::AxisLayout;
use crate::error::{ChartError, ChartResult};
use crate::render::{
    Attr, HoverStyle, NodeAttributes, NodeId, Scene, ShapeStyle, Transition, Translate,
};

const PROGRESS_EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Surface {
        container: String,
        width: f64,
        height: f64,
    },
    Group,
    Rect,
}

#[derive(Debug, Clone, PartialEq)]
struct ActiveTransition {
    start_ms: f64,
    from: Vec<Attr>,
    transition: Transition,
}

/// One node of a [`RetainedScene`].
#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    pub kind: NodeKind,
    pub class: Option<String>,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    pub attributes: NodeAttributes,
    pub hover_style: Option<HoverStyle>,
    pub hovered: bool,
    pub axis: Option<AxisLayout>,
    active: Option<ActiveTransition>,
}

impl SceneNode {
    fn new(kind: NodeKind, parent: Option<NodeId>) -> Self {
        Self {
            kind,
            class: None,
            parent,
            children: Vec::new(),
            attributes: NodeAttributes::default(),
            hover_style: None,
            hovered: false,
            axis: None,
            active: None,
        }
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    /// Final values of the running transition, or current values when idle.
    #[must_use]
    pub fn target_attributes(&self) -> NodeAttributes {
        let mut target = self.attributes;
        if let Some(active) = &self.active {
            for attr in &active.transition.targets {
                target.apply(*attr);
            }
        }
        target
    }

    #[must_use]
    pub fn is_pending_removal(&self) -> bool {
        self.active
            .as_ref()
            .is_some_and(|active| active.transition.remove_on_end)
    }
}

/// In-memory scene graph with a deterministic clock.
///
/// Transitions advance only through [`RetainedScene::advance`], so headless
/// hosts and tests control animation time explicitly.
#[derive(Debug, Clone, Default)]
pub struct RetainedScene {
    nodes: IndexMap<NodeId, SceneNode>,
    next_id: u64,
    now_ms: f64,
}

impl RetainedScene {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }

    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes.get(&id)
    }

    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Root surfaces in creation order.
    #[must_use]
    pub fn surfaces(&self) -> Vec<NodeId> {
        self.nodes
            .iter()
            .filter(|(_, node)| matches!(node.kind, NodeKind::Surface { .. }))
            .map(|(id, _)| *id)
            .collect()
    }

    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes
            .get(&id)
            .map_or(&[], |node| node.children.as_slice())
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn animating_count(&self) -> usize {
        self.nodes.values().filter(|node| node.is_animating()).count()
    }

    /// Advances the clock, applying and completing due transitions.
    pub fn advance(&mut self, elapsed_ms: f64) {
        if elapsed_ms.is_finite() && elapsed_ms > 0.0 {
            self.now_ms += elapsed_ms;
        }
        let now = self.now_ms;
        let mut finished = Vec::new();

        for (id, node) in &mut self.nodes {
            let Some(active) = &node.active else {
                continue;
            };
            let progress = if active.transition.duration_ms <= 0.0 {
                1.0
            } else {
                let raw = (now - active.start_ms) / active.transition.duration_ms;
                if raw >= 1.0 - PROGRESS_EPSILON {
                    1.0
                } else {
                    raw.clamp(0.0, 1.0)
                }
            };
            let values: Vec<Attr> = if progress >= 1.0 {
                active.transition.targets.to_vec()
            } else {
                let eased = active.transition.easing.apply(progress);
                active
                    .from
                    .iter()
                    .zip(&active.transition.targets)
                    .map(|(from, to)| from.interpolate(*to, eased))
                    .collect()
            };
            for value in values {
                node.attributes.apply(value);
            }
            if progress >= 1.0 {
                let remove = active.transition.remove_on_end;
                node.active = None;
                if remove {
                    finished.push(*id);
                }
            }
        }

        for id in finished {
            trace!(node = id.0, "transition removed node");
            self.detach(id);
        }
    }

    /// Advances until no transition is running.
    pub fn settle(&mut self) {
        let last_end = self
            .nodes
            .values()
            .filter_map(|node| node.active.as_ref())
            .map(|active| active.start_ms + active.transition.duration_ms)
            .fold(self.now_ms, f64::max);
        self.now_ms = last_end;
        self.advance(0.0);
    }

    fn allocate(&mut self, node: SceneNode) -> NodeId {
        self.next_id += 1;
        let id = NodeId(self.next_id);
        if let Some(parent) = node.parent {
            if let Some(parent) = self.nodes.get_mut(&parent) {
                parent.children.push(id);
            }
        }
        self.nodes.insert(id, node);
        id
    }

    fn node_mut(&mut self, id: NodeId) -> ChartResult<&mut SceneNode> {
        self.nodes.get_mut(&id).ok_or(ChartError::UnknownNode(id.0))
    }

    fn detach(&mut self, id: NodeId) {
        let Some(node) = self.nodes.shift_remove(&id) else {
            return;
        };
        if let Some(parent) = node.parent.and_then(|parent| self.nodes.get_mut(&parent)) {
            parent.children.retain(|child| *child != id);
        }
        for child in node.children {
            self.detach(child);
        }
    }
}

impl Scene for RetainedScene {
    fn create_surface(&mut self, container: &str, width: f64, height: f64) -> ChartResult<NodeId> {
        validate_surface_size(width, height)?;
        Ok(self.allocate(SceneNode::new(
            NodeKind::Surface {
                container: container.to_owned(),
                width,
                height,
            },
            None,
        )))
    }

    fn set_surface_size(&mut self, surface: NodeId, width: f64, height: f64) -> ChartResult<()> {
        validate_surface_size(width, height)?;
        match &mut self.node_mut(surface)?.kind {
            NodeKind::Surface {
                width: current_width,
                height: current_height,
                ..
            } => {
                *current_width = width;
                *current_height = height;
                Ok(())
            }
            _ => Err(ChartError::Scene(format!(
                "node {} is not a surface",
                surface.0
            ))),
        }
    }

    fn create_group(
        &mut self,
        parent: NodeId,
        class: Option<&str>,
        transform: Translate,
    ) -> ChartResult<NodeId> {
        self.node_mut(parent)?;
        let mut node = SceneNode::new(NodeKind::Group, Some(parent));
        node.class = class.map(str::to_owned);
        node.attributes.transform = transform;
        Ok(self.allocate(node))
    }

    fn append_shape(&mut self, group: NodeId, style: ShapeStyle) -> ChartResult<NodeId> {
        self.node_mut(group)?;
        let mut node = SceneNode::new(NodeKind::Rect, Some(group));
        node.attributes.corner_radius_x = style.corner_radius_x;
        node.attributes.corner_radius_y = style.corner_radius_y;
        node.attributes.stroke = Some(style.stroke);
        node.attributes.stroke_width = style.stroke_width;
        Ok(self.allocate(node))
    }

    fn remove_shape(&mut self, shape: NodeId) -> ChartResult<()> {
        self.node_mut(shape)?;
        self.detach(shape);
        Ok(())
    }

    fn set_attribute(&mut self, node: NodeId, attr: Attr) -> ChartResult<()> {
        self.node_mut(node)?.attributes.apply(attr);
        Ok(())
    }

    fn animate(&mut self, node: NodeId, transition: Transition) -> ChartResult<()> {
        let start_ms = self.now_ms;
        let target = self.node_mut(node)?;
        let from = transition
            .targets
            .iter()
            .map(|attr| target.attributes.read(attr.kind()))
            .collect();
        if target.active.is_some() {
            trace!(node = node.0, "superseding running transition");
        }
        target.active = Some(ActiveTransition {
            start_ms,
            from,
            transition,
        });
        Ok(())
    }

    fn set_hover_style(&mut self, shape: NodeId, style: HoverStyle) -> ChartResult<()> {
        self.node_mut(shape)?.hover_style = Some(style);
        Ok(())
    }

    fn dispatch_hover(&mut self, shape: NodeId, hovered: bool) -> ChartResult<()> {
        let node = self.node_mut(shape)?;
        let Some(style) = node.hover_style else {
            return Ok(());
        };
        node.hovered = hovered;
        node.attributes.stroke = Some(if hovered {
            style.highlight_stroke
        } else {
            style.normal_stroke
        });
        Ok(())
    }

    fn render_axis(&mut self, group: NodeId, layout: &AxisLayout) -> ChartResult<()> {
        self.node_mut(group)?.axis = Some(layout.clone());
        Ok(())
    }
}

fn validate_surface_size(width: f64, height: f64) -> ChartResult<()> {
    if width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0 {
        return Ok(());
    }
    Err(ChartError::InvalidViewport { width, height })
}
