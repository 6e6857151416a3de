use tracing::trace;

use crate::error::ChartResult;
use crate::interaction::HoverChange;
use crate::render::{NodeId, Scene};

use super::BarChart;

impl<S: Scene> BarChart<S> {
    /// Hit-tests bound bars at surface coordinates and dispatches hover edges.
    ///
    /// Bars are tested against their target geometry; the last bar drawn wins
    /// on overlap.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> ChartResult<Option<NodeId>> {
        let target = self.bar_at(x, y);
        let change = self.hover.on_pointer_target(target);
        self.dispatch_hover_change(change)?;
        Ok(target)
    }

    pub fn pointer_leave(&mut self) -> ChartResult<()> {
        let change = self.hover.on_pointer_leave();
        self.dispatch_hover_change(change)
    }

    #[must_use]
    pub fn hovered_bar(&self) -> Option<NodeId> {
        self.hover.hovered()
    }

    fn bar_at(&self, x: f64, y: f64) -> Option<NodeId> {
        let graph = self.lifecycle.graph()?;
        let local_x = x - self.config.margins.left;
        graph
            .bound_shapes()
            .iter()
            .zip(&self.bars)
            .rev()
            .find(|(_, layout)| layout.contains(local_x, y))
            .map(|(shape, _)| *shape)
    }

    fn dispatch_hover_change(&mut self, change: HoverChange) -> ChartResult<()> {
        if let Some(left) = change.left {
            trace!(shape = left.0, "hover out");
            self.scene.dispatch_hover(left, false)?;
        }
        if let Some(entered) = change.entered {
            trace!(shape = entered.0, "hover in");
            self.scene.dispatch_hover(entered, true)?;
        }
        Ok(())
    }
}
