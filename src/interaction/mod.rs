use serde::{Deserialize, Serialize};

use crate::render::NodeId;

/// Hover edges produced by one pointer update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoverChange {
    pub left: Option<NodeId>,
    pub entered: Option<NodeId>,
}

impl HoverChange {
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.left.is_none() && self.entered.is_none()
    }
}

/// Tracks which bar shape is under the pointer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoverState {
    hovered: Option<NodeId>,
}

impl HoverState {
    #[must_use]
    pub fn hovered(self) -> Option<NodeId> {
        self.hovered
    }

    /// Moves hover to `target`, reporting the edges to dispatch.
    pub fn on_pointer_target(&mut self, target: Option<NodeId>) -> HoverChange {
        if self.hovered == target {
            return HoverChange::default();
        }
        let change = HoverChange {
            left: self.hovered,
            entered: target,
        };
        self.hovered = target;
        change
    }

    pub fn on_pointer_leave(&mut self) -> HoverChange {
        self.on_pointer_target(None)
    }

    /// Drops the hovered shape without a leave edge, e.g. after it exited.
    pub fn forget(&mut self) {
        self.hovered = None;
    }
}
