use serde::{Deserialize, Serialize};

pub use crate::core::Color;

/// Group offset in parent coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Translate {
    pub x: f64,
    pub y: f64,
}

impl Translate {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn lerp(self, target: Self, t: f64) -> Self {
        Self::new(
            self.x + (target.x - self.x) * t,
            self.y + (target.y - self.y) * t,
        )
    }
}

/// Decorative attributes fixed when a bar shape is created.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapeStyle {
    pub corner_radius_x: f64,
    pub corner_radius_y: f64,
    pub stroke: Color,
    pub stroke_width: f64,
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            corner_radius_x: 5.0,
            corner_radius_y: 5.0,
            stroke: Color::WHITE,
            stroke_width: 1.0,
        }
    }
}

/// Stroke toggled on pointer enter/leave.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoverStyle {
    pub normal_stroke: Color,
    pub highlight_stroke: Color,
}

impl Default for HoverStyle {
    fn default() -> Self {
        Self {
            normal_stroke: Color::WHITE,
            highlight_stroke: Color::BLACK,
        }
    }
}
