use serde::{Deserialize, Serialize};

use crate::render::primitives::{Color, Translate};

/// Discriminant of an animatable attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttrKind {
    X,
    Y,
    Width,
    Height,
    Fill,
    Transform,
}

/// Animatable attribute together with its value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Attr {
    X(f64),
    Y(f64),
    Width(f64),
    Height(f64),
    Fill(Color),
    Transform(Translate),
}

impl Attr {
    #[must_use]
    pub fn kind(self) -> AttrKind {
        match self {
            Self::X(_) => AttrKind::X,
            Self::Y(_) => AttrKind::Y,
            Self::Width(_) => AttrKind::Width,
            Self::Height(_) => AttrKind::Height,
            Self::Fill(_) => AttrKind::Fill,
            Self::Transform(_) => AttrKind::Transform,
        }
    }

    /// Value between `self` and `target` at eased progress `t`.
    ///
    /// Mismatched kinds snap to `target`.
    #[must_use]
    pub fn interpolate(self, target: Self, t: f64) -> Self {
        let mix = |from: f64, to: f64| from + (to - from) * t;
        match (self, target) {
            (Self::X(from), Self::X(to)) => Self::X(mix(from, to)),
            (Self::Y(from), Self::Y(to)) => Self::Y(mix(from, to)),
            (Self::Width(from), Self::Width(to)) => Self::Width(mix(from, to)),
            (Self::Height(from), Self::Height(to)) => Self::Height(mix(from, to)),
            (Self::Fill(from), Self::Fill(to)) => Self::Fill(from.lerp(to, t)),
            (Self::Transform(from), Self::Transform(to)) => Self::Transform(from.lerp(to, t)),
            (_, target) => target,
        }
    }
}

/// Current attribute state of one scene node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NodeAttributes {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Option<Color>,
    pub stroke: Option<Color>,
    pub stroke_width: f64,
    pub corner_radius_x: f64,
    pub corner_radius_y: f64,
    pub transform: Translate,
}

impl Default for NodeAttributes {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
            fill: None,
            stroke: None,
            stroke_width: 0.0,
            corner_radius_x: 0.0,
            corner_radius_y: 0.0,
            transform: Translate::default(),
        }
    }
}

impl NodeAttributes {
    /// Reads an attribute; an unset fill reads as black.
    #[must_use]
    pub fn read(&self, kind: AttrKind) -> Attr {
        match kind {
            AttrKind::X => Attr::X(self.x),
            AttrKind::Y => Attr::Y(self.y),
            AttrKind::Width => Attr::Width(self.width),
            AttrKind::Height => Attr::Height(self.height),
            AttrKind::Fill => Attr::Fill(self.fill.unwrap_or(Color::BLACK)),
            AttrKind::Transform => Attr::Transform(self.transform),
        }
    }

    pub fn apply(&mut self, attr: Attr) {
        match attr {
            Attr::X(value) => self.x = value,
            Attr::Y(value) => self.y = value,
            Attr::Width(value) => self.width = value,
            Attr::Height(value) => self.height = value,
            Attr::Fill(color) => self.fill = Some(color),
            Attr::Transform(translate) => self.transform = translate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Attr, AttrKind, NodeAttributes};
    use crate::render::primitives::{Color, Translate};

    #[test]
    fn interpolation_is_linear_per_kind() {
        assert_eq!(Attr::Width(0.0).interpolate(Attr::Width(10.0), 0.5), Attr::Width(5.0));
        assert_eq!(
            Attr::Transform(Translate::new(0.0, 0.0))
                .interpolate(Attr::Transform(Translate::new(50.0, 100.0)), 0.25),
            Attr::Transform(Translate::new(12.5, 25.0))
        );
        assert_eq!(Attr::X(3.0).interpolate(Attr::Y(9.0), 0.1), Attr::Y(9.0));
    }

    #[test]
    fn unset_fill_reads_as_black() {
        let mut attrs = NodeAttributes::default();
        assert_eq!(attrs.read(AttrKind::Fill), Attr::Fill(Color::BLACK));
        attrs.apply(Attr::Fill(Color::WHITE));
        assert_eq!(attrs.fill, Some(Color::WHITE));
    }
}
