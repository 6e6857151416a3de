use smallvec::SmallVec;

use crate::render::attributes::Attr;

/// Duration of bar enter/update/exit transitions, in milliseconds.
pub const BAR_TRANSITION_MS: f64 = 500.0;
/// Duration of axis repositioning transitions, in milliseconds.
pub const AXIS_TRANSITION_MS: f64 = 250.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    #[default]
    CubicInOut,
}

impl Easing {
    /// Maps linear progress in 0..=1 to eased progress.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::CubicInOut => {
                let doubled = t * 2.0;
                if doubled <= 1.0 {
                    doubled * doubled * doubled / 2.0
                } else {
                    let rest = doubled - 2.0;
                    (rest * rest * rest + 2.0) / 2.0
                }
            }
        }
    }
}

/// Timed attribute animation scheduled on one scene node.
///
/// Scheduling a transition on a node that is still animating supersedes the
/// running one; the new transition starts from the node's current values.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub duration_ms: f64,
    pub easing: Easing,
    pub targets: SmallVec<[Attr; 5]>,
    /// Remove the node from the scene once the transition completes.
    pub remove_on_end: bool,
}

impl Transition {
    #[must_use]
    pub fn new(duration_ms: f64) -> Self {
        Self {
            duration_ms: if duration_ms.is_finite() {
                duration_ms.max(0.0)
            } else {
                0.0
            },
            easing: Easing::default(),
            targets: SmallVec::new(),
            remove_on_end: false,
        }
    }

    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    #[must_use]
    pub fn attr(mut self, target: Attr) -> Self {
        self.targets.retain(|existing| existing.kind() != target.kind());
        self.targets.push(target);
        self
    }

    #[must_use]
    pub fn remove(mut self) -> Self {
        self.remove_on_end = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::{Easing, Transition};
    use crate::render::attributes::Attr;
    use approx::assert_relative_eq;

    #[test]
    fn cubic_in_out_is_symmetric() {
        let easing = Easing::CubicInOut;
        assert_relative_eq!(easing.apply(0.0), 0.0);
        assert_relative_eq!(easing.apply(0.5), 0.5);
        assert_relative_eq!(easing.apply(1.0), 1.0);
        assert_relative_eq!(easing.apply(0.25) + easing.apply(0.75), 1.0);
    }

    #[test]
    fn later_target_of_same_kind_replaces_earlier() {
        let transition = Transition::new(500.0)
            .attr(Attr::Width(10.0))
            .attr(Attr::Width(20.0));
        assert_eq!(transition.targets.as_slice(), &[Attr::Width(20.0)]);
    }

    #[test]
    fn invalid_duration_completes_immediately() {
        let transition = Transition::new(f64::NAN).with_easing(Easing::Linear);
        assert_eq!(transition.duration_ms, 0.0);
        assert_relative_eq!(transition.easing.apply(0.3), 0.3);
    }
}
