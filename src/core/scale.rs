use serde::{Deserialize, Serialize};

/// Continuous numeric mapping from a domain to a pixel range.
///
/// The range may be inverted (`range_start > range_end`); the y axis uses
/// that so larger values plot higher. A degenerate domain maps every value
/// to `range_start`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    #[must_use]
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self {
            domain_start: finite_or_zero(domain.0),
            domain_end: finite_or_zero(domain.1),
            range_start: finite_or_zero(range.0),
            range_end: finite_or_zero(range.1),
        }
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.domain_start == self.domain_end
    }

    /// Maps a domain value into the pixel range without clamping.
    #[must_use]
    pub fn apply(self, value: f64) -> f64 {
        if !value.is_finite() || self.is_degenerate() {
            return self.range_start;
        }
        let normalized = (value - self.domain_start) / (self.domain_end - self.domain_start);
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    /// Maps a pixel back into the domain.
    #[must_use]
    pub fn invert(self, pixel: f64) -> f64 {
        let span = self.range_end - self.range_start;
        if !pixel.is_finite() || span == 0.0 {
            return self.domain_start;
        }
        let normalized = (pixel - self.range_start) / span;
        self.domain_start + normalized * (self.domain_end - self.domain_start)
    }

    /// Human-friendly tick values covering the domain.
    ///
    /// Steps are powers of ten times 1, 2 or 5, aiming for roughly `count`
    /// ticks. A degenerate domain yields its single value. Domains too small
    /// to step through (subnormal spans) yield their two endpoints.
    #[must_use]
    pub fn ticks(self, count: usize) -> Vec<f64> {
        let (min, max) = if self.domain_start <= self.domain_end {
            (self.domain_start, self.domain_end)
        } else {
            (self.domain_end, self.domain_start)
        };
        if min == max {
            return vec![min];
        }
        let count = count.max(1) as f64;
        let span = max - min;

        let mut step = 10f64.powf((span / count).log10().floor());
        if !step.is_finite() || step <= 0.0 {
            return vec![min, max];
        }
        let err = step * count / span;
        if err <= 0.15 {
            step *= 10.0;
        } else if err <= 0.35 {
            step *= 5.0;
        } else if err <= 0.75 {
            step *= 2.0;
        }

        let first = (min / step).ceil();
        let last = (max / step).floor();
        if !first.is_finite() || !last.is_finite() || last - first > MAX_TICKS {
            return vec![min, max];
        }
        let decimals = if step < 1.0 {
            (-step.log10()).ceil() as i32
        } else {
            0
        };
        let precision = 10f64.powi(decimals);
        let rounded = precision.is_finite() && (step * precision).is_finite();

        (first as i64..=last as i64)
            .map(|index| {
                let value = index as f64 * step;
                if rounded {
                    (value * precision).round() / precision
                } else {
                    value
                }
            })
            .collect()
    }
}

const MAX_TICKS: f64 = 1_000.0;

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}
