use indexmap::IndexSet;

use crate::core::types::DatumKey;

/// Inner padding ratio between adjacent bands.
pub const BAND_PADDING: f64 = 0.1;
/// Outer padding ratio before the first and after the last band.
pub const BAND_OUTER_PADDING: f64 = 0.1;

/// Ordinal mapping from distinct labels to equal-width, pixel-rounded bands.
///
/// Domain order is first occurrence; duplicate labels share a band.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale {
    domain: IndexSet<DatumKey>,
    range: (f64, f64),
    padding: f64,
    outer_padding: f64,
    step: f64,
    offset: f64,
    band_width: f64,
}

impl BandScale {
    /// Builds a round-band scale over `labels` within `range`.
    #[must_use]
    pub fn new(labels: impl IntoIterator<Item = DatumKey>, range: (f64, f64)) -> Self {
        Self::with_padding(labels, range, BAND_PADDING, BAND_OUTER_PADDING)
    }

    #[must_use]
    pub fn with_padding(
        labels: impl IntoIterator<Item = DatumKey>,
        range: (f64, f64),
        padding: f64,
        outer_padding: f64,
    ) -> Self {
        let domain: IndexSet<DatumKey> = labels.into_iter().collect();
        let mut scale = Self {
            domain,
            range,
            padding,
            outer_padding,
            step: 0.0,
            offset: range.0,
            band_width: 0.0,
        };
        scale.layout();
        scale
    }

    fn layout(&mut self) {
        let count = self.domain.len();
        if count == 0 {
            return;
        }
        let n = count as f64;
        let (start, stop) = self.range;
        let span = stop - start;
        let divisor = n - self.padding + 2.0 * self.outer_padding;
        if divisor <= 0.0 {
            return;
        }

        let step = (span / divisor).floor();
        let leftover = span - (n - self.padding) * step;
        self.step = step;
        self.offset = start + (leftover / 2.0).round();
        self.band_width = (step * (1.0 - self.padding)).round().max(0.0);
    }

    /// Distinct labels in first-seen order.
    #[must_use]
    pub fn domain(&self) -> &IndexSet<DatumKey> {
        &self.domain
    }

    #[must_use]
    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Distance between the starts of two adjacent bands.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Width shared by every band; zero for an empty domain.
    #[must_use]
    pub fn band_width(&self) -> f64 {
        self.band_width
    }

    /// Start of the band holding `label`.
    #[must_use]
    pub fn position(&self, label: &DatumKey) -> Option<f64> {
        self.domain
            .get_index_of(label)
            .map(|index| self.position_at(index))
    }

    /// Center of the band holding `label`.
    #[must_use]
    pub fn center(&self, label: &DatumKey) -> Option<f64> {
        self.position(label).map(|x| x + self.band_width / 2.0)
    }

    fn position_at(&self, index: usize) -> f64 {
        self.offset + self.step * index as f64
    }
}
