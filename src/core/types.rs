use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// One field value inside a [`Record`].
///
/// Nested arrays and objects are carried along untouched so records can hold
/// fields the chart never reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Datum {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    List(Vec<Datum>),
    Map(IndexMap<String, Datum>),
}

impl Datum {
    /// Returns the finite numeric value, if any.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(value) if value.is_finite() => Some(*value),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Hashable identity used for categorical placement.
    #[must_use]
    pub fn key(&self) -> DatumKey {
        match self {
            Self::Null => DatumKey::Null,
            Self::Bool(value) => DatumKey::Bool(*value),
            Self::Number(value) => DatumKey::Number(OrderedFloat(*value)),
            Self::Text(text) => DatumKey::Text(text.clone()),
            Self::List(items) => DatumKey::List(items.iter().map(Self::key).collect()),
            Self::Map(entries) => DatumKey::Map(
                entries
                    .iter()
                    .map(|(field, value)| (field.clone(), value.key()))
                    .collect(),
            ),
        }
    }
}

impl fmt::Display for Datum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(text) => f.write_str(text),
            Self::List(items) => {
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
            Self::Map(entries) => {
                f.write_str("{")?;
                for (index, (field, value)) in entries.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{field}: {value}")?;
                }
                f.write_str("}")
            }
        }
    }
}

impl From<&str> for Datum {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Datum {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for Datum {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for Datum {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<bool> for Datum {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// Equality/hash identity of a [`Datum`].
///
/// Numbers compare by total order so `NaN` labels still land in one band.
/// Objects keep their field order, so `{a, b}` and `{b, a}` are distinct.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DatumKey {
    Null,
    Bool(bool),
    Number(OrderedFloat<f64>),
    Text(String),
    List(Vec<DatumKey>),
    Map(Vec<(String, DatumKey)>),
}

impl DatumKey {
    #[must_use]
    pub fn to_datum(&self) -> Datum {
        match self {
            Self::Null => Datum::Null,
            Self::Bool(value) => Datum::Bool(*value),
            Self::Number(value) => Datum::Number(value.into_inner()),
            Self::Text(text) => Datum::Text(text.clone()),
            Self::List(items) => Datum::List(items.iter().map(Self::to_datum).collect()),
            Self::Map(entries) => Datum::Map(
                entries
                    .iter()
                    .map(|(field, value)| (field.clone(), value.to_datum()))
                    .collect(),
            ),
        }
    }
}

/// Associative record bound to one bar.
///
/// Field order is preserved for deterministic snapshots.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: IndexMap<String, Datum>,
}

impl Record {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Datum>) -> Self {
        self.insert(field, value);
        self
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Datum>) {
        self.fields.insert(field.into(), value.into());
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Datum> {
        self.fields.get(field)
    }

    /// Returns the label identity of `field`; a missing field reads as `Null`.
    #[must_use]
    pub fn label_key(&self, field: &str) -> DatumKey {
        self.get(field).map_or(DatumKey::Null, Datum::key)
    }

    /// Returns the finite metric value of `field`.
    #[must_use]
    pub fn metric(&self, field: &str) -> Option<f64> {
        self.get(field).and_then(Datum::as_f64)
    }

    #[must_use]
    pub fn fields(&self) -> &IndexMap<String, Datum> {
        &self.fields
    }
}

/// Shared, immutable record sequence.
///
/// Datasets are replaced wholesale; hosts detect changes with [`same_dataset`].
pub type Dataset = Arc<[Record]>;

/// Builds a dataset from owned records.
#[must_use]
pub fn dataset(records: Vec<Record>) -> Dataset {
    Arc::from(records)
}

/// Reference identity of two datasets.
#[must_use]
pub fn same_dataset(left: &Dataset, right: &Dataset) -> bool {
    Arc::ptr_eq(left, right)
}

/// Inset distances around the plotting area, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 10.0,
            right: 10.0,
            bottom: 25.0,
            left: 50.0,
        }
    }
}

impl Margins {
    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Merges the sides present in `patch`.
    ///
    /// Non-finite or negative sides are skipped and reported back by name.
    pub fn merge(&mut self, patch: MarginsPatch) -> Vec<&'static str> {
        let mut rejected = Vec::new();
        for (name, side, value) in [
            ("top", &mut self.top, patch.top),
            ("right", &mut self.right, patch.right),
            ("bottom", &mut self.bottom, patch.bottom),
            ("left", &mut self.left, patch.left),
        ] {
            let Some(value) = value else {
                continue;
            };
            if value.is_finite() && value >= 0.0 {
                *side = value;
            } else {
                rejected.push(name);
            }
        }
        rejected
    }
}

/// Partial margins; absent sides keep their current value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MarginsPatch {
    #[serde(default)]
    pub top: Option<f64>,
    #[serde(default)]
    pub right: Option<f64>,
    #[serde(default)]
    pub bottom: Option<f64>,
    #[serde(default)]
    pub left: Option<f64>,
}

impl MarginsPatch {
    #[must_use]
    pub fn top(mut self, value: f64) -> Self {
        self.top = Some(value);
        self
    }

    #[must_use]
    pub fn right(mut self, value: f64) -> Self {
        self.right = Some(value);
        self
    }

    #[must_use]
    pub fn bottom(mut self, value: f64) -> Self {
        self.bottom = Some(value);
        self
    }

    #[must_use]
    pub fn left(mut self, value: f64) -> Self {
        self.left = Some(value);
        self
    }
}

impl From<Margins> for MarginsPatch {
    fn from(margins: Margins) -> Self {
        Self {
            top: Some(margins.top),
            right: Some(margins.right),
            bottom: Some(margins.bottom),
            left: Some(margins.left),
        }
    }
}
