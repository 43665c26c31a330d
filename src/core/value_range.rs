use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Closed numeric interval spanned by data or visible along one axis.
///
/// `min > max` is allowed: [`ValueRange::EMPTY`] is the inverted
/// `(+inf, -inf)` range and acts as the neutral element of [`ValueRange::merge`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    pub const EMPTY: Self = Self {
        min: f64::INFINITY,
        max: f64::NEG_INFINITY,
    };

    pub const UNIT: Self = Self { min: 0.0, max: 1.0 };

    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Builds a range with finite bounds, ordering them if needed.
    pub fn finite(a: f64, b: f64) -> ChartResult<Self> {
        if !a.is_finite() || !b.is_finite() {
            return Err(ChartError::InvalidData(
                "range bounds must be finite".to_owned(),
            ));
        }
        Ok(Self::new(a.min(b), a.max(b)))
    }

    /// Folds values into the smallest range containing all of them.
    #[must_use]
    pub fn from_values<I: IntoIterator<Item = f64>>(values: I) -> Self {
        values.into_iter().fold(Self::EMPTY, |mut acc, value| {
            acc.include(value);
            acc
        })
    }

    /// `max - min`; negative for the empty range.
    #[must_use]
    pub fn size(self) -> f64 {
        self.max - self.min
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.min.is_nan() || self.max.is_nan() || self.min > self.max
    }

    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    pub fn merge_in_place(&mut self, other: Self) {
        *self = self.merge(other);
    }

    pub fn include(&mut self, value: f64) {
        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }

    /// Returns `self` unless it is empty, in which case `fallback` is used.
    #[must_use]
    pub fn or(self, fallback: Self) -> Self {
        if self.is_empty() { fallback } else { self }
    }
}

impl Default for ValueRange {
    fn default() -> Self {
        Self::UNIT
    }
}
