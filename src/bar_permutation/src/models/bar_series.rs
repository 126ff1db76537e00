//! An ordered collection of bars.

use serde::{Deserialize, Serialize};

use crate::models::bar::Bar;

/// A time-ordered sequence of [`Bar`]s.
///
/// Index order is the only ordering that matters; dates are never inspected.
/// The bar at index 0 is the anchor of a permutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BarSeries<D = chrono::DateTime<chrono::Utc>> {
    bars: Vec<Bar<D>>,
}

impl<D> BarSeries<D> {
    pub fn new(bars: Vec<Bar<D>>) -> Self {
        Self { bars }
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn bars(&self) -> &[Bar<D>] {
        &self.bars
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Bar<D>> {
        self.bars.iter()
    }

    /// The anchor bar, if any.
    pub fn first(&self) -> Option<&Bar<D>> {
        self.bars.first()
    }

    pub fn last(&self) -> Option<&Bar<D>> {
        self.bars.last()
    }

    /// Dates in position order.
    pub fn dates(&self) -> impl Iterator<Item = &D> + '_ {
        self.bars.iter().map(|b| &b.date)
    }

    pub fn into_bars(self) -> Vec<Bar<D>> {
        self.bars
    }
}

impl<D> From<Vec<Bar<D>>> for BarSeries<D> {
    fn from(bars: Vec<Bar<D>>) -> Self {
        Self::new(bars)
    }
}

impl<D> FromIterator<Bar<D>> for BarSeries<D> {
    fn from_iter<I: IntoIterator<Item = Bar<D>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a, D> IntoIterator for &'a BarSeries<D> {
    type Item = &'a Bar<D>;
    type IntoIter = std::slice::Iter<'a, Bar<D>>;

    fn into_iter(self) -> Self::IntoIter {
        self.bars.iter()
    }
}
