use std::collections::BTreeMap;

use num_bigint::BigInt;

use crate::error::{ReconstructError, ReconstructResult};
use crate::point::Point;

/// Decoded points keyed by index, iterated in ascending index order.
///
/// Inserting an index that is already present replaces its value
/// (last write wins); the replaced value is handed back so callers that
/// treat duplicates as malformed input can still detect them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PointStore {
    entries: BTreeMap<i64, BigInt>,
}

impl PointStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or overwrite the value for `index`, returning the previous value.
    pub fn insert(
        &mut self,
        index: i64,
        value: impl Into<BigInt>,
    ) -> Option<BigInt> {
        self.entries.insert(index, value.into())
    }

    pub fn insert_point(&mut self, point: Point) -> Option<BigInt> {
        let (index, value) = point.into_parts();
        self.insert(index, value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, index: i64) -> bool {
        self.entries.contains_key(&index)
    }

    pub fn get(&self, index: i64) -> Option<&BigInt> {
        self.entries.get(&index)
    }

    /// Iterate over all points in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = (i64, &BigInt)> + '_ {
        self.entries.iter().map(|(&index, value)| (index, value))
    }

    /// The `k` points with the smallest indices, in strictly ascending order.
    pub fn ordered_subset(&self, k: usize) -> ReconstructResult<Vec<Point>> {
        if self.entries.len() < k {
            return Err(ReconstructError::InsufficientPoints {
                required: k,
                available: self.entries.len(),
            });
        }

        Ok(self
            .entries
            .iter()
            .take(k)
            .map(|(&index, value)| Point::new(index, value.clone()))
            .collect())
    }
}

impl FromIterator<Point> for PointStore {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        let mut store = PointStore::new();
        store.extend(iter);
        store
    }
}

impl Extend<Point> for PointStore {
    fn extend<I: IntoIterator<Item = Point>>(&mut self, iter: I) {
        for point in iter {
            self.insert_point(point);
        }
    }
}
