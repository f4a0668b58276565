//! A validated borrowed view over a slice in k-d layout.

use crate::error::{KdSliceError, Result};
use crate::nearest::{kd_nearest_neighbor, kd_nearest_neighbors};
use crate::point::KdPoint;
use crate::range::kd_range_query;
use crate::search::{kd_binary_search, kd_equal_range, kd_lower_bound, kd_upper_bound};
use crate::sort::kd_is_sorted;

/// A reference onto a slice already in k-d layout.
///
/// The view carries the "is sorted" precondition in the type: construct it
/// with [`try_new`][KdTreeRef::try_new] to have the layout checked once up
/// front, then query freely. The underlying elements stay owned by the
/// caller and are never copied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KdTreeRef<'a, E: KdPoint> {
    elements: &'a [E],
}

impl<'a, E: KdPoint> KdTreeRef<'a, E> {
    /// Wrap a slice, verifying the k-d layout invariant.
    ///
    /// ## Errors
    ///
    /// - If the slice is not in k-d sorted order.
    pub fn try_new(elements: &'a [E]) -> Result<Self> {
        if !kd_is_sorted(elements) {
            return Err(KdSliceError::NotKdSorted);
        }
        Ok(Self { elements })
    }

    /// Wrap a slice known to be in k-d layout, skipping the check.
    ///
    /// Queries on a view over an unsorted slice return arbitrary results
    /// (never undefined behavior).
    pub fn new_unchecked(elements: &'a [E]) -> Self {
        Self { elements }
    }

    /// The underlying elements, in layout order.
    pub fn elements(&self) -> &'a [E] {
        self.elements
    }

    /// Number of elements in the view.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// `true` if the view is empty.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// See [`kd_lower_bound`].
    pub fn lower_bound<Q>(&self, value: &Q) -> Option<usize>
    where
        Q: KdPoint<Num = E::Num>,
    {
        kd_lower_bound(self.elements, value)
    }

    /// See [`kd_upper_bound`].
    pub fn upper_bound<Q>(&self, value: &Q) -> Option<usize>
    where
        Q: KdPoint<Num = E::Num>,
    {
        kd_upper_bound(self.elements, value)
    }

    /// See [`kd_binary_search`].
    pub fn binary_search<Q>(&self, value: &Q) -> bool
    where
        Q: KdPoint<Num = E::Num>,
    {
        kd_binary_search(self.elements, value)
    }

    /// See [`kd_equal_range`].
    pub fn equal_range<Q>(&self, value: &Q) -> (Option<usize>, Option<usize>)
    where
        Q: KdPoint<Num = E::Num>,
    {
        kd_equal_range(self.elements, value)
    }

    /// See [`kd_range_query`].
    pub fn range_query<Q>(&self, lower: &Q, upper: &Q) -> Vec<usize>
    where
        Q: KdPoint<Num = E::Num>,
    {
        kd_range_query(self.elements, lower, upper)
    }

    /// See [`kd_nearest_neighbor`].
    pub fn nearest_neighbor<Q>(&self, value: &Q) -> Option<usize>
    where
        Q: KdPoint<Num = E::Num>,
    {
        kd_nearest_neighbor(self.elements, value)
    }

    /// See [`kd_nearest_neighbors`].
    pub fn nearest_neighbors<Q>(&self, value: &Q, k: usize) -> Vec<usize>
    where
        Q: KdPoint<Num = E::Num>,
    {
        kd_nearest_neighbors(self.elements, value, k)
    }
}
