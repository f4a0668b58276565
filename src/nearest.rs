//! Exact nearest-neighbor search under Euclidean distance.

use std::collections::BinaryHeap;

use crate::order::{axis_dist, axis_lt, l2_dist, next_axis};
use crate::pivot::middle_of;
use crate::point::KdPoint;

/// Index of an element at minimal L2 distance from `value`, or `None` for an
/// empty slice.
///
/// The slice must be in k-d layout under the natural order. Ties are broken
/// by traversal order. Pruning is exact: a far subtree is visited only when
/// its splitting plane is closer than the best candidate so far.
pub fn kd_nearest_neighbor<E, Q>(s: &[E], value: &Q) -> Option<usize>
where
    E: KdPoint,
    Q: KdPoint<Num = E::Num>,
{
    debug_assert_eq!(E::DIM, Q::DIM);
    nearest_at(s, value, 0)
}

fn nearest_at<E, Q>(s: &[E], value: &Q, axis: usize) -> Option<usize>
where
    E: KdPoint,
    Q: KdPoint<Num = E::Num>,
{
    if s.is_empty() {
        return None;
    }
    if s.len() == 1 {
        return Some(0);
    }
    let p = middle_of(s);
    let next = next_axis::<E>(axis);
    let search_left = axis_lt(value, &s[p], axis);

    let near = if search_left {
        nearest_at(&s[..p], value, next)
    } else {
        nearest_at(&s[p + 1..], value, next).map(|i| p + 1 + i)
    };

    let mut best = p;
    let mut best_dist = l2_dist(&s[p], value);
    if let Some(i) = near {
        let d = l2_dist(&s[i], value);
        if d < best_dist {
            best = i;
            best_dist = d;
        }
    }

    // The splitting plane bounds the distance to everything on the far side.
    if axis_dist(value, &s[p], axis) < best_dist {
        let far = if search_left {
            nearest_at(&s[p + 1..], value, next).map(|i| p + 1 + i)
        } else {
            nearest_at(&s[..p], value, next)
        };
        if let Some(i) = far {
            if l2_dist(&s[i], value) < best_dist {
                best = i;
            }
        }
    }

    Some(best)
}

/// A candidate neighbor and its distance, ordered by distance for the
/// bounded max-heap.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Neighbor {
    dist: f64,
    index: usize,
}

impl Eq for Neighbor {}

impl Ord for Neighbor {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // We don't allow NaN. This should only panic on NaN
        self.dist.partial_cmp(&other.dist).unwrap()
    }
}

impl PartialOrd for Neighbor {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Bounded max-heap of the best `capacity` candidates seen so far.
struct NeighborHeap {
    heap: BinaryHeap<Neighbor>,
    capacity: usize,
}

impl NeighborHeap {
    fn new(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// The current worst kept distance, or +∞ while fewer than `capacity`
    /// candidates are held. Far subtrees must stay unpruned until the set
    /// is full.
    fn worst(&self) -> f64 {
        if self.heap.len() < self.capacity {
            f64::INFINITY
        } else {
            self.heap.peek().map_or(f64::INFINITY, |n| n.dist)
        }
    }

    fn add(&mut self, dist: f64, index: usize) {
        self.heap.push(Neighbor { dist, index });
        if self.heap.len() > self.capacity {
            self.heap.pop();
        }
    }

    /// Drain in heap-extraction order (worst candidate first).
    fn into_indices(self) -> Vec<usize> {
        let mut heap = self.heap;
        let mut out = Vec::with_capacity(heap.len());
        while let Some(n) = heap.pop() {
            out.push(n.index);
        }
        out
    }
}

/// Indices of up to `k` elements nearest to `value` under L2 distance, in
/// heap-extraction order (worst first). Fewer than `k` only when the slice
/// holds fewer elements.
///
/// The slice must be in k-d layout under the natural order. Distance ties at
/// the cut are broken arbitrarily; the result is always some valid k-subset.
pub fn kd_nearest_neighbors<E, Q>(s: &[E], value: &Q, k: usize) -> Vec<usize>
where
    E: KdPoint,
    Q: KdPoint<Num = E::Num>,
{
    debug_assert_eq!(E::DIM, Q::DIM);
    if k == 0 || s.is_empty() {
        return vec![];
    }
    let mut heap = NeighborHeap::new(k);
    knn_at(s, value, 0, 0, &mut heap);
    heap.into_indices()
}

fn knn_at<E, Q>(s: &[E], value: &Q, axis: usize, offset: usize, heap: &mut NeighborHeap)
where
    E: KdPoint,
    Q: KdPoint<Num = E::Num>,
{
    match s.len() {
        0 => return,
        1 => {
            heap.add(l2_dist(&s[0], value), offset);
            return;
        }
        _ => {}
    }
    let p = middle_of(s);
    heap.add(l2_dist(&s[p], value), offset + p);

    let next = next_axis::<E>(axis);
    let search_left = axis_lt(value, &s[p], axis);
    if search_left {
        knn_at(&s[..p], value, next, offset, heap);
    } else {
        knn_at(&s[p + 1..], value, next, offset + p + 1, heap);
    }
    if axis_dist(value, &s[p], axis) <= heap.worst() {
        if search_left {
            knn_at(&s[p + 1..], value, next, offset + p + 1, heap);
        } else {
            knn_at(&s[..p], value, next, offset, heap);
        }
    }
}
