//! Half-open hyper-box extraction.

use tinyvec::TinyVec;

use crate::order::{axis_lt, next_axis, within};
use crate::pivot::middle_of;
use crate::point::KdPoint;

/// Subrange length at or below which the box query scans linearly instead of
/// descending further. Correctness does not depend on the value; it only
/// bounds recursion overhead on small ranges.
pub const LINEAR_CUTOFF: usize = 32;

/// Indices of every element inside the half-open hyper-box `[lower, upper)`,
/// in unspecified order.
///
/// The slice must be in k-d layout under the natural order. A subtree is
/// descended only when the pivot's coordinate on the level axis leaves room
/// for matches on that side.
pub fn kd_range_query<E, Q>(s: &[E], lower: &Q, upper: &Q) -> Vec<usize>
where
    E: KdPoint,
    Q: KdPoint<Num = E::Num>,
{
    debug_assert_eq!(E::DIM, Q::DIM);

    let mut result = vec![];

    let mut stack: TinyVec<[usize; 33]> = TinyVec::new();
    stack.push(0);
    stack.push(s.len());
    stack.push(0);

    while !stack.is_empty() {
        let axis = stack.pop().unwrap_or(0);
        let hi = stack.pop().unwrap_or(0);
        let lo = stack.pop().unwrap_or(0);
        let node = &s[lo..hi];

        // if we reached a leaf-sized range, search linearly
        if node.len() <= LINEAR_CUTOFF {
            for (i, e) in node.iter().enumerate() {
                if within(e, lower, upper) {
                    result.push(lo + i);
                }
            }
            continue;
        }

        // otherwise split at the middle index
        let p = lo + middle_of(node);
        if within(&s[p], lower, upper) {
            result.push(p);
        }

        // queue search in the halves that intersect the box
        let next = next_axis::<E>(axis);
        if !axis_lt(&s[p], lower, axis) {
            stack.push(lo);
            stack.push(p);
            stack.push(next);
        }
        if axis_lt(&s[p], upper, axis) {
            stack.push(p + 1);
            stack.push(hi);
            stack.push(next);
        }
    }

    result
}
