//! Bound and membership queries over a slice in k-d layout.
//!
//! These searches use coordinate-wise dominance, not the lexicographic
//! order: `kd_lower_bound` looks for an element that is `>=` the probe on
//! every axis at once. Which qualifying element is reported first is an
//! artifact of the left-preferring descent and is not guaranteed.

use crate::order::{all_less, next_axis, none_less};
use crate::pivot::middle_of;
use crate::point::KdPoint;

/// First element found that is coordinate-wise `>=` `value` on every axis,
/// or `None`.
///
/// The slice must be in k-d layout under the natural order.
pub fn kd_lower_bound<E, Q>(s: &[E], value: &Q) -> Option<usize>
where
    E: KdPoint,
    Q: KdPoint<Num = E::Num>,
{
    debug_assert_eq!(E::DIM, Q::DIM);
    lower_bound_at(s, value, 0)
}

fn lower_bound_at<E, Q>(s: &[E], value: &Q, axis: usize) -> Option<usize>
where
    E: KdPoint,
    Q: KdPoint<Num = E::Num>,
{
    if s.is_empty() {
        return None;
    }
    if s.len() == 1 {
        return if none_less(&s[0], value) { Some(0) } else { None };
    }
    let p = middle_of(s);
    let next = next_axis::<E>(axis);
    if none_less(&s[p], value) {
        // Nothing right of a dominating pivot can precede it in traversal
        // order; the pivot itself qualifies if the left half is dry.
        return lower_bound_at(&s[..p], value, next).or(Some(p));
    }
    if all_less(&s[p], value) {
        // Everything left of the pivot is bounded by it on this axis and
        // cannot dominate the probe.
        return lower_bound_at(&s[p + 1..], value, next).map(|i| p + 1 + i);
    }
    lower_bound_at(&s[..p], value, next)
        .or_else(|| lower_bound_at(&s[p + 1..], value, next).map(|i| p + 1 + i))
}

/// First element found that is strictly greater than `value` on every axis,
/// or `None`.
///
/// The slice must be in k-d layout under the natural order.
pub fn kd_upper_bound<E, Q>(s: &[E], value: &Q) -> Option<usize>
where
    E: KdPoint,
    Q: KdPoint<Num = E::Num>,
{
    debug_assert_eq!(E::DIM, Q::DIM);
    upper_bound_at(s, value, 0)
}

fn upper_bound_at<E, Q>(s: &[E], value: &Q, axis: usize) -> Option<usize>
where
    E: KdPoint,
    Q: KdPoint<Num = E::Num>,
{
    if s.is_empty() {
        return None;
    }
    if s.len() == 1 {
        return if all_less(value, &s[0]) { Some(0) } else { None };
    }
    let p = middle_of(s);
    let next = next_axis::<E>(axis);
    if all_less(value, &s[p]) {
        return upper_bound_at(&s[..p], value, next).or(Some(p));
    }
    if none_less(value, &s[p]) {
        return upper_bound_at(&s[p + 1..], value, next).map(|i| p + 1 + i);
    }
    upper_bound_at(&s[..p], value, next)
        .or_else(|| upper_bound_at(&s[p + 1..], value, next).map(|i| p + 1 + i))
}

/// `true` iff some element equals `value` on every axis.
///
/// The slice must be in k-d layout under the natural order.
pub fn kd_binary_search<E, Q>(s: &[E], value: &Q) -> bool
where
    E: KdPoint,
    Q: KdPoint<Num = E::Num>,
{
    match kd_lower_bound(s, value) {
        Some(i) => none_less(value, &s[i]),
        None => false,
    }
}

/// The pair `(kd_lower_bound, kd_upper_bound)` for `value`.
///
/// Unlike its one-dimensional namesake the two positions do not delimit a
/// contiguous run of equal elements; they are independent query results.
pub fn kd_equal_range<E, Q>(s: &[E], value: &Q) -> (Option<usize>, Option<usize>)
where
    E: KdPoint,
    Q: KdPoint<Num = E::Num>,
{
    (kd_lower_bound(s, value), kd_upper_bound(s, value))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::sort::kd_sort;
    use crate::test::{random_points2, sample_points};

    #[test]
    fn finds_present_keys() {
        let mut points = sample_points();
        kd_sort(&mut points);
        for probe in sample_points() {
            assert!(kd_binary_search(&points, &probe), "probe {:?}", probe);
        }
        assert!(!kd_binary_search(&points, &[4.0, 4.0]));
        assert!(!kd_binary_search(&points, &[100.0, 100.0]));
    }

    #[test]
    fn membership_agrees_with_a_linear_scan() {
        let mut points = random_points2(400, 5);
        kd_sort(&mut points);
        let probes: Vec<[f64; 2]> = random_points2(100, 6)
            .into_iter()
            .chain(points.iter().copied().take(50))
            .collect();
        for probe in probes {
            let expected = points.iter().any(|e| e == &probe);
            assert_eq!(kd_binary_search(&points, &probe), expected);
        }
    }

    #[test]
    fn lower_bound_result_dominates_the_probe() {
        let mut points = random_points2(300, 9);
        kd_sort(&mut points);
        for probe in random_points2(100, 10) {
            let found = kd_lower_bound(&points, &probe);
            let exists = points.iter().any(|e| none_less(e, &probe));
            match found {
                Some(i) => assert!(none_less(&points[i], &probe)),
                None => assert!(!exists),
            }
        }
    }

    #[test]
    fn upper_bound_result_strictly_dominates_the_probe() {
        let mut points = random_points2(300, 15);
        kd_sort(&mut points);
        for probe in random_points2(100, 16) {
            let found = kd_upper_bound(&points, &probe);
            let exists = points.iter().any(|e| all_less(&probe, e));
            match found {
                Some(i) => assert!(all_less(&probe, &points[i])),
                None => assert!(!exists),
            }
        }
    }

    #[test]
    fn equal_range_spans_a_slice_of_duplicates() {
        let mut points = vec![[1.0, 1.0]; 3];
        kd_sort(&mut points);
        assert!(kd_binary_search(&points, &[1.0, 1.0]));
        let (lower, upper) = kd_equal_range(&points, &[1.0, 1.0]);
        // Every element equals the probe: the lower bound is the first
        // position found and no element is strictly greater.
        assert!(lower.is_some());
        assert_eq!(upper, None);
    }

    #[test]
    fn empty_range_finds_nothing() {
        let points: Vec<[f64; 2]> = vec![];
        assert_eq!(kd_lower_bound(&points, &[0.0, 0.0]), None);
        assert_eq!(kd_upper_bound(&points, &[0.0, 0.0]), None);
        assert!(!kd_binary_search(&points, &[0.0, 0.0]));
    }
}
