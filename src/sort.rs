//! In-place construction and verification of the k-d layout.
//!
//! `kd_sort` rearranges a slice into an implicit k-d tree: the element at
//! `len / 2` of every (sub)range is a median for that level's axis, no
//! earlier element orders after it and no later element orders before it,
//! and both halves recursively satisfy the same rule one axis further along
//! the cycle. No tree nodes are stored; queries re-derive the structure from
//! the positions alone.

use std::cmp::Ordering;

use crate::order::{kd_cmp, kd_cmp_by, next_axis};
use crate::pivot::middle_of;
use crate::point::KdPoint;

/// Stable full lexicographic sort over all axes, starting at axis 0.
pub fn lex_sort<E: KdPoint>(s: &mut [E]) {
    s.sort_by(|a, b| kd_cmp(a, b, 0));
}

/// [`lex_sort`] under a caller-supplied strict weak order on coordinates.
pub fn lex_sort_by<E, F>(s: &mut [E], pred: F)
where
    E: KdPoint,
    F: Fn(E::Num, E::Num) -> bool,
{
    s.sort_by(|a, b| kd_cmp_by(&pred, a, b, 0));
}

/// Sort the slice into k-d layout.
///
/// Expected `O(n log n)` time and `O(log n)` stack. Duplicate keys are
/// tolerated: the median partition is non-strict, so equal keys may sit on
/// either side of a pivot without breaking the layout.
pub fn kd_sort<E: KdPoint>(s: &mut [E]) {
    debug_assert!(E::DIM >= 1);
    kd_sort_at(s, 0);
}

fn kd_sort_at<E: KdPoint>(s: &mut [E], axis: usize) {
    if s.len() < 2 {
        return;
    }
    let mid = middle_of(s);
    s.select_nth_unstable_by(mid, |a, b| kd_cmp(a, b, axis));
    let next = next_axis::<E>(axis);

    // recursively sort both halves on the next axis; the pivot stays put
    let (left, rest) = s.split_at_mut(mid);
    kd_sort_at(left, next);
    kd_sort_at(&mut rest[1..], next);
}

/// [`kd_sort`] under a caller-supplied strict weak order on coordinates.
///
/// A slice sorted this way must also be verified under the same order; see
/// [`kd_is_sorted_by`].
pub fn kd_sort_by<E, F>(s: &mut [E], pred: F)
where
    E: KdPoint,
    F: Fn(E::Num, E::Num) -> bool,
{
    debug_assert!(E::DIM >= 1);
    kd_sort_by_at(s, &pred, 0);
}

fn kd_sort_by_at<E, F>(s: &mut [E], pred: &F, axis: usize)
where
    E: KdPoint,
    F: Fn(E::Num, E::Num) -> bool,
{
    if s.len() < 2 {
        return;
    }
    let mid = middle_of(s);
    s.select_nth_unstable_by(mid, |a, b| kd_cmp_by(pred, a, b, axis));
    let next = next_axis::<E>(axis);
    let (left, rest) = s.split_at_mut(mid);
    kd_sort_by_at(left, pred, next);
    kd_sort_by_at(&mut rest[1..], pred, next);
}

/// [`kd_sort`] with the top levels of the recursion forked across threads.
///
/// Produces the same layout as the sequential sort: after each partition the
/// two halves occupy disjoint memory, so workers never contend and the fork
/// join is the only synchronization point. The thread budget defaults to the
/// rayon pool's concurrency.
pub fn kd_sort_threaded<E: KdPoint + Send>(s: &mut [E]) {
    kd_sort_threaded_with(s, rayon::current_num_threads());
}

/// [`kd_sort_threaded`] with an explicit thread budget (floor 1).
///
/// Forking stops once `2^depth` exceeds `max_threads`; below that the
/// recursion continues sequentially.
pub fn kd_sort_threaded_with<E: KdPoint + Send>(s: &mut [E], max_threads: usize) {
    debug_assert!(E::DIM >= 1);
    kd_sort_threaded_at(s, 0, max_threads.max(1), 1);
}

fn kd_sort_threaded_at<E: KdPoint + Send>(
    s: &mut [E],
    axis: usize,
    max_threads: usize,
    depth: usize,
) {
    if s.len() < 2 {
        return;
    }
    let mid = middle_of(s);
    s.select_nth_unstable_by(mid, |a, b| kd_cmp(a, b, axis));
    let next = next_axis::<E>(axis);
    let (left, rest) = s.split_at_mut(mid);
    let right = &mut rest[1..];
    if (1usize << depth) <= max_threads {
        rayon::join(
            || kd_sort_threaded_at(left, next, max_threads, depth + 1),
            || kd_sort_threaded_at(right, next, max_threads, depth + 1),
        );
    } else {
        kd_sort_at(left, next);
        kd_sort_at(right, next);
    }
}

/// Check the k-d layout invariant without mutating.
///
/// This is the canonical debug-time check for the precondition shared by all
/// queries; it re-derives each pivot exactly as the queries do.
pub fn kd_is_sorted<E: KdPoint>(s: &[E]) -> bool {
    kd_is_sorted_at(s, 0)
}

fn kd_is_sorted_at<E: KdPoint>(s: &[E], axis: usize) -> bool {
    if s.len() < 2 {
        return true;
    }
    let mid = middle_of(s);
    let pivot = &s[mid];
    let next = next_axis::<E>(axis);
    s[..mid]
        .iter()
        .all(|x| kd_cmp(x, pivot, axis) != Ordering::Greater)
        && s[mid + 1..]
            .iter()
            .all(|y| kd_cmp(y, pivot, axis) != Ordering::Less)
        && kd_is_sorted_at(&s[..mid], next)
        && kd_is_sorted_at(&s[mid + 1..], next)
}

/// [`kd_is_sorted`] under the strict weak order the slice was sorted with.
pub fn kd_is_sorted_by<E, F>(s: &[E], pred: F) -> bool
where
    E: KdPoint,
    F: Fn(E::Num, E::Num) -> bool,
{
    kd_is_sorted_by_at(s, &pred, 0)
}

fn kd_is_sorted_by_at<E, F>(s: &[E], pred: &F, axis: usize) -> bool
where
    E: KdPoint,
    F: Fn(E::Num, E::Num) -> bool,
{
    if s.len() < 2 {
        return true;
    }
    let mid = middle_of(s);
    let pivot = &s[mid];
    let next = next_axis::<E>(axis);
    s[..mid]
        .iter()
        .all(|x| kd_cmp_by(pred, x, pivot, axis) != Ordering::Greater)
        && s[mid + 1..]
            .iter()
            .all(|y| kd_cmp_by(pred, y, pivot, axis) != Ordering::Less)
        && kd_is_sorted_by_at(&s[..mid], pred, next)
        && kd_is_sorted_by_at(&s[mid + 1..], pred, next)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::point::Entry;
    use crate::test::{random_points2, random_points3, sample_points, sorted_copy};

    #[test]
    fn sorted_layout_holds() {
        let mut points = sample_points();
        kd_sort(&mut points);
        assert!(kd_is_sorted(&points));

        let mut points = random_points2(500, 7);
        kd_sort(&mut points);
        assert!(kd_is_sorted(&points));

        let mut points = random_points3(500, 11);
        kd_sort(&mut points);
        assert!(kd_is_sorted(&points));
    }

    #[test]
    fn sort_is_idempotent() {
        let mut points = random_points2(300, 3);
        kd_sort(&mut points);
        let once = points.clone();
        kd_sort(&mut points);
        assert_eq!(points, once);
    }

    #[test]
    fn sort_permutes_without_loss() {
        let original = random_points2(400, 21);
        let mut points = original.clone();
        kd_sort(&mut points);
        assert_eq!(sorted_copy(&points), sorted_copy(&original));
    }

    #[test]
    fn detects_an_unsorted_slice() {
        // Descending on x cannot satisfy the level-0 partition.
        let points = vec![[3.0, 0.0], [2.0, 0.0], [1.0, 0.0]];
        assert!(!kd_is_sorted(&points));
    }

    #[test]
    fn duplicates_are_tolerated() {
        let mut points = vec![[1.0, 1.0]; 3];
        kd_sort(&mut points);
        assert!(kd_is_sorted(&points));
        assert_eq!(points.len(), 3);

        let mut points = vec![[2.0, 5.0]; 500];
        kd_sort(&mut points);
        assert!(kd_is_sorted(&points));

        // Small grid: every key occurs many times.
        let mut points: Vec<[f64; 2]> = (0..400)
            .map(|i| [(i % 3) as f64, (i % 4) as f64])
            .collect();
        let original = points.clone();
        kd_sort(&mut points);
        assert!(kd_is_sorted(&points));
        assert_eq!(sorted_copy(&points), sorted_copy(&original));
    }

    #[test]
    fn threaded_sort_matches_the_invariant() {
        let original = random_points2(2000, 42);

        for threads in [1, 2, 4, 8] {
            let mut parallel = original.clone();
            kd_sort_threaded_with(&mut parallel, threads);
            assert!(kd_is_sorted(&parallel), "threads = {}", threads);
            assert_eq!(sorted_copy(&parallel), sorted_copy(&original));
        }

        let mut defaulted = original.clone();
        kd_sort_threaded(&mut defaulted);
        assert!(kd_is_sorted(&defaulted));
    }

    #[test]
    fn lex_sort_orders_lexicographically() {
        let mut points = random_points2(200, 13);
        lex_sort(&mut points);
        for pair in points.windows(2) {
            assert_ne!(kd_cmp(&pair[0], &pair[1], 0), Ordering::Greater);
        }
    }

    #[test]
    fn custom_order_sort_and_verify_agree() {
        let rev = |a: f64, b: f64| b < a;
        let mut points = random_points2(300, 17);
        kd_sort_by(&mut points, rev);
        assert!(kd_is_sorted_by(&points, rev));
        assert!(!kd_is_sorted_by(&points, |a: f64, b: f64| a < b) || points.len() < 2);

        let mut points = vec![[1.0, 1.0], [2.0, 2.0], [3.0, 3.0]];
        kd_sort_by(&mut points, rev);
        assert!(kd_is_sorted_by(&points, rev));

        let mut points = random_points2(200, 19);
        lex_sort_by(&mut points, rev);
        for pair in points.windows(2) {
            assert_ne!(kd_cmp_by(&rev, &pair[0], &pair[1], 0), Ordering::Greater);
        }
    }

    #[test]
    fn payloads_ride_with_their_keys() {
        let mut entries: Vec<Entry<[f64; 2], usize>> = random_points2(150, 29)
            .into_iter()
            .enumerate()
            .map(|(i, key)| Entry::new(key, i))
            .collect();
        let original = entries.clone();
        kd_sort(&mut entries);
        assert!(kd_is_sorted(&entries));
        for entry in &entries {
            assert_eq!(original[entry.value].key, entry.key);
        }
    }

    #[test]
    fn empty_and_singleton() {
        let mut points: Vec<[f64; 2]> = vec![];
        kd_sort(&mut points);
        assert!(kd_is_sorted(&points));

        let mut points = vec![[4.0, 2.0]];
        kd_sort_threaded(&mut points);
        assert!(kd_is_sorted(&points));
    }
}
