//! In-place k-d tree algorithms over caller-owned slices.
//!
//! The crate stores no tree: [`kd_sort`] rearranges a mutable slice so that
//! every (sub)range is split at its midpoint by a median on the level's
//! axis, with the axis cycling per level. Every query re-derives the same
//! midpoints from the positions alone, so searching needs nothing beyond the
//! sorted slice itself.
//!
//! ## Sorting
//!
//! Use [`kd_sort`] (or [`kd_sort_threaded`] to fork the top recursion levels
//! across threads) to put a slice into k-d layout, and [`kd_is_sorted`] to
//! check the layout invariant. [`lex_sort`] provides the plain lexicographic
//! ordering. The `_by` variants take a caller-supplied strict weak order on
//! coordinates.
//!
//! ## Queries
//!
//! A slice in k-d layout supports [`kd_lower_bound`] / [`kd_upper_bound`] /
//! [`kd_equal_range`] / [`kd_binary_search`] (coordinate-wise dominance
//! queries), [`kd_range_query`] (half-open hyper-box extraction),
//! [`kd_nearest_neighbor`] and [`kd_nearest_neighbors`] (exact L2 search).
//! All of them report positions into the queried slice. [`KdTreeRef`] wraps
//! a slice with the layout verified once up front.
//!
//! ## Elements
//!
//! Anything implementing [`KdPoint`] can be sorted and queried: coordinate
//! arrays `[N; D]`, homogeneous tuples, or [`Entry`] for a key carrying an
//! opaque payload. Coordinates are any [`KdNum`] scalar; float `NaN` is
//! outside the contract.
//!
//! ## Example
//!
//! ```
//! use kd_slice::{kd_binary_search, kd_is_sorted, kd_nearest_neighbor, kd_range_query, kd_sort};
//!
//! let mut points = vec![
//!     [2.0, 3.0],
//!     [5.0, 4.0],
//!     [9.0, 6.0],
//!     [4.0, 7.0],
//!     [8.0, 1.0],
//!     [7.0, 2.0],
//! ];
//! kd_sort(&mut points);
//! assert!(kd_is_sorted(&points));
//!
//! // Membership is exact equality on every axis.
//! assert!(kd_binary_search(&points, &[4.0, 7.0]));
//! assert!(!kd_binary_search(&points, &[4.0, 4.0]));
//!
//! // Nearest neighbor under L2 distance.
//! let nearest = kd_nearest_neighbor(&points, &[9.0, 2.0]).unwrap();
//! assert_eq!(points[nearest], [8.0, 1.0]);
//!
//! // Half-open box query.
//! let inside = kd_range_query(&points, &[3.0, 2.0], &[8.0, 5.0]);
//! assert_eq!(inside.len(), 2);
//! ```

mod error;
mod nearest;
mod order;
mod pivot;
mod point;
mod range;
mod search;
mod sort;
mod tree;
pub mod r#type;

pub use error::{KdSliceError, Result};
pub use nearest::{kd_nearest_neighbor, kd_nearest_neighbors};
pub use order::{
    all_less, axis_diff, axis_dist, axis_lt, kd_cmp, kd_cmp_by, l2_dist, none_less, sq_dist,
    within,
};
pub use point::{Entry, KdPoint};
pub use range::{kd_range_query, LINEAR_CUTOFF};
pub use search::{kd_binary_search, kd_equal_range, kd_lower_bound, kd_upper_bound};
pub use sort::{
    kd_is_sorted, kd_is_sorted_by, kd_sort, kd_sort_by, kd_sort_threaded, kd_sort_threaded_with,
    lex_sort, lex_sort_by,
};
pub use tree::KdTreeRef;
pub use r#type::KdNum;
