//! Element abstraction: fixed-arity keys and key-value pairs.

use crate::r#type::KdNum;

/// A fixed-arity point key with totally ordered coordinates.
///
/// The dimension is a compile-time constant of the element type, not a
/// per-call parameter. Implementations are provided for coordinate arrays
/// `[N; D]` and for homogeneous 2-, 3- and 4-tuples; wrap a key together
/// with a payload in [`Entry`] to carry opaque data through the sorts.
pub trait KdPoint {
    /// The scalar type of every coordinate.
    type Num: KdNum;

    /// Number of axes. Must be at least 1.
    const DIM: usize;

    /// The coordinate on `axis`, which must be in `0..Self::DIM`.
    fn coord(&self, axis: usize) -> Self::Num;
}

impl<N: KdNum, const D: usize> KdPoint for [N; D] {
    type Num = N;
    const DIM: usize = D;

    #[inline]
    fn coord(&self, axis: usize) -> N {
        self[axis]
    }
}

impl<N: KdNum> KdPoint for (N, N) {
    type Num = N;
    const DIM: usize = 2;

    #[inline]
    fn coord(&self, axis: usize) -> N {
        match axis {
            0 => self.0,
            1 => self.1,
            _ => unreachable!(),
        }
    }
}

impl<N: KdNum> KdPoint for (N, N, N) {
    type Num = N;
    const DIM: usize = 3;

    #[inline]
    fn coord(&self, axis: usize) -> N {
        match axis {
            0 => self.0,
            1 => self.1,
            2 => self.2,
            _ => unreachable!(),
        }
    }
}

impl<N: KdNum> KdPoint for (N, N, N, N) {
    type Num = N;
    const DIM: usize = 4;

    #[inline]
    fn coord(&self, axis: usize) -> N {
        match axis {
            0 => self.0,
            1 => self.1,
            2 => self.2,
            3 => self.3,
            _ => unreachable!(),
        }
    }
}

/// A key paired with an opaque payload.
///
/// All ordering and queries go through the key; the payload is moved with it
/// whenever a sort rearranges elements. Query a slice of entries with a bare
/// key value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry<K, V> {
    /// The point key.
    pub key: K,
    /// The payload carried alongside the key.
    pub value: V,
}

impl<K, V> Entry<K, V> {
    /// Pair a key with a payload.
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }
}

impl<K: KdPoint, V> KdPoint for Entry<K, V> {
    type Num = K::Num;
    const DIM: usize = K::DIM;

    #[inline]
    fn coord(&self, axis: usize) -> K::Num {
        self.key.coord(axis)
    }
}
