use std::fmt::Debug;

use num_traits::{Num, NumCast, ToPrimitive};

/// Scalar types usable as per-axis coordinates.
///
/// Ordering goes through [`PartialOrd`]; differences and distances are
/// computed in `f64`. Note that float `NaN` is outside the contract: every
/// comparison involving it is unspecified and may corrupt a sort.
pub trait KdNum:
    Num + NumCast + ToPrimitive + PartialOrd + Copy + Debug + Send + Sync
{
}

impl<T> KdNum for T where T: Num + NumCast + ToPrimitive + PartialOrd + Copy + Debug + Send + Sync {}

/// Widen a coordinate to `f64` for distance arithmetic.
#[inline]
pub(crate) fn as_f64<N: KdNum>(value: N) -> f64 {
    // Infallible for every primitive numeric type.
    value.to_f64().unwrap()
}
