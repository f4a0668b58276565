use std::fmt::Debug;
use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug)]
pub enum KdSliceError {
    /// The slice is not in k-d sorted order.
    #[error("slice is not in k-d sorted order")]
    NotKdSorted,
}

pub type Result<T> = std::result::Result<T, KdSliceError>;
