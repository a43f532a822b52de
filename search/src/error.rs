//! Typed normalization errors.
//!
//! `NormalizeError` is always raised before the kernel runs: no step is
//! computed for rejected input. Every variant is a client error.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    /// An array element is not a finite number or numeric string.
    #[error("array element {index} is not numeric: {raw}")]
    InvalidElement { index: usize, raw: String },

    /// The target is not a finite number or numeric string.
    #[error("target is not numeric: {raw}")]
    InvalidTarget { raw: String },

    /// No target was supplied (absent, `null`, or blank).
    #[error("target is missing")]
    MissingTarget,

    /// The array exceeds [`crate::policy::NormalizePolicyV1::max_len`].
    #[error("array has {actual} elements; the limit is {max}")]
    TooLong { max: usize, actual: usize },
}
