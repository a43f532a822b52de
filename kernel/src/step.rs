//! `StepV1`: one iteration of the bisection loop.

use serde::Serialize;

use crate::numeric::Number;

/// Bounds and comparison outcome of a single bisection iteration.
///
/// `low` and `high` are the inclusive interval bounds *before* the
/// comparison; `mid = (low + high) / 2`. A trace is the ordered list of
/// steps, ending at the first step with `found == true` or when the
/// interval becomes empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepV1<T = Number> {
    pub low: usize,
    pub mid: usize,
    pub high: usize,
    /// `sequence[mid]`.
    pub mid_value: T,
    /// `mid_value == target`.
    pub found: bool,
}

impl<T> StepV1<T> {
    /// Number of elements still in play at this step.
    #[must_use]
    pub fn interval_len(&self) -> usize {
        self.high - self.low + 1
    }
}
