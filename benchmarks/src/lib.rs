//! Shared inputs for the bisect benchmark suites.

use bisect_kernel::numeric::Number;
use bisect_search::report::SearchRequestV1;
use serde_json::Value;

/// Sequence sizes swept by the engine benchmarks.
pub const SIZES: &[usize] = &[10, 1_000, 100_000, 1_000_000];

/// `[0, 2, 4, ...]` of length `n`, as `Number`s.
#[must_use]
pub fn even_numbers(n: usize) -> Vec<Number> {
    (0..n)
        .map(|i| Number::Int(i64::try_from(i).unwrap_or(i64::MAX) * 2))
        .collect()
}

/// Targets that hit the first element, the middle, and a gap.
#[must_use]
pub fn lookup_targets(n: usize) -> [Number; 3] {
    let mid = i64::try_from(n / 2).unwrap_or(i64::MAX);
    [Number::Int(0), Number::Int(mid * 2), Number::Int(mid * 2 + 1)]
}

/// A JSON request of `n` elements in reverse order, so normalization sorts.
#[must_use]
pub fn reversed_request(n: usize) -> SearchRequestV1 {
    let array = (0..n).rev().map(Value::from).collect();
    SearchRequestV1 {
        array: Some(array),
        target: Some(Value::from(1)),
    }
}
