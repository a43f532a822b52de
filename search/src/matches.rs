//! All matching indices.
//!
//! A full linear scan, independent of where the bisection lands. Used to
//! answer duplicate-value queries: the bisection reports one match, this
//! reports every match.

/// Every index `i` with `sequence[i] == target`, ascending.
#[must_use]
pub fn find_all<T: PartialEq>(sequence: &[T], target: &T) -> Vec<usize> {
    sequence
        .iter()
        .enumerate()
        .filter_map(|(i, value)| (value == target).then_some(i))
        .collect()
}
