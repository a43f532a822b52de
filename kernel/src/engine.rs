//! Bisection entry points and the single step-emitting loop.
//!
//! [`SearchSteps`] is the only implementation of the bisection. [`search`],
//! [`search_traced`] and [`found_index`] are consumers of it, so the index
//! they report is by construction the `mid` of the step marked `found`.
//!
//! The input sequence must be sorted ascending (ties permitted). This is
//! a precondition, not checked here: normalization happens at the boundary.

use std::iter::FusedIterator;

use crate::step::StepV1;

/// Upper bound on the number of steps for a sequence of length `n`:
/// `ceil(log2(n + 1))`, i.e. the bit length of `n`.
#[must_use]
pub fn max_steps(n: usize) -> usize {
    (usize::BITS - n.leading_zeros()) as usize
}

/// Lazy, finite iterator over the steps of one bisection.
///
/// Each call to [`search_steps`] starts from the full bounds; an exhausted
/// iterator stays exhausted (it is fused and never restarts).
#[derive(Debug, Clone)]
pub struct SearchSteps<'a, T> {
    sequence: &'a [T],
    target: &'a T,
    /// Inclusive `(low, high)`. `None` once the interval is empty or the
    /// target was found.
    bounds: Option<(usize, usize)>,
}

/// Start a bisection of `sequence` for `target`.
///
/// An empty sequence yields zero steps.
#[must_use]
pub fn search_steps<'a, T>(sequence: &'a [T], target: &'a T) -> SearchSteps<'a, T>
where
    T: PartialOrd + Clone,
{
    SearchSteps {
        sequence,
        target,
        bounds: sequence.len().checked_sub(1).map(|high| (0, high)),
    }
}

impl<T: PartialOrd + Clone> Iterator for SearchSteps<'_, T> {
    type Item = StepV1<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let (low, high) = self.bounds?;
        // floor((low + high) / 2) without the overflow.
        let mid = low + (high - low) / 2;
        let mid_value = &self.sequence[mid];
        let found = mid_value == self.target;

        self.bounds = if found {
            None
        } else if mid_value < self.target {
            (mid < high).then(|| (mid + 1, high))
        } else {
            // Lazy: `mid - 1` underflows when `mid == low == 0`.
            (mid > low).then(|| (low, mid - 1))
        };

        Some(StepV1 {
            low,
            mid,
            high,
            mid_value: mid_value.clone(),
            found,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.bounds {
            Some((low, high)) => (1, Some(max_steps(high - low + 1))),
            None => (0, Some(0)),
        }
    }
}

impl<T: PartialOrd + Clone> FusedIterator for SearchSteps<'_, T> {}

/// Index of a matching element, or `None` if `target` is absent.
///
/// With duplicates this is the first match the bisection lands on, not
/// necessarily the lowest matching index.
#[must_use]
pub fn search<T: PartialOrd + Clone>(sequence: &[T], target: &T) -> Option<usize> {
    found_index(search_steps(sequence, target))
}

/// The `mid` of the first step marked `found`, if any.
///
/// Works on a live [`SearchSteps`] or on a collected trace.
pub fn found_index<T, S, I>(steps: I) -> Option<usize>
where
    S: std::borrow::Borrow<StepV1<T>>,
    I: IntoIterator<Item = S>,
{
    steps.into_iter().find_map(|step| {
        let step = step.borrow();
        step.found.then_some(step.mid)
    })
}

/// Receives each step of a traced search as it is produced.
pub trait StepObserver<T> {
    /// Called once per step, in order. `ordinal` starts at 1.
    fn on_step(&mut self, ordinal: usize, step: &StepV1<T>);

    /// Called once after the last step with the final result.
    fn on_finish(&mut self, _result: Option<usize>) {}
}

impl<T, F> StepObserver<T> for F
where
    F: FnMut(usize, &StepV1<T>),
{
    fn on_step(&mut self, ordinal: usize, step: &StepV1<T>) {
        self(ordinal, step);
    }
}

/// [`search`] with every step reported to `observer` before returning.
///
/// The observer sees exactly the steps [`search_steps`] yields.
pub fn search_traced<T, O>(sequence: &[T], target: &T, observer: &mut O) -> Option<usize>
where
    T: PartialOrd + Clone,
    O: StepObserver<T> + ?Sized,
{
    let steps = search_steps(sequence, target)
        .enumerate()
        .inspect(|(i, step)| observer.on_step(i + 1, step))
        .map(|(_, step)| step);
    // The found step is always last, so the observer still sees every step.
    let result = found_index(steps);
    observer.on_finish(result);
    result
}
