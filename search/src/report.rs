//! Search request/report wire model and the `run_search` pipeline.
//!
//! Wire shapes (JSON):
//!
//! ```text
//! request:  {"array": [number | numeric string, ...], "target": number | numeric string}
//! report:   {"steps": [Step, ...], "sorted": bool, "result": index | -1, "results": [index, ...]}
//! ```
//!
//! `result` is the bisection's answer (`-1` when absent). `results` is the
//! full linear scan of every matching index and may list more than one.

use bisect_kernel::engine::{search_traced, StepObserver};
use bisect_kernel::numeric::Number;
use bisect_kernel::proof::canon::{canonical_bytes_of, CanonError};
use bisect_kernel::proof::hash::{canonical_hash, ContentHash};
use bisect_kernel::proof::hash_domain::HashDomain;
use bisect_kernel::proof::trace_hash::{step_chain, trace_digest};
use bisect_kernel::step::StepV1;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use crate::error::NormalizeError;
use crate::matches::find_all;
use crate::normalize::{normalize_request, NormalizedInput};
use crate::policy::NormalizePolicyV1;

/// Wire value of `result` when the target is absent.
pub const NOT_FOUND_SENTINEL: i64 = -1;

/// Incoming search request. Unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SearchRequestV1 {
    /// `None` (absent or `null`) is an empty array.
    #[serde(default)]
    pub array: Option<Vec<Value>>,
    #[serde(default)]
    pub target: Option<Value>,
}

/// Outcome of one search: the step trace plus derived results.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchReportV1 {
    pub steps: Vec<StepV1<Number>>,
    /// `false` if the input had to be sorted first.
    pub sorted: bool,
    /// `mid` of the step marked `found`.
    #[serde(serialize_with = "serialize_result")]
    pub result: Option<usize>,
    /// Every index equal to the target, ascending.
    pub results: Vec<usize>,
}

#[allow(clippy::ref_option, clippy::trivially_copy_pass_by_ref)]
fn serialize_result<S: Serializer>(result: &Option<usize>, serializer: S) -> Result<S::Ok, S::Error> {
    match *result {
        Some(index) => serializer.serialize_u64(index as u64),
        None => serializer.serialize_i64(NOT_FOUND_SENTINEL),
    }
}

impl SearchReportV1 {
    #[must_use]
    pub fn is_found(&self) -> bool {
        self.result.is_some()
    }

    /// Canonical JSON bytes of the wire form.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, CanonError> {
        canonical_bytes_of(self)
    }

    /// Digest of the whole report.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        Ok(canonical_hash(
            HashDomain::SearchReport,
            &self.to_canonical_json_bytes()?,
        ))
    }

    /// Digest of the step trace alone.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn trace_digest(&self) -> Result<ContentHash, CanonError> {
        trace_digest(&self.steps)
    }

    /// One chained digest per step, for locating where two traces split.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn step_chain(&self) -> Result<Vec<ContentHash>, CanonError> {
        step_chain(&self.steps)
    }
}

/// Forwards each step to an inner observer while keeping a copy.
struct Recording<'o, O: ?Sized> {
    steps: Vec<StepV1<Number>>,
    inner: &'o mut O,
}

impl<O: StepObserver<Number> + ?Sized> StepObserver<Number> for Recording<'_, O> {
    fn on_step(&mut self, ordinal: usize, step: &StepV1<Number>) {
        self.steps.push(step.clone());
        self.inner.on_step(ordinal, step);
    }

    fn on_finish(&mut self, result: Option<usize>) {
        self.inner.on_finish(result);
    }
}

/// Run the bisection over normalized input.
#[must_use]
pub fn run_search(input: &NormalizedInput) -> SearchReportV1 {
    run_search_observed(input, &mut |_: usize, _: &StepV1<Number>| {})
}

/// [`run_search`], reporting each step to `observer` as it is produced.
pub fn run_search_observed<O>(input: &NormalizedInput, observer: &mut O) -> SearchReportV1
where
    O: StepObserver<Number> + ?Sized,
{
    let mut recording = Recording {
        steps: Vec::new(),
        inner: observer,
    };
    let result = search_traced(&input.sequence, &input.target, &mut recording);

    SearchReportV1 {
        steps: recording.steps,
        sorted: input.was_sorted,
        result,
        results: find_all(&input.sequence, &input.target),
    }
}

/// Normalize a request, then run it. Rejected input computes no steps.
///
/// # Errors
///
/// Returns [`NormalizeError`] if the request fails normalization.
pub fn run_request(
    request: &SearchRequestV1,
    policy: &NormalizePolicyV1,
) -> Result<SearchReportV1, NormalizeError> {
    run_request_observed(request, policy, &mut |_: usize, _: &StepV1<Number>| {})
}

/// [`run_request`] with a step observer.
///
/// # Errors
///
/// Returns [`NormalizeError`] if the request fails normalization.
pub fn run_request_observed<O>(
    request: &SearchRequestV1,
    policy: &NormalizePolicyV1,
    observer: &mut O,
) -> Result<SearchReportV1, NormalizeError>
where
    O: StepObserver<Number> + ?Sized,
{
    let input = normalize_request(request, policy)?;
    Ok(run_search_observed(&input, observer))
}
