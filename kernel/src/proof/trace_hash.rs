//! Trace hashing: whole-trace digest and per-step chain.
//!
//! Two claim surfaces over the same step trace:
//!
//! - **Trace digest**: `sha256(StepTrace || canonical_json(steps))`. Two
//!   structurally identical traces have equal digests, which makes
//!   "same input, same steps" checkable across processes by comparing one
//!   line of output.
//!
//! - **Step chain**: per-step hash chain for locating the first step at
//!   which two traces diverge without comparing whole traces.

use serde::Serialize;

use super::canon::{canonical_bytes_of, CanonError};
use super::hash::{canonical_hash, chained_hash, ContentHash};
use super::hash_domain::HashDomain;
use crate::step::StepV1;

/// Digest of a whole step trace.
///
/// # Errors
///
/// Returns [`CanonError`] if a step value cannot be canonicalized.
pub fn trace_digest<T: Serialize>(steps: &[StepV1<T>]) -> Result<ContentHash, CanonError> {
    let bytes = canonical_bytes_of(steps)?;
    Ok(canonical_hash(HashDomain::StepTrace, &bytes))
}

/// Per-step hash chain.
///
/// - `chain_0 = sha256(TraceStep || step_0)`
/// - `chain_i = sha256(TraceStepChain || chain_{i-1} || step_i)`
///
/// Returns one digest per step; an empty trace yields an empty chain.
///
/// # Errors
///
/// Returns [`CanonError`] if a step value cannot be canonicalized.
pub fn step_chain<T: Serialize>(steps: &[StepV1<T>]) -> Result<Vec<ContentHash>, CanonError> {
    let mut chain: Vec<ContentHash> = Vec::with_capacity(steps.len());
    for step in steps {
        let bytes = canonical_bytes_of(step)?;
        let link = match chain.last() {
            None => canonical_hash(HashDomain::TraceStep, &bytes),
            Some(previous) => chained_hash(HashDomain::TraceStepChain, previous, &bytes),
        };
        chain.push(link);
    }
    Ok(chain)
}

/// Index of the first position where two chains differ.
///
/// A chain that is a strict prefix of the other diverges at its length.
/// Returns `None` when the chains are identical.
#[must_use]
pub fn first_divergence(a: &[ContentHash], b: &[ContentHash]) -> Option<usize> {
    match a.iter().zip(b).position(|(x, y)| x != y) {
        Some(i) => Some(i),
        None if a.len() == b.len() => None,
        None => Some(a.len().min(b.len())),
    }
}
